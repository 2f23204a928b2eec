//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-file finding display with colors
//! - Fixable finding indication
//! - Summary with error/warning breakdown

use crate::domain::{FileLintResult, Finding, LintSummary, Severity};
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, dry_run: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if self.dry_run {
            if self.color {
                format!("{} ", "(dry-run)".cyan())
            } else {
                "(dry-run) ".to_string()
            }
        } else {
            String::new()
        }
    }

    /// Format a severity label, colored when enabled
    fn severity_label(&self, severity: Severity) -> String {
        if !self.color {
            return severity.to_string();
        }
        match severity {
            Severity::Error => "error".red().bold().to_string(),
            Severity::Warning => "warning".yellow().to_string(),
        }
    }

    /// Format a single finding line
    fn format_finding(&self, finding: &Finding, writer: &mut dyn Write) -> std::io::Result<()> {
        let rule = if self.color {
            format!("[{}]", finding.rule).dimmed().to_string()
        } else {
            format!("[{}]", finding.rule)
        };
        let fixable = if finding.is_fixable() {
            if self.color {
                format!(" {}", "(fixable)".green())
            } else {
                " (fixable)".to_string()
            }
        } else {
            String::new()
        };

        writeln!(
            writer,
            "  line {}: {} {} {}{}",
            finding.line,
            self.severity_label(finding.severity),
            rule,
            finding.message,
            fixable
        )
    }

    /// Format one file's results
    fn format_file(&self, file: &FileLintResult, writer: &mut dyn Write) -> std::io::Result<()> {
        if file.is_clean() && self.verbosity != Verbosity::Verbose {
            return Ok(());
        }

        let header = if self.color {
            file.path.display().to_string().bold().to_string()
        } else {
            file.path.display().to_string()
        };
        writeln!(writer, "{}", header)?;

        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "  {} requirement(s), {} directive(s)",
                file.requirements.len(),
                file.directives
            )?;
        }

        for finding in &file.findings {
            self.format_finding(finding, writer)?;
        }

        if file.modified {
            let note = if self.color {
                "  fixed".green().to_string()
            } else {
                "  fixed".to_string()
            };
            writeln!(writer, "{}", note)?;
        }

        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for file in &result.summary.files {
            self.format_file(file, writer)?;
        }

        for error in &result.errors {
            let label = self.severity_label(Severity::Error);
            writeln!(writer, "{}: {}", label, error)?;
        }

        if self.verbosity != Verbosity::Quiet {
            if !result.summary.files.is_empty() && !result.summary.is_clean() {
                writeln!(writer)?;
            }
            self.format_summary(&result.summary, writer)?;
        }

        Ok(())
    }

    fn format_summary(
        &self,
        summary: &LintSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();

        if summary.is_clean() {
            let message = format!(
                "{} file(s) checked, {} requirement(s), no issues found",
                summary.files_checked(),
                summary.total_requirements()
            );
            if self.color {
                writeln!(writer, "{}{}", prefix, message.green())?;
            } else {
                writeln!(writer, "{}{}", prefix, message)?;
            }
            return Ok(());
        }

        writeln!(
            writer,
            "{}{} file(s) checked: {} error(s), {} warning(s)",
            prefix,
            summary.files_checked(),
            summary.total_errors(),
            summary.total_warnings()
        )?;

        if summary.fix {
            writeln!(writer, "{}{} file(s) fixed", prefix, summary.files_modified())?;
        } else if summary.total_fixable() > 0 {
            writeln!(
                writer,
                "{} finding(s) fixable with --fix",
                summary.total_fixable()
            )?;
        }

        Ok(())
    }
}
