//! Diff output formatter for showing fixes
//!
//! This module provides:
//! - Unified-style diff display of applied (or planned) fixes
//! - Before/after line comparison per manifest

use crate::domain::LintSummary;
use crate::orchestrator::OrchestratorResult;
use crate::output::OutputFormatter;
use std::io::Write;

/// Diff formatter for showing line changes
pub struct DiffFormatter {
    /// Whether this is a dry-run
    dry_run: bool,
}

impl DiffFormatter {
    /// Create a new diff formatter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> &'static str {
        if self.dry_run {
            "(dry-run) "
        } else {
            ""
        }
    }
}

impl OutputFormatter for DiffFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();
        let mut total_changes = 0;

        for write_result in &result.write_results {
            if !write_result.has_changes() {
                continue;
            }

            writeln!(writer, "{}--- a/{}", prefix, write_result.path.display())?;
            writeln!(writer, "{}+++ b/{}", prefix, write_result.path.display())?;

            for change in &write_result.changes {
                total_changes += 1;
                writeln!(writer, "@@ line {} @@", change.line)?;
                for old_line in change.old.lines() {
                    writeln!(writer, "-{}", old_line)?;
                }
                if let Some(ref new_line) = change.new {
                    writeln!(writer, "+{}", new_line)?;
                }
            }

            writeln!(writer)?;
        }

        let verb = if self.dry_run {
            "would be applied"
        } else {
            "applied"
        };
        writeln!(writer, "{}# {} change(s) {}", prefix, total_changes, verb)?;

        Ok(())
    }

    fn format_summary(
        &self,
        summary: &LintSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}# {} file(s) checked, {} modified",
            self.dry_run_prefix(),
            summary.files_checked(),
            summary.files_modified()
        )
    }
}
