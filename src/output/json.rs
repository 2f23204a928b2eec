//! JSON output formatter for machine processing

use crate::domain::{Finding, LintSummary, Requirement};
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level (verbose includes parsed requirements per file)
    verbosity: Verbosity,
}

/// Top-level JSON report
#[derive(Serialize)]
struct JsonReport<'a> {
    files: Vec<JsonFile<'a>>,
    errors: Vec<String>,
    summary: JsonSummary,
}

/// One manifest file in the JSON report
#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    findings: &'a [Finding],
    modified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    requirements: Option<&'a [Requirement]>,
}

/// Aggregate counters in the JSON report
#[derive(Serialize)]
struct JsonSummary {
    files_checked: usize,
    requirements: usize,
    errors: usize,
    warnings: usize,
    fixable: usize,
    files_modified: usize,
    fix: bool,
    dry_run: bool,
}

impl JsonSummary {
    fn from_summary(summary: &LintSummary) -> Self {
        Self {
            files_checked: summary.files_checked(),
            requirements: summary.total_requirements(),
            errors: summary.total_errors(),
            warnings: summary.total_warnings(),
            fixable: summary.total_fixable(),
            files_modified: summary.files_modified(),
            fix: summary.fix,
            dry_run: summary.dry_run,
        }
    }
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let include_requirements = self.verbosity == Verbosity::Verbose;

        let report = JsonReport {
            files: result
                .summary
                .files
                .iter()
                .map(|file| JsonFile {
                    path: file.path.display().to_string(),
                    findings: &file.findings,
                    modified: file.modified,
                    requirements: include_requirements.then_some(file.requirements.as_slice()),
                })
                .collect(),
            errors: result.errors.iter().map(|e| e.to_string()).collect(),
            summary: JsonSummary::from_summary(&result.summary),
        };

        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)
    }

    fn format_summary(
        &self,
        summary: &LintSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &JsonSummary::from_summary(summary))?;
        writeln!(writer)
    }
}
