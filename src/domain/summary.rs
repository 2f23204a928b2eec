//! Lint result summary types
//!
//! Provides structures for tracking lint results at file and overall levels.

use super::{Finding, Requirement, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lint result for a single manifest file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileLintResult {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Requirements successfully parsed from the file
    pub requirements: Vec<Requirement>,
    /// Findings reported against the file
    pub findings: Vec<Finding>,
    /// Number of pip option/directive lines skipped
    pub directives: usize,
    /// Whether --fix modified the file
    pub modified: bool,
}

impl FileLintResult {
    /// Creates a new FileLintResult
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            requirements: Vec::new(),
            findings: Vec::new(),
            directives: 0,
            modified: false,
        }
    }

    /// Adds a finding
    pub fn add_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Sorts findings by line number, then severity (errors first within a line)
    pub fn sort_findings(&mut self) {
        self.findings
            .sort_by(|a, b| a.line.cmp(&b.line).then(b.severity.cmp(&a.severity)));
    }

    /// Number of error findings
    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    /// Number of warning findings
    pub fn warning_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_warning()).count()
    }

    /// All error findings
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    /// All warning findings
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_warning())
    }

    /// All fixable findings
    pub fn fixable(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_fixable())
    }

    /// Returns true if the file produced no findings
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns true if any finding has the given severity
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.findings.iter().any(|f| f.severity == severity)
    }
}

/// Overall summary across all linted manifests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintSummary {
    /// Results for each manifest file processed
    pub files: Vec<FileLintResult>,
    /// Whether --fix was requested
    pub fix: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl LintSummary {
    /// Creates a new LintSummary
    pub fn new(fix: bool, dry_run: bool) -> Self {
        Self {
            files: Vec::new(),
            fix,
            dry_run,
        }
    }

    /// Adds a file result
    pub fn add_file(&mut self, file: FileLintResult) {
        self.files.push(file);
    }

    /// Returns the total number of files processed
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Returns the number of files modified by --fix
    pub fn files_modified(&self) -> usize {
        self.files.iter().filter(|f| f.modified).count()
    }

    /// Returns the total number of requirements parsed
    pub fn total_requirements(&self) -> usize {
        self.files.iter().map(|f| f.requirements.len()).sum()
    }

    /// Returns the total number of error findings
    pub fn total_errors(&self) -> usize {
        self.files.iter().map(|f| f.error_count()).sum()
    }

    /// Returns the total number of warning findings
    pub fn total_warnings(&self) -> usize {
        self.files.iter().map(|f| f.warning_count()).sum()
    }

    /// Returns the total number of findings
    pub fn total_findings(&self) -> usize {
        self.files.iter().map(|f| f.findings.len()).sum()
    }

    /// Returns the total number of fixable findings
    pub fn total_fixable(&self) -> usize {
        self.files.iter().map(|f| f.fixable().count()).sum()
    }

    /// Returns true if no file produced any finding
    pub fn is_clean(&self) -> bool {
        self.total_findings() == 0
    }

    /// Returns true if any error finding exists
    pub fn has_errors(&self) -> bool {
        self.total_errors() > 0
    }

    /// Returns all findings across all files
    pub fn all_findings(&self) -> impl Iterator<Item = &Finding> {
        self.files.iter().flat_map(|f| f.findings.iter())
    }
}

impl Default for LintSummary {
    fn default() -> Self {
        Self::new(false, false)
    }
}
