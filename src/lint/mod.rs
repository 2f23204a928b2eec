//! Lint rules for requirements manifests
//!
//! This module provides:
//! - Duplicate entry detection (redundant vs conflicting)
//! - Style checks (comparator consistency, spacing, name normalization,
//!   missing constraints)
//! - Rule/package filtering via [`LintOptions`]

mod duplicates;
mod style;

pub use duplicates::check_duplicates;
pub use style::{
    check_missing_constraint, check_mixed_comparators, check_spacing, check_unnormalized_names,
};

use crate::cli::CliArgs;
use crate::domain::{normalize_name, Finding, RuleCode};
use crate::parser::ParsedManifest;

/// Configuration controlling which rules run and which packages they see
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Rules disabled via --ignore
    pub ignored: Vec<RuleCode>,
    /// Packages excluded from non-syntax rules
    pub exclude: Vec<String>,
    /// When non-empty, only these packages are checked
    pub only: Vec<String>,
}

impl LintOptions {
    /// Creates options with everything enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            ignored: args.ignore.clone(),
            exclude: args.exclude.clone(),
            only: args.only.clone(),
        }
    }

    /// Disables a rule (builder pattern)
    pub fn with_ignored(mut self, rules: Vec<RuleCode>) -> Self {
        self.ignored = rules;
        self
    }

    /// Sets the exclusion list (builder pattern)
    pub fn with_exclude(mut self, packages: Vec<String>) -> Self {
        self.exclude = packages;
        self
    }

    /// Sets the --only list (builder pattern)
    pub fn with_only(mut self, packages: Vec<String>) -> Self {
        self.only = packages;
        self
    }

    /// Returns true if a rule should run
    pub fn rule_enabled(&self, rule: RuleCode) -> bool {
        !self.ignored.contains(&rule)
    }

    /// Returns true if a package should be checked. Names are compared in
    /// normalized form so `--exclude Flask_SQLAlchemy` matches
    /// `flask-sqlalchemy`.
    pub fn package_selected(&self, name: &str) -> bool {
        let normalized = normalize_name(name);
        if !self.only.is_empty() {
            return self.only.iter().any(|p| normalize_name(p) == normalized);
        }
        !self.exclude.iter().any(|p| normalize_name(p) == normalized)
    }
}

/// Runs all enabled rules against a parsed manifest, returning findings in
/// file order. Syntax findings from the parser are included here so callers
/// see a single stream.
pub fn run_lints(manifest: &ParsedManifest, options: &LintOptions) -> Vec<Finding> {
    let mut findings = Vec::new();

    if options.rule_enabled(RuleCode::Syntax) {
        findings.extend(manifest.syntax_findings.iter().cloned());
    }
    findings.extend(check_duplicates(manifest, options));
    findings.extend(check_mixed_comparators(manifest, options));
    findings.extend(check_spacing(manifest, options));
    findings.extend(check_unnormalized_names(manifest, options));
    findings.extend(check_missing_constraint(manifest, options));

    findings.sort_by(|a, b| a.line.cmp(&b.line).then(b.severity.cmp(&a.severity)));
    findings
}
