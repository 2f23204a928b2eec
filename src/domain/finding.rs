//! Lint finding types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a lint finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Advisory; exits clean unless --strict
    Warning,
    /// Violation; always fails the run
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Identifies a lint rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCode {
    /// Line does not match the requirement grammar
    Syntax,
    /// Same package listed twice with different constraints
    ConflictingDuplicate,
    /// Same package listed twice with identical constraints
    RedundantDuplicate,
    /// File mixes comparator styles across single-constraint entries
    MixedComparators,
    /// Whitespace around the comparator deviates from the compact style
    SpecifierSpacing,
    /// Package name differs from its PEP 503 normalized form
    UnnormalizedName,
    /// Requirement carries no version constraint
    MissingConstraint,
}

impl RuleCode {
    /// All rules, in reporting order
    pub fn all() -> &'static [RuleCode] {
        &[
            RuleCode::Syntax,
            RuleCode::ConflictingDuplicate,
            RuleCode::RedundantDuplicate,
            RuleCode::MixedComparators,
            RuleCode::SpecifierSpacing,
            RuleCode::UnnormalizedName,
            RuleCode::MissingConstraint,
        ]
    }

    /// The kebab-case rule code used in output and --ignore
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::Syntax => "syntax",
            RuleCode::ConflictingDuplicate => "conflicting-duplicate",
            RuleCode::RedundantDuplicate => "redundant-duplicate",
            RuleCode::MixedComparators => "mixed-comparators",
            RuleCode::SpecifierSpacing => "specifier-spacing",
            RuleCode::UnnormalizedName => "unnormalized-name",
            RuleCode::MissingConstraint => "missing-constraint",
        }
    }

    /// Default severity for findings of this rule
    pub fn default_severity(&self) -> Severity {
        match self {
            RuleCode::Syntax | RuleCode::ConflictingDuplicate => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleCode::all()
            .iter()
            .find(|r| r.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown rule '{}'", s))
    }
}

/// Automatic correction attached to a finding, applied by --fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Fix {
    /// Delete the offending line
    RemoveLine,
    /// Replace the offending line with new content
    ReplaceLine {
        /// Replacement line content, without trailing newline
        content: String,
    },
}

/// A single lint finding against one manifest line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The rule that fired
    pub rule: RuleCode,
    /// Severity of this finding
    pub severity: Severity,
    /// 1-based line number
    pub line: usize,
    /// Package the finding refers to, when applicable
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub package: Option<String>,
    /// Human-readable message
    pub message: String,
    /// Automatic fix, when one is safe
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fix: Option<Fix>,
}

impl Finding {
    /// Creates a finding with the rule's default severity
    pub fn new(rule: RuleCode, line: usize, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: rule.default_severity(),
            line,
            package: None,
            message: message.into(),
            fix: None,
        }
    }

    /// Sets the package name (builder pattern)
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Attaches an automatic fix (builder pattern)
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Returns true if this finding is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns true if this finding is a warning
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Returns true if --fix can correct this finding
    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} [{}] {}",
            self.line, self.severity, self.rule, self.message
        )
    }
}
