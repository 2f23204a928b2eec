//! Requirements manifest parsing
//!
//! This module provides:
//! - Physical-to-logical line mapping (backslash continuations)
//! - Line classification (blank, comment, pip directive, requirement)
//! - The requirement grammar itself (see [`requirement`])
//! - PEP 440 version validation (see [`version`])

mod requirement;
mod version;

pub use requirement::{parse_requirement, split_comment, split_marker};
pub use version::{is_valid_version, is_valid_wildcard};

use crate::domain::{Finding, Requirement, RuleCode};

/// A logical manifest line, possibly spanning several physical lines joined
/// by trailing backslashes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the first physical line
    pub number: usize,
    /// Number of physical lines this logical line spans
    pub span: usize,
    /// Joined text, continuation backslashes removed
    pub text: String,
}

/// Classification of a logical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// Whole-line comment
    Comment,
    /// pip option line (`-r`, `-c`, `-e`, `--index-url`, ...)
    Directive,
    /// A dependency specifier line
    Requirement,
}

/// A fully parsed manifest
#[derive(Debug, Clone, Default)]
pub struct ParsedManifest {
    /// Logical lines in file order
    pub lines: Vec<LogicalLine>,
    /// Successfully parsed requirements
    pub requirements: Vec<Requirement>,
    /// Syntax findings for malformed lines
    pub syntax_findings: Vec<Finding>,
    /// Number of pip directive lines
    pub directives: usize,
}

impl ParsedManifest {
    /// Looks up the logical line starting at the given physical line number
    pub fn line(&self, number: usize) -> Option<&LogicalLine> {
        self.lines.iter().find(|l| l.number == number)
    }
}

/// Joins backslash-continued physical lines into logical lines
pub fn logical_lines(content: &str) -> Vec<LogicalLine> {
    let mut result = Vec::new();
    let mut pending: Option<LogicalLine> = None;

    for (idx, raw) in content.lines().enumerate() {
        let number = idx + 1;
        let (text, continued) = match raw.strip_suffix('\\') {
            Some(head) => (head, true),
            None => (raw, false),
        };

        match pending.take() {
            Some(mut line) => {
                line.text.push_str(text);
                line.span += 1;
                if continued {
                    pending = Some(line);
                } else {
                    result.push(line);
                }
            }
            None => {
                let line = LogicalLine {
                    number,
                    span: 1,
                    text: text.to_string(),
                };
                if continued {
                    pending = Some(line);
                } else {
                    result.push(line);
                }
            }
        }
    }

    // A trailing backslash on the last line still closes the logical line
    if let Some(line) = pending {
        result.push(line);
    }

    result
}

/// Classifies a logical line without parsing it
pub fn classify(text: &str) -> LineKind {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with('#') {
        LineKind::Comment
    } else if trimmed.starts_with('-') {
        LineKind::Directive
    } else {
        LineKind::Requirement
    }
}

/// Parses a full manifest. Malformed requirement lines become `syntax`
/// findings; parsing itself never fails.
pub fn parse_manifest(content: &str) -> ParsedManifest {
    let lines = logical_lines(content);
    let mut manifest = ParsedManifest {
        lines: lines.clone(),
        ..Default::default()
    };

    for line in &lines {
        match classify(&line.text) {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Directive => manifest.directives += 1,
            LineKind::Requirement => match parse_requirement(&line.text, line.number) {
                Ok(req) => manifest.requirements.push(req),
                Err(message) => {
                    manifest
                        .syntax_findings
                        .push(Finding::new(RuleCode::Syntax, line.number, message));
                }
            },
        }
    }

    manifest
}
