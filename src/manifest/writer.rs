//! Applying fixes to manifest files
//!
//! This module provides:
//! - ManifestWriter for applying fixable findings to a file
//! - Dry-run mode support (no actual file modifications)
//! - A per-line change log so output formatters can render diffs

use crate::domain::{Finding, Fix};
use crate::error::ManifestError;
use crate::parser::ParsedManifest;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Writer that applies fixable findings to manifest files
pub struct ManifestWriter {
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

/// A single applied change, keyed by the first physical line it touches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based physical line number
    pub line: usize,
    /// Original text (continuation lines joined with newlines)
    pub old: String,
    /// Replacement text, None when the line was removed
    pub new: Option<String>,
}

/// Result of applying fixes to one manifest file
#[derive(Debug)]
pub struct WriteResult {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Whether the file on disk was actually modified
    pub file_modified: bool,
    /// Changes applied (or that would be applied in dry-run mode)
    pub changes: Vec<LineChange>,
    /// Errors encountered while applying fixes
    pub errors: Vec<String>,
}

impl WriteResult {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_modified: false,
            changes: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Returns true if any fixes were applied
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Returns true if any errors occurred
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl ManifestWriter {
    /// Creates a new ManifestWriter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Creates a ManifestWriter in dry-run mode
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }

    /// Check if this writer is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Applies the fixable findings to a file's content
    ///
    /// Fixes are keyed by logical line; a removal on a line wins over a
    /// replacement on the same line. Unfixed lines pass through verbatim,
    /// including their continuation structure.
    pub fn apply_fixes(
        &self,
        path: &Path,
        content: &str,
        manifest: &ParsedManifest,
        findings: &[Finding],
    ) -> Result<WriteResult, ManifestError> {
        let mut result = WriteResult::new(path);

        let mut fixes: HashMap<usize, &Fix> = HashMap::new();
        for finding in findings {
            if let Some(ref fix) = finding.fix {
                match fixes.get(&finding.line) {
                    Some(Fix::RemoveLine) => {}
                    _ => {
                        fixes.insert(finding.line, fix);
                    }
                }
            }
        }
        if fixes.is_empty() {
            return Ok(result);
        }

        // Physical lines keep their original terminators so untouched lines
        // round-trip byte for byte, CRLF included
        let physical: Vec<&str> = content.split_inclusive('\n').collect();
        let mut output = String::with_capacity(content.len());

        for line in &manifest.lines {
            let start = line.number - 1;
            let end = (start + line.span).min(physical.len());
            let raw = &physical[start..end];
            let original: String = raw
                .iter()
                .map(|l| strip_terminator(l))
                .collect::<Vec<_>>()
                .join("\n");

            match fixes.get(&line.number) {
                None => {
                    for piece in raw {
                        output.push_str(piece);
                    }
                }
                Some(Fix::RemoveLine) => {
                    result.changes.push(LineChange {
                        line: line.number,
                        old: original,
                        new: None,
                    });
                }
                Some(Fix::ReplaceLine { content: new_text }) => {
                    output.push_str(new_text);
                    output.push_str(raw.last().map(|l| terminator(l)).unwrap_or(""));
                    result.changes.push(LineChange {
                        line: line.number,
                        old: original,
                        new: Some(new_text.clone()),
                    });
                }
            }
        }

        if result.has_changes() && !self.dry_run {
            fs::write(path, output).map_err(|e| ManifestError::write_error(path, e))?;
            result.file_modified = true;
        }

        Ok(result)
    }
}

/// The line terminator of a physical line, empty at end of file
fn terminator(raw: &str) -> &str {
    if raw.ends_with("\r\n") {
        "\r\n"
    } else if raw.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// A physical line without its terminator
fn strip_terminator(raw: &str) -> &str {
    raw.strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(raw)
}

/// Reads a manifest file's content
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RuleCode;
    use crate::parser::parse_manifest;
    use tempfile::TempDir;

    fn remove_finding(line: usize) -> Finding {
        Finding::new(RuleCode::RedundantDuplicate, line, "duplicate".to_string())
            .with_fix(Fix::RemoveLine)
    }

    fn replace_finding(line: usize, content: &str) -> Finding {
        Finding::new(RuleCode::SpecifierSpacing, line, "spacing".to_string()).with_fix(
            Fix::ReplaceLine {
                content: content.to_string(),
            },
        )
    }

    fn write_fixture(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("requirements.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_apply_remove_line() {
        let dir = TempDir::new().unwrap();
        let content = "mlxtend>=0.22.0\nnumpy>=1.24.0\nmlxtend>=0.22.0\n";
        let path = write_fixture(&dir, content);
        let manifest = parse_manifest(content);

        let writer = ManifestWriter::new(false);
        let result = writer
            .apply_fixes(&path, content, &manifest, &[remove_finding(3)])
            .unwrap();

        assert!(result.file_modified);
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].line, 3);
        assert_eq!(result.changes[0].new, None);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "mlxtend>=0.22.0\nnumpy>=1.24.0\n"
        );
    }

    #[test]
    fn test_apply_replace_line() {
        let dir = TempDir::new().unwrap();
        let content = "pandas >= 2.0.0\nnumpy>=1.24.0\n";
        let path = write_fixture(&dir, content);
        let manifest = parse_manifest(content);

        let writer = ManifestWriter::new(false);
        let result = writer
            .apply_fixes(&path, content, &manifest, &[replace_finding(1, "pandas>=2.0.0")])
            .unwrap();

        assert!(result.file_modified);
        assert_eq!(result.changes[0].old, "pandas >= 2.0.0");
        assert_eq!(result.changes[0].new.as_deref(), Some("pandas>=2.0.0"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "pandas>=2.0.0\nnumpy>=1.24.0\n"
        );
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let content = "pkg>=1.0\npkg>=1.0\n";
        let path = write_fixture(&dir, content);
        let manifest = parse_manifest(content);

        let writer = ManifestWriter::dry_run();
        let result = writer
            .apply_fixes(&path, content, &manifest, &[remove_finding(2)])
            .unwrap();

        // Changes are reported but the file is byte-identical
        assert!(!result.file_modified);
        assert!(result.has_changes());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_no_fixable_findings_is_noop() {
        let dir = TempDir::new().unwrap();
        let content = "pandas>=2.0.0\n";
        let path = write_fixture(&dir, content);
        let manifest = parse_manifest(content);

        let unfixable =
            Finding::new(RuleCode::ConflictingDuplicate, 1, "conflict".to_string());
        let writer = ManifestWriter::new(false);
        let result = writer
            .apply_fixes(&path, content, &manifest, &[unfixable])
            .unwrap();

        assert!(!result.file_modified);
        assert!(!result.has_changes());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_remove_wins_over_replace_on_same_line() {
        let dir = TempDir::new().unwrap();
        let content = "pkg >= 1.0\npkg >= 1.0\n";
        let path = write_fixture(&dir, content);
        let manifest = parse_manifest(content);

        let findings = vec![replace_finding(2, "pkg>=1.0"), remove_finding(2)];
        let writer = ManifestWriter::new(false);
        let result = writer.apply_fixes(&path, content, &manifest, &findings).unwrap();

        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].new, None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "pkg >= 1.0\n");
    }

    #[test]
    fn test_remove_continuation_span() {
        let dir = TempDir::new().unwrap();
        let content = "pandas>=2.0.0\npkg\\\n>=1.0\npkg>=1.0\n";
        let path = write_fixture(&dir, content);
        let manifest = parse_manifest(content);

        // Removing the logical line at 2 drops both physical lines
        let writer = ManifestWriter::new(false);
        let result = writer
            .apply_fixes(&path, content, &manifest, &[remove_finding(2)])
            .unwrap();

        assert_eq!(result.changes[0].old, "pkg\\\n>=1.0");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "pandas>=2.0.0\npkg>=1.0\n"
        );
    }

    #[test]
    fn test_crlf_endings_preserved() {
        let dir = TempDir::new().unwrap();
        let content = "pandas >= 2.0.0\r\nnumpy>=1.24.0\r\nscipy>=1.10.0\r\n";
        let path = write_fixture(&dir, content);
        let manifest = parse_manifest(content);

        let writer = ManifestWriter::new(false);
        writer
            .apply_fixes(&path, content, &manifest, &[replace_finding(1, "pandas>=2.0.0")])
            .unwrap();

        // Untouched lines are byte-identical, the replaced line keeps CRLF
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "pandas>=2.0.0\r\nnumpy>=1.24.0\r\nscipy>=1.10.0\r\n"
        );
    }

    #[test]
    fn test_crlf_removal() {
        let dir = TempDir::new().unwrap();
        let content = "pkg>=1.0\r\npkg>=1.0\r\n";
        let path = write_fixture(&dir, content);
        let manifest = parse_manifest(content);

        let writer = ManifestWriter::new(false);
        let result = writer
            .apply_fixes(&path, content, &manifest, &[remove_finding(2)])
            .unwrap();

        assert_eq!(result.changes[0].old, "pkg>=1.0");
        assert_eq!(fs::read_to_string(&path).unwrap(), "pkg>=1.0\r\n");
    }

    #[test]
    fn test_preserves_missing_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let content = "pkg >= 1.0";
        let path = write_fixture(&dir, content);
        let manifest = parse_manifest(content);

        let writer = ManifestWriter::new(false);
        writer
            .apply_fixes(&path, content, &manifest, &[replace_finding(1, "pkg>=1.0")])
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "pkg>=1.0");
    }
}
