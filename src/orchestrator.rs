//! Lint orchestrator coordinating the entire workflow
//!
//! This module provides:
//! - Workflow coordination: detect -> parse -> lint -> fix
//! - Dry-run mode support
//! - Rule and package filter application
//! - Error handling with partial continuation (one unreadable file does not
//!   abort the run)

use crate::cli::CliArgs;
use crate::domain::{FileLintResult, LintSummary};
use crate::error::{ConfigError, ManifestError};
use crate::lint::{run_lints, LintOptions};
use crate::manifest::{detect_manifests, read_manifest, ManifestWriter, WriteResult};
use crate::parser::parse_manifest;

/// Orchestrator for coordinating the lint workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct OrchestratorResult {
    /// Lint summary with all file results
    pub summary: LintSummary,
    /// Fix results for each modified manifest
    pub write_results: Vec<WriteResult>,
    /// Per-file errors encountered during processing
    pub errors: Vec<OrchestratorError>,
}

/// Errors that can occur during orchestration without aborting the run
#[derive(Debug)]
pub enum OrchestratorError {
    /// Failed to read a manifest
    ReadError { path: String, message: String },
    /// Failed to write fixes back to a manifest
    WriteError { path: String, message: String },
}

impl std::fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorError::ReadError { path, message } => {
                write!(f, "Failed to read {}: {}", path, message)
            }
            OrchestratorError::WriteError { path, message } => {
                write!(f, "Failed to write {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for OrchestratorError {}

impl Orchestrator {
    /// Creates a new orchestrator, validating option combinations
    pub fn new(args: CliArgs) -> Result<Self, ConfigError> {
        if args.quiet && args.verbose {
            return Err(ConfigError::conflicting_options(
                "--quiet and --verbose cannot be used together",
            ));
        }
        if args.json && args.diff {
            return Err(ConfigError::conflicting_options(
                "--json and --diff cannot be used together",
            ));
        }
        if args.dry_run && !args.fix {
            return Err(ConfigError::conflicting_options(
                "--dry-run requires --fix",
            ));
        }
        Ok(Self { args })
    }

    /// Runs the lint workflow
    ///
    /// Detection failures are fatal. Per-file read and write failures are
    /// collected in the result and the remaining files are still processed.
    pub fn run(&self) -> Result<OrchestratorResult, ManifestError> {
        let mut summary = LintSummary::new(self.args.fix, self.args.dry_run);
        let mut write_results = Vec::new();
        let mut errors = Vec::new();

        let manifests = detect_manifests(&self.args.path)?;
        let options = LintOptions::from_cli(&self.args);
        let writer = ManifestWriter::new(self.args.dry_run);

        for path in &manifests {
            let content = match read_manifest(path) {
                Ok(c) => c,
                Err(e) => {
                    errors.push(OrchestratorError::ReadError {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let parsed = parse_manifest(&content);
            let findings = run_lints(&parsed, &options);

            let mut file = FileLintResult::new(path);
            file.requirements = parsed.requirements.clone();
            file.directives = parsed.directives;
            file.findings = findings;

            if self.args.fix {
                match writer.apply_fixes(path, &content, &parsed, &file.findings) {
                    Ok(result) => {
                        file.modified = result.file_modified;
                        if result.has_changes() {
                            write_results.push(result);
                        }
                    }
                    Err(e) => {
                        errors.push(OrchestratorError::WriteError {
                            path: path.display().to_string(),
                            message: e.to_string(),
                        });
                    }
                }
            }

            file.sort_findings();
            summary.add_file(file);
        }

        Ok(OrchestratorResult {
            summary,
            write_results,
            errors,
        })
    }
}
