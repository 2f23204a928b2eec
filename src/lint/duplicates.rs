//! Duplicate entry detection
//!
//! Entries are grouped by PEP 503 normalized name and each later occurrence
//! is compared against the first:
//! - identical identity -> `redundant-duplicate` warning, fixable by removing
//!   the later line
//! - different identity -> `conflicting-duplicate` error, never auto-fixed
//!   (picking a winner would be dependency resolution)
//!
//! Identity covers extras and environment markers, not just the constraint:
//! `uvicorn` and `uvicorn[standard]` install differently, as do two entries
//! gated on different platforms. Removing either would change what pip
//! installs, so such pairs conflict.

use super::LintOptions;
use crate::domain::{normalize_name, Finding, Fix, Requirement, RuleCode};
use crate::parser::ParsedManifest;
use std::collections::HashMap;

/// Canonical identity for duplicate comparison: normalized extras, the
/// constraint (URL for direct references, canonical specifier set otherwise),
/// and the environment marker.
fn constraint_key(req: &Requirement) -> String {
    let mut extras: Vec<String> = req.extras.iter().map(|e| normalize_name(e)).collect();
    extras.sort();

    let constraint = match req.url {
        Some(ref url) => format!("@{}", url),
        None => req.specifiers.canonical(),
    };

    format!(
        "[{}]{};{}",
        extras.join(","),
        constraint,
        req.marker.as_deref().unwrap_or("")
    )
}

/// Checks a manifest for duplicate package entries
pub fn check_duplicates(manifest: &ParsedManifest, options: &LintOptions) -> Vec<Finding> {
    let redundant_enabled = options.rule_enabled(RuleCode::RedundantDuplicate);
    let conflicting_enabled = options.rule_enabled(RuleCode::ConflictingDuplicate);
    if !redundant_enabled && !conflicting_enabled {
        return Vec::new();
    }

    let mut findings = Vec::new();
    let mut first_seen: HashMap<String, &Requirement> = HashMap::new();

    for req in &manifest.requirements {
        if !options.package_selected(&req.name) {
            continue;
        }

        let normalized = req.normalized_name();
        match first_seen.get(normalized.as_str()) {
            None => {
                first_seen.insert(normalized, req);
            }
            Some(first) => {
                if constraint_key(first) == constraint_key(req) {
                    if redundant_enabled {
                        findings.push(
                            Finding::new(
                                RuleCode::RedundantDuplicate,
                                req.line,
                                format!(
                                    "'{}' duplicates line {} with an identical constraint",
                                    req, first.line
                                ),
                            )
                            .with_package(&req.name)
                            .with_fix(Fix::RemoveLine),
                        );
                    }
                } else if conflicting_enabled {
                    findings.push(
                        Finding::new(
                            RuleCode::ConflictingDuplicate,
                            req.line,
                            format!(
                                "'{}' conflicts with line {} ('{}')",
                                req, first.line, first
                            ),
                        )
                        .with_package(&req.name),
                    );
                }
            }
        }
    }

    findings
}
