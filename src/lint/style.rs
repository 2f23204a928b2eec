//! Style rules: comparator consistency, specifier spacing, name
//! normalization, missing constraints

use super::LintOptions;
use crate::domain::{Comparator, Finding, Fix, RuleCode};
use crate::parser::{split_comment, split_marker, ParsedManifest};
use std::collections::HashMap;

/// Flags a file that mixes comparator styles across its single-constraint
/// entries (`pandas>=2.0` next to `numpy==1.24`). Multi-part ranges
/// legitimately combine comparators and are exempt. Fires at most once per
/// file, on the first entry deviating from the dominant style.
pub fn check_mixed_comparators(manifest: &ParsedManifest, options: &LintOptions) -> Vec<Finding> {
    if !options.rule_enabled(RuleCode::MixedComparators) {
        return Vec::new();
    }

    // (comparator, line) per single-constraint requirement, in file order
    let usages: Vec<(Comparator, usize)> = manifest
        .requirements
        .iter()
        .filter(|r| options.package_selected(&r.name))
        .filter_map(|r| r.specifiers.single_comparator().map(|c| (c, r.line)))
        .collect();

    let mut counts: HashMap<Comparator, usize> = HashMap::new();
    for (comparator, _) in &usages {
        *counts.entry(*comparator).or_insert(0) += 1;
    }
    if counts.len() < 2 {
        return Vec::new();
    }

    let dominant = usages
        .iter()
        .map(|(c, _)| *c)
        .max_by_key(|c| counts[c])
        .unwrap_or(Comparator::GreaterOrEqual);

    let mut styles: Vec<&str> = counts.keys().map(|c| c.as_str()).collect();
    styles.sort();

    let (_, line) = usages
        .iter()
        .find(|(c, _)| *c != dominant)
        .copied()
        .unwrap_or((dominant, 1));

    vec![Finding::new(
        RuleCode::MixedComparators,
        line,
        format!(
            "file mixes comparator styles ({}); dominant style is '{}'",
            styles.join(", "),
            dominant
        ),
    )]
}

/// Computes the compact replacement for a logical line whose specifier part
/// carries whitespace, preserving the marker and comment text.
/// Returns None when the line is already compact.
fn compact_replacement(text: &str) -> Option<String> {
    let (code, comment_idx) = split_comment(text);
    let (spec, marker_idx) = split_marker(code);

    let compact: String = spec.split_whitespace().collect();
    if compact == spec.trim() {
        return None;
    }

    let mut out = compact;
    if let Some(mi) = marker_idx {
        out.push(' ');
        out.push_str(code[mi..].trim_end());
    }
    if let Some(ci) = comment_idx {
        out.push_str("  ");
        out.push_str(text[ci..].trim_end());
    }
    Some(out)
}

/// Flags requirements whose specifier part deviates from the compact style
/// (`pandas >= 2.0` instead of `pandas>=2.0`). Fixable.
pub fn check_spacing(manifest: &ParsedManifest, options: &LintOptions) -> Vec<Finding> {
    if !options.rule_enabled(RuleCode::SpecifierSpacing) {
        return Vec::new();
    }

    let mut findings = Vec::new();
    for req in &manifest.requirements {
        if !options.package_selected(&req.name) {
            continue;
        }
        // `name @ url` has no version specifier; the spaced form is canonical
        if req.is_url() {
            continue;
        }
        let Some(line) = manifest.line(req.line) else {
            continue;
        };
        if let Some(replacement) = compact_replacement(&line.text) {
            findings.push(
                Finding::new(
                    RuleCode::SpecifierSpacing,
                    req.line,
                    format!("whitespace inside specifier; compact form is '{}'", req),
                )
                .with_package(&req.name)
                .with_fix(Fix::ReplaceLine {
                    content: replacement,
                }),
            );
        }
    }
    findings
}

/// Flags names that differ from their PEP 503 normalized form
pub fn check_unnormalized_names(manifest: &ParsedManifest, options: &LintOptions) -> Vec<Finding> {
    if !options.rule_enabled(RuleCode::UnnormalizedName) {
        return Vec::new();
    }

    manifest
        .requirements
        .iter()
        .filter(|r| options.package_selected(&r.name))
        .filter(|r| !r.has_normalized_name())
        .map(|r| {
            Finding::new(
                RuleCode::UnnormalizedName,
                r.line,
                format!(
                    "name '{}' is not PEP 503 normalized ('{}')",
                    r.name,
                    r.normalized_name()
                ),
            )
            .with_package(&r.name)
        })
        .collect()
}

/// Flags bare names with no version constraint at all
pub fn check_missing_constraint(manifest: &ParsedManifest, options: &LintOptions) -> Vec<Finding> {
    if !options.rule_enabled(RuleCode::MissingConstraint) {
        return Vec::new();
    }

    manifest
        .requirements
        .iter()
        .filter(|r| options.package_selected(&r.name))
        .filter(|r| r.is_unconstrained())
        .map(|r| {
            Finding::new(
                RuleCode::MissingConstraint,
                r.line,
                format!("'{}' has no version constraint", r.name),
            )
            .with_package(&r.name)
        })
        .collect()
}
