//! Requirement line grammar
//!
//! Parses one logical manifest line into a [`Requirement`]:
//!
//! ```text
//! name[extras]>=1.0,<2.0 ; marker  # comment
//! name @ https://example.com/pkg.tar.gz
//! ```
//!
//! A malformed line produces an error message, never a panic; the caller
//! turns it into a `syntax` finding so the rest of the file still parses.

use crate::domain::{Comparator, Requirement, SpecifierSet, VersionSpecifier};
use crate::parser::version::{is_valid_version, is_valid_wildcard};
use regex::Regex;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)").unwrap()
});

static EXTRA_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$").unwrap());

static SPECIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(===|==|!=|>=|<=|~=|<|>)\s*(\S+)\s*$").unwrap());

/// Splits an inline comment off a raw line. A comment starts at a `#` that is
/// the first character or is preceded by whitespace. Returns the code part and
/// the byte index of the `#`, if any.
pub fn split_comment(line: &str) -> (&str, Option<usize>) {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            return (&line[..i], Some(i));
        }
    }
    (line, None)
}

/// Splits an environment marker off the code part. Returns the specifier part
/// and the byte index of the `;`, if any.
pub fn split_marker(code: &str) -> (&str, Option<usize>) {
    match code.find(';') {
        Some(i) => (&code[..i], Some(i)),
        None => (code, None),
    }
}

/// Parses the extras list from a bracketed segment like `[standard,full]`
fn parse_extras(segment: &str) -> Result<Vec<String>, String> {
    let inner = segment
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| format!("unterminated extras list '{}'", segment))?;

    let mut extras = Vec::new();
    for part in inner.split(',') {
        let extra = part.trim();
        if extra.is_empty() {
            return Err(format!("empty extra name in '{}'", segment));
        }
        if !EXTRA_NAME_RE.is_match(extra) {
            return Err(format!("invalid extra name '{}'", extra));
        }
        extras.push(extra.to_string());
    }
    Ok(extras)
}

/// Parses a comma-separated specifier set like `>=1.0, <2.0`
fn parse_specifier_set(input: &str) -> Result<SpecifierSet, String> {
    let mut specifiers = Vec::new();

    for part in input.split(',') {
        let caps = SPECIFIER_RE.captures(part).ok_or_else(|| {
            format!(
                "invalid version specifier '{}': expected comparator followed by a version",
                part.trim()
            )
        })?;

        // Regex alternatives are exact operator tokens, parse cannot fail
        let op = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let comparator = Comparator::parse(op)
            .ok_or_else(|| format!("unknown comparator '{}'", op))?;
        let version = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

        let wildcard_ok =
            matches!(comparator, Comparator::Equal | Comparator::NotEqual);
        if is_valid_wildcard(version) {
            if !wildcard_ok {
                return Err(format!(
                    "wildcard version '{}' is only valid with '==' or '!='",
                    version
                ));
            }
        } else if comparator == Comparator::ArbitraryEqual {
            // `===` performs plain string comparison, any non-space token goes
        } else if !is_valid_version(version) {
            return Err(format!("invalid version '{}' after '{}'", version, op));
        }

        specifiers.push(VersionSpecifier::new(comparator, version));
    }

    Ok(SpecifierSet::new(specifiers))
}

/// Parses one logical requirement line (comment and blank handling happens in
/// the caller). `line` is the 1-based number of the first physical line.
pub fn parse_requirement(text: &str, line: usize) -> Result<Requirement, String> {
    let (code, comment_idx) = split_comment(text);
    let (spec_part, marker_idx) = split_marker(code);

    let marker = marker_idx.map(|i| code[i + 1..].trim().to_string());
    if let Some(ref m) = marker {
        if m.is_empty() {
            return Err("empty environment marker after ';'".to_string());
        }
    }

    let spec_part = spec_part.trim();
    if spec_part.is_empty() {
        return Err("missing package name".to_string());
    }

    let name_match = NAME_RE
        .find(spec_part)
        .ok_or_else(|| format!("invalid package name in '{}'", spec_part))?;
    let name = name_match.as_str().to_string();
    let mut rest = &spec_part[name_match.end()..];

    // Optional extras directly after the name
    let mut extras = Vec::new();
    if rest.starts_with('[') {
        let close = rest
            .find(']')
            .ok_or_else(|| format!("unterminated extras list in '{}'", spec_part))?;
        extras = parse_extras(&rest[..=close])?;
        rest = &rest[close + 1..];
    }

    let comment = comment_idx.map(|i| text[i + 1..].trim().to_string());

    let rest_trimmed = rest.trim();

    // Direct reference: name @ url
    if let Some(url) = rest_trimmed.strip_prefix('@') {
        let url = url.trim();
        if url.is_empty() {
            return Err("missing URL after '@'".to_string());
        }
        let mut req = Requirement::new(name, SpecifierSet::empty(), line)
            .with_extras(extras)
            .with_url(url);
        if let Some(m) = marker {
            req = req.with_marker(m);
        }
        if let Some(c) = comment {
            req = req.with_comment(c);
        }
        return Ok(req);
    }

    // Bare name, or name followed by a specifier set
    let specifiers = if rest_trimmed.is_empty() {
        SpecifierSet::empty()
    } else if rest_trimmed.starts_with(['=', '!', '<', '>', '~']) {
        parse_specifier_set(rest_trimmed)?
    } else {
        return Err(format!(
            "unexpected token '{}' after package name '{}'",
            rest_trimmed, name
        ));
    };

    let mut req = Requirement::new(name, specifiers, line).with_extras(extras);
    if let Some(m) = marker {
        req = req.with_marker(m);
    }
    if let Some(c) = comment {
        req = req.with_comment(c);
    }
    Ok(req)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Requirement, String> {
        parse_requirement(text, 1)
    }

    #[test]
    fn test_parse_simple_gte() {
        // The spec's mandatory accept case
        let req = parse("pandas>=2.0.0").unwrap();
        assert_eq!(req.name, "pandas");
        assert_eq!(req.specifiers.to_string(), ">=2.0.0");
        assert_eq!(
            req.specifiers.single_comparator(),
            Some(Comparator::GreaterOrEqual)
        );
    }

    #[test]
    fn test_parse_rejects_double_comparator() {
        // The spec's mandatory reject case
        let err = parse("pandas >= >=2.0").unwrap_err();
        assert!(err.contains(">=2.0"), "error should name the bad token: {}", err);
    }

    #[test]
    fn test_parse_bare_name() {
        let req = parse("networkx").unwrap();
        assert_eq!(req.name, "networkx");
        assert!(req.is_unconstrained());
    }

    #[test]
    fn test_parse_exact_pin() {
        let req = parse("numpy==1.26.0").unwrap();
        assert!(req.is_pinned());
        assert_eq!(req.specifiers.to_string(), "==1.26.0");
    }

    #[test]
    fn test_parse_arbitrary_equality() {
        let req = parse("legacy===1.0-custom").unwrap();
        assert_eq!(
            req.specifiers.single_comparator(),
            Some(Comparator::ArbitraryEqual)
        );
    }

    #[test]
    fn test_parse_range() {
        let req = parse("scipy>=1.10.0,<2.0").unwrap();
        assert_eq!(req.specifiers.len(), 2);
        assert_eq!(req.specifiers.to_string(), ">=1.10.0,<2.0");
    }

    #[test]
    fn test_parse_range_with_spaces() {
        let req = parse("scipy >= 1.10.0, < 2.0").unwrap();
        assert_eq!(req.specifiers.to_string(), ">=1.10.0,<2.0");
    }

    #[test]
    fn test_parse_compatible_release() {
        let req = parse("statsmodels~=0.14.0").unwrap();
        assert_eq!(
            req.specifiers.single_comparator(),
            Some(Comparator::Compatible)
        );
    }

    #[test]
    fn test_parse_wildcard() {
        assert!(parse("pandas==2.0.*").is_ok());
        assert!(parse("pandas!=2.0.*").is_ok());
        let err = parse("pandas>=2.0.*").unwrap_err();
        assert!(err.contains("wildcard"));
    }

    #[test]
    fn test_parse_extras() {
        let req = parse("uvicorn[standard]>=0.23.0").unwrap();
        assert_eq!(req.extras, vec!["standard"]);

        let req = parse("pandas[excel,parquet]>=2.0.0").unwrap();
        assert_eq!(req.extras, vec!["excel", "parquet"]);
    }

    #[test]
    fn test_parse_extras_errors() {
        assert!(parse("uvicorn[standard>=0.23.0").is_err());
        assert!(parse("uvicorn[]>=0.23.0").is_err());
        assert!(parse("uvicorn[a,,b]>=0.23.0").is_err());
    }

    #[test]
    fn test_parse_marker() {
        let req = parse("prophet>=1.1.0 ; python_version >= \"3.8\"").unwrap();
        assert_eq!(req.marker.as_deref(), Some("python_version >= \"3.8\""));
        assert_eq!(req.specifiers.to_string(), ">=1.1.0");
    }

    #[test]
    fn test_parse_empty_marker_rejected() {
        assert!(parse("prophet>=1.1.0 ;").is_err());
    }

    #[test]
    fn test_parse_inline_comment() {
        let req = parse("pandas>=2.0.0  # core dataframes").unwrap();
        assert_eq!(req.comment.as_deref(), Some("core dataframes"));
        assert_eq!(req.specifiers.to_string(), ">=2.0.0");
    }

    #[test]
    fn test_hash_without_whitespace_is_not_comment() {
        // pip only treats whitespace-preceded '#' as a comment
        let err = parse("pandas>=2.0.0#x").unwrap_err();
        assert!(err.contains("2.0.0#x"));
    }

    #[test]
    fn test_parse_url_requirement() {
        let req = parse("pkg @ https://example.com/pkg-1.0.tar.gz").unwrap();
        assert_eq!(req.url.as_deref(), Some("https://example.com/pkg-1.0.tar.gz"));
        assert!(req.is_url());
        assert!(!req.is_unconstrained());
    }

    #[test]
    fn test_parse_url_missing() {
        assert!(parse("pkg @").is_err());
    }

    #[test]
    fn test_parse_invalid_names() {
        assert!(parse("-pandas>=2.0.0").is_err());
        assert!(parse(">=2.0.0").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_parse_unexpected_token() {
        let err = parse("pandas 2.0.0").unwrap_err();
        assert!(err.contains("unexpected token"));
    }

    #[test]
    fn test_parse_single_equals_rejected() {
        assert!(parse("pandas=2.0.0").is_err());
    }

    #[test]
    fn test_parse_invalid_version() {
        let err = parse("pandas>=not.a.version").unwrap_err();
        assert!(err.contains("invalid version"));
    }

    #[test]
    fn test_split_comment() {
        assert_eq!(split_comment("pandas>=2.0.0"), ("pandas>=2.0.0", None));
        assert_eq!(
            split_comment("pandas>=2.0.0  # note"),
            ("pandas>=2.0.0  ", Some(15))
        );
        assert_eq!(split_comment("# whole line"), ("", Some(0)));
    }

    #[test]
    fn test_split_marker() {
        assert_eq!(split_marker("pandas>=2.0.0"), ("pandas>=2.0.0", None));
        let (spec, idx) = split_marker("pandas>=2.0.0 ; python_version > \"3\"");
        assert_eq!(spec, "pandas>=2.0.0 ");
        assert_eq!(idx, Some(14));
    }

    #[test]
    fn test_name_keeps_original_case() {
        let req = parse("Flask_SQLAlchemy>=3.0.0").unwrap();
        assert_eq!(req.name, "Flask_SQLAlchemy");
        assert_eq!(req.normalized_name(), "flask-sqlalchemy");
    }
}
