//! Version specifier types for requirements manifests
//!
//! Handles PEP 440 style constraints:
//! - Exact: `==2.0.0`, arbitrary equality `===2.0.0`
//! - Comparison: `>=2.0.0`, `>2.0.0`, `<=2.0.0`, `<2.0.0`, `!=2.0.0`
//! - Compatible release: `~=2.0`
//! - Sets: `>=1.0,<2.0`

use serde::{Deserialize, Serialize};
use std::fmt;

/// A version comparator as written in a requirement specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// Exact version match (`==`)
    Equal,
    /// Version exclusion (`!=`)
    NotEqual,
    /// Minimum version, inclusive (`>=`)
    GreaterOrEqual,
    /// Minimum version, exclusive (`>`)
    Greater,
    /// Maximum version, inclusive (`<=`)
    LessOrEqual,
    /// Maximum version, exclusive (`<`)
    Less,
    /// Compatible release (`~=`)
    Compatible,
    /// Arbitrary equality (`===`) - string comparison, no version semantics
    ArbitraryEqual,
}

impl Comparator {
    /// The operator exactly as it appears in a manifest
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
            Comparator::GreaterOrEqual => ">=",
            Comparator::Greater => ">",
            Comparator::LessOrEqual => "<=",
            Comparator::Less => "<",
            Comparator::Compatible => "~=",
            Comparator::ArbitraryEqual => "===",
        }
    }

    /// Parse an operator token. Longest operators must win (`===` before `==`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "===" => Some(Comparator::ArbitraryEqual),
            "==" => Some(Comparator::Equal),
            "!=" => Some(Comparator::NotEqual),
            ">=" => Some(Comparator::GreaterOrEqual),
            ">" => Some(Comparator::Greater),
            "<=" => Some(Comparator::LessOrEqual),
            "<" => Some(Comparator::Less),
            "~=" => Some(Comparator::Compatible),
            _ => None,
        }
    }

    /// Returns true if this comparator pins a single exact version
    pub fn is_exact(&self) -> bool {
        matches!(self, Comparator::Equal | Comparator::ArbitraryEqual)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single version constraint (comparator plus version string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpecifier {
    /// The comparator
    pub comparator: Comparator,
    /// The version string as written in the manifest
    pub version: String,
}

impl VersionSpecifier {
    /// Creates a new VersionSpecifier
    pub fn new(comparator: Comparator, version: impl Into<String>) -> Self {
        Self {
            comparator,
            version: version.into(),
        }
    }

    /// Canonical form used for equality comparison between duplicate entries.
    /// Whitespace-free, version lowercased so `2.0.0RC1` equals `2.0.0rc1`.
    pub fn canonical(&self) -> String {
        format!("{}{}", self.comparator.as_str(), self.version.to_lowercase())
    }
}

impl fmt::Display for VersionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator, self.version)
    }
}

/// An ordered set of version constraints attached to one requirement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecifierSet {
    /// Constraints in manifest order
    pub specifiers: Vec<VersionSpecifier>,
}

impl SpecifierSet {
    /// Creates an empty set (an unconstrained requirement)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from constraints
    pub fn new(specifiers: Vec<VersionSpecifier>) -> Self {
        Self { specifiers }
    }

    /// Creates a set with a single constraint
    pub fn single(comparator: Comparator, version: impl Into<String>) -> Self {
        Self::new(vec![VersionSpecifier::new(comparator, version)])
    }

    /// Returns true if no constraint is present
    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty()
    }

    /// Number of constraints in the set
    pub fn len(&self) -> usize {
        self.specifiers.len()
    }

    /// Returns true if any constraint pins an exact version
    pub fn is_pinned(&self) -> bool {
        self.specifiers.iter().any(|s| s.comparator.is_exact())
    }

    /// The comparator when exactly one constraint is present
    pub fn single_comparator(&self) -> Option<Comparator> {
        match self.specifiers.as_slice() {
            [only] => Some(only.comparator),
            _ => None,
        }
    }

    /// Canonical, order-insensitive form for duplicate comparison.
    /// `>=1.0,<2.0` and `<2.0, >=1.0` canonicalize identically.
    pub fn canonical(&self) -> String {
        let mut parts: Vec<String> = self.specifiers.iter().map(|s| s.canonical()).collect();
        parts.sort();
        parts.join(",")
    }
}

impl fmt::Display for SpecifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.specifiers.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparator_as_str() {
        assert_eq!(Comparator::Equal.as_str(), "==");
        assert_eq!(Comparator::NotEqual.as_str(), "!=");
        assert_eq!(Comparator::GreaterOrEqual.as_str(), ">=");
        assert_eq!(Comparator::Greater.as_str(), ">");
        assert_eq!(Comparator::LessOrEqual.as_str(), "<=");
        assert_eq!(Comparator::Less.as_str(), "<");
        assert_eq!(Comparator::Compatible.as_str(), "~=");
        assert_eq!(Comparator::ArbitraryEqual.as_str(), "===");
    }

    #[test]
    fn test_comparator_parse() {
        assert_eq!(Comparator::parse("=="), Some(Comparator::Equal));
        assert_eq!(Comparator::parse("==="), Some(Comparator::ArbitraryEqual));
        assert_eq!(Comparator::parse(">="), Some(Comparator::GreaterOrEqual));
        assert_eq!(Comparator::parse("~="), Some(Comparator::Compatible));
        assert_eq!(Comparator::parse("="), None);
        assert_eq!(Comparator::parse(">>"), None);
        assert_eq!(Comparator::parse(""), None);
    }

    #[test]
    fn test_comparator_is_exact() {
        assert!(Comparator::Equal.is_exact());
        assert!(Comparator::ArbitraryEqual.is_exact());
        assert!(!Comparator::GreaterOrEqual.is_exact());
        assert!(!Comparator::Compatible.is_exact());
    }

    #[test]
    fn test_version_specifier_display() {
        let spec = VersionSpecifier::new(Comparator::GreaterOrEqual, "2.0.0");
        assert_eq!(spec.to_string(), ">=2.0.0");
    }

    #[test]
    fn test_version_specifier_canonical_lowercases() {
        let spec = VersionSpecifier::new(Comparator::Equal, "1.0.0RC1");
        assert_eq!(spec.canonical(), "==1.0.0rc1");
    }

    #[test]
    fn test_specifier_set_empty() {
        let set = SpecifierSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.is_pinned());
        assert_eq!(set.to_string(), "");
    }

    #[test]
    fn test_specifier_set_single() {
        let set = SpecifierSet::single(Comparator::GreaterOrEqual, "2.0.0");
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_string(), ">=2.0.0");
        assert_eq!(set.single_comparator(), Some(Comparator::GreaterOrEqual));
    }

    #[test]
    fn test_specifier_set_is_pinned() {
        assert!(SpecifierSet::single(Comparator::Equal, "1.0").is_pinned());
        assert!(!SpecifierSet::single(Comparator::GreaterOrEqual, "1.0").is_pinned());
    }

    #[test]
    fn test_specifier_set_range_display() {
        let set = SpecifierSet::new(vec![
            VersionSpecifier::new(Comparator::GreaterOrEqual, "1.0"),
            VersionSpecifier::new(Comparator::Less, "2.0"),
        ]);
        assert_eq!(set.to_string(), ">=1.0,<2.0");
        assert_eq!(set.single_comparator(), None);
    }

    #[test]
    fn test_specifier_set_canonical_order_insensitive() {
        let a = SpecifierSet::new(vec![
            VersionSpecifier::new(Comparator::GreaterOrEqual, "1.0"),
            VersionSpecifier::new(Comparator::Less, "2.0"),
        ]);
        let b = SpecifierSet::new(vec![
            VersionSpecifier::new(Comparator::Less, "2.0"),
            VersionSpecifier::new(Comparator::GreaterOrEqual, "1.0"),
        ]);
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn test_specifier_set_canonical_distinguishes_versions() {
        let a = SpecifierSet::single(Comparator::GreaterOrEqual, "1.0");
        let b = SpecifierSet::single(Comparator::GreaterOrEqual, "1.0.0");
        assert_ne!(a.canonical(), b.canonical());
    }

    #[test]
    fn test_serde_comparator() {
        let json = serde_json::to_string(&Comparator::GreaterOrEqual).unwrap();
        assert_eq!(json, "\"greater_or_equal\"");
        let parsed: Comparator = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Comparator::GreaterOrEqual);
    }

    #[test]
    fn test_serde_specifier_set() {
        let set = SpecifierSet::single(Comparator::Equal, "2.0.0");
        let json = serde_json::to_string(&set).unwrap();
        let parsed: SpecifierSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
