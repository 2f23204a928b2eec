//! Parsed requirement entries

use super::SpecifierSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalizes a distribution name per PEP 503: lowercase, with runs of
/// `-`, `_` and `.` collapsed to a single `-`. `Flask_SQLAlchemy` and
/// `flask.sqlalchemy` both normalize to `flask-sqlalchemy`.
pub fn normalize_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_sep = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !prev_sep {
                result.push('-');
            }
            prev_sep = true;
        } else {
            result.push(c.to_ascii_lowercase());
            prev_sep = false;
        }
    }
    result
}

/// A single requirement parsed from a manifest line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Package name as written in the manifest
    pub name: String,
    /// Requested extras (`pkg[extra1,extra2]`)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub extras: Vec<String>,
    /// Version constraints
    pub specifiers: SpecifierSet,
    /// Direct reference URL for `name @ url` requirements
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
    /// Environment marker after `;`, kept verbatim
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub marker: Option<String>,
    /// Inline trailing comment, without the leading `#`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
    /// 1-based line number of the first physical line
    pub line: usize,
}

impl Requirement {
    /// Creates a new requirement
    pub fn new(name: impl Into<String>, specifiers: SpecifierSet, line: usize) -> Self {
        Self {
            name: name.into(),
            extras: Vec::new(),
            specifiers,
            url: None,
            marker: None,
            comment: None,
            line,
        }
    }

    /// Sets the extras (builder pattern)
    pub fn with_extras(mut self, extras: Vec<String>) -> Self {
        self.extras = extras;
        self
    }

    /// Sets the direct reference URL (builder pattern)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the environment marker (builder pattern)
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Sets the inline comment (builder pattern)
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The PEP 503 normalized name, used for duplicate grouping
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Returns true if the name is already in normalized form
    pub fn has_normalized_name(&self) -> bool {
        self.name == self.normalized_name()
    }

    /// Returns true if an exact version is pinned
    pub fn is_pinned(&self) -> bool {
        self.specifiers.is_pinned()
    }

    /// Returns true if no version constraint (and no URL) is present
    pub fn is_unconstrained(&self) -> bool {
        self.specifiers.is_empty() && self.url.is_none()
    }

    /// Returns true if this is a `name @ url` direct reference
    pub fn is_url(&self) -> bool {
        self.url.is_some()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        if let Some(ref url) = self.url {
            write!(f, " @ {}", url)?;
        } else {
            write!(f, "{}", self.specifiers)?;
        }
        if let Some(ref marker) = self.marker {
            write!(f, " ; {}", marker)?;
        }
        Ok(())
    }
}
