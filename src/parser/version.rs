//! PEP 440 version string validation
//!
//! Accepts the subset of PEP 440 seen in requirements manifests:
//! - Release: `2`, `2.0`, `2.0.0`
//! - Epoch: `1!2.0`
//! - Pre-release: `2.0a1`, `2.0b2`, `2.0rc1` (also `.a1` / `-a1` separators)
//! - Post/dev: `2.0.post1`, `2.0.dev3`
//! - Local: `2.0+cu118`
//! - Wildcard: `2.0.*` (only valid with `==` / `!=`)

use regex::Regex;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^
        (\d+!)?                      # epoch
        \d+(\.\d+)*                  # release segments
        ([._-]?(a|b|c|rc|alpha|beta|pre|preview)\d*)?   # pre-release
        ([._-]?(post|rev|r)\d*)?     # post-release
        ([._-]?dev\d*)?              # dev-release
        (\+[a-z0-9]+([._-][a-z0-9]+)*)?  # local version
        $",
    )
    .unwrap()
});

static WILDCARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+!)?(\d+(\.\d+)*\.)?\*$").unwrap());

/// Validates a concrete version string
pub fn is_valid_version(s: &str) -> bool {
    VERSION_RE.is_match(s)
}

/// Validates a wildcard version (`*`, `2.*`, `2.0.*`)
pub fn is_valid_wildcard(s: &str) -> bool {
    WILDCARD_RE.is_match(s)
}
