//! Manifest file discovery and writing
//!
//! This module provides functionality to:
//! - Detect requirements files under a path (conventional names plus a
//!   requirements/ directory)
//! - Read manifest content
//! - Apply fixable findings back to disk, with dry-run support

mod detector;
mod writer;

pub use detector::{detect_manifests, is_requirements_filename};
pub use writer::{read_manifest, LineChange, ManifestWriter, WriteResult};
