//! Requirements manifest discovery
//!
//! Conventions covered:
//! - requirements.txt and constraints.txt at the directory root
//! - variants like requirements-dev.txt, requirements_test.txt,
//!   requirements.prod.txt
//! - a requirements/ directory holding *.txt files

use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// Returns true for file names that follow the pip requirements naming
/// conventions
pub fn is_requirements_filename(name: &str) -> bool {
    if name == "requirements.txt" || name == "constraints.txt" {
        return true;
    }
    if let Some(rest) = name.strip_prefix("requirements") {
        return rest.ends_with(".txt")
            && matches!(rest.chars().next(), Some('-') | Some('_') | Some('.'));
    }
    false
}

/// Finds the manifests to lint under a path
///
/// A file path is linted as-is regardless of its name. A directory is scanned
/// non-recursively for conventional requirements files, plus a requirements/
/// subdirectory if present. Results are sorted for stable output.
pub fn detect_manifests(path: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut manifests = Vec::new();

    let entries = std::fs::read_dir(path).map_err(|e| ManifestError::read_error(path, e))?;
    for entry in entries.flatten() {
        let entry_path = entry.path();
        if !entry_path.is_file() {
            continue;
        }
        if let Some(name) = entry_path.file_name().and_then(|n| n.to_str()) {
            if is_requirements_filename(name) {
                manifests.push(entry_path);
            }
        }
    }

    let subdir = path.join("requirements");
    if subdir.is_dir() {
        let entries = std::fs::read_dir(&subdir).map_err(|e| ManifestError::read_error(&subdir, e))?;
        for entry in entries.flatten() {
            let entry_path = entry.path();
            if entry_path.is_file()
                && entry_path.extension().and_then(|e| e.to_str()) == Some("txt")
            {
                manifests.push(entry_path);
            }
        }
    }

    if manifests.is_empty() {
        return Err(ManifestError::no_manifests(path));
    }

    manifests.sort();
    Ok(manifests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_requirements_filename() {
        assert!(is_requirements_filename("requirements.txt"));
        assert!(is_requirements_filename("constraints.txt"));
        assert!(is_requirements_filename("requirements-dev.txt"));
        assert!(is_requirements_filename("requirements_test.txt"));
        assert!(is_requirements_filename("requirements.prod.txt"));

        assert!(!is_requirements_filename("requirements"));
        assert!(!is_requirements_filename("requirementsdev.txt"));
        assert!(!is_requirements_filename("setup.py"));
        assert!(!is_requirements_filename("notes.txt"));
    }

    #[test]
    fn test_detect_explicit_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("deps.txt");
        fs::write(&file, "pandas>=2.0.0\n").unwrap();

        // Explicit file paths are linted regardless of naming
        let manifests = detect_manifests(&file).unwrap();
        assert_eq!(manifests, vec![file]);
    }

    #[test]
    fn test_detect_in_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements.txt"), "").unwrap();
        fs::write(dir.path().join("requirements-dev.txt"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        let manifests = detect_manifests(dir.path()).unwrap();
        assert_eq!(manifests.len(), 2);
        // Sorted order
        assert!(manifests[0].ends_with("requirements-dev.txt"));
        assert!(manifests[1].ends_with("requirements.txt"));
    }

    #[test]
    fn test_detect_requirements_subdirectory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("requirements")).unwrap();
        fs::write(dir.path().join("requirements").join("base.txt"), "").unwrap();
        fs::write(dir.path().join("requirements").join("dev.txt"), "").unwrap();
        fs::write(dir.path().join("requirements").join("notes.md"), "").unwrap();

        let manifests = detect_manifests(dir.path()).unwrap();
        assert_eq!(manifests.len(), 2);
        assert!(manifests[0].ends_with("requirements/base.txt"));
        assert!(manifests[1].ends_with("requirements/dev.txt"));
    }

    #[test]
    fn test_detect_missing_path() {
        let err = detect_manifests(Path::new("/no/such/path")).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }

    #[test]
    fn test_detect_empty_directory() {
        let dir = TempDir::new().unwrap();
        let err = detect_manifests(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::NoManifests { .. }));
    }
}
