//! Core domain models for reqlint
//!
//! This module contains the fundamental types used throughout the application:
//! - Version specifier types for parsed constraints
//! - Requirement entries with PEP 503 name normalization
//! - Lint findings with rule codes and severities
//! - Summary and result structures

mod finding;
mod requirement;
mod specifier;
mod summary;

pub use finding::{Finding, Fix, RuleCode, Severity};
pub use requirement::{normalize_name, Requirement};
pub use specifier::{Comparator, SpecifierSet, VersionSpecifier};
pub use summary::{FileLintResult, LintSummary};
