//! reqlint - Linter and fixer library for pip requirements manifests
//!
//! This library provides the core functionality for checking requirements
//! files:
//! - Requirement grammar parsing (names, extras, specifiers, markers)
//! - Duplicate and style lint rules
//! - Automatic fixes with dry-run support

pub mod cli;
pub mod domain;
pub mod error;
pub mod lint;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;
