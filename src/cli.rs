//! CLI argument parsing module for reqlint

use crate::domain::RuleCode;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a rule code for --ignore
fn parse_rule(s: &str) -> Result<RuleCode, String> {
    s.parse::<RuleCode>().map_err(|_| {
        let known: Vec<&str> = RuleCode::all().iter().map(|r| r.as_str()).collect();
        format!("unknown rule '{}': expected one of {}", s, known.join(", "))
    })
}

/// Linter and fixer for pip requirements manifests
#[derive(Parser, Debug, Clone)]
#[command(
    name = "reqlint",
    version,
    about = "Linter and fixer for pip requirements manifests"
)]
pub struct CliArgs {
    /// Manifest file or directory to check (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // General options
    /// Dry run mode - with --fix, show what would change without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Apply automatic fixes (remove redundant duplicates, compact spacing)
    #[arg(long)]
    pub fix: bool,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Rule and package filters
    /// Disable a lint rule (can be specified multiple times)
    #[arg(long, value_parser = parse_rule, action = ArgAction::Append)]
    pub ignore: Vec<RuleCode>,

    /// Exclude specific packages from lint checks (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Check only specific packages (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub only: Vec<String>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show fixes in diff format
    #[arg(long)]
    pub diff: bool,
}
