//! reqlint - Linter and fixer CLI for pip requirements manifests
//!
//! This tool checks requirements.txt-style files for:
//! - Malformed requirement lines
//! - Duplicate entries (redundant or conflicting)
//! - Style issues (mixed comparators, specifier spacing, unnormalized names)

use clap::Parser;
use reqlint::cli::CliArgs;
use reqlint::orchestrator::Orchestrator;
use reqlint::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("reqlint v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let orchestrator = Orchestrator::new(args.clone())?;
    let result = orchestrator.run()?;

    let output_config =
        OutputConfig::from_cli(args.json, args.diff, args.verbose, args.quiet, args.dry_run);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    // Exit code contract: 1 for operational failures, 2 for findings that
    // fail the lint, 0 otherwise
    if !result.errors.is_empty() {
        return Ok(ExitCode::FAILURE);
    }

    let warnings_fail = args.strict && result.summary.total_warnings() > 0;
    if result.summary.has_errors() || warnings_fail {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
