//! Wastegraph - waste-collection route planning CLI
//!
//! Computes shortest routes with detour overrides, weekday collection
//! schedules, structural validation reports, and alternative routes over a
//! weighted road graph.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use wastegraph_core::error::{ExitCode as WasteGraphExitCode, WasteGraphError};
use wastegraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(WasteGraphExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Render a clap failure, as a JSON envelope when `--format json` was asked for
///
/// `Cli.format` does not exist yet at this point, so argv is scanned directly.
fn report_parse_error(err: clap::Error) -> ExitCode {
    let is_info = matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    );
    if is_info || !argv_requests_json() {
        err.exit();
    }

    // Repeating a global `--format` is the only conflict that gets its own type
    let error = if err.kind() == ErrorKind::ArgumentConflict
        && err.to_string().contains("--format")
    {
        WasteGraphError::DuplicateFormat
    } else {
        WasteGraphError::UsageError(err.to_string())
    };

    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
