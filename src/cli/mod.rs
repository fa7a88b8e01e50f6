//! CLI argument parsing for wastegraph
//!
//! Uses clap derive. Global flags: --config, --db, --graph, --graph-id,
//! --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod commands;
pub mod output;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
pub use output::OutputFormat;

/// Wastegraph - route and collection-schedule planning over road graphs
#[derive(Parser, Debug)]
#[command(name = "wastegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ./wastegraph.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database holding saved graphs
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Graph document to operate on (JSON file, or `-` for stdin)
    #[arg(long, short, global = true, conflicts_with = "graph_id")]
    pub graph: Option<PathBuf>,

    /// Saved graph to operate on
    #[arg(long, global = true)]
    pub graph_id: Option<i64>,

    /// Output format
    #[arg(long, global = true, value_parser = output::format_parser(), default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `wastegraph_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
