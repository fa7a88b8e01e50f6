//! Per-command argument structures

use clap::Args;

use crate::cli::parse::{parse_max_paths, parse_override};

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Confirm that every saved graph should be dropped
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Name to store the graph under
    pub name: String,
}

#[derive(Args, Debug)]
pub struct GraphIdArgs {
    /// Saved graph id (see `wastegraph list`)
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Starting collection point
    pub src: String,

    /// Destination collection point
    pub dst: String,

    /// Replace the weight of an edge in one direction, as U:V=W (can be repeated)
    #[arg(long = "override", short = 'o', action = clap::ArgAction::Append, value_parser = parse_override)]
    pub overrides: Vec<(String, String, i64)>,
}

#[derive(Args, Debug)]
pub struct DistancesArgs {
    /// Starting collection point
    pub src: String,

    /// Replace the weight of an edge in one direction, as U:V=W (can be repeated)
    #[arg(long = "override", short = 'o', action = clap::ArgAction::Append, value_parser = parse_override)]
    pub overrides: Vec<(String, String, i64)>,
}

#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Starting collection point
    pub src: String,

    /// Destination collection point
    pub dst: String,

    /// Maximum number of paths to report (default from config, 10)
    #[arg(long, short = 'n', value_parser = parse_max_paths)]
    pub max_paths: Option<usize>,
}
