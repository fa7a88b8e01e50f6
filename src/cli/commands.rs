//! Main CLI commands enum

use clap::Subcommand;

use crate::cli::args::{
    DistancesArgs, GraphIdArgs, PathsArgs, ResetArgs, RouteArgs, SaveArgs,
};

/// Top-level wastegraph commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database and its tables
    Init,

    /// Drop and recreate every table (deletes all saved graphs)
    Reset(ResetArgs),

    /// Save the loaded graph to the database
    Save(SaveArgs),

    /// List saved graphs
    List,

    /// Print a saved graph as a graph document
    Show(GraphIdArgs),

    /// Delete a saved graph
    Delete(GraphIdArgs),

    /// Shortest route between two collection points
    Route(RouteArgs),

    /// Shortest distance from one collection point to every other
    Distances(DistancesArgs),

    /// Assign a collection day to every point
    Schedule,

    /// Check the graph for structural problems
    Validate,

    /// Alternative simple routes between two points, cheapest first
    Paths(PathsArgs),

    /// Run route, schedule, validate and paths on the built-in sample graph
    Selftest,
}
