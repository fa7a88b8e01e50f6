//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::Cli;
use wastegraph_core::bail_usage;
use wastegraph_core::config::Config;
use wastegraph_core::db::Database;
use wastegraph_core::error::Result;
use wastegraph_core::graph::{Graph, GraphDocument};

use super::macros::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub base_dir: &'a Path,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, base_dir: &'a Path, config: &'a Config, start: Instant) -> Self {
        Self {
            cli,
            base_dir,
            config,
            start,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.config
            .database_path(self.cli.db.as_deref(), self.base_dir)
    }

    /// Open the database, creating it if missing
    pub fn open_database(&self) -> Result<Database> {
        let db = Database::open(&self.database_path())?;
        trace_command!(self.cli, self.start, "open_database");
        Ok(db)
    }

    /// Open a database that must already exist
    pub fn open_existing_database(&self) -> Result<Database> {
        let db = Database::open_existing(&self.database_path())?;
        trace_command!(self.cli, self.start, "open_database");
        Ok(db)
    }

    /// Load the raw graph document named by `--graph` or `--graph-id`
    pub fn load_document(&self) -> Result<GraphDocument> {
        let document = if let Some(path) = &self.cli.graph {
            let path = if path.as_os_str() == "-" || path.is_absolute() {
                path.clone()
            } else {
                self.base_dir.join(path)
            };
            GraphDocument::from_path(&path)?
        } else if let Some(id) = self.cli.graph_id {
            let stored = self.open_existing_database()?.load_graph(id)?;
            GraphDocument::from(&stored.graph)
        } else {
            bail_usage!("no graph given: pass --graph <FILE> or --graph-id <ID>");
        };

        trace_command!(self.cli, self.start, "load_graph");
        tracing::debug!(
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "graph loaded"
        );
        Ok(document)
    }

    /// Load the graph as strict node and edge lists
    pub fn load_graph(&self) -> Result<Graph> {
        self.load_document()?.into_graph()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wastegraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route and collection-schedule planning over waste-collection graphs.");
        println!();
        println!("Run `wastegraph --help` for usage information.");
        Ok(())
    }
}
