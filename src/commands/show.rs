//! `wastegraph show` - print a saved graph

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use wastegraph_core::error::Result;
use wastegraph_core::graph::GraphDocument;

pub fn execute(ctx: &CommandContext, id: i64) -> Result<()> {
    let stored = ctx.open_existing_database()?.load_graph(id)?;

    match ctx.cli.format {
        // Human output is the JSON document too
        OutputFormat::Json | OutputFormat::Human => {
            print_json(&GraphDocument::from(&stored.graph))?
        }
        OutputFormat::Records => {
            print_records_header(
                "show",
                &[
                    ("id", stored.id.to_string()),
                    ("nodes", stored.graph.nodes.len().to_string()),
                    ("edges", stored.graph.edges.len().to_string()),
                ],
            );
            for node in &stored.graph.nodes {
                println!(
                    "N {} x={} y={}",
                    node.id,
                    coordinate(node.x),
                    coordinate(node.y)
                );
            }
            for edge in &stored.graph.edges {
                println!("E {} {} w={}", edge.u, edge.v, edge.w);
            }
        }
    }

    Ok(())
}

/// Absent coordinates render as `-`
fn coordinate(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
