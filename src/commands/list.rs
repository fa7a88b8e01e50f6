//! `wastegraph list` - list saved graphs

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use wastegraph_core::error::Result;
use wastegraph_core::records::escape_quotes;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graphs = ctx.open_existing_database()?.list_graphs()?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&graphs)?,
        OutputFormat::Human => {
            if graphs.is_empty() {
                if !ctx.cli.quiet {
                    println!("No saved graphs");
                }
            } else {
                for graph in &graphs {
                    println!(
                        "{:>4}  {}  ({} nodes, {} edges, saved {})",
                        graph.id,
                        graph.name,
                        graph.node_count,
                        graph.edge_count,
                        graph.created_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
        OutputFormat::Records => {
            print_records_header("list", &[("graphs", graphs.len().to_string())]);
            for graph in &graphs {
                println!(
                    "G {} nodes={} edges={} created={} \"{}\"",
                    graph.id,
                    graph.node_count,
                    graph.edge_count,
                    graph.created_at.to_rfc3339(),
                    escape_quotes(&graph.name)
                );
            }
        }
    }

    Ok(())
}
