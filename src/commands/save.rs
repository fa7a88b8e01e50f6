//! `wastegraph save` - persist the loaded graph

use serde_json::json;

use crate::cli::args::SaveArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use wastegraph_core::error::Result;
use wastegraph_core::records::escape_quotes;

pub fn execute(ctx: &CommandContext, args: &SaveArgs) -> Result<()> {
    let graph = ctx.load_graph()?;
    let db = ctx.open_database()?;
    let id = db.save_graph(&args.name, &graph.nodes, &graph.edges)?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "id": id,
            "name": args.name,
            "message": "Graph saved successfully",
        }))?,
        OutputFormat::Human => {
            if ctx.cli.quiet {
                println!("{}", id);
            } else {
                println!(
                    "Saved graph {} as \"{}\" ({} nodes, {} edges)",
                    id,
                    args.name,
                    graph.nodes.len(),
                    graph.edges.len()
                );
            }
        }
        OutputFormat::Records => {
            print_records_header("save", &[("id", id.to_string())]);
            println!(
                "G {} nodes={} edges={} \"{}\"",
                id,
                graph.nodes.len(),
                graph.edges.len(),
                escape_quotes(&args.name)
            );
        }
    }

    Ok(())
}
