//! `wastegraph delete` - remove a saved graph

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use wastegraph_core::error::Result;

pub fn execute(ctx: &CommandContext, id: i64) -> Result<()> {
    ctx.open_existing_database()?.delete_graph(id)?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({ "status": "ok", "id": id }))?,
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Deleted graph {}", id);
            }
        }
        OutputFormat::Records => print_records_header("delete", &[("id", id.to_string())]),
    }

    Ok(())
}
