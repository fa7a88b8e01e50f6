//! `wastegraph reset` - drop and recreate every table

use serde_json::json;

use crate::cli::args::ResetArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use wastegraph_core::bail_usage;
use wastegraph_core::error::Result;

pub fn execute(ctx: &CommandContext, args: &ResetArgs) -> Result<()> {
    if !args.yes {
        bail_usage!("reset deletes every saved graph; pass --yes to confirm");
    }

    let db = ctx.open_existing_database()?;
    db.reset()?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "status": "ok",
            "message": "database reset",
        }))?,
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Database reset, all saved graphs removed");
            }
        }
        OutputFormat::Records => print_records_header("reset", &[]),
    }

    Ok(())
}
