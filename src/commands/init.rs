//! `wastegraph init` - create the database

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use wastegraph_core::error::Result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let db = ctx.open_database()?;
    let version = db.schema_version()?;
    let path = db.path().display().to_string();

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "status": "ok",
            "path": path,
            "schema_version": version,
        }))?,
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Initialized database at {}", path);
            }
        }
        OutputFormat::Records => print_records_header(
            "init",
            &[("path", path), ("schema", version.to_string())],
        ),
    }

    Ok(())
}
