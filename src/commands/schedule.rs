//! `wastegraph schedule` - assign a collection day to every point

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use wastegraph_core::error::Result;
use wastegraph_core::graph::{color_graph, Schedule};

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let schedule = color_graph(&graph.nodes, &graph.edges);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({ "coloring": schedule }))?,
        OutputFormat::Human => print_human(&schedule),
        OutputFormat::Records => {
            print_records_header("schedule", &[("nodes", schedule.len().to_string())]);
            print_records_lines(&schedule);
        }
    }

    Ok(())
}

pub(crate) fn print_human(schedule: &Schedule) {
    for (day, ids) in schedule.by_day() {
        println!("{}: {}", day, ids.join(", "));
    }
}

pub(crate) fn print_records_lines(schedule: &Schedule) {
    for (id, day) in schedule.iter() {
        println!("N {} day={}", id, day);
    }
}
