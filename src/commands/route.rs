//! `wastegraph route` - shortest route between two points

use std::time::Instant;

use crate::cli::args::RouteArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{arrow_path, print_json, print_records_header};
use wastegraph_core::error::Result;
use wastegraph_core::graph::{shortest_path, RouteOutcome, WeightOverrides};
use wastegraph_core::records::join_path;
use wastegraph_core::trace_time;

pub fn execute(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let graph = ctx.load_graph()?;
    let overrides: WeightOverrides = args.overrides.iter().cloned().collect();

    let start = Instant::now();
    let outcome = shortest_path(&graph.nodes, &graph.edges, &args.src, &args.dst, &overrides)?;
    trace_time!(start, "shortest_path");

    let (src, dst) = (args.src.to_uppercase(), args.dst.to_uppercase());
    match ctx.cli.format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Human => print_human(&outcome, &src, &dst),
        OutputFormat::Records => {
            let mut fields = vec![
                ("src", src.clone()),
                ("dst", dst.clone()),
                ("found", outcome.is_found().to_string()),
            ];
            if let Some(cost) = outcome.cost() {
                fields.push(("cost", cost.to_string()));
            }
            print_records_header("route", &fields);
            print_records_lines(&outcome);
        }
    }

    Ok(())
}

pub(crate) fn print_human(outcome: &RouteOutcome, src: &str, dst: &str) {
    match outcome {
        RouteOutcome::Found(route) => {
            println!("{}", arrow_path(&route.path));
            println!("cost: {}", route.cost);
        }
        RouteOutcome::NoPath => println!("no path found from {} to {}", src, dst),
    }
}

pub(crate) fn print_records_lines(outcome: &RouteOutcome) {
    if let RouteOutcome::Found(route) = outcome {
        println!("R {} cost={}", join_path(&route.path), route.cost);
    }
}
