//! `wastegraph paths` - alternative routes, cheapest first

use std::time::Instant;

use serde_json::json;

use crate::cli::args::PathsArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{arrow_path, print_json, print_records_header};
use wastegraph_core::error::Result;
use wastegraph_core::graph::{all_paths, Route};
use wastegraph_core::records::join_path;
use wastegraph_core::trace_time;

pub fn execute(ctx: &CommandContext, args: &PathsArgs) -> Result<()> {
    let graph = ctx.load_graph()?;
    let max_paths = args.max_paths.unwrap_or(ctx.config.paths.max_paths);

    let start = Instant::now();
    let routes = all_paths(&graph.nodes, &graph.edges, &args.src, &args.dst, max_paths);
    trace_time!(start, "all_paths", found = routes.len());

    let (src, dst) = (args.src.to_uppercase(), args.dst.to_uppercase());
    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({ "paths": routes }))?,
        OutputFormat::Human => print_human(&routes, &src, &dst),
        OutputFormat::Records => {
            print_records_header(
                "paths",
                &[
                    ("src", src),
                    ("dst", dst),
                    ("max", max_paths.to_string()),
                    ("count", routes.len().to_string()),
                ],
            );
            print_records_lines(&routes);
        }
    }

    Ok(())
}

pub(crate) fn print_human(routes: &[Route], src: &str, dst: &str) {
    if routes.is_empty() {
        println!("no paths found from {} to {}", src, dst);
        return;
    }
    for (i, route) in routes.iter().enumerate() {
        println!("{:>2}. {} (cost {})", i + 1, arrow_path(&route.path), route.cost);
    }
}

pub(crate) fn print_records_lines(routes: &[Route]) {
    for route in routes {
        println!("P {} cost={}", join_path(&route.path), route.cost);
    }
}
