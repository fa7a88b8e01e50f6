//! `wastegraph selftest` - run every algorithm on the built-in sample graph

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use crate::commands::{paths, route, schedule, validate};
use wastegraph_core::error::{Result, WasteGraphError};
use wastegraph_core::graph::{
    all_paths, color_graph, sample_graph, shortest_path, validate as validate_graph,
    GraphDocument, WeightOverrides,
};

const SRC: &str = "A";
const DST: &str = "D";
const EXPECTED_COST: i64 = 25;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = sample_graph();
    let document = GraphDocument::from(&graph);

    let outcome = shortest_path(&graph.nodes, &graph.edges, SRC, DST, &WeightOverrides::new())?;
    let coloring = color_graph(&graph.nodes, &graph.edges);
    let validation = validate_graph(&document.nodes, &document.edges);
    let routes = all_paths(
        &graph.nodes,
        &graph.edges,
        SRC,
        DST,
        ctx.config.paths.max_paths,
    );

    let passed = outcome.cost() == Some(EXPECTED_COST) && validation.is_valid;
    let status = if passed { "success" } else { "failure" };

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "status": status,
            "test_data": document,
            "algorithms": {
                "dijkstra": outcome,
                "coloring": coloring,
                "validation": validation,
                "paths": routes,
            },
        }))?,
        OutputFormat::Human => {
            println!("Route {} -> {}", SRC, DST);
            route::print_human(&outcome, SRC, DST);
            println!();
            println!("Schedule");
            schedule::print_human(&coloring);
            println!();
            println!("Validation");
            validate::print_human(&validation, false);
            println!();
            println!("Paths {} -> {}", SRC, DST);
            paths::print_human(&routes, SRC, DST);
        }
        OutputFormat::Records => {
            let mut fields = vec![("passed", passed.to_string())];
            fields.extend(validate::header_fields(&validation));
            print_records_header("selftest", &fields);
            route::print_records_lines(&outcome);
            schedule::print_records_lines(&coloring);
            validate::print_records_lines(&validation);
            paths::print_records_lines(&routes);
        }
    }

    if !passed {
        return Err(WasteGraphError::Other(format!(
            "selftest failed: expected route {} -> {} to cost {}, got {:?}",
            SRC,
            DST,
            EXPECTED_COST,
            outcome.cost()
        )));
    }

    Ok(())
}
