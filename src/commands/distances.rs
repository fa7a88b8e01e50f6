//! `wastegraph distances` - distance from one point to every other

use serde_json::{json, Map, Value};

use crate::cli::args::DistancesArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use wastegraph_core::error::Result;
use wastegraph_core::graph::{shortest_distances, WeightOverrides};

pub fn execute(ctx: &CommandContext, args: &DistancesArgs) -> Result<()> {
    let graph = ctx.load_graph()?;
    let overrides: WeightOverrides = args.overrides.iter().cloned().collect();

    let distances = shortest_distances(&graph.nodes, &graph.edges, &args.src, &overrides)?;
    let src = args.src.to_uppercase();

    match ctx.cli.format {
        OutputFormat::Json => {
            let table: Map<String, Value> = distances
                .iter()
                .map(|(id, cost)| (id.clone(), json!(cost)))
                .collect();
            print_json(&json!({ "source": src, "distances": table }))?
        }
        OutputFormat::Human => {
            let width = distances.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
            for (id, cost) in &distances {
                match cost {
                    Some(cost) => println!("{:<width$}  {}", id, cost),
                    None => println!("{:<width$}  unreachable", id),
                }
            }
        }
        OutputFormat::Records => {
            print_records_header(
                "distances",
                &[("src", src), ("nodes", distances.len().to_string())],
            );
            for (id, cost) in &distances {
                match cost {
                    Some(cost) => println!("N {} cost={}", id, cost),
                    None => println!("N {} cost=-", id),
                }
            }
        }
    }

    Ok(())
}
