use crate::graph::adjacency::Adjacency;
use crate::graph::types::{Day, Edge, Node, Schedule};
use std::collections::HashSet;

/// Assign a collection day to every node
///
/// Greedy first-fit in input order: each node takes the first day not
/// already used by a colored neighbor. No backtracking, so the result
/// depends on node order. Weekend is the unconditional fallback; a node
/// whose colored neighbors cover all six days still gets Weekend, which
/// can then clash with a neighbor.
#[tracing::instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
pub fn color_graph(nodes: &[Node], edges: &[Edge]) -> Schedule {
    let adjacency = Adjacency::build(nodes, edges);
    let mut assigned: Vec<Option<Day>> = vec![None; adjacency.len()];
    let mut schedule = Schedule::default();

    for node in nodes {
        let Some(index) = adjacency.index_of(&node.id) else {
            continue;
        };

        let used: HashSet<Day> = adjacency
            .neighbors(index)
            .iter()
            .filter_map(|&(neighbor, _)| assigned[neighbor])
            .collect();

        let day = Day::ALL
            .into_iter()
            .find(|day| !used.contains(day))
            .unwrap_or(Day::Weekend);

        if day == Day::Weekend && used.contains(&Day::Weekend) {
            tracing::debug!(node = %node.id, "all days taken by neighbors, falling back to Weekend");
        }

        assigned[index] = Some(day);
        schedule.assign(&node.id, day);
    }

    schedule
}
