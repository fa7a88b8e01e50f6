use crate::graph::adjacency::Adjacency;
use crate::graph::types::{Edge, Node, Route};

/// One level of the depth-first walk
struct Frame {
    node: usize,
    /// Position of the next neighbor to try
    next: usize,
    /// Cost accumulated up to and including `node`
    cost: i64,
}

/// Simple paths from `src` to `dst`, cheapest first
///
/// Identifiers are upper-cased before lookup. An absent endpoint yields an
/// empty list rather than an error. Collection stops once `max_paths`
/// routes are held, so when more exist the result is the cheapest of those
/// found first, not necessarily the globally cheapest.
#[tracing::instrument(skip(nodes, edges), fields(nodes = nodes.len(), edges = edges.len()))]
pub fn all_paths(
    nodes: &[Node],
    edges: &[Edge],
    src: &str,
    dst: &str,
    max_paths: usize,
) -> Vec<Route> {
    let src = src.to_uppercase();
    let dst = dst.to_uppercase();

    let adjacency = Adjacency::build(nodes, edges);
    let (Some(source), Some(target)) = (adjacency.index_of(&src), adjacency.index_of(&dst)) else {
        tracing::debug!("endpoint not in graph, no paths");
        return Vec::new();
    };

    if max_paths == 0 {
        return Vec::new();
    }

    if source == target {
        return vec![Route {
            path: vec![src],
            cost: 0,
        }];
    }

    let mut routes = Vec::new();
    let mut on_path = vec![false; adjacency.len()];
    let mut stack = vec![Frame {
        node: source,
        next: 0,
        cost: 0,
    }];
    on_path[source] = true;

    while routes.len() < max_paths {
        let Some(frame) = stack.last_mut() else {
            break;
        };

        let Some(&(neighbor, weight)) = adjacency.neighbors(frame.node).get(frame.next) else {
            on_path[frame.node] = false;
            stack.pop();
            continue;
        };
        frame.next += 1;

        if on_path[neighbor] {
            continue;
        }

        let cost = frame.cost.saturating_add(weight);
        if neighbor == target {
            let path = stack
                .iter()
                .map(|f| adjacency.id(f.node).to_string())
                .chain(std::iter::once(adjacency.id(target).to_string()))
                .collect();
            routes.push(Route { path, cost });
            continue;
        }

        on_path[neighbor] = true;
        stack.push(Frame {
            node: neighbor,
            next: 0,
            cost,
        });
    }

    routes.sort_by_key(|route| route.cost);
    routes.truncate(max_paths);

    tracing::debug!(found = routes.len(), "path enumeration finished");
    routes
}
