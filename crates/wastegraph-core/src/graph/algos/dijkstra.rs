use crate::error::{Result, WasteGraphError};
use crate::graph::adjacency::Adjacency;
use crate::graph::types::{Edge, Node, Route, RouteOutcome, WeightOverrides};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance,
/// then by input position so ties settle deterministically)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub distance: i64,
    pub node: usize,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Settled distances and predecessors from one source
struct ShortestPathTree {
    source: usize,
    /// `None` means unreachable
    distance: Vec<Option<i64>>,
    predecessor: Vec<Option<usize>>,
}

impl ShortestPathTree {
    fn compute(adjacency: &Adjacency<'_>, source: usize, overrides: &WeightOverrides) -> Self {
        let n = adjacency.len();
        let mut distance: Vec<Option<i64>> = vec![None; n];
        let mut predecessor: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut heap = BinaryHeap::new();

        distance[source] = Some(0);
        heap.push(Reverse(HeapEntry {
            distance: 0,
            node: source,
        }));

        // Unreached nodes never enter the heap, so an empty heap is the
        // "minimum remaining distance is infinite" stop condition.
        while let Some(Reverse(HeapEntry {
            distance: current_distance,
            node: current,
        })) = heap.pop()
        {
            if visited[current] {
                continue;
            }
            visited[current] = true;

            let current_id = adjacency.id(current);
            for &(neighbor, weight) in adjacency.neighbors(current) {
                if visited[neighbor] {
                    continue;
                }

                let weight = overrides
                    .get(current_id, adjacency.id(neighbor))
                    .unwrap_or(weight);
                let candidate = current_distance.saturating_add(weight);

                if distance[neighbor].is_none_or(|known| candidate < known) {
                    distance[neighbor] = Some(candidate);
                    predecessor[neighbor] = Some(current);
                    heap.push(Reverse(HeapEntry {
                        distance: candidate,
                        node: neighbor,
                    }));
                }
            }
        }

        Self {
            source,
            distance,
            predecessor,
        }
    }

    /// Walk predecessors back from `target`
    fn route_to(&self, adjacency: &Adjacency<'_>, target: usize) -> RouteOutcome {
        let Some(cost) = self.distance[target] else {
            return RouteOutcome::NoPath;
        };

        let mut path = vec![adjacency.id(target).to_string()];
        let mut current = target;
        while let Some(prev) = self.predecessor[current] {
            path.push(adjacency.id(prev).to_string());
            current = prev;
            if path.len() > adjacency.len() {
                break;
            }
        }
        path.reverse();

        if current != self.source {
            return RouteOutcome::NoPath;
        }

        RouteOutcome::Found(Route { path, cost })
    }
}

fn resolve_endpoint(adjacency: &Adjacency<'_>, id: &str) -> Result<usize> {
    adjacency
        .index_of(id)
        .ok_or_else(|| WasteGraphError::node_not_found(id))
}

/// Cheapest route from `src` to `dst`
///
/// Identifiers are upper-cased before lookup; an absent endpoint fails with
/// `NodeNotFound` before any search runs. `overrides` replaces the weight of
/// an edge in one direction only. Non-positive weights are accepted but the
/// result is then not guaranteed to be optimal.
#[tracing::instrument(skip(nodes, edges, overrides), fields(nodes = nodes.len(), edges = edges.len(), overrides = overrides.len()))]
pub fn shortest_path(
    nodes: &[Node],
    edges: &[Edge],
    src: &str,
    dst: &str,
    overrides: &WeightOverrides,
) -> Result<RouteOutcome> {
    let src = src.to_uppercase();
    let dst = dst.to_uppercase();

    let adjacency = Adjacency::build(nodes, edges);
    let source = resolve_endpoint(&adjacency, &src)?;
    let target = resolve_endpoint(&adjacency, &dst)?;

    let tree = ShortestPathTree::compute(&adjacency, source, overrides);
    let outcome = tree.route_to(&adjacency, target);

    match &outcome {
        RouteOutcome::Found(route) => {
            tracing::debug!(cost = route.cost, hops = route.hops(), "route found")
        }
        RouteOutcome::NoPath => tracing::debug!("destination unreachable"),
    }

    Ok(outcome)
}

/// Distance from `src` to every node, in input order (`None` = unreachable)
#[tracing::instrument(skip(nodes, edges, overrides), fields(nodes = nodes.len(), edges = edges.len()))]
pub fn shortest_distances(
    nodes: &[Node],
    edges: &[Edge],
    src: &str,
    overrides: &WeightOverrides,
) -> Result<Vec<(String, Option<i64>)>> {
    let src = src.to_uppercase();

    let adjacency = Adjacency::build(nodes, edges);
    let source = resolve_endpoint(&adjacency, &src)?;
    let tree = ShortestPathTree::compute(&adjacency, source, overrides);

    Ok((0..adjacency.len())
        .map(|i| (adjacency.id(i).to_string(), tree.distance[i]))
        .collect())
}
