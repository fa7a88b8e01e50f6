//! Per-call adjacency lists over strict node/edge slices

use std::collections::HashMap;

use crate::graph::types::{Edge, Node};

/// Undirected weighted adjacency, indexed by first-seen node position
///
/// Built fresh for every algorithm call and never cached. Duplicate node
/// ids collapse onto their first occurrence; edges naming an unknown node
/// are skipped. Parallel edges are all kept.
#[derive(Debug)]
pub struct Adjacency<'a> {
    ids: Vec<&'a str>,
    index: HashMap<&'a str, usize>,
    neighbors: Vec<Vec<(usize, i64)>>,
}

impl<'a> Adjacency<'a> {
    pub fn build(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut ids = Vec::with_capacity(nodes.len());
        let mut index = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if !index.contains_key(node.id.as_str()) {
                index.insert(node.id.as_str(), ids.len());
                ids.push(node.id.as_str());
            }
        }

        let mut neighbors = vec![Vec::new(); ids.len()];
        let mut skipped = 0usize;
        for edge in edges {
            match (index.get(edge.u.as_str()), index.get(edge.v.as_str())) {
                (Some(&u), Some(&v)) => {
                    neighbors[u].push((v, edge.w));
                    neighbors[v].push((u, edge.w));
                }
                _ => {
                    skipped += 1;
                    tracing::debug!(u = %edge.u, v = %edge.v, "skipping edge with unknown endpoint");
                }
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, "edges ignored while building adjacency");
        }

        Self {
            ids,
            index,
            neighbors,
        }
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn id(&self, index: usize) -> &'a str {
        self.ids[index]
    }

    pub fn neighbors(&self, index: usize) -> &[(usize, i64)] {
        &self.neighbors[index]
    }

    /// Number of distinct nodes
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
