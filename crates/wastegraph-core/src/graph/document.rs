//! Raw graph documents as produced by the map editor
//!
//! Every field is optional so that validation can report what is missing
//! instead of failing at deserialization.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WasteGraphError};
use crate::graph::types::{Edge, Graph, Node};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<i64>,
    #[serde(
        default,
        rename = "originalWeight",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_weight: Option<i64>,
}

/// `{"nodes": [...], "edges": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

impl GraphDocument {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a document from a file, or from stdin when the path is `-`
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.as_os_str() == "-" {
            return Self::from_reader(std::io::stdin().lock());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            WasteGraphError::Other(format!(
                "failed to read graph from {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Convert into strict node and edge lists
    ///
    /// Fails with `MalformedGraph` listing every missing identifier, endpoint
    /// or weight. Coordinates are optional here; unknown edge endpoints,
    /// duplicate ids and missing coordinates are left to `validate`.
    pub fn into_graph(self) -> Result<Graph> {
        let mut problems = Vec::new();

        let mut nodes = Vec::with_capacity(self.nodes.len());
        for (i, raw) in self.nodes.into_iter().enumerate() {
            match raw.id {
                Some(id) if !id.is_empty() => nodes.push(Node {
                    id,
                    x: raw.x,
                    y: raw.y,
                }),
                _ => problems.push(format!("node {} has no identifier", i)),
            }
        }

        let mut edges = Vec::with_capacity(self.edges.len());
        for (i, raw) in self.edges.into_iter().enumerate() {
            match (raw.u, raw.v, raw.w) {
                (Some(u), Some(v), Some(w)) => edges.push(Edge {
                    u,
                    v,
                    w,
                    constraint: raw.constraint,
                    original_weight: raw.original_weight,
                }),
                (Some(_), Some(_), None) => problems.push(format!("edge {} has no weight", i)),
                _ => problems.push(format!("edge {} has no endpoints", i)),
            }
        }

        if !problems.is_empty() {
            return Err(WasteGraphError::MalformedGraph { problems });
        }

        Ok(Graph { nodes, edges })
    }
}

impl From<&Graph> for GraphDocument {
    fn from(graph: &Graph) -> Self {
        GraphDocument {
            nodes: graph
                .nodes
                .iter()
                .map(|n| RawNode {
                    id: Some(n.id.clone()),
                    x: n.x,
                    y: n.y,
                })
                .collect(),
            edges: graph
                .edges
                .iter()
                .map(|e| RawEdge {
                    u: Some(e.u.clone()),
                    v: Some(e.v.clone()),
                    w: Some(e.w),
                    constraint: e.constraint,
                    original_weight: e.original_weight,
                })
                .collect(),
        }
    }
}
