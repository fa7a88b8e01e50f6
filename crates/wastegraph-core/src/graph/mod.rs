//! Collection-point graphs and the algorithms that run over them
//!
//! Every algorithm takes borrowed node and edge slices and rebuilds its
//! own adjacency per call; nothing is cached between calls.

pub mod adjacency;
pub mod algos;
pub mod document;
pub mod sample;
pub mod types;

pub use algos::{
    all_paths, color_graph, shortest_distances, shortest_path, validate, ValidationReport,
};
pub use document::{GraphDocument, RawEdge, RawNode};
pub use sample::sample_graph;
pub use types::{Day, Edge, Graph, Node, Route, RouteOutcome, Schedule, WeightOverrides};
