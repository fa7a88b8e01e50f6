//! Graph algorithm implementations
//!
//! - `dijkstra`: shortest route with directional weight overrides
//! - `coloring`: greedy collection-day assignment
//! - `validation`: structural checks on raw documents
//! - `paths`: bounded enumeration of simple paths

pub mod coloring;
pub mod dijkstra;
pub mod paths;
pub mod validation;

pub use coloring::color_graph;
pub use dijkstra::{shortest_distances, shortest_path};
pub use paths::all_paths;
pub use validation::{validate, GraphStats, Issue, IssueKind, Severity, ValidationReport};
