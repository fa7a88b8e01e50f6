//! Built-in four-point graph used by `selftest`

use crate::graph::types::{Edge, Graph, Node};

pub fn sample_graph() -> Graph {
    Graph::new(
        vec![
            Node::new("A", 100, 100),
            Node::new("B", 200, 100),
            Node::new("C", 150, 200),
            Node::new("D", 300, 150),
        ],
        vec![
            Edge::new("A", "B", 10),
            Edge::new("A", "C", 15),
            Edge::new("B", "C", 5),
            Edge::new("B", "D", 20),
            Edge::new("C", "D", 10),
        ],
    )
}
