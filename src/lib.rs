//! graphpath — shortest paths and random demo graphs for graph visualizations.
//!
//! Builds an undirected graph from an edge list and finds one shortest
//! (fewest-edges) path between two of its nodes. Also ships seeded
//! generators for random node and link sets.

pub mod cli;
pub mod generate;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use generate::{generate_graph, make_random_links, make_random_nodes, GeneratorConfig};
pub use graph::{find_path, GraphBuilder, Neighbors, UndirectedGraph};
pub use types::{Endpoints, GraphError, GraphResult, Link, Node, PathStep};
