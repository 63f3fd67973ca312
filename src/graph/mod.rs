//! Undirected graphs built from edge lists, and shortest-path search over them.

pub mod builder;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use traversal::{find_path, shortest_path};
pub use undirected::{Neighbors, UndirectedGraph};
