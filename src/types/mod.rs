//! All data types for the graphpath library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::{Endpoints, Link, PathStep};
pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Length of a generated node name.
pub const NODE_NAME_LEN: usize = 5;

/// Alphabet generated node names are drawn from (base 36).
pub const NODE_NAME_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
