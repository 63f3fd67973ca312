//! Generated graph nodes.

use serde::{Deserialize, Serialize};

/// A generated node: a sequential ID plus a random display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Node ID, equal to the node's position in the generated set.
    pub id: u64,
    /// Random base-36 display name.
    pub name: String,
}

impl Node {
    /// Create a new node.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.name)
    }
}
