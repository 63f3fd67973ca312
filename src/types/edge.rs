//! Edge records and the endpoint trait the path finder reads them through.

use serde::{Deserialize, Serialize};

/// Anything carrying a `source` and a `target` node identifier.
///
/// The path finder only ever looks at the two endpoints, so any other
/// fields on the implementing type are ignored. Direction is ignored too:
/// every edge is inserted into the graph both ways.
pub trait Endpoints {
    /// Node identifier type.
    type Node;

    /// One endpoint.
    fn source(&self) -> &Self::Node;

    /// The other endpoint.
    fn target(&self) -> &Self::Node;
}

/// One step of a returned path, from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep<N> {
    /// Node the step leaves from.
    pub source: N,
    /// Node the step arrives at.
    pub target: N,
}

impl<N> PathStep<N> {
    /// Create a new path step.
    pub fn new(source: N, target: N) -> Self {
        Self { source, target }
    }
}

impl<N> Endpoints for PathStep<N> {
    type Node = N;

    fn source(&self) -> &N {
        &self.source
    }

    fn target(&self) -> &N {
        &self.target
    }
}

impl<N: std::fmt::Display> std::fmt::Display for PathStep<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl<N> Endpoints for (N, N) {
    type Node = N;

    fn source(&self) -> &N {
        &self.0
    }

    fn target(&self) -> &N {
        &self.1
    }
}

/// A generated link between two generated nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Sequential link ID, starting at 1.
    pub id: u64,
    /// Source node ID.
    pub source: u64,
    /// Target node ID.
    pub target: u64,
}

impl Link {
    /// Create a new link.
    pub fn new(id: u64, source: u64, target: u64) -> Self {
        Self { id, source, target }
    }
}

impl Endpoints for Link {
    type Node = u64;

    fn source(&self) -> &u64 {
        &self.source
    }

    fn target(&self) -> &u64 {
        &self.target
    }
}
