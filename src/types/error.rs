//! Error types for the graphpath library.

use thiserror::Error;

/// All errors that can occur in the graphpath library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The source node is not an endpoint of any edge.
    #[error("Unknown source node: {0}")]
    UnknownSource(String),

    /// The target node is not an endpoint of any edge.
    #[error("Unknown target node: {0}")]
    UnknownTarget(String),

    /// Generator bounds are inverted.
    #[error("Invalid range: min {min} > max {max}")]
    InvalidRange { min: usize, max: usize },

    /// An edge record in an input file has no usable endpoints.
    #[error("Malformed edge record at index {0}")]
    MalformedEdge(usize),

    /// JSON parse or encode error.
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// True for the unknown source / unknown target pair.
    pub fn is_unknown_node(&self) -> bool {
        matches!(self, Self::UnknownSource(_) | Self::UnknownTarget(_))
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Convenience result type for graphpath operations.
pub type GraphResult<T> = Result<T, GraphError>;
