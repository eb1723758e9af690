//! Error types for vizgraph-core.

use thiserror::Error;

/// Graph container error types.
///
/// Every variant is a non-fatal rejection: the corresponding operation is a
/// no-op and the graph is left unchanged. The `Option`-returning API on
/// [`Graph`](crate::Graph) swallows these after logging; the `try_*` API
/// surfaces them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node with this id already exists in the graph.
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(String),

    /// An edge endpoint did not resolve to a node in the graph.
    #[error("unresolved endpoint: {0}")]
    UnresolvedEndpoint(String),

    /// An edge already exists between these two nodes.
    #[error("duplicate edge: {0} -> {1}")]
    DuplicateEdge(String, String),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
