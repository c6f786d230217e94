//! Error types for the simplegraph library.

use thiserror::Error;

use super::{EdgeId, VertexId};

/// All errors that can occur in the simplegraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex handle does not belong to this graph's arena.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// Edge handle does not belong to this graph's arena.
    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    /// An undirected edge was traversed from a vertex that is not one of its endpoints.
    #[error("Vertex {origin} is not an endpoint of edge {edge}")]
    ForeignOrigin { edge: EdgeId, origin: VertexId },

    /// Operation is declared but has no implementation.
    #[error("Operation not implemented: {0}")]
    NotImplemented(&'static str),

    /// Malformed edge specification (builder / CLI input).
    #[error("Invalid edge spec: {0}")]
    InvalidEdgeSpec(String),

    /// A vertex label that was never declared in a builder.
    #[error("Unknown vertex label: {0}")]
    UnknownLabel(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
