//! All data types for the simplegraph library.

pub mod config;
pub mod edge;
pub mod error;
pub mod vertex;

use serde::{Serialize, Serializer};

pub use config::{GraphConfig, UndirectedWeight};
pub use edge::{DirectedEdge, Edge, EdgeKind, Traverse, UndirectedEdge};
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// Weight assigned when a connection does not specify one.
pub const DEFAULT_WEIGHT: i64 = 0;

/// Identity handle of a vertex inside a graph's arena.
///
/// Two handles are equal only if they name the same vertex of the same graph;
/// vertices with identical edge sets are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub(crate) graph: usize,
    pub(crate) index: usize,
}

impl VertexId {
    pub(crate) fn new(graph: usize, index: usize) -> Self {
        Self { graph, index }
    }

    /// Arena slot of this vertex.
    pub fn index(self) -> usize {
        self.index
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.index)
    }
}

impl Serialize for VertexId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.index as u64)
    }
}

/// Identity handle of an edge inside a graph's arena.
///
/// Every `connect` call mints a fresh id, so parallel edges stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    pub(crate) graph: usize,
    pub(crate) index: usize,
}

impl EdgeId {
    pub(crate) fn new(graph: usize, index: usize) -> Self {
        Self { graph, index }
    }

    /// Arena slot of this edge.
    pub fn index(self) -> usize {
        self.index
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.index)
    }
}

impl Serialize for EdgeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.index as u64)
    }
}
