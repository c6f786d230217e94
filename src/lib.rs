//! simplegraph: a minimal in-memory graph with lazy traversals.
//!
//! Vertices and edges live in arenas owned by a [`Graph`] and are named by
//! copyable identity handles. Edges are directed or undirected and carry an
//! integer weight. Traversals come in two frontier disciplines, stack
//! ([`Graph::dfs`]) and queue ([`Graph::bfs`]), and do not deduplicate: a
//! cycle reachable from the origin yields an infinite sequence unless the walk
//! is bounded or made [`distinct`](graph::Traversal::distinct).

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    Distinct, EdgeSpec, Frontier, Graph, GraphBuilder, QueueTraversal, StackTraversal, Traversal,
    VertexLabels, VertexMut, VertexRef,
};
pub use types::{
    DirectedEdge, Edge, EdgeId, EdgeKind, GraphConfig, GraphError, GraphResult, Traverse,
    UndirectedEdge, UndirectedWeight, Vertex, VertexId, DEFAULT_WEIGHT,
};
