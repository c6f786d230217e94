//! In-memory graph operations: the core data structure and its traversals.

pub mod builder;
pub mod simple_graph;
pub mod traversal;
pub mod vertex_handle;

pub use builder::{EdgeSpec, GraphBuilder, VertexLabels};
pub use simple_graph::Graph;
pub use traversal::{
    Distinct, Frontier, QueueFrontier, QueueTraversal, StackFrontier, StackTraversal, Traversal,
};
pub use vertex_handle::{VertexMut, VertexRef};
