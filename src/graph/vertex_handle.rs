//! Borrowed views of a single vertex.

use crate::types::{EdgeId, EdgeKind, GraphResult, Vertex, VertexId};

use super::traversal::{QueueTraversal, StackTraversal, Traversal};
use super::Graph;

/// Read-only view of a vertex inside its graph.
///
/// Iterating the view directly walks the graph in queue (breadth-first) order.
#[derive(Debug, Clone, Copy)]
pub struct VertexRef<'g> {
    graph: &'g Graph,
    vertex: &'g Vertex,
}

impl<'g> VertexRef<'g> {
    pub(crate) fn new(graph: &'g Graph, vertex: &'g Vertex) -> Self {
        Self { graph, vertex }
    }

    /// Identity of the vertex.
    pub fn id(&self) -> VertexId {
        self.vertex.id()
    }

    /// All incident edges.
    pub fn edges(&self) -> &'g [EdgeId] {
        self.vertex.edges()
    }

    /// Edges walkable from this vertex.
    pub fn outgoing(&self) -> &'g [EdgeId] {
        self.vertex.outgoing()
    }

    /// Edges that lead into this vertex.
    pub fn incoming(&self) -> &'g [EdgeId] {
        self.vertex.incoming()
    }

    /// Vertices one outgoing edge away, in edge insertion order.
    pub fn outgoing_neighbors(&self) -> Vec<VertexId> {
        self.graph.successors(self.id()).collect()
    }

    /// Stack-discipline traversal rooted here.
    pub fn dfs(&self) -> StackTraversal<'g> {
        Traversal::new(self.graph, self.id())
    }

    /// Queue-discipline traversal rooted here.
    pub fn bfs(&self) -> QueueTraversal<'g> {
        Traversal::new(self.graph, self.id())
    }
}

impl<'g> IntoIterator for VertexRef<'g> {
    type Item = VertexId;
    type IntoIter = QueueTraversal<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.bfs()
    }
}

/// Mutable view of a vertex, used to connect it to other vertices.
#[derive(Debug)]
pub struct VertexMut<'g> {
    graph: &'g mut Graph,
    id: VertexId,
}

impl<'g> VertexMut<'g> {
    pub(crate) fn new(graph: &'g mut Graph, id: VertexId) -> Self {
        Self { graph, id }
    }

    /// Identity of the vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Create a new edge from this vertex to `other`.
    ///
    /// A directed edge is walkable only from this vertex. An undirected edge
    /// is walkable from both ends. Repeated calls create parallel edges.
    pub fn connect(&mut self, other: VertexId, kind: EdgeKind, weight: i64) -> GraphResult<EdgeId> {
        self.graph.link(self.id, other, kind, weight)
    }
}
