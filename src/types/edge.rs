//! Edge variants and the traversal capability they share.

use serde::Serialize;

use super::{EdgeId, GraphError, GraphResult, VertexId};

/// Whether a connection can be walked from one endpoint or from both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Walkable only from source to target.
    Directed,
    /// Walkable from either endpoint.
    Undirected,
}

impl EdgeKind {
    /// Map the classic `directed` flag onto a kind.
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Capability shared by every edge variant.
pub trait Traverse {
    /// Identity of this edge.
    fn id(&self) -> EdgeId;

    /// Both endpoints, in the order they were connected.
    fn endpoints(&self) -> (VertexId, VertexId);

    /// Weight fixed at construction.
    fn weight(&self) -> i64;

    /// Variant of this edge.
    fn kind(&self) -> EdgeKind;

    /// Vertex reached by walking this edge away from `origin`.
    fn traverse_from(&self, origin: VertexId) -> GraphResult<VertexId>;

    /// True if `vertex` is one of the endpoints.
    fn touches(&self, vertex: VertexId) -> bool {
        let (a, b) = self.endpoints();
        a == vertex || b == vertex
    }
}

/// An edge with one fixed walking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectedEdge {
    id: EdgeId,
    source: VertexId,
    target: VertexId,
    weight: i64,
}

impl DirectedEdge {
    pub(crate) fn new(id: EdgeId, source: VertexId, target: VertexId, weight: i64) -> Self {
        Self {
            id,
            source,
            target,
            weight,
        }
    }

    /// Vertex the edge leaves from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Vertex the edge points at.
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Walk the edge. Always lands on the target.
    pub fn traverse(&self) -> VertexId {
        self.target
    }
}

impl Traverse for DirectedEdge {
    fn id(&self) -> EdgeId {
        self.id
    }

    fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.target)
    }

    fn weight(&self) -> i64 {
        self.weight
    }

    fn kind(&self) -> EdgeKind {
        EdgeKind::Directed
    }

    fn traverse_from(&self, _origin: VertexId) -> GraphResult<VertexId> {
        Ok(self.traverse())
    }
}

/// An edge walkable from either endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndirectedEdge {
    id: EdgeId,
    first: VertexId,
    second: VertexId,
    weight: i64,
}

impl UndirectedEdge {
    pub(crate) fn new(id: EdgeId, first: VertexId, second: VertexId, weight: i64) -> Self {
        Self {
            id,
            first,
            second,
            weight,
        }
    }

    /// Walk the edge away from `origin`.
    ///
    /// For a self-loop both endpoints are `origin`, so the walk returns it.
    pub fn traverse(&self, origin: VertexId) -> GraphResult<VertexId> {
        if origin == self.first {
            Ok(self.second)
        } else if origin == self.second {
            Ok(self.first)
        } else {
            Err(GraphError::ForeignOrigin {
                edge: self.id,
                origin,
            })
        }
    }
}

impl Traverse for UndirectedEdge {
    fn id(&self) -> EdgeId {
        self.id
    }

    fn endpoints(&self) -> (VertexId, VertexId) {
        (self.first, self.second)
    }

    fn weight(&self) -> i64 {
        self.weight
    }

    fn kind(&self) -> EdgeKind {
        EdgeKind::Undirected
    }

    fn traverse_from(&self, origin: VertexId) -> GraphResult<VertexId> {
        self.traverse(origin)
    }
}

/// An edge stored in a graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Directed(DirectedEdge),
    Undirected(UndirectedEdge),
}

impl Edge {
    /// The directed variant, if this is one.
    pub fn as_directed(&self) -> Option<&DirectedEdge> {
        match self {
            Self::Directed(edge) => Some(edge),
            Self::Undirected(_) => None,
        }
    }

    /// The undirected variant, if this is one.
    pub fn as_undirected(&self) -> Option<&UndirectedEdge> {
        match self {
            Self::Undirected(edge) => Some(edge),
            Self::Directed(_) => None,
        }
    }

    fn inner(&self) -> &dyn Traverse {
        match self {
            Self::Directed(edge) => edge,
            Self::Undirected(edge) => edge,
        }
    }
}

impl Traverse for Edge {
    fn id(&self) -> EdgeId {
        self.inner().id()
    }

    fn endpoints(&self) -> (VertexId, VertexId) {
        self.inner().endpoints()
    }

    fn weight(&self) -> i64 {
        self.inner().weight()
    }

    fn kind(&self) -> EdgeKind {
        self.inner().kind()
    }

    fn traverse_from(&self, origin: VertexId) -> GraphResult<VertexId> {
        self.inner().traverse_from(origin)
    }
}
