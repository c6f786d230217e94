//! Per-vertex edge bookkeeping.

use super::{EdgeId, VertexId};

/// A vertex and the edges incident to it.
///
/// No edge appears twice in one list, and lists keep insertion order, so
/// traversals are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    /// Every incident edge.
    edges: Vec<EdgeId>,
    /// Edges this vertex can walk along.
    outgoing: Vec<EdgeId>,
    /// Edges along which this vertex can be reached.
    incoming: Vec<EdgeId>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId) -> Self {
        Self {
            id,
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Identity of this vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// All incident edges.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Edges walkable from this vertex.
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Edges that lead into this vertex.
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    /// True if the vertex has no incident edges.
    pub fn is_isolated(&self) -> bool {
        self.edges.is_empty()
    }

    /// Record a new incident edge. Each edge id is attached at most once per
    /// vertex; a self-loop passes both roles in a single call.
    pub(crate) fn attach(&mut self, edge: EdgeId, outgoing: bool, incoming: bool) {
        self.edges.push(edge);
        if outgoing {
            self.outgoing.push(edge);
        }
        if incoming {
            self.incoming.push(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: usize) -> VertexId {
        VertexId::new(0, index)
    }

    fn e(index: usize) -> EdgeId {
        EdgeId::new(0, index)
    }

    #[test]
    fn new_vertex_is_empty() {
        let vertex = Vertex::new(v(0));
        assert!(vertex.is_isolated());
        assert!(vertex.outgoing().is_empty());
        assert!(vertex.incoming().is_empty());
    }

    #[test]
    fn attach_records_roles() {
        let mut vertex = Vertex::new(v(0));
        vertex.attach(e(1), true, false);
        vertex.attach(e(2), false, true);
        vertex.attach(e(3), true, true);
        assert_eq!(vertex.edges(), &[e(1), e(2), e(3)]);
        assert_eq!(vertex.outgoing(), &[e(1), e(3)]);
        assert_eq!(vertex.incoming(), &[e(2), e(3)]);
    }
}
