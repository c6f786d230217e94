//! Core graph structure: vertex and edge arenas plus a membership set.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use crate::types::{
    DirectedEdge, Edge, EdgeId, EdgeKind, GraphConfig, GraphError, GraphResult, Traverse,
    UndirectedEdge, UndirectedWeight, Vertex, VertexId,
};

use super::traversal::{QueueTraversal, StackTraversal, Traversal};
use super::vertex_handle::{VertexMut, VertexRef};

/// Source of the per-graph tag carried by every handle.
static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(0);

/// An in-memory graph.
///
/// Every vertex and edge lives in an arena owned by the graph and is named by
/// a copyable handle. Registration through [`Graph::add_vertex`] is tracked
/// separately: connecting and traversing work on any vertex created by this
/// graph, registered or not. Handles minted by another graph are rejected.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Tag stamped into every handle this graph creates.
    id: usize,
    config: GraphConfig,
    /// Every vertex ever created, indexed by `VertexId`.
    arena: Vec<Vertex>,
    /// Every edge ever created, indexed by `EdgeId`.
    edges: Vec<Edge>,
    /// Vertices registered with `add_vertex`.
    vertices: HashSet<VertexId>,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            config: GraphConfig::default(),
            arena: Vec::new(),
            edges: Vec::new(),
            vertices: HashSet::new(),
        }
    }
}

impl Graph {
    /// Create a new empty graph with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with a specific config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Config this graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Create a fresh vertex with no edges. It is not registered.
    pub fn create_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.id, self.arena.len());
        self.arena.push(Vertex::new(id));
        id
    }

    /// Register a vertex. Returns `false` if it was already registered.
    pub fn add_vertex(&mut self, vertex: VertexId) -> GraphResult<bool> {
        self.slot(vertex)?;
        let inserted = self.vertices.insert(vertex);
        if inserted {
            debug!("registered {}", vertex);
        }
        Ok(inserted)
    }

    /// Registered vertices.
    pub fn vertices(&self) -> &HashSet<VertexId> {
        &self.vertices
    }

    /// True if `vertex` was registered with [`Graph::add_vertex`].
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of vertices created, registered or not.
    pub fn arena_size(&self) -> usize {
        self.arena.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Read-only view of a vertex.
    pub fn vertex(&self, vertex: VertexId) -> GraphResult<VertexRef<'_>> {
        let slot = self.slot(vertex)?;
        Ok(VertexRef::new(self, slot))
    }

    /// Mutable view of a vertex, used to connect it to others.
    pub fn vertex_mut(&mut self, vertex: VertexId) -> GraphResult<VertexMut<'_>> {
        self.slot(vertex)?;
        Ok(VertexMut::new(self, vertex))
    }

    /// Get an edge by ID.
    pub fn edge(&self, edge: EdgeId) -> GraphResult<&Edge> {
        if edge.graph != self.id {
            return Err(GraphError::EdgeNotFound(edge));
        }
        self.edges
            .get(edge.index)
            .ok_or(GraphError::EdgeNotFound(edge))
    }

    /// Connect `from` to `to`. Neither vertex has to be registered.
    pub fn connect(
        &mut self,
        from: VertexId,
        to: VertexId,
        kind: EdgeKind,
        weight: i64,
    ) -> GraphResult<EdgeId> {
        self.vertex_mut(from)?.connect(to, kind, weight)
    }

    /// Vertices one outgoing edge away from `vertex`, in edge insertion order.
    pub fn outgoing_neighbors(&self, vertex: VertexId) -> GraphResult<Vec<VertexId>> {
        self.slot(vertex)?;
        Ok(self.successors(vertex).collect())
    }

    /// Stack-discipline (depth-first-like) traversal from `origin`.
    ///
    /// Never terminates if a cycle is reachable from `origin`.
    pub fn dfs(&self, origin: VertexId) -> GraphResult<StackTraversal<'_>> {
        self.slot(origin)?;
        Ok(Traversal::new(self, origin))
    }

    /// Queue-discipline (breadth-first) traversal from `origin`.
    ///
    /// Never terminates if a cycle is reachable from `origin`.
    pub fn bfs(&self, origin: VertexId) -> GraphResult<QueueTraversal<'_>> {
        self.slot(origin)?;
        Ok(Traversal::new(self, origin))
    }

    /// Enumerate the graph's edges.
    ///
    /// Not implemented: always returns [`GraphError::NotImplemented`].
    pub fn edge_set(&self) -> GraphResult<HashSet<EdgeId>> {
        Err(GraphError::NotImplemented("edge_set"))
    }

    pub(crate) fn slot(&self, vertex: VertexId) -> GraphResult<&Vertex> {
        if vertex.graph != self.id {
            return Err(GraphError::VertexNotFound(vertex));
        }
        self.arena
            .get(vertex.index)
            .ok_or(GraphError::VertexNotFound(vertex))
    }

    /// Create an edge and record it on both endpoints.
    pub(crate) fn link(
        &mut self,
        from: VertexId,
        to: VertexId,
        kind: EdgeKind,
        weight: i64,
    ) -> GraphResult<EdgeId> {
        self.slot(from)?;
        self.slot(to)?;

        let id = EdgeId::new(self.id, self.edges.len());
        let edge = match kind {
            EdgeKind::Directed => Edge::Directed(DirectedEdge::new(id, from, to, weight)),
            EdgeKind::Undirected => {
                let weight = match self.config.undirected_weight {
                    UndirectedWeight::Keep => weight,
                    UndirectedWeight::Discard => 0,
                };
                Edge::Undirected(UndirectedEdge::new(id, from, to, weight))
            }
        };
        self.edges.push(edge);

        let both_ways = kind == EdgeKind::Undirected;
        if from == to {
            self.arena[from.index].attach(id, true, true);
        } else {
            self.arena[from.index].attach(id, true, both_ways);
            self.arena[to.index].attach(id, both_ways, true);
        }

        debug!(
            "connected {} -> {} via {} ({}, weight {})",
            from,
            to,
            id,
            kind,
            edge.weight()
        );
        Ok(id)
    }

    /// Walk every outgoing edge of `vertex`. Unknown ids yield nothing.
    pub(crate) fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.slot(vertex)
            .map(Vertex::outgoing)
            .unwrap_or_default()
            .iter()
            .filter_map(move |&edge| {
                let next = self.edges.get(edge.index)?.traverse_from(vertex);
                debug_assert!(
                    next.is_ok(),
                    "outgoing edge {} does not touch {}",
                    edge,
                    vertex
                );
                next.ok()
            })
    }
}
