//! Lazy traversals over a [`Graph`], parameterized by frontier discipline.
//!
//! Neither [`StackTraversal`] nor [`QueueTraversal`] remembers what it has
//! already emitted. A vertex reachable along several paths is emitted once per
//! path, and a cycle reachable from the origin makes the sequence infinite.
//! Bound such walks with [`Iterator::take`], or opt into [`Traversal::distinct`].

use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;

use log::trace;

use crate::types::VertexId;

use super::Graph;

/// Working set of vertices that have been discovered but not yet emitted.
pub trait Frontier: Default {
    /// Add a vertex at the end of the frontier.
    fn push(&mut self, vertex: VertexId);

    /// Take the next vertex to emit.
    fn pop(&mut self) -> Option<VertexId>;

    /// Number of pending vertices.
    fn len(&self) -> usize;

    /// True if nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in, first-out frontier.
#[derive(Debug, Default, Clone)]
pub struct StackFrontier {
    stack: Vec<VertexId>,
}

impl Frontier for StackFrontier {
    fn push(&mut self, vertex: VertexId) {
        self.stack.push(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First-in, first-out frontier.
#[derive(Debug, Default, Clone)]
pub struct QueueFrontier {
    queue: VecDeque<VertexId>,
}

impl Frontier for QueueFrontier {
    fn push(&mut self, vertex: VertexId) {
        self.queue.push_back(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Depth-first-like order: the most recently discovered neighbor goes next.
pub type StackTraversal<'g> = Traversal<'g, StackFrontier>;

/// Breadth-first order: neighbors are emitted in discovery order.
pub type QueueTraversal<'g> = Traversal<'g, QueueFrontier>;

/// A single-use walk from an origin vertex.
///
/// Each step takes one vertex off the frontier, emits it, and appends every
/// vertex reachable along its outgoing edges (in edge insertion order). The
/// sequence ends exactly when the frontier runs dry.
#[derive(Debug, Clone)]
pub struct Traversal<'g, F: Frontier> {
    graph: &'g Graph,
    frontier: F,
}

impl<'g, F: Frontier> Traversal<'g, F> {
    /// Seed a traversal with `origin`. The caller guarantees `origin` lives in `graph`.
    pub(crate) fn new(graph: &'g Graph, origin: VertexId) -> Self {
        let mut frontier = F::default();
        frontier.push(origin);
        Self { graph, frontier }
    }

    /// Number of vertices waiting to be emitted.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// True once the traversal can emit nothing more.
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Turn this walk into one that emits each reachable vertex at most once.
    ///
    /// Vertices already in the frontier are kept, so calling this on a fresh
    /// traversal yields every vertex reachable from the origin exactly once,
    /// and always terminates.
    pub fn distinct(self) -> Distinct<'g, F> {
        Distinct {
            inner: self,
            visited: HashSet::new(),
        }
    }

    fn expand(&mut self, vertex: VertexId, mut keep: impl FnMut(VertexId) -> bool) {
        let graph = self.graph;
        for next in graph.successors(vertex) {
            if keep(next) {
                self.frontier.push(next);
            }
        }
    }
}

impl<F: Frontier> Iterator for Traversal<'_, F> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.frontier.pop()?;
        self.expand(current, |_| true);
        trace!("emit {} (frontier now {})", current, self.frontier.len());
        Some(current)
    }
}

impl<F: Frontier> FusedIterator for Traversal<'_, F> {}

/// A traversal that skips vertices it has already emitted.
#[derive(Debug, Clone)]
pub struct Distinct<'g, F: Frontier> {
    inner: Traversal<'g, F>,
    visited: HashSet<VertexId>,
}

impl<F: Frontier> Distinct<'_, F> {
    /// Vertices emitted so far.
    pub fn visited(&self) -> &HashSet<VertexId> {
        &self.visited
    }
}

impl<F: Frontier> Iterator for Distinct<'_, F> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.inner.frontier.pop()?;
            if !self.visited.insert(current) {
                continue;
            }
            let visited = &self.visited;
            self.inner.expand(current, |next| !visited.contains(&next));
            trace!("emit {} (distinct, {} seen)", current, self.visited.len());
            return Some(current);
        }
    }
}

impl<F: Frontier> FusedIterator for Distinct<'_, F> {}
