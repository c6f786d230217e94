//! Fluent API for building Graph instances from string labels.

use std::collections::HashMap;

use crate::types::{EdgeKind, GraphConfig, GraphError, GraphResult, VertexId, DEFAULT_WEIGHT};

use super::Graph;

/// Label lookup for a graph produced by [`GraphBuilder`].
#[derive(Debug, Clone, Default)]
pub struct VertexLabels {
    by_label: HashMap<String, VertexId>,
    by_id: HashMap<VertexId, String>,
}

impl VertexLabels {
    /// Vertex declared under `label`.
    pub fn id(&self, label: &str) -> GraphResult<VertexId> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
    }

    /// Label of `vertex`, if it was declared through the builder.
    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.by_id.get(&vertex).map(String::as_str)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    /// True if no labels were declared.
    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }
}

/// One parsed edge spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSpec<'a> {
    /// A bare label: declares a vertex without connecting it.
    Vertex(&'a str),
    /// Two labels joined by `-` (undirected) or `>` (directed).
    Edge {
        from: &'a str,
        to: &'a str,
        kind: EdgeKind,
        weight: i64,
    },
}

/// Fluent builder for constructing a Graph.
///
/// Vertices are declared by label on first use and registered in the built
/// graph. Ids follow declaration order.
pub struct GraphBuilder {
    graph: Graph,
    labels: VertexLabels,
    edges: Vec<(VertexId, VertexId, EdgeKind, i64)>,
}

impl GraphBuilder {
    /// Create a new builder with the default config.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder with a specific config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            graph: Graph::with_config(config),
            labels: VertexLabels::default(),
            edges: Vec::new(),
        }
    }

    /// Declare a vertex, or look up an already declared one.
    pub fn vertex(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.labels.by_label.get(label) {
            return id;
        }
        let id = self.graph.create_vertex();
        self.labels.by_label.insert(label.to_string(), id);
        self.labels.by_id.insert(id, label.to_string());
        id
    }

    /// Add an undirected edge between two labels.
    pub fn link(&mut self, a: &str, b: &str, weight: i64) -> &mut Self {
        self.connect(a, b, EdgeKind::Undirected, weight)
    }

    /// Add a directed edge from `source` to `target`.
    pub fn link_directed(&mut self, source: &str, target: &str, weight: i64) -> &mut Self {
        self.connect(source, target, EdgeKind::Directed, weight)
    }

    /// Add an edge of the given kind.
    pub fn connect(&mut self, from: &str, to: &str, kind: EdgeKind, weight: i64) -> &mut Self {
        let from = self.vertex(from);
        let to = self.vertex(to);
        self.edges.push((from, to, kind, weight));
        self
    }

    /// Apply a textual spec: `a-b` (undirected) or `a>b` (directed), optionally
    /// followed by `:weight`, or a bare label `a` for a lone vertex.
    pub fn edge_spec(&mut self, spec: &str) -> GraphResult<&mut Self> {
        match parse_edge_spec(spec)? {
            EdgeSpec::Vertex(label) => {
                self.vertex(label);
                Ok(self)
            }
            EdgeSpec::Edge {
                from,
                to,
                kind,
                weight,
            } => Ok(self.connect(from, to, kind, weight)),
        }
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        self.build_labeled().map(|(graph, _)| graph)
    }

    /// Build the final Graph and keep the label lookup.
    pub fn build_labeled(self) -> GraphResult<(Graph, VertexLabels)> {
        let mut graph = self.graph;
        for &id in self.labels.by_id.keys() {
            graph.add_vertex(id)?;
        }
        for (from, to, kind, weight) in self.edges {
            graph.connect(from, to, kind, weight)?;
        }
        Ok((graph, self.labels))
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a vertex or edge spec.
pub fn parse_edge_spec(spec: &str) -> GraphResult<EdgeSpec<'_>> {
    let invalid = || GraphError::InvalidEdgeSpec(spec.to_string());
    let is_label = |s: &str| !s.is_empty() && !s.contains(['-', '>', ':']);

    let (body, weight) = match spec.split_once(':') {
        Some((body, weight)) => {
            let weight = weight.trim().parse::<i64>().map_err(|_| invalid())?;
            (body, Some(weight))
        }
        None => (spec, None),
    };

    let (from, to, kind) = if let Some((from, to)) = body.split_once('>') {
        (from, to, EdgeKind::Directed)
    } else if let Some((from, to)) = body.split_once('-') {
        (from, to, EdgeKind::Undirected)
    } else {
        let label = body.trim();
        // A lone vertex carries no weight.
        if weight.is_some() || !is_label(label) {
            return Err(invalid());
        }
        return Ok(EdgeSpec::Vertex(label));
    };

    let (from, to) = (from.trim(), to.trim());
    if !is_label(from) || !is_label(to) {
        return Err(invalid());
    }
    Ok(EdgeSpec::Edge {
        from,
        to,
        kind,
        weight: weight.unwrap_or(DEFAULT_WEIGHT),
    })
}
