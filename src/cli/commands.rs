//! CLI command implementations.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::{Graph, GraphBuilder, VertexLabels};
use crate::types::{EdgeId, GraphConfig, GraphResult, Traverse, VertexId};

/// Frontier discipline requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOrder {
    /// Last-in, first-out (depth-first-like).
    Stack,
    /// First-in, first-out (breadth-first).
    Queue,
}

impl WalkOrder {
    /// Parse an order name; anything unrecognized falls back to queue order.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "stack" | "dfs" => Self::Stack,
            _ => Self::Queue,
        }
    }

    /// Return a human-readable name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }
}

/// Options for the `walk` command.
#[derive(Debug, Clone)]
pub struct WalkParams {
    pub from: String,
    pub order: WalkOrder,
    /// Upper bound on emitted vertices; walks over cycles never end otherwise.
    pub limit: usize,
    pub distinct: bool,
}

/// One emitted vertex of a walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkStep {
    pub step: usize,
    pub id: VertexId,
    pub label: String,
}

/// Outcome of a bounded walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkResult {
    pub steps: Vec<WalkStep>,
    /// True if the walk had more vertices than the limit allowed.
    pub truncated: bool,
}

/// Build a labeled graph from edge specs such as `a-b`, `a>c` or `a-b:4`.
pub fn build_graph(edges: &[String], config: GraphConfig) -> GraphResult<(Graph, VertexLabels)> {
    let mut builder = GraphBuilder::with_config(config);
    for spec in edges {
        builder.edge_spec(spec)?;
    }
    builder.build_labeled()
}

/// Walk a graph and collect at most `params.limit` steps.
pub fn walk(
    graph: &Graph,
    labels: &VertexLabels,
    params: &WalkParams,
) -> GraphResult<WalkResult> {
    let origin = labels.id(&params.from)?;
    let (ids, truncated) = match (params.order, params.distinct) {
        (WalkOrder::Stack, false) => bounded(graph.dfs(origin)?, params.limit),
        (WalkOrder::Stack, true) => bounded(graph.dfs(origin)?.distinct(), params.limit),
        (WalkOrder::Queue, false) => bounded(graph.bfs(origin)?, params.limit),
        (WalkOrder::Queue, true) => bounded(graph.bfs(origin)?.distinct(), params.limit),
    };
    let steps = ids
        .into_iter()
        .enumerate()
        .map(|(step, id)| WalkStep {
            step,
            id,
            label: display_label(labels, id),
        })
        .collect();
    Ok(WalkResult { steps, truncated })
}

/// Take up to `limit` vertices and report whether any were left over.
fn bounded(mut walk: impl Iterator<Item = VertexId>, limit: usize) -> (Vec<VertexId>, bool) {
    let ids: Vec<VertexId> = walk.by_ref().take(limit).collect();
    let truncated = walk.next().is_some();
    (ids, truncated)
}

/// Print a walk over the graph described by `edges`.
pub fn cmd_walk(
    edges: &[String],
    params: &WalkParams,
    config: GraphConfig,
    json: bool,
) -> GraphResult<()> {
    let (graph, labels) = build_graph(edges, config)?;
    let WalkResult { steps, truncated } = walk(&graph, &labels, params)?;

    if json {
        let info = serde_json::json!({
            "from": params.from,
            "order": params.order.name(),
            "distinct": params.distinct,
            "limit": params.limit,
            "truncated": truncated,
            "steps": steps,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for step in &steps {
            println!("{:>4}  {}", step.step, step.label);
        }
        if truncated {
            println!("(stopped after {} steps)", params.limit);
        }
    }
    Ok(())
}

/// Print the edges and neighbors of one vertex.
pub fn cmd_neighbors(
    edges: &[String],
    vertex: &str,
    config: GraphConfig,
    json: bool,
) -> GraphResult<()> {
    let (graph, labels) = build_graph(edges, config)?;
    let view = graph.vertex(labels.id(vertex)?)?;

    let describe = |ids: &[EdgeId]| -> GraphResult<Vec<serde_json::Value>> {
        ids.iter()
            .map(|&id| {
                let edge = graph.edge(id)?;
                let (a, b) = edge.endpoints();
                Ok(serde_json::json!({
                    "edge": id,
                    "kind": edge.kind(),
                    "weight": edge.weight(),
                    "endpoints": [display_label(&labels, a), display_label(&labels, b)],
                }))
            })
            .collect()
    };
    let outgoing = describe(view.outgoing())?;
    let incoming = describe(view.incoming())?;
    let neighbors: Vec<String> = view
        .outgoing_neighbors()
        .into_iter()
        .map(|id| display_label(&labels, id))
        .collect();

    if json {
        let info = serde_json::json!({
            "vertex": vertex,
            "neighbors": neighbors,
            "outgoing": outgoing,
            "incoming": incoming,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertex {}", vertex);
        println!("  Edges: {}", view.edges().len());
        println!("  Outgoing: {}", view.outgoing().len());
        println!("  Incoming: {}", view.incoming().len());
        println!("  Neighbors: {}", neighbors.join(", "));
    }
    Ok(())
}

/// Print counts for the graph described by `edges`.
pub fn cmd_info(edges: &[String], config: GraphConfig, json: bool) -> GraphResult<()> {
    let (graph, _) = build_graph(edges, config)?;
    let mut seen: HashSet<EdgeId> = HashSet::new();
    let mut directed = 0usize;
    for &vertex in graph.vertices() {
        for &edge in graph.vertex(vertex)?.edges() {
            if seen.insert(edge) && graph.edge(edge)?.as_directed().is_some() {
                directed += 1;
            }
        }
    }
    let undirected = graph.edge_count() - directed;

    if json {
        let info = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "directed": directed,
            "undirected": undirected,
            "config": graph.config(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("  Directed: {}", directed);
        println!("  Undirected: {}", undirected);
    }
    Ok(())
}

fn display_label(labels: &VertexLabels, id: VertexId) -> String {
    labels
        .label(id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}
