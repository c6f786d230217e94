//! Graph-wide configuration.

use serde::{Deserialize, Serialize};

/// What happens to the weight passed when connecting two vertices undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndirectedWeight {
    /// Store the supplied weight on the edge.
    #[default]
    Keep,
    /// Ignore the supplied weight; undirected edges always weigh 0.
    Discard,
}

/// Settings applied to every edge a [`Graph`](crate::graph::Graph) creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Weight handling for undirected connections.
    pub undirected_weight: UndirectedWeight,
}

impl GraphConfig {
    /// Config that drops weights on undirected edges.
    pub fn unweighted_undirected() -> Self {
        Self {
            undirected_weight: UndirectedWeight::Discard,
        }
    }
}
