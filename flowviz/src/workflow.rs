//! Workflow description: `{ "name", "nodes", "edges" }` JSON loaded into a [`StateGraph`].
//!
//! Each edge is either `["src", "dst"]` or `{ "from": "src", "to": "dst", "conditional": true }`
//! (`source` / `destination` are accepted for `from` / `to`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VizError;
use crate::graph::StateGraph;

/// One edge entry of a workflow description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSpec {
    Pair(String, String),
    Detailed {
        #[serde(alias = "source")]
        from: String,
        #[serde(alias = "destination")]
        to: String,
        #[serde(default)]
        conditional: bool,
    },
}

impl EdgeSpec {
    pub fn endpoints(&self) -> (&str, &str) {
        match self {
            EdgeSpec::Pair(from, to) => (from.as_str(), to.as_str()),
            EdgeSpec::Detailed { from, to, .. } => (from.as_str(), to.as_str()),
        }
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self, EdgeSpec::Detailed { conditional: true, .. })
    }
}

/// Named workflow: ordered nodes plus ordered edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSpec {
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl WorkflowSpec {
    pub fn from_json_str(json: &str) -> Result<Self, VizError> {
        serde_json::from_str(json).map_err(|e| VizError::Workflow(e.to_string()))
    }

    /// Reads and parses a workflow file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VizError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| VizError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Builds the graph: all declared nodes first, in order, then edges in order.
    pub fn to_graph(&self) -> StateGraph {
        let mut graph = StateGraph::new();
        for node in &self.nodes {
            graph.add_node(node.as_str());
        }
        for edge in &self.edges {
            let (from, to) = edge.endpoints();
            graph.add_edge(from, to, edge.is_conditional());
        }
        graph
    }
}
