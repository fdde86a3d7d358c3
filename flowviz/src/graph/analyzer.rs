//! Structural analysis of a workflow graph: cycles, dead ends, longest path.
//!
//! The analyzer copies nodes and edges on construction, so later changes to the
//! source `StateGraph` never alter an analysis already taken.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use super::state_graph::{Edge, StateGraph};
use super::traversal::Adjacency;

/// Read-only aggregate returned by [`GraphAnalyzer::summary`].
///
/// Serialises with the keys `nodes`, `edges`, `has_cycles`, `dead_ends`, `longest_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub has_cycles: bool,
    pub dead_ends: Vec<String>,
    pub longest_path: usize,
}

/// Analyzes a snapshot of a graph's nodes and edges.
pub struct GraphAnalyzer {
    nodes: Vec<String>,
    edges: Vec<Edge>,
    adjacency: Adjacency,
}

impl GraphAnalyzer {
    /// Takes a snapshot of `nodes` and `edges`.
    ///
    /// Edge endpoints missing from `nodes` are appended in first-seen order, the same
    /// normalisation `StateGraph::add_edge` applies.
    pub fn new(nodes: &[String], edges: &[Edge]) -> Self {
        let mut seen: HashSet<&str> = nodes.iter().map(String::as_str).collect();
        let mut all_nodes = nodes.to_vec();
        for (from, to) in edges {
            for id in [from, to] {
                if seen.insert(id.as_str()) {
                    all_nodes.push(id.clone());
                }
            }
        }
        let adjacency = Adjacency::new(
            &all_nodes,
            edges.iter().map(|(f, t)| (f.as_str(), t.as_str())),
        );
        Self {
            nodes: all_nodes,
            edges: edges.to_vec(),
            adjacency,
        }
    }

    /// Snapshot of the current state of `graph`.
    pub fn from_graph(graph: &StateGraph) -> Self {
        Self::new(graph.get_nodes(), graph.get_edges())
    }

    /// True when a depth-first walk finds an edge back to a node on the active path.
    /// Self-loops count.
    pub fn has_cycles(&self) -> bool {
        !self.adjacency.back_edges(true).is_empty()
    }

    /// Nodes with no outgoing edges, in node order.
    pub fn find_dead_ends(&self) -> Vec<String> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.adjacency.out_degree(i) == 0)
            .map(|(_, n)| n.clone())
            .collect()
    }

    /// Edge count of the longest path, computed by Kahn's topological traversal.
    ///
    /// Meant for acyclic graphs. Nodes on a cycle never reach indegree zero, so
    /// they and everything only reachable through them keep whatever distance they
    /// had when the traversal stalled: a cyclic graph yields an under-count, not an error.
    pub fn longest_path_length(&self) -> usize {
        let n = self.adjacency.len();
        let mut indegree = self.adjacency.in_degrees();
        let mut dist = vec![0usize; n];
        let mut queue: VecDeque<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();

        while let Some(u) = queue.pop_front() {
            for v in self.adjacency.successors(u) {
                dist[v] = dist[v].max(dist[u] + 1);
                indegree[v] -= 1;
                if indegree[v] == 0 {
                    queue.push_back(v);
                }
            }
        }
        dist.into_iter().max().unwrap_or(0)
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            has_cycles: self.has_cycles(),
            dead_ends: self.find_dead_ends(),
            longest_path: self.longest_path_length(),
        }
    }
}

/// Summary of `nodes` / `edges` without keeping the analyzer around.
pub fn analyze_graph(nodes: &[String], edges: &[Edge]) -> GraphSummary {
    GraphAnalyzer::new(nodes, edges).summary()
}
