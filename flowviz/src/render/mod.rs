//! Render pipeline: turns a [`StateGraph`] into a role-tagged [`RenderGraph`].
//!
//! Adds the START and END markers and derives entry edges (START → every root)
//! and exit edges (every sink → END). Node and edge order are stable: START,
//! model nodes, END; model edges in insertion order, then entry edges, then exit
//! edges. The Mermaid `linkStyle` indices depend on that edge order.

mod layout;

use std::collections::HashSet;

use crate::graph::{Edge, StateGraph, END, START};
use crate::style::{EdgeRole, NodeRole};

pub use layout::{EdgeRoute, Layout, NodeBox, Point};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    pub id: String,
    pub role: NodeRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEdge {
    pub from: String,
    pub to: String,
    pub role: EdgeRole,
    /// True for entry/exit edges added by the pipeline.
    pub synthesized: bool,
}

/// Render-ready graph: every node and edge tagged with its style role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderGraph {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

impl RenderGraph {
    pub fn from_graph(graph: &StateGraph) -> Self {
        Self::from_parts(
            graph.get_nodes(),
            graph.get_edges(),
            graph.conditional_edges(),
        )
    }

    /// Builds the render graph from explicit nodes, edges and conditional pairs.
    ///
    /// Edge endpoints missing from `nodes` are appended, as `StateGraph` would.
    /// Nodes literally named `START` / `END` are folded into the markers. Entry
    /// synthesis is skipped when the model already has an edge out of START, exit
    /// synthesis when it already has an edge into END, and both when there are no
    /// workflow nodes.
    pub fn from_parts(nodes: &[String], edges: &[Edge], conditional: &HashSet<Edge>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut workflow_nodes: Vec<&String> = Vec::with_capacity(nodes.len());
        let endpoints = edges.iter().flat_map(|(from, to)| [from, to]);
        for id in nodes.iter().chain(endpoints) {
            if !is_marker(id) && seen.insert(id.as_str()) {
                workflow_nodes.push(id);
            }
        }

        let mut render_nodes = Vec::with_capacity(workflow_nodes.len() + 2);
        render_nodes.push(RenderNode {
            id: START.to_string(),
            role: NodeRole::Start,
        });
        render_nodes.extend(workflow_nodes.iter().map(|n| RenderNode {
            id: (*n).clone(),
            role: NodeRole::Node,
        }));
        render_nodes.push(RenderNode {
            id: END.to_string(),
            role: NodeRole::End,
        });

        let mut render_edges: Vec<RenderEdge> = edges
            .iter()
            .map(|edge| RenderEdge {
                from: edge.0.clone(),
                to: edge.1.clone(),
                role: EdgeRole::for_conditional(conditional.contains(edge)),
                synthesized: false,
            })
            .collect();

        if !workflow_nodes.is_empty() {
            let has_explicit_entry = edges.iter().any(|(from, _)| from == START);
            let has_explicit_exit = edges.iter().any(|(_, to)| to == END);

            if !has_explicit_entry {
                for root in roots(&workflow_nodes, edges) {
                    render_edges.push(synthesized(START, root));
                }
            }
            if !has_explicit_exit {
                for sink in sinks(&workflow_nodes, edges) {
                    render_edges.push(synthesized(sink, END));
                }
            }
        }

        Self {
            nodes: render_nodes,
            edges: render_edges,
        }
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Layered layout of this graph using `style` for sizes and separations.
    pub fn layout(&self, style: &crate::style::StyleTable) -> Layout {
        layout::compute(self, style)
    }
}

fn is_marker(id: &str) -> bool {
    id == START || id == END
}

/// Workflow nodes without incoming edges, or the first node when every node has one.
fn roots<'a>(workflow_nodes: &[&'a String], edges: &[Edge]) -> Vec<&'a str> {
    let with_incoming: HashSet<&str> = edges.iter().map(|(_, to)| to.as_str()).collect();
    let found: Vec<&str> = workflow_nodes
        .iter()
        .map(|n| n.as_str())
        .filter(|n| !with_incoming.contains(n))
        .collect();
    match (found.is_empty(), workflow_nodes.first()) {
        (true, Some(first)) => vec![first.as_str()],
        _ => found,
    }
}

/// Workflow nodes without outgoing edges, or the last node when every node has one.
fn sinks<'a>(workflow_nodes: &[&'a String], edges: &[Edge]) -> Vec<&'a str> {
    let with_outgoing: HashSet<&str> = edges.iter().map(|(from, _)| from.as_str()).collect();
    let found: Vec<&str> = workflow_nodes
        .iter()
        .map(|n| n.as_str())
        .filter(|n| !with_outgoing.contains(n))
        .collect();
    match (found.is_empty(), workflow_nodes.last()) {
        (true, Some(last)) => vec![last.as_str()],
        _ => found,
    }
}

fn synthesized(from: &str, to: &str) -> RenderEdge {
    RenderEdge {
        from: from.to_string(),
        to: to.to_string(),
        role: EdgeRole::Edge,
        synthesized: true,
    }
}
