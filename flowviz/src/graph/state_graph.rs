//! State graph: ordered nodes + explicit edges (from → to), some marked conditional.
//!
//! Add nodes with `add_node` and edges with `add_edge`; unknown endpoints are
//! inserted on the fly, so the graph is always closed over its edges. Nothing is
//! ever removed.

use std::collections::HashSet;

/// Marker for the diagram entry. Never stored unless a workflow names it explicitly.
pub const START: &str = "START";

/// Marker for the diagram exit. Never stored unless a workflow names it explicitly.
pub const END: &str = "END";

/// Directed edge `(from, to)`.
pub type Edge = (String, String);

/// Directed workflow graph: ordered, unique nodes and an ordered edge multigraph.
///
/// Node order is the order of first appearance, either through `add_node` or as an
/// endpoint of `add_edge`. Edges are not deduplicated. Conditional edges are
/// tracked by `(from, to)` pair, so every edge sharing a conditional pair is
/// treated as conditional.
///
/// **Interaction**: Read by `GraphAnalyzer` (snapshot) and `RenderGraph::from_graph`.
#[derive(Debug, Clone, Default)]
pub struct StateGraph {
    nodes: Vec<String>,
    node_set: HashSet<String>,
    edges: Vec<Edge>,
    conditional_edges: HashSet<Edge>,
}

impl StateGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node if it is not present yet. Idempotent.
    ///
    /// Returns `&mut Self` for method chaining.
    pub fn add_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_set.insert(id.clone()) {
            self.nodes.push(id);
        }
        self
    }

    /// Adds an edge from `from_id` to `to_id`.
    ///
    /// Missing endpoints are appended to the node list (source first). No duplicate
    /// check is made. When `conditional` is true the pair joins the conditional set.
    pub fn add_edge(
        &mut self,
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        conditional: bool,
    ) -> &mut Self {
        let from_id = from_id.into();
        let to_id = to_id.into();
        self.add_node(from_id.clone());
        self.add_node(to_id.clone());
        if conditional {
            self.conditional_edges
                .insert((from_id.clone(), to_id.clone()));
        }
        self.edges.push((from_id, to_id));
        self
    }

    /// Shorthand for `add_edge(from_id, to_id, true)`.
    pub fn add_conditional_edge(
        &mut self,
        from_id: impl Into<String>,
        to_id: impl Into<String>,
    ) -> &mut Self {
        self.add_edge(from_id, to_id, true)
    }

    /// Nodes in first-seen order.
    pub fn get_nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Edges in insertion order, duplicates included.
    pub fn get_edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Pairs marked conditional.
    pub fn conditional_edges(&self) -> &HashSet<Edge> {
        &self.conditional_edges
    }

    /// True when `(from_id, to_id)` was added with `conditional = true` at least once.
    pub fn is_conditional(&self, from_id: &str, to_id: &str) -> bool {
        self.conditional_edges
            .contains(&(from_id.to_string(), to_id.to_string()))
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_set.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: add_node twice keeps a single entry.
    #[test]
    fn add_node_is_idempotent() {
        let mut g = StateGraph::new();
        g.add_node("a").add_node("a").add_node("b");
        assert_eq!(g.get_nodes(), ["a", "b"]);
    }

    /// **Scenario**: add_edge with unknown endpoints appends them, source first.
    #[test]
    fn add_edge_inserts_unknown_endpoints_at_end() {
        let mut g = StateGraph::new();
        g.add_node("a");
        g.add_edge("x", "a", false);
        g.add_edge("a", "y", false);
        assert_eq!(g.get_nodes(), ["a", "x", "y"]);
    }

    /// **Scenario**: node order follows add_node order even if edges are added in reverse.
    #[test]
    fn node_order_independent_of_edge_order() {
        let mut g = StateGraph::new();
        g.add_node("n1").add_node("n2").add_node("n3");
        g.add_edge("n3", "n2", false);
        g.add_edge("n2", "n1", false);
        assert_eq!(g.get_nodes(), ["n1", "n2", "n3"]);
    }

    /// **Scenario**: duplicate edges are kept as distinct entries.
    #[test]
    fn duplicate_edges_are_kept() {
        let mut g = StateGraph::new();
        g.add_edge("a", "b", false);
        g.add_edge("a", "b", false);
        assert_eq!(g.get_edges().len(), 2);
    }

    /// **Scenario**: conditional flag is recorded per pair and shared by duplicates.
    #[test]
    fn conditional_membership_is_by_pair() {
        let mut g = StateGraph::new();
        g.add_edge("a", "b", false);
        g.add_conditional_edge("a", "b");
        g.add_edge("a", "c", false);
        assert!(g.is_conditional("a", "b"));
        assert!(!g.is_conditional("a", "c"));
        assert_eq!(g.conditional_edges().len(), 1);
    }

    /// **Scenario**: default graph is empty.
    #[test]
    fn new_graph_is_empty() {
        let g = StateGraph::new();
        assert!(g.get_nodes().is_empty());
        assert!(g.get_edges().is_empty());
        assert!(!g.contains_node(START));
    }
}
