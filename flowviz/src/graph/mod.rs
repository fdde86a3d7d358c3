//! Workflow graph model and structural analysis.
//!
//! [`StateGraph`] is built incrementally (nodes in first-seen order, edges as a
//! multigraph with a conditional subset); [`GraphAnalyzer`] works on a snapshot of it.

mod analyzer;
mod state_graph;
pub(crate) mod traversal;

pub use analyzer::{analyze_graph, GraphAnalyzer, GraphSummary};
pub use state_graph::{Edge, StateGraph, END, START};
