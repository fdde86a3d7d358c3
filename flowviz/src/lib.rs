//! # flowviz
//!
//! Analyze directed workflow graphs and export them as diagrams.
//!
//! ## Design Principles
//!
//! - **Total graph model**: `StateGraph` never fails. Unknown edge endpoints are
//!   inserted, duplicate nodes are ignored, duplicate edges are kept.
//! - **Snapshot analysis**: `GraphAnalyzer` copies the graph it is given; cycle
//!   detection, dead ends and longest path all read that copy.
//! - **One style table**: `StyleTable` feeds both the SVG backend and the Mermaid
//!   generator. Conditional edges render dashed, everything else solid.
//! - **Synthesized markers**: rendering adds START → every root and every sink → END.
//!
//! ## Main Modules
//!
//! - [`graph`]: `StateGraph`, `GraphAnalyzer`, `GraphSummary`.
//! - [`style`]: `StyleTable` and per-role node/edge styles.
//! - [`render`]: `RenderGraph` (role-tagged nodes and edges) and its layered layout.
//! - [`export`]: `Exporter` writing `.svg`, `.png`, `.mmd` and `.html`.
//! - [`visualizer`]: `Visualizer`, running every export for one workflow.
//! - [`workflow`]: `WorkflowSpec`, the JSON workflow description.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowviz::{StateGraph, Visualizer};
//!
//! let mut graph = StateGraph::new();
//! graph.add_node("check_weather");
//! graph.add_conditional_edge("check_weather", "plan_indoor");
//! graph.add_conditional_edge("check_weather", "plan_outdoor");
//! graph.add_edge("plan_indoor", "final_response", false);
//! graph.add_edge("plan_outdoor", "final_response", false);
//!
//! let viz = Visualizer::from_graph("ConditionalWorkflow", &graph);
//! let artifacts = viz.render_all()?;
//! println!("{}", artifacts.html.display());
//! println!("{:?}", viz.analyze());
//! # Ok::<(), flowviz::VizError>(())
//! ```

pub mod error;
pub mod export;
pub mod graph;
pub mod logging;
pub mod render;
pub mod style;
pub mod visualizer;
pub mod workflow;

pub use error::VizError;
pub use export::{ArtifactKind, ExportConfig, Exporter, StyledDiagram};
pub use graph::{analyze_graph, Edge, GraphAnalyzer, GraphSummary, StateGraph, END, START};
pub use render::{RenderEdge, RenderGraph, RenderNode};
pub use style::{EdgeRole, EdgeStyle, GraphStyle, LineStyle, NodeRole, NodeStyle, StyleTable};
pub use visualizer::{RenderedArtifacts, Visualizer};
pub use workflow::{EdgeSpec, WorkflowSpec};
