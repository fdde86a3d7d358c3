//! Logging helpers for render and analysis runs.
//!
//! Thin wrappers over `tracing` so that every call site emits the same
//! structured fields (`workflow`, `format`, `path`, ...).

use std::path::Path;

use crate::error::VizError;
use crate::graph::GraphSummary;

/// Log the start of a full render for `workflow`.
pub fn log_render_start(workflow: &str, nodes: usize, edges: usize) {
    tracing::info!(workflow = workflow, nodes, edges, "Rendering workflow");
}

/// Log one artifact written to disk.
pub fn log_artifact_written(workflow: &str, format: &str, path: &Path) {
    tracing::info!(workflow = workflow, format = format, path = %path.display(), "Artifact written");
}

/// Log completion of a full render.
pub fn log_render_complete(workflow: &str, artifacts: &[&Path]) {
    let paths: Vec<String> = artifacts.iter().map(|p| p.display().to_string()).collect();
    tracing::info!(workflow = workflow, artifacts = ?paths, "Visualization files generated");
}

/// Log an analysis summary.
pub fn log_analysis(workflow: &str, summary: &GraphSummary) {
    tracing::debug!(
        workflow = workflow,
        nodes = summary.nodes,
        edges = summary.edges,
        has_cycles = summary.has_cycles,
        longest_path = summary.longest_path,
        "Workflow analyzed"
    );
}

/// Log a failed export step.
pub fn log_export_error(workflow: &str, error: &VizError) {
    tracing::error!(workflow = workflow, %error, "Export failed");
}
