//! Visualizer: renders every artifact for one named workflow and exposes its analysis.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::VizError;
use crate::export::{ExportConfig, Exporter};
use crate::graph::{Edge, GraphAnalyzer, GraphSummary, StateGraph};
use crate::logging;
use crate::style::StyleTable;

/// Paths written by [`Visualizer::render_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub svg: PathBuf,
    pub png: PathBuf,
    pub mermaid: PathBuf,
    pub html: PathBuf,
}

impl RenderedArtifacts {
    pub fn paths(&self) -> [&PathBuf; 4] {
        [&self.svg, &self.png, &self.mermaid, &self.html]
    }
}

/// Draws, exports and analyzes one workflow graph.
///
/// Holds its own copy of nodes, edges and conditional pairs, so the source graph
/// may keep changing after construction.
#[derive(Debug, Clone)]
pub struct Visualizer {
    name: String,
    nodes: Vec<String>,
    edges: Vec<Edge>,
    conditional_edges: HashSet<Edge>,
    config: ExportConfig,
    style: Option<StyleTable>,
}

impl Visualizer {
    pub fn new(
        name: impl Into<String>,
        nodes: impl IntoIterator<Item = String>,
        edges: impl IntoIterator<Item = Edge>,
        conditional_edges: impl IntoIterator<Item = Edge>,
    ) -> Self {
        Self {
            name: name.into(),
            nodes: nodes.into_iter().collect(),
            edges: edges.into_iter().collect(),
            conditional_edges: conditional_edges.into_iter().collect(),
            config: ExportConfig::default(),
            style: None,
        }
    }

    /// Snapshot of `graph` under `name`.
    pub fn from_graph(name: impl Into<String>, graph: &StateGraph) -> Self {
        Self::new(
            name,
            graph.get_nodes().to_vec(),
            graph.get_edges().to_vec(),
            graph.conditional_edges().iter().cloned(),
        )
    }

    pub fn with_config(self, config: ExportConfig) -> Self {
        Self { config, ..self }
    }

    /// Uses `style` instead of the process-wide table.
    pub fn with_style(self, style: StyleTable) -> Self {
        Self {
            style: Some(style),
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes SVG, PNG, Mermaid, then HTML. The HTML step reads the Mermaid file
    /// back from disk, so it fails if that file is missing.
    pub fn render_all(&self) -> Result<RenderedArtifacts, VizError> {
        logging::log_render_start(&self.name, self.nodes.len(), self.edges.len());
        let result = self.export_all();
        match &result {
            Ok(artifacts) => {
                let paths = artifacts.paths().map(|p| p.as_path());
                logging::log_render_complete(&self.name, &paths);
            }
            Err(e) => logging::log_export_error(&self.name, e),
        }
        result
    }

    fn export_all(&self) -> Result<RenderedArtifacts, VizError> {
        let exporter = Exporter::new(
            self.name.clone(),
            &self.nodes,
            &self.edges,
            &self.conditional_edges,
            self.config.clone(),
        )?;
        let exporter = match &self.style {
            Some(style) => exporter.with_style(style.clone()),
            None => exporter,
        };

        let svg = exporter.to_svg()?;
        let png = exporter.to_png()?;
        let mermaid = exporter.to_mermaid()?;
        let markup = read_markup(&mermaid)?;
        let html = exporter.to_html(&markup)?;

        Ok(RenderedArtifacts {
            svg,
            png,
            mermaid,
            html,
        })
    }

    /// Structural summary of the workflow.
    pub fn analyze(&self) -> GraphSummary {
        let summary = GraphAnalyzer::new(&self.nodes, &self.edges).summary();
        logging::log_analysis(&self.name, &summary);
        summary
    }
}

/// Reads back the markup file the HTML step embeds; a missing file is fatal.
fn read_markup(path: &Path) -> Result<String, VizError> {
    std::fs::read_to_string(path).map_err(|source| VizError::Read {
        path: path.to_path_buf(),
        source,
    })
}

impl fmt::Display for Visualizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Visualizer name={:?}, nodes={}, edges={}>",
            self.name,
            self.nodes.len(),
            self.edges.len()
        )
    }
}
