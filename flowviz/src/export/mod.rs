//! Exporter: writes SVG, PNG, Mermaid and HTML artifacts for one workflow.
//!
//! Every artifact lands in `<output_dir>/<name>.<ext>`; exporting again with the
//! same name overwrites. The output directory is created once, when the exporter is
//! built. Not safe for concurrent exports of the same name without outside locking.

mod diagram;
mod html;
mod mermaid;

use std::cell::OnceCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::VizError;
use crate::graph::Edge;
use crate::logging;
use crate::render::RenderGraph;
use crate::style::StyleTable;

pub use diagram::StyledDiagram;
pub use html::{render_html, MERMAID_SCRIPT_URL};
pub use mermaid::render_mermaid;

/// Default output namespace, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Where and how artifacts are written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Directory holding every artifact. Created if missing.
    pub output_dir: PathBuf,
    /// Scale factor applied when rasterising to PNG. Must be positive.
    pub png_scale: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            png_scale: 1.0,
        }
    }
}

/// Artifact kinds produced by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Svg,
    Png,
    Mermaid,
    Html,
}

impl ArtifactKind {
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Svg => "svg",
            ArtifactKind::Png => "png",
            ArtifactKind::Mermaid => "mmd",
            ArtifactKind::Html => "html",
        }
    }
}

/// Exports one workflow given its nodes, edges and conditional pairs.
///
/// The render graph is built once in `new`; the SVG and PNG outputs share one
/// [`StyledDiagram`], built on first use.
pub struct Exporter {
    name: String,
    config: ExportConfig,
    style: StyleTable,
    graph: RenderGraph,
    diagram: OnceCell<StyledDiagram>,
}

impl Exporter {
    /// Creates the output directory and prepares the render graph.
    ///
    /// `name` becomes the file stem of every artifact, so it must be a single
    /// path component: empty names, `.`, `..` and names containing `/` or `\`
    /// fail with [`VizError::InvalidName`] before anything touches the disk.
    pub fn new(
        name: impl Into<String>,
        nodes: &[String],
        edges: &[Edge],
        conditional_edges: &HashSet<Edge>,
        config: ExportConfig,
    ) -> Result<Self, VizError> {
        let name = name.into();
        check_name(&name)?;
        std::fs::create_dir_all(&config.output_dir).map_err(|source| VizError::CreateDir {
            path: config.output_dir.clone(),
            source,
        })?;
        Ok(Self {
            name,
            config,
            style: StyleTable::global().clone(),
            graph: RenderGraph::from_parts(nodes, edges, conditional_edges),
            diagram: OnceCell::new(),
        })
    }

    /// Replaces the style table.
    pub fn with_style(self, style: StyleTable) -> Self {
        Self {
            style,
            diagram: OnceCell::new(),
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render_graph(&self) -> &RenderGraph {
        &self.graph
    }

    /// `<output_dir>/<name>.<ext>` for `kind`.
    pub fn artifact_path(&self, kind: ArtifactKind) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}.{}", self.name, kind.extension()))
    }

    fn diagram(&self) -> &StyledDiagram {
        self.diagram
            .get_or_init(|| StyledDiagram::new(&self.graph, &self.style))
    }

    pub fn to_svg(&self) -> Result<PathBuf, VizError> {
        let path = self.artifact_path(ArtifactKind::Svg);
        write_artifact(&path, self.diagram().svg().as_bytes())?;
        logging::log_artifact_written(&self.name, "svg", &path);
        Ok(path)
    }

    pub fn to_png(&self) -> Result<PathBuf, VizError> {
        let path = self.artifact_path(ArtifactKind::Png);
        let bytes = self.diagram().png(self.config.png_scale)?;
        write_artifact(&path, &bytes)?;
        logging::log_artifact_written(&self.name, "png", &path);
        Ok(path)
    }

    /// Mermaid markup text, without writing it.
    pub fn mermaid_text(&self) -> String {
        render_mermaid(&self.graph, &self.style)
    }

    pub fn to_mermaid(&self) -> Result<PathBuf, VizError> {
        let path = self.artifact_path(ArtifactKind::Mermaid);
        write_artifact(&path, self.mermaid_text().as_bytes())?;
        logging::log_artifact_written(&self.name, "mermaid", &path);
        Ok(path)
    }

    /// Writes the HTML viewer embedding `markup` verbatim.
    pub fn to_html(&self, markup: &str) -> Result<PathBuf, VizError> {
        let path = self.artifact_path(ArtifactKind::Html);
        write_artifact(&path, render_html(&self.name, markup).as_bytes())?;
        logging::log_artifact_written(&self.name, "html", &path);
        Ok(path)
    }
}

fn check_name(name: &str) -> Result<(), VizError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(VizError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn write_artifact(path: &Path, contents: &[u8]) -> Result<(), VizError> {
    std::fs::write(path, contents).map_err(|source| VizError::Write {
        path: path.to_path_buf(),
        source,
    })
}
