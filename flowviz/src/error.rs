//! Export and loading error types.
//!
//! Graph building and analysis are total and never fail; only filesystem
//! access, rasterisation, and workflow parsing return [`VizError`].

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while loading a workflow or writing diagram artifacts.
///
/// Returned by `Exporter`, `Visualizer::render_all` and `WorkflowSpec::from_path`.
/// I/O failures are fatal and carry the path that could not be used; nothing is retried.
#[derive(Debug, Error)]
pub enum VizError {
    /// The output namespace directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file that should exist (workflow description, or the markup read back for HTML) could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generated SVG could not be parsed for rasterisation.
    #[error("invalid svg: {0}")]
    Svg(String),

    /// Pixmap allocation or PNG encoding failed.
    #[error("raster export failed: {0}")]
    Raster(String),

    /// Workflow name cannot be used as a file name inside the output directory.
    #[error("invalid workflow name {0:?}: must be a non-empty file name without path separators")]
    InvalidName(String),

    /// Workflow description is not valid JSON or has the wrong shape.
    #[error("invalid workflow description: {0}")]
    Workflow(String),
}
