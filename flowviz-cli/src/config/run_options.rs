//! Optional overrides for a run (command-line flags or programmatic).
//!
//! Used by [`CliConfig::apply_options`](super::CliConfig::apply_options). Only set
//! fields override the env-based config.

use std::path::PathBuf;

/// Optional overrides: output directory, PNG scale, verbose logging.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override PNG scale factor.
    pub png_scale: Option<f32>,
    /// Debug logging.
    pub verbose: bool,
}
