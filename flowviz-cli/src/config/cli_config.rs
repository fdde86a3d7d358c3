//! CLI config: output directory and PNG scale, filled from env / .env.
//!
//! Converted to [`flowviz::ExportConfig`] for [`render_workflow`](crate::render_workflow).

use std::path::PathBuf;

use flowviz::export::DEFAULT_OUTPUT_DIR;
use flowviz::ExportConfig;

/// Error type used for config loading and runs.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// CLI config: output directory and PNG scale.
#[derive(Clone, Debug, PartialEq)]
pub struct CliConfig {
    /// Output namespace for artifacts. Default: `outputs`.
    pub output_dir: PathBuf,
    /// PNG scale factor. Default: 1.0.
    pub png_scale: f32,
    /// When true, debug logs for flowviz are shown.
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            png_scale: 1.0,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Fill config from env vars. Call `dotenv::dotenv().ok()` first to pick up `.env`.
    ///
    /// `FLOWVIZ_OUTPUT_DIR` (default `outputs`) and `FLOWVIZ_PNG_SCALE` (default 1.0)
    /// are optional. A scale that does not parse as a positive number is rejected.
    pub fn from_env() -> Result<Self, Error> {
        let output_dir = std::env::var("FLOWVIZ_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let png_scale = match std::env::var("FLOWVIZ_PNG_SCALE") {
            Ok(raw) => parse_scale(&raw)?,
            Err(_) => 1.0,
        };
        Ok(Self {
            output_dir,
            png_scale,
            verbose: false,
        })
    }

    /// Apply optional overrides from `RunOptions`; only set fields override.
    ///
    /// A `--scale` override that is not a positive number is rejected and leaves
    /// the config unchanged.
    pub fn apply_options(&mut self, options: &super::RunOptions) -> Result<(), Error> {
        let png_scale = match options.png_scale {
            Some(scale) => check_scale(scale, "--scale", &scale.to_string())?,
            None => self.png_scale,
        };
        if let Some(dir) = &options.output_dir {
            self.output_dir = dir.clone();
        }
        self.png_scale = png_scale;
        self.verbose = options.verbose;
        Ok(())
    }

    pub fn to_export_config(&self) -> ExportConfig {
        ExportConfig {
            output_dir: self.output_dir.clone(),
            png_scale: self.png_scale,
        }
    }
}

fn parse_scale(raw: &str) -> Result<f32, Error> {
    let scale = raw.trim().parse::<f32>().unwrap_or(f32::NAN);
    check_scale(scale, "FLOWVIZ_PNG_SCALE", raw)
}

/// `scale` if finite and positive; otherwise an error naming `source` and the raw value.
fn check_scale(scale: f32, source: &str, raw: &str) -> Result<f32, Error> {
    if scale.is_finite() && scale > 0.0 {
        return Ok(scale);
    }
    Err(Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        format!("{} must be a positive number, got {:?}", source, raw),
    )))
}
