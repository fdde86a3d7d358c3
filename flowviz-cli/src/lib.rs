//! flowviz-cli library: workflow rendering and analysis commands for the `flowviz` binary.
//!
//! Loads a JSON workflow description, then either renders every artifact with
//! [`flowviz::Visualizer`] or prints the [`flowviz::GraphSummary`].
//!
//! ## Usage
//!
//! ```rust,no_run,ignore
//! let config = flowviz_cli::CliConfig::from_env()?;
//! let artifacts = flowviz_cli::render_workflow("workflow.json".as_ref(), &config)?;
//! println!("{}", artifacts.html.display());
//! ```

mod args;
mod config;
mod run;
mod telemetry;

pub use args::{Cli, Command};
pub use config::{CliConfig, Error, RunOptions};
pub use run::{analyze_workflow, render_workflow, run, Outcome};
pub use telemetry::init_tracing;

#[cfg(test)]
mod tests;
