//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "flowviz")]
#[command(about = "Render workflow graphs to SVG, PNG, Mermaid and HTML, or analyze their structure")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write <name>.svg, .png, .mmd and .html for a workflow file.
    Render {
        /// Workflow description (JSON: name, nodes, edges).
        #[arg(value_name = "WORKFLOW")]
        workflow: PathBuf,

        /// Output directory (overrides FLOWVIZ_OUTPUT_DIR).
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// PNG scale factor (overrides FLOWVIZ_PNG_SCALE).
        #[arg(short, long, value_name = "FACTOR")]
        scale: Option<f32>,

        /// Debug logging for flowviz.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the structural summary of a workflow file as JSON.
    Analyze {
        #[arg(value_name = "WORKFLOW")]
        workflow: PathBuf,

        #[arg(short, long)]
        verbose: bool,
    },
}

impl Cli {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Command::Render { verbose, .. } | Command::Analyze { verbose, .. } => *verbose,
        }
    }

    pub fn workflow(&self) -> &PathBuf {
        match &self.command {
            Command::Render { workflow, .. } | Command::Analyze { workflow, .. } => workflow,
        }
    }

    /// Overrides taken from the command line.
    pub fn run_options(&self) -> RunOptions {
        match &self.command {
            Command::Render {
                out_dir,
                scale,
                verbose,
                ..
            } => RunOptions {
                output_dir: out_dir.clone(),
                png_scale: *scale,
                verbose: *verbose,
            },
            Command::Analyze { verbose, .. } => RunOptions {
                verbose: *verbose,
                ..RunOptions::default()
            },
        }
    }
}
