//! Run entry points: render or analyze a workflow file.

use std::path::Path;

use flowviz::{GraphSummary, RenderedArtifacts, Visualizer, WorkflowSpec};

use crate::args::{Cli, Command};
use crate::config::{CliConfig, Error};

/// Result of one CLI command.
#[derive(Debug)]
pub enum Outcome {
    Rendered(RenderedArtifacts),
    Analyzed(GraphSummary),
}

/// Loads `workflow` and writes every artifact under `config.output_dir`.
pub fn render_workflow(workflow: &Path, config: &CliConfig) -> Result<RenderedArtifacts, Error> {
    let spec = WorkflowSpec::from_path(workflow)?;
    tracing::debug!(workflow = %spec.name, path = %workflow.display(), "Loaded workflow");
    let viz = Visualizer::from_graph(spec.name.as_str(), &spec.to_graph())
        .with_config(config.to_export_config());
    Ok(viz.render_all()?)
}

/// Loads `workflow` and returns its structural summary.
pub fn analyze_workflow(workflow: &Path) -> Result<GraphSummary, Error> {
    let spec = WorkflowSpec::from_path(workflow)?;
    Ok(Visualizer::from_graph(spec.name.as_str(), &spec.to_graph()).analyze())
}

/// Runs the parsed command with env config plus command-line overrides.
pub fn run(cli: &Cli) -> Result<Outcome, Error> {
    match &cli.command {
        Command::Render { workflow, .. } => {
            let mut config = CliConfig::from_env()?;
            config.apply_options(&cli.run_options())?;
            render_workflow(workflow, &config).map(Outcome::Rendered)
        }
        Command::Analyze { workflow, .. } => analyze_workflow(workflow).map(Outcome::Analyzed),
    }
}
