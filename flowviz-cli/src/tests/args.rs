//! Argument parsing for [`Cli`](crate::Cli).

use std::path::PathBuf;

use clap::Parser;

use crate::{Cli, Command};

/// **Scenario**: render with all flags parses into overrides.
#[test]
fn render_with_flags_yields_run_options() {
    let cli = Cli::try_parse_from([
        "flowviz", "render", "wf.json", "--out-dir", "out", "--scale", "2", "--verbose",
    ])
    .unwrap();
    assert!(matches!(cli.command, Command::Render { .. }));
    assert_eq!(cli.workflow(), &PathBuf::from("wf.json"));
    let opts = cli.run_options();
    assert_eq!(opts.output_dir, Some(PathBuf::from("out")));
    assert_eq!(opts.png_scale, Some(2.0));
    assert!(opts.verbose);
}

/// **Scenario**: analyze takes only the workflow path.
#[test]
fn analyze_has_no_output_overrides() {
    let cli = Cli::try_parse_from(["flowviz", "analyze", "wf.json"]).unwrap();
    assert!(!cli.verbose());
    let opts = cli.run_options();
    assert!(opts.output_dir.is_none());
    assert!(opts.png_scale.is_none());
}

/// **Scenario**: missing workflow path or unknown flag is a parse error.
#[test]
fn invalid_args_are_rejected() {
    assert!(Cli::try_parse_from(["flowviz", "render"]).is_err());
    assert!(Cli::try_parse_from(["flowviz", "analyze", "wf.json", "--invalid-flag-xyz"]).is_err());
    assert!(Cli::try_parse_from(["flowviz"]).is_err());
}
