//! flowviz binary: parse arguments, render or analyze a workflow, print the result.

use clap::Parser;
use flowviz_cli::{init_tracing, run, Cli, Outcome};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose())?;

    let outcome = match run(&cli) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match outcome {
        Outcome::Rendered(artifacts) => {
            for path in artifacts.paths() {
                println!("{}", path.display());
            }
        }
        Outcome::Analyzed(summary) => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
