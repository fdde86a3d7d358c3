//! Tracing subscriber setup: stderr only, filter from `RUST_LOG`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::config::Error;

/// Default filter when `RUST_LOG` is unset.
pub(crate) fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,flowviz=debug,flowviz_cli=debug"
    } else {
        "warn,flowviz=info"
    }
}

/// Installs a stderr `fmt` layer so stdout stays clean for command output.
pub fn init_tracing(verbose: bool) -> Result<(), Error> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter(verbose)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).try_init()?;
    Ok(())
}
