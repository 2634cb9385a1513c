//! Logging init: human-readable events on stderr so stdout stays reserved for results.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,relman_core=info,relman=info";

/// Initialize structured logging to stderr. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}
