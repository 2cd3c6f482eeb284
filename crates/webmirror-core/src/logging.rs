//! Logging init: timestamped human-readable lines on stderr.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber once at startup.
///
/// Writes to stderr so diagnostics stay separate from the prompt and summary
/// on stdout. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
