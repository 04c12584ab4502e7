//! Logging setup for the shardring CLI.
//!
//! Logs go to stderr so routed output on stdout can be piped.

use tracing_subscriber::EnvFilter;

/// Initialize the `tracing` subscriber.
///
/// Respects `RUST_LOG` if set, otherwise filters at `level`. Call this once
/// at startup, before any `tracing` events are emitted.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
