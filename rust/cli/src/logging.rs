//! Diagnostic logging for the CLI binary.
//!
//! Engine and CLI events go through `tracing` to stderr so they never mix
//! with game output on stdout. Verbosity follows `RUST_LOG`; without it only
//! warnings are shown.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Filter from `RUST_LOG`, falling back to warnings only.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging for the application.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
