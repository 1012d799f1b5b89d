//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output on stdout. The
//! filter comes from `RUST_LOG` and defaults to warnings only.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging for the application.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
