//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! any error to exit code 2 after printing it to stderr.

use std::fmt;

use yacht_engine::errors::EngineError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Error reported by the scoring engine
    Engine(EngineError),

    /// One or more self-check scenarios failed
    ChecksFailed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::ChecksFailed(n) => write!(f, "{} check(s) failed", n),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error)
    }
}
