//! CLI-specific error types.
//!
//! All CLI errors are fatal: they are printed to stderr and the process
//! exits non-zero.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid PORT value '{0}': expected a number between 1 and 65535")]
    InvalidPort(String),

    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),
}
