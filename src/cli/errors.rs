//! CLI-specific error types

use thiserror::Error;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime or socket fault while serving
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad configuration input
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
