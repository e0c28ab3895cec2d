//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Pipeline could not be initialized
    #[error("Initialization error: {0}")]
    InitializationError(#[from] textnorm_core::InitializationError),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
