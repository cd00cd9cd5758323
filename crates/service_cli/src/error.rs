//! CLI error types.

use engine_pricing::mc::ConfigError;
use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The pricing configuration was rejected by the engine.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An argument value was not understood.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output could not be serialised.
    #[error("serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
