//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("[CHATHUB_CLI_CONFIG_ERROR] {0}")]
    Config(#[from] ConfigError),

    /// Server failed to bind or serve
    #[error("[CHATHUB_CLI_SERVER_ERROR] {0}")]
    Server(#[from] std::io::Error),
}
