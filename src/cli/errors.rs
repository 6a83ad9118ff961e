//! CLI error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file unreadable, unparseable, or holding unusable values
    #[error("STORES_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Schema initialisation, runtime or listener setup failed
    #[error("STORES_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),
}
