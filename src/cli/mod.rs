//! CLI module for the stores API
//!
//! Provides command-line interface for:
//! - serve: Initialise the schema and serve HTTP until shutdown
//! - init: Initialise the schema and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{init, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
