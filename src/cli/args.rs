//! CLI argument definitions using clap
//!
//! Commands:
//! - stores-api serve [--config <path>] [--database <path>] [--host <h>] [--port <n>] [--log-format <f>]
//! - stores-api init [--config <path>] [--database <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// Stores API - a REST API for stores and their items
#[derive(Parser, Debug)]
#[command(name = "stores-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SQLite database file (overrides the config file)
    #[arg(long, env = "STORES_API_DATABASE")]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database schema if needed and serve the API
    Serve {
        #[command(flatten)]
        config: ConfigArgs,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Log output format: pretty or json
        #[arg(long)]
        log_format: Option<LogFormat>,
    },

    /// Create the database schema if needed and exit
    Init {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
