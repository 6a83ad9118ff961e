//! CLI command implementations
//!
//! Boot order for `serve`: resolve config, start logging, create schema,
//! bind, serve. A schema failure stops the boot before the listener opens.

use std::fs;
use std::path::Path;

use super::args::{Cli, Command, ConfigArgs};
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::{init_logging, log_event, Event, LogFormat};
use crate::storage::Database;

/// Parse arguments and run the chosen command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            host,
            port,
            log_format,
        } => {
            let mut resolved = resolve_config(&config)?;
            if let Some(host) = host {
                resolved.host = host;
            }
            if let Some(port) = port {
                resolved.port = port;
            }
            if let Some(format) = log_format {
                resolved.log_format = format;
            }
            resolved.validate().map_err(CliError::Config)?;
            serve(resolved)
        }
        Command::Init { config } => init(resolve_config(&config)?),
    }
}

/// Build the effective config: file (or defaults), then `--database`.
pub fn resolve_config(args: &ConfigArgs) -> CliResult<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(database) = &args.database {
        config.database_path = database.clone();
    }
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

fn load_config_file(path: &Path) -> CliResult<ServerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    ServerConfig::from_json(&content).map_err(CliError::Config)
}

/// Create the schema, then serve until Ctrl-C / SIGTERM
pub fn serve(config: ServerConfig) -> CliResult<()> {
    init_logging(config.log_format);
    log_event(Event::BootStart);
    tracing::info!(
        event = Event::ConfigLoaded.as_str(),
        addr = %config.socket_addr(),
        database = %config.database_path.display(),
    );

    let database = open_database(&config)?;

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("Failed to start runtime: {}", e)))?;

    let server = HttpServer::new(config, database);
    runtime
        .block_on(server.start(crate::http_server::server::shutdown_signal()))
        .map_err(|e| {
            log_event(Event::BootFailed);
            CliError::BootFailed(format!("HTTP server error: {}", e))
        })
}

/// Create the schema and exit
pub fn init(config: ServerConfig) -> CliResult<()> {
    init_logging(LogFormat::Pretty);
    open_database(&config)?;
    println!("Database ready at {}", config.database_path.display());
    Ok(())
}

fn open_database(config: &ServerConfig) -> CliResult<Database> {
    let database = Database::new(config.database_path.clone());
    database.init_schema().map_err(|e| {
        tracing::error!(event = Event::BootFailed.as_str(), cause = %e);
        CliError::BootFailed(format!(
            "Failed to initialise database {}: {}",
            config.database_path.display(),
            e
        ))
    })?;
    Ok(database)
}
