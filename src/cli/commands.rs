//! CLI command implementations

use std::path::Path;

use super::args::{Cli, Command};
use super::errors::CliResult;
use crate::config::ChatHubConfig;
use crate::http_server::HttpServer;
use crate::observability::Logger;

/// Entry point called by main
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
    }
}

/// Start the directory HTTP server
///
/// Loads configuration (defaults when the file is absent), builds the
/// router, and blocks on the serving loop.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = ChatHubConfig::load(config_path)?;

    Logger::info(
        "SERVE",
        &[("config", &config_path.display().to_string())],
    );

    let server = HttpServer::with_config(config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}
