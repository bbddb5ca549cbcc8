//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use crate::http_server::HttpServer;
use crate::observability::{log_event_with_fields, Event};

use super::args::{Cli, Command};
use super::config::{load_config, validate_config};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Config { config } => show_config(config.as_deref(), &mut io::stdout()),
    }
}

/// Load configuration, then serve until Ctrl-C.
///
/// The tokio runtime is created here so that `main` stays synchronous.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
        validate_config(&config)?;
    }

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            let message = e.to_string();
            log_event_with_fields(Event::ServerFailed, &[("error", message.as_str())]);
            CliError::boot_failed(format!("HTTP server failed: {}", message))
        })
    })
}

/// Write the effective configuration as pretty JSON
pub fn show_config<W: Write>(config_path: Option<&Path>, out: &mut W) -> CliResult<()> {
    let config = load_config(config_path)?;
    serde_json::to_writer_pretty(&mut *out, &config)?;
    writeln!(out)?;
    Ok(())
}
