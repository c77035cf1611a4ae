//! CLI command implementations
//!
//! The serve command owns the tokio runtime; nothing above it spawns
//! threads or opens sockets.

use super::args::{Cli, Command};
use super::errors::CliResult;
use crate::http_server::{HttpServer, HttpServerConfig};

/// Parse arguments and dispatch to the requested command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { host, port, table } => serve(host, port, table),
    }
}

/// Boot the HTTP server and block until it exits.
fn serve(host: Option<String>, port: Option<u16>, table: Option<String>) -> CliResult<()> {
    let mut config = HttpServerConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(table) = table {
        config.table_name = table;
    }

    let server = HttpServer::with_config(config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}
