//! CLI argument definitions using clap
//!
//! Commands:
//! - eventdesk serve [--host <host>] [--port <port>] [--table <name>]

use clap::{Parser, Subcommand};

/// eventdesk - a self-hostable event catalog service
#[derive(Parser, Debug)]
#[command(name = "eventdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the eventdesk HTTP server
    Serve {
        /// Host to bind to (overrides EVENTDESK_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides EVENTDESK_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Name of the backing table (overrides EVENTS_TABLE_NAME)
        #[arg(long)]
        table: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
