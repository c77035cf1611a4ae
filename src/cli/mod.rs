//! CLI module for eventdesk
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server and block until shutdown

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
