//! CLI module for chathub
//!
//! Provides the command-line interface:
//! - serve: Load configuration and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
