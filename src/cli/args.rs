//! CLI argument definitions using clap
//!
//! Commands:
//! - chathub serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chathub - A self-hostable community server directory API
#[derive(Parser, Debug)]
#[command(name = "chathub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the directory HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./chathub.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
