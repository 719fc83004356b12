//! CLI argument definitions using clap
//!
//! Commands:
//! - directed-reads verify
//! - directed-reads resolve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// directed-reads - validate and resolve directed read preferences
#[derive(Parser, Debug)]
#[command(name = "directed-reads")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify one preference read from stdin
    Verify,

    /// Resolve the effective preference for a request read from stdin
    Resolve {
        /// Path to client configuration file
        #[arg(long, default_value = "./directed_reads.json")]
        config: PathBuf,

        /// Override the configured leader routing flag
        #[arg(long)]
        route_to_leader: Option<bool>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
