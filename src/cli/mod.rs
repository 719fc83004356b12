//! CLI module
//!
//! Provides command-line interface for:
//! - verify: check one preference against the selection bound
//! - resolve: pick the effective preference for a request

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    resolve, resolve_response, resolve_with, run, run_command, verify, verify_response,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_preference, read_preference, write_json};
