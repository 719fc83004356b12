//! JSON I/O handling for CLI
//!
//! - Input: single JSON value via stdin (a preference or `null`)
//! - Output: single JSON object via stdout
//! - UTF-8 only

use std::io::{self, BufRead, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};
use crate::directed_read::DirectedReadPreference;

/// Read one preference from stdin. `null` means no preference.
pub fn read_preference() -> CliResult<Option<DirectedReadPreference>> {
    let stdin = io::stdin();
    let mut line = String::new();

    stdin.lock().read_line(&mut line)?;

    parse_preference(&line)
}

/// Parse one preference line. `null` means no preference.
pub fn parse_preference(line: &str) -> CliResult<Option<DirectedReadPreference>> {
    if line.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    let preference: Option<DirectedReadPreference> = serde_json::from_str(line)?;
    Ok(preference)
}

/// Write a JSON response line to stdout
pub fn write_json(response: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
