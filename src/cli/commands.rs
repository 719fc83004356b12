//! CLI command implementations
//!
//! Commands are thin wrappers over the resolver. A rejected preference is
//! a normal outcome: it produces an error response and exit code 0.

use std::path::Path;

use serde_json::{json, Value};

use crate::directed_read::{
    DirectedReadConfig, DirectedReadError, DirectedReadPreference, DirectedReadResolver,
};
use crate::observability::{log_event_with_fields, Event};

use super::args::Command;
use super::errors::CliResult;
use super::io::{read_preference, write_json};

/// Run the CLI with arguments from the process
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Verify => verify(),
        Command::Resolve {
            config,
            route_to_leader,
        } => resolve(&config, route_to_leader),
    }
}

/// Verify a preference from stdin
pub fn verify() -> CliResult<()> {
    let preference = read_preference()?;
    write_json(&verify_response(preference.as_ref()))
}

/// Resolve a request preference from stdin against a client config
pub fn resolve(config_path: &Path, route_to_leader: Option<bool>) -> CliResult<()> {
    let request = read_preference()?;
    let response = resolve_with(config_path, route_to_leader, request.as_ref())?;
    write_json(&response)
}

/// Load the client config, apply the routing override and resolve `request`.
///
/// Config failures are process errors; a rejected preference is an error
/// response.
pub fn resolve_with(
    config_path: &Path,
    route_to_leader: Option<bool>,
    request: Option<&DirectedReadPreference>,
) -> CliResult<Value> {
    let mut config = DirectedReadConfig::load(config_path)?;
    if let Some(enabled) = route_to_leader {
        config.route_to_leader_enabled = enabled;
    }

    Ok(resolve_response(&config, request))
}

/// Build the response for a verify command
pub fn verify_response(preference: Option<&DirectedReadPreference>) -> Value {
    match DirectedReadResolver::verify(preference) {
        Ok(()) => {
            let count = preference.map_or(0, DirectedReadPreference::selection_count);
            log_event_with_fields(
                Event::PreferenceVerified,
                &[("selection_count", count.to_string().as_str())],
            );
            ok_response(json!({
                "preference": preference,
                "selection_count": count,
            }))
        }
        Err(e) => rejected_response(&e),
    }
}

/// Build the response for a resolve command
pub fn resolve_response(
    config: &DirectedReadConfig,
    request: Option<&DirectedReadPreference>,
) -> Value {
    match config.resolve(request) {
        Ok(preferred) => {
            let scope = match (preferred, request) {
                (None, _) => "none",
                (Some(_), Some(_)) => "request",
                (Some(_), None) => "client",
            };
            let route_to_leader = config.route_to_leader_enabled.to_string();
            log_event_with_fields(
                Event::PreferenceResolved,
                &[
                    ("route_to_leader_enabled", route_to_leader.as_str()),
                    ("scope", scope),
                ],
            );
            ok_response(json!({
                "preference": preferred,
                "scope": scope,
            }))
        }
        Err(e) => rejected_response(&e),
    }
}

fn ok_response(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data,
    })
}

fn rejected_response(error: &DirectedReadError) -> Value {
    log_event_with_fields(
        Event::PreferenceRejected,
        &[("code", error.code()), ("message", error.message.as_str())],
    );
    json!({
        "status": "error",
        "code": error.code(),
        "message": error.message,
    })
}
