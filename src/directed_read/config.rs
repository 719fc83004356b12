//! Client-Scope Directed Read Configuration
//!
//! Configured once per client, immutable afterwards:
//! - Default preference applied to every read without its own
//! - Leader routing flag (enabled by default)
//!
//! `new`, `load` and `from_json_str` verify the default preference.
//! Values built field by field or deserialized directly skip that check
//! until `validate` is called; `resolve` still verifies whatever it picks.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::errors::{DirectedReadError, DirectedReadResult};
use super::preference::DirectedReadPreference;
use super::resolver::DirectedReadResolver;
use crate::observability::{log_event_with_fields, Event, Logger, Severity};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid JSON for this schema
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Default preference failed verification
    #[error("Invalid directed read options: {0}")]
    Invalid(#[from] DirectedReadError),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Directed read configuration for a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectedReadConfig {
    /// Client-scope default preference
    #[serde(default)]
    pub directed_read_options: Option<DirectedReadPreference>,

    /// Whether reads may be routed to the leader (default: true)
    #[serde(default = "default_route_to_leader_enabled")]
    pub route_to_leader_enabled: bool,
}

fn default_route_to_leader_enabled() -> bool {
    true
}

impl Default for DirectedReadConfig {
    fn default() -> Self {
        Self {
            directed_read_options: None,
            route_to_leader_enabled: default_route_to_leader_enabled(),
        }
    }
}

impl DirectedReadConfig {
    /// Create a configuration, verifying the default preference.
    pub fn new(
        directed_read_options: Option<DirectedReadPreference>,
        route_to_leader_enabled: bool,
    ) -> DirectedReadResult<Self> {
        let config = Self {
            directed_read_options,
            route_to_leader_enabled,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let path_str = path.display().to_string();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                // Unreadable file is an environment failure, not a caller error
                Logger::log(
                    Severity::Error,
                    Event::ConfigRejected.as_str(),
                    &[("path", path_str.as_str()), ("reason", source.to_string().as_str())],
                );
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        match Self::from_json_str(&content) {
            Ok(config) => {
                let has_default = config.directed_read_options.is_some().to_string();
                log_event_with_fields(
                    Event::ConfigLoaded,
                    &[
                        ("path", path_str.as_str()),
                        ("has_default_preference", has_default.as_str()),
                    ],
                );
                Ok(config)
            }
            Err(e) => {
                log_event_with_fields(
                    Event::ConfigRejected,
                    &[("path", path_str.as_str()), ("reason", e.to_string().as_str())],
                );
                Err(e)
            }
        }
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: DirectedReadConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Only the selection bound is checked here. Whether the preference is
    /// usable under the routing flag is decided per read.
    pub fn validate(&self) -> DirectedReadResult<()> {
        DirectedReadResolver::verify(self.directed_read_options.as_ref())
    }

    /// Resolve the effective preference for one read.
    pub fn resolve<'a>(
        &'a self,
        request: Option<&'a DirectedReadPreference>,
    ) -> DirectedReadResult<Option<&'a DirectedReadPreference>> {
        DirectedReadResolver::resolve_preferred(
            self.directed_read_options.as_ref(),
            request,
            self.route_to_leader_enabled,
        )
    }
}
