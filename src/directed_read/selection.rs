//! Replica Selection Criteria
//!
//! A selection names one replica or a class of replicas. Either criterion
//! may be omitted; an omitted criterion matches every replica.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Replica type criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplicaType {
    /// Read-write replicas (voting, may become leader)
    ReadWrite,

    /// Read-only replicas (non-voting, serve reads only)
    ReadOnly,
}

impl ReplicaType {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplicaType::ReadWrite => "READ_WRITE",
            ReplicaType::ReadOnly => "READ_ONLY",
        }
    }
}

impl fmt::Display for ReplicaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single replica selection.
///
/// Immutable value; equality is structural.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplicaSelection {
    /// Location tag, e.g. `us-west1`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,

    /// Replica type tag
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    replica_type: Option<ReplicaType>,
}

impl ReplicaSelection {
    /// Create a selection from explicit criteria.
    pub fn new(location: Option<String>, replica_type: Option<ReplicaType>) -> Self {
        Self {
            location,
            replica_type,
        }
    }

    /// Select replicas in a location.
    pub fn location(location: impl Into<String>) -> Self {
        Self::new(Some(location.into()), None)
    }

    /// Select replicas of a type.
    pub fn of_type(replica_type: ReplicaType) -> Self {
        Self::new(None, Some(replica_type))
    }

    /// Narrow the selection to a replica type.
    pub fn with_type(mut self, replica_type: ReplicaType) -> Self {
        self.replica_type = Some(replica_type);
        self
    }

    /// Get the location criterion.
    pub fn get_location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Get the replica type criterion.
    pub fn get_replica_type(&self) -> Option<ReplicaType> {
        self.replica_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(
            ReplicaSelection::location("us-west1"),
            ReplicaSelection::location("us-west1")
        );
        assert_ne!(
            ReplicaSelection::location("us-west1"),
            ReplicaSelection::location("us-west1").with_type(ReplicaType::ReadOnly)
        );
    }

    #[test]
    fn test_json_shape() {
        let selection = ReplicaSelection::location("us-east1").with_type(ReplicaType::ReadWrite);
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["location"], "us-east1");
        assert_eq!(json["type"], "READ_WRITE");
    }

    #[test]
    fn test_omitted_criteria_are_not_serialized() {
        let json =
            serde_json::to_string(&ReplicaSelection::of_type(ReplicaType::ReadOnly)).unwrap();
        assert_eq!(json, r#"{"type":"READ_ONLY"}"#);
    }

    #[test]
    fn test_parse_location_only() {
        let selection: ReplicaSelection =
            serde_json::from_str(r#"{"location":"eu-west4"}"#).unwrap();
        assert_eq!(selection.get_location(), Some("eu-west4"));
        assert_eq!(selection.get_replica_type(), None);
    }
}
