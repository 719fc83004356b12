//! Client Configuration Tests
//!
//! Tests for:
//! - Loading directed read configuration from JSON files
//! - Eager verification of the client default
//! - Per-read resolution through the loaded configuration

use std::fs;

use directed_reads::directed_read::{
    ConfigError, DirectedReadConfig, DirectedReadErrorKind, DirectedReadPreference,
    ReplicaSelection, ReplicaType, MAX_REPLICA_SELECTIONS_COUNT,
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("directed_reads.json");
    fs::write(&path, content).unwrap();
    path
}

/// Full configuration round-trips through a file.
#[test]
fn test_load_include_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "directed_read_options": {
                "include_replicas": {
                    "replica_selections": [
                        {"location": "us-west1", "type": "READ_ONLY"},
                        {"location": "us-east1"}
                    ],
                    "auto_failover_disabled": true
                }
            },
            "route_to_leader_enabled": true
        }"#,
    );

    let config = DirectedReadConfig::load(&path).unwrap();
    let pref = config.directed_read_options.as_ref().unwrap();

    match pref {
        DirectedReadPreference::Include(include) => {
            assert!(include.auto_failover_disabled);
            assert_eq!(include.replica_selections.len(), 2);
            assert_eq!(
                include.replica_selections[0],
                ReplicaSelection::location("us-west1").with_type(ReplicaType::ReadOnly)
            );
        }
        DirectedReadPreference::Exclude(_) => panic!("expected include_replicas"),
    }
}

/// Leader routing defaults to enabled.
#[test]
fn test_route_to_leader_defaults_enabled() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"directed_read_options": {
            "exclude_replicas": {"replica_selections": [{"location": "us-east1"}]}
        }}"#,
    );

    let config = DirectedReadConfig::load(&path).unwrap();
    assert!(config.route_to_leader_enabled);
}

/// Missing file reports an I/O error naming the path.
#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = DirectedReadConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

/// Both variants at once are a parse error.
#[test]
fn test_both_variants_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"directed_read_options": {"include_replicas": {}, "exclude_replicas": {}}}"#,
    );

    let err = DirectedReadConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

/// Oversized default is rejected at load time.
#[test]
fn test_oversized_default_rejected() {
    let selections =
        vec![r#"{"location": "us-west1"}"#; MAX_REPLICA_SELECTIONS_COUNT + 1].join(",");
    let content = format!(
        r#"{{"directed_read_options": {{"exclude_replicas": {{"replica_selections": [{}]}}}}}}"#,
        selections
    );
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &content);

    match DirectedReadConfig::load(&path).unwrap_err() {
        ConfigError::Invalid(e) => assert_eq!(e.kind, DirectedReadErrorKind::InvalidArgument),
        other => panic!("expected Invalid, got {:?}", other),
    }
}

/// Loaded config with leader routing disabled refuses any preference.
#[test]
fn test_loaded_config_without_leader_routing() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"route_to_leader_enabled": false}"#);
    let config = DirectedReadConfig::load(&path).unwrap();

    assert_eq!(config.resolve(None), Ok(None));

    let request = DirectedReadPreference::include(vec![ReplicaSelection::location("us-west1")]);
    let err = config.resolve(Some(&request)).unwrap_err();
    assert_eq!(err.kind, DirectedReadErrorKind::FailedPrecondition);
}
