//! Directed Read Preference
//!
//! A preference is exactly one of:
//! - IncludeReplicas: only matching replicas may serve the read
//! - ExcludeReplicas: matching replicas may not serve the read
//!
//! "No preference" is `Option::None` wherever a preference is accepted.

use serde::{Deserialize, Serialize};

use super::errors::{DirectedReadError, DirectedReadResult};
use super::resolver::MAX_REPLICA_SELECTIONS_COUNT;
use super::selection::ReplicaSelection;

/// Replicas eligible to serve a read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeReplicas {
    /// Selections in caller order
    #[serde(default)]
    pub replica_selections: Vec<ReplicaSelection>,

    /// When set, the server does not fall back to other replicas if none
    /// of the selected ones are available.
    #[serde(default)]
    pub auto_failover_disabled: bool,
}

impl IncludeReplicas {
    /// Create an include set with failover left enabled.
    pub fn new(replica_selections: Vec<ReplicaSelection>) -> Self {
        Self {
            replica_selections,
            auto_failover_disabled: false,
        }
    }

    /// Disable automatic failover to non-selected replicas.
    pub fn without_auto_failover(mut self) -> Self {
        self.auto_failover_disabled = true;
        self
    }
}

/// Replicas not eligible to serve a read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeReplicas {
    /// Selections in caller order
    #[serde(default)]
    pub replica_selections: Vec<ReplicaSelection>,
}

impl ExcludeReplicas {
    /// Create an exclude set.
    pub fn new(replica_selections: Vec<ReplicaSelection>) -> Self {
        Self { replica_selections }
    }
}

/// Directed read preference.
///
/// Externally tagged in JSON, so an object naming both variants is
/// rejected during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectedReadPreference {
    /// Only listed replicas are eligible
    #[serde(rename = "include_replicas")]
    Include(IncludeReplicas),

    /// Listed replicas are ineligible
    #[serde(rename = "exclude_replicas")]
    Exclude(ExcludeReplicas),
}

impl DirectedReadPreference {
    /// Include preference with failover enabled.
    pub fn include(replica_selections: Vec<ReplicaSelection>) -> Self {
        Self::Include(IncludeReplicas::new(replica_selections))
    }

    /// Exclude preference.
    pub fn exclude(replica_selections: Vec<ReplicaSelection>) -> Self {
        Self::Exclude(ExcludeReplicas::new(replica_selections))
    }

    /// Selections of the active variant.
    pub fn replica_selections(&self) -> &[ReplicaSelection] {
        match self {
            Self::Include(include) => &include.replica_selections,
            Self::Exclude(exclude) => &exclude.replica_selections,
        }
    }

    /// Number of selections in the active variant.
    pub fn selection_count(&self) -> usize {
        self.replica_selections().len()
    }

    /// Check if this is an include preference.
    pub fn is_include(&self) -> bool {
        matches!(self, Self::Include(_))
    }

    /// Check if this is an exclude preference.
    pub fn is_exclude(&self) -> bool {
        matches!(self, Self::Exclude(_))
    }

    /// Variant name as it appears on the wire.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Include(_) => "include_replicas",
            Self::Exclude(_) => "exclude_replicas",
        }
    }

    /// Verify structural limits.
    ///
    /// Fails with `InvalidArgument` when the active variant holds more than
    /// `MAX_REPLICA_SELECTIONS_COUNT` selections. An empty list passes.
    pub fn verify(&self) -> DirectedReadResult<()> {
        if self.selection_count() > MAX_REPLICA_SELECTIONS_COUNT {
            return Err(DirectedReadError::invalid_argument(format!(
                "Maximum length of replica selection allowed in \
                 IncludeReplicas/ExcludeReplicas is {}",
                MAX_REPLICA_SELECTIONS_COUNT
            )));
        }
        Ok(())
    }
}
