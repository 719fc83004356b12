//! Directed Read Subsystem
//!
//! A directed read restricts (include) or excludes the replicas allowed to
//! serve a read. Preferences may be set at two scopes:
//! - Client: default for every read
//! - Request: overrides the client default for one read
//!
//! Rules enforced before any read is dispatched:
//! - At most `MAX_REPLICA_SELECTIONS_COUNT` selections per preference
//! - Preferences require leader routing to be enabled
//! - Request scope wins; scopes are never merged
//!
//! Everything here is pure and stateless; callers own all values.

mod config;
mod errors;
mod preference;
mod resolver;
mod selection;

pub use config::{ConfigError, ConfigResult, DirectedReadConfig};
pub use errors::{DirectedReadError, DirectedReadErrorKind, DirectedReadResult};
pub use preference::{DirectedReadPreference, ExcludeReplicas, IncludeReplicas};
pub use resolver::{DirectedReadResolver, MAX_REPLICA_SELECTIONS_COUNT};
pub use selection::{ReplicaSelection, ReplicaType};
