//! Directed Read Resolution
//!
//! Directed reads and leader routing are mutually exclusive:
//! - Leader routing disabled: any preference, at either scope, is refused
//! - Leader routing enabled: request scope wins, then client scope
//!
//! Only the chosen preference is verified. The other scope is ignored
//! even when it would fail verification.

use super::errors::{DirectedReadError, DirectedReadResult};
use super::preference::DirectedReadPreference;

/// Upper bound on selections in one include or exclude set.
pub const MAX_REPLICA_SELECTIONS_COUNT: usize = 10;

/// Stateless gate between caller preferences and the outgoing read request.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectedReadResolver;

impl DirectedReadResolver {
    /// Verify a single preference. Absent passes.
    pub fn verify(preference: Option<&DirectedReadPreference>) -> DirectedReadResult<()> {
        match preference {
            Some(preference) => preference.verify(),
            None => Ok(()),
        }
    }

    /// Resolve the effective preference from client and request scopes.
    ///
    /// Presence is decided by the option alone: an include set with no
    /// selections still overrides the client scope.
    pub fn resolve_preferred<'a>(
        client: Option<&'a DirectedReadPreference>,
        request: Option<&'a DirectedReadPreference>,
        route_to_leader_enabled: bool,
    ) -> DirectedReadResult<Option<&'a DirectedReadPreference>> {
        if !route_to_leader_enabled {
            if client.is_some() || request.is_some() {
                return Err(DirectedReadError::failed_precondition(
                    "DirectedReadOptions can't be set when leader routing is disabled",
                ));
            }
            return Ok(None);
        }

        let preferred = request.or(client);
        Self::verify(preferred)?;
        Ok(preferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directed_read::{DirectedReadErrorKind, ReplicaSelection};

    fn include_west() -> DirectedReadPreference {
        DirectedReadPreference::include(vec![ReplicaSelection::location("us-west1")])
    }

    fn exclude_east() -> DirectedReadPreference {
        DirectedReadPreference::exclude(vec![ReplicaSelection::location("us-east1")])
    }

    fn oversized() -> DirectedReadPreference {
        DirectedReadPreference::include(vec![
            ReplicaSelection::location("us-west1");
            MAX_REPLICA_SELECTIONS_COUNT + 1
        ])
    }

    #[test]
    fn test_verify_absent() {
        assert!(DirectedReadResolver::verify(None).is_ok());
    }

    #[test]
    fn test_leader_routing_disabled_rejects_either_scope() {
        let client = include_west();
        let request = exclude_east();

        for (c, r) in [
            (Some(&client), None),
            (None, Some(&request)),
            (Some(&client), Some(&request)),
        ] {
            let err = DirectedReadResolver::resolve_preferred(c, r, false).unwrap_err();
            assert_eq!(err.kind, DirectedReadErrorKind::FailedPrecondition);
        }
    }

    #[test]
    fn test_leader_routing_disabled_both_absent() {
        assert_eq!(DirectedReadResolver::resolve_preferred(None, None, false), Ok(None));
    }

    #[test]
    fn test_leader_routing_disabled_checked_before_size() {
        // Precondition outranks the selection bound
        let pref = oversized();
        let err = DirectedReadResolver::resolve_preferred(Some(&pref), None, false).unwrap_err();
        assert_eq!(err.kind, DirectedReadErrorKind::FailedPrecondition);
    }

    #[test]
    fn test_request_overrides_client() {
        let client = include_west();
        let request = exclude_east();
        let resolved = DirectedReadResolver::resolve_preferred(Some(&client), Some(&request), true);
        assert_eq!(resolved, Ok(Some(&request)));
    }

    #[test]
    fn test_falls_back_to_client() {
        let client = include_west();
        let resolved = DirectedReadResolver::resolve_preferred(Some(&client), None, true);
        assert_eq!(resolved, Ok(Some(&client)));
    }

    #[test]
    fn test_both_absent_enabled() {
        assert_eq!(DirectedReadResolver::resolve_preferred(None, None, true), Ok(None));
    }

    #[test]
    fn test_empty_request_still_overrides() {
        let client = include_west();
        let request = DirectedReadPreference::include(Vec::new());
        let resolved = DirectedReadResolver::resolve_preferred(Some(&client), Some(&request), true);
        assert_eq!(resolved, Ok(Some(&request)));
    }

    #[test]
    fn test_oversized_client_ignored_when_request_present() {
        let client = oversized();
        let request = exclude_east();
        let resolved = DirectedReadResolver::resolve_preferred(Some(&client), Some(&request), true);
        assert_eq!(resolved, Ok(Some(&request)));
    }

    #[test]
    fn test_oversized_chosen_preference_fails() {
        let pref = oversized();
        for (c, r) in [(Some(&pref), None), (None, Some(&pref))] {
            let err = DirectedReadResolver::resolve_preferred(c, r, true).unwrap_err();
            assert_eq!(err.kind, DirectedReadErrorKind::InvalidArgument);
        }
    }
}
