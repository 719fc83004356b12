//! Observable directed read events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Client configuration loaded and verified
    ConfigLoaded,
    /// Client configuration failed to load or verify
    ConfigRejected,

    // Preferences
    /// A single preference passed verification
    PreferenceVerified,
    /// Effective preference chosen for a read
    PreferenceResolved,
    /// A preference was refused
    PreferenceRejected,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ConfigRejected => "CONFIG_REJECTED",
            Event::PreferenceVerified => "PREFERENCE_VERIFIED",
            Event::PreferenceResolved => "PREFERENCE_RESOLVED",
            Event::PreferenceRejected => "PREFERENCE_REJECTED",
        }
    }

    /// Rejections are logged at WARN; they are caller errors, not faults.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Event::ConfigRejected | Event::PreferenceRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
