//! Observability subsystem
//!
//! Provides:
//! - Structured logging (JSON lines)
//! - Typed lifecycle events
//!
//! Observability is read-only: it never alters a resolution outcome, and
//! the resolver itself never logs.
//!
//! ```ignore
//! use directed_reads::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::PreferenceResolved, &[("scope", "request")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Severity an event is logged at
pub fn event_severity(event: Event) -> Severity {
    if event.is_rejection() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event_severity(event), event.as_str(), fields);
}
