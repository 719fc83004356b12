//! Directed Read Error Types
//!
//! Both kinds are caller errors:
//! - Never transient, never retried
//! - Abort request construction before dispatch

use thiserror::Error;

/// Directed read error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectedReadErrorKind {
    /// Preference violates a structural bound (too many selections)
    InvalidArgument,

    /// Preference supplied while leader routing makes directed reads inapplicable
    FailedPrecondition,
}

impl DirectedReadErrorKind {
    /// Returns the status code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
        }
    }
}

/// Directed read error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("DirectedReadError({}): {message}", .kind.code())]
pub struct DirectedReadError {
    /// Error kind
    pub kind: DirectedReadErrorKind,
    /// Error message
    pub message: String,
}

impl DirectedReadError {
    /// Create a new directed read error.
    pub fn new(kind: DirectedReadErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(DirectedReadErrorKind::InvalidArgument, message)
    }

    /// Create a failed precondition error.
    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::new(DirectedReadErrorKind::FailedPrecondition, message)
    }

    /// Get the status code string.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Retrying with unchanged input fails identically.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Result type for directed read operations
pub type DirectedReadResult<T> = Result<T, DirectedReadError>;
