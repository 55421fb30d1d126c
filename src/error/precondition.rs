//! Caller-side guard failures.

use thiserror::Error;

use super::category::ErrorCategory;

/// A guard rejected an operation that the UI should have disabled.
///
/// These are returned so callers can log them; they are never shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionViolation {
    #[error("no image selected")]
    NoImageSelected,

    #[error("selected image is empty")]
    EmptyPayload,

    #[error("a scan is already in flight")]
    ScanInFlight,

    #[error("unknown view '{0}'")]
    UnknownView(String),
}

impl PreconditionViolation {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Precondition
    }
}
