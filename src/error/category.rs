//! Error category classification.
//!
//! Every failure the client can observe falls into one of three buckets,
//! and each bucket has a single handling policy:
//!
//! | Category | Scan path | Store path | Shown to user |
//! |----------|-----------|------------|---------------|
//! | Transport | `Failed` result card | keep stale cache | result card only |
//! | Protocol | `Failed` result card | keep stale cache | result card only |
//! | Precondition | no-op | no-op | never |

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The request never produced an HTTP response (unreachable host,
    /// refused connection, broken stream, timeout in the transport).
    Transport,

    /// The backend answered, but with a non-2xx status or a body that does
    /// not match the expected schema.
    Protocol,

    /// A caller-side guard failed (submit without an image, unknown view).
    /// The UI is expected to prevent these through disabled controls.
    Precondition,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Protocol => "protocol",
            ErrorCategory::Precondition => "precondition",
        }
    }

    /// Whether errors in this category should ever reach the user.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, ErrorCategory::Precondition)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
