//! Type definitions for the application shell.
//!
//! - [`Notice`] - one-line status message in the footer
//! - [`NoticeKind`] - how the notice is styled

/// Ticks a notice stays visible (about five seconds at the 100 ms tick).
pub const NOTICE_TTL_TICKS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient status line, e.g. "Loaded bottle.png" or a file read error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Tick at which the notice was raised
    pub raised_at: u64,
}

impl Notice {
    pub fn info(text: impl Into<String>, tick: u64) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            raised_at: tick,
        }
    }

    pub fn error(text: impl Into<String>, tick: u64) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            raised_at: tick,
        }
    }

    pub fn is_expired(&self, tick: u64) -> bool {
        tick.saturating_sub(self.raised_at) >= NOTICE_TTL_TICKS
    }
}
