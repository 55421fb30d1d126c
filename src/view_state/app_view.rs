//! Main view state struct for UI rendering

use chrono::{DateTime, Utc};

use crate::app::Notice;
use crate::error::ApiError;
use crate::models::{LeaderboardEntry, User};
use crate::router::ViewState;

use super::ScanViewState;

/// Complete view state for UI rendering.
///
/// Borrows from the App for the duration of one draw, so nothing is cloned
/// per frame.
#[derive(Debug, Clone, Copy)]
pub struct AppViewState<'a> {
    /// Screen being displayed
    pub view: ViewState,
    /// Tick counter for the spinner
    pub tick_count: u64,
    /// Backend the client talks to (shown in the footer)
    pub base_url: &'a str,

    pub user: &'a User,
    pub user_loaded: bool,
    pub user_error: Option<&'a ApiError>,

    pub leaderboard: &'a [LeaderboardEntry],
    pub leaderboard_loaded: bool,
    pub leaderboard_error: Option<&'a ApiError>,

    pub scan: ScanViewState<'a>,

    pub notice: Option<&'a Notice>,
    /// A store fetch is outstanding
    pub refreshing: bool,
    /// Oldest successful fetch across both stores
    pub synced_at: Option<DateTime<Utc>>,
}

impl<'a> AppViewState<'a> {
    /// Whether the latest fetch of either store failed, meaning the numbers
    /// on screen may be stale.
    pub fn is_stale(&self) -> bool {
        self.user_error.is_some() || self.leaderboard_error.is_some()
    }

    /// Name the backend uses for this user, if it sent one.
    pub fn user_name(&self) -> Option<&'a str> {
        self.user.name.as_deref()
    }
}
