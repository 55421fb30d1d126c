//! View state construction for the App.
//!
//! This module provides the `view_state()` method on App that constructs
//! an `AppViewState` containing all data needed for UI rendering.

use super::App;
use crate::view_state::{AppViewState, ScanViewState};

impl App {
    /// Borrow everything the UI needs for one frame.
    pub fn view_state(&self) -> AppViewState<'_> {
        AppViewState {
            view: self.router.current(),
            tick_count: self.tick_count,
            base_url: self.api.base_url(),
            user: self.user.user(),
            user_loaded: self.user.has_loaded(),
            user_error: self.user.last_error(),
            leaderboard: self.leaderboard.entries(),
            leaderboard_loaded: self.leaderboard.has_loaded(),
            leaderboard_error: self.leaderboard.last_error(),
            scan: ScanViewState {
                path_input: &self.path_input,
                selected: self.scan.selected().map(|s| &s.preview),
                state: self.scan.state(),
                can_submit: self.scan.can_submit(),
            },
            notice: self.notice.as_ref(),
            refreshing: self.refreshes_in_flight > 0,
            synced_at: [self.user.last_refreshed(), self.leaderboard.last_refreshed()]
                .into_iter()
                .flatten()
                .min(),
        }
    }
}
