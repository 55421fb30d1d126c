//! Message handlers for the App.
//!
//! Applies background completions (image reads, scans, store refreshes) to
//! application state.

use super::{App, AppMessage};
use crate::image_source::select_image;

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        tracing::debug!(kind = msg.kind(), "handling message");
        self.mark_dirty();

        match msg {
            AppMessage::ImageLoaded { path, result } => match result {
                Ok(raw) => {
                    let file_name = raw.file_name.clone();
                    if self.scan.select_image(select_image(Some(raw))) {
                        self.notify_info(format!("Loaded {}", file_name));
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        code = err.error_code(),
                        error = %err,
                        "could not read image"
                    );
                    self.notify_error(err.user_message());
                }
            },
            AppMessage::ScanFinished { attempt, result } => {
                if attempt != self.scan.attempts() {
                    tracing::debug!(attempt, current = self.scan.attempts(), "stale scan outcome");
                    return;
                }
                // Success or failure, the backend may have changed points and
                // history, so both stores are re-pulled.
                if self.scan.complete(result).is_some() {
                    self.refresh_stores();
                }
            }
            AppMessage::UserRefreshed(result) => {
                self.refreshes_in_flight = self.refreshes_in_flight.saturating_sub(1);
                self.user.apply(result);
            }
            AppMessage::LeaderboardRefreshed(result) => {
                self.refreshes_in_flight = self.refreshes_in_flight.saturating_sub(1);
                self.leaderboard.apply(result);
            }
        }
    }
}
