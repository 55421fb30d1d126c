//! AppMessage enum for async completions within the application.

use std::path::PathBuf;

use crate::error::{ApiError, ImageError};
use crate::image_source::RawImage;
use crate::models::{Classification, LeaderboardEntry, User};

/// Results of background tasks, delivered to the event loop in completion
/// order. Each spawned task sends exactly one.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Reading the file named in the path field finished
    ImageLoaded {
        path: PathBuf,
        result: Result<RawImage, ImageError>,
    },
    /// `POST /api/scan` for the given attempt finished
    ScanFinished {
        attempt: u64,
        result: Result<Classification, ApiError>,
    },
    /// `GET /api/user` finished
    UserRefreshed(Result<User, ApiError>),
    /// `GET /api/leaderboard` finished
    LeaderboardRefreshed(Result<Vec<LeaderboardEntry>, ApiError>),
}

impl AppMessage {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::ImageLoaded { .. } => "image_loaded",
            AppMessage::ScanFinished { .. } => "scan_finished",
            AppMessage::UserRefreshed(_) => "user_refreshed",
            AppMessage::LeaderboardRefreshed(_) => "leaderboard_refreshed",
        }
    }
}
