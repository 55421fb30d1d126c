//! Data model shared by the stores, the scan session and the UI.

mod center;
mod leaderboard;
mod scan;
mod user;

pub use center::{RecyclingCenter, RECYCLING_CENTERS};
pub use leaderboard::LeaderboardEntry;
pub use scan::{Classification, ScanOutcome, ScanResult, UNKNOWN_KIND};
pub use user::{ScanRecord, User};
