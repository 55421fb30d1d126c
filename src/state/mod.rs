//! Client-side state containers.
//!
//! - [`ScanSession`] - the selected image and the current scan attempt
//! - [`RemoteUserStore`] - cached `GET /api/user`
//! - [`RemoteLeaderboardStore`] - cached `GET /api/leaderboard`
//!
//! The two stores never cross-update: a user refresh does not touch the
//! leaderboard or the other way around.

pub mod leaderboard_store;
pub mod remote;
pub mod scan_session;
pub mod user_store;

pub use leaderboard_store::RemoteLeaderboardStore;
pub use remote::RemoteCache;
pub use scan_session::{ScanRequest, ScanSession, ScanState};
pub use user_store::RemoteUserStore;
