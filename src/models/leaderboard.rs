use serde::{Deserialize, Serialize};

/// One row of `GET /api/leaderboard`. The list arrives in rank order and is
/// never re-sorted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub points: i64,
}
