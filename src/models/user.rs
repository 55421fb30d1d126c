use serde::{Deserialize, Serialize};

/// Authoritative user state as returned by `GET /api/user`.
///
/// The client never edits this field by field; a successful fetch replaces
/// the cached copy wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name used on the leaderboard (the backend sends "You")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub eco_points: u64,
    /// Total kilograms of CO₂ saved
    pub co2_saved: f64,
    /// Past scans, oldest first
    #[serde(default)]
    pub history: Vec<ScanRecord>,
}

impl User {
    /// History in display order (most recent first).
    pub fn history_newest_first(&self) -> impl Iterator<Item = &ScanRecord> {
        self.history.iter().rev()
    }
}

/// One past scan, immutable once recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub info: String,
    pub points: i64,
    pub co2: f64,
    /// Unix epoch seconds
    pub timestamp: i64,
}
