//! Cached copy of the community leaderboard.

use chrono::{DateTime, Utc};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::LeaderboardEntry;

use super::remote::RemoteCache;

/// Pulls ranked standings. Same stale-on-failure policy as the user store.
#[derive(Debug, Clone, Default)]
pub struct RemoteLeaderboardStore {
    cache: RemoteCache<Vec<LeaderboardEntry>>,
}

impl RemoteLeaderboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in backend rank order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        self.cache.value()
    }

    pub fn has_loaded(&self) -> bool {
        self.cache.has_loaded()
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.cache.last_error()
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.cache.last_refreshed()
    }

    /// 1-based rank of the entry named `name`, if listed.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.entries()
            .iter()
            .position(|e| e.name == name)
            .map(|i| i + 1)
    }

    pub async fn refresh(&mut self, api: &ApiClient) -> Result<&[LeaderboardEntry], ApiError> {
        let result = api.fetch_leaderboard().await;
        self.apply(result.clone());
        result.map(|_| self.entries())
    }

    pub fn apply(&mut self, result: Result<Vec<LeaderboardEntry>, ApiError>) -> bool {
        self.cache.apply("leaderboard", result)
    }
}
