//! Cached copy of the backend's user record.

use chrono::{DateTime, Utc};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::User;

use super::remote::RemoteCache;

/// Pulls authoritative user state (points, CO₂, history).
///
/// Refreshed at startup and after every finished scan. The client never
/// adjusts points or history itself.
#[derive(Debug, Clone, Default)]
pub struct RemoteUserStore {
    cache: RemoteCache<User>,
}

impl RemoteUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> &User {
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

    /// Fetch and apply in one step.
    ///
    /// On failure the cached user is untouched and the error is returned.
    pub async fn refresh(&mut self, api: &ApiClient) -> Result<&User, ApiError> {
        let result = api.fetch_user().await;
        self.apply(result.clone());
        result.map(|_| self.user())
    }

    /// Apply a fetch that ran elsewhere (e.g. in a spawned task).
    pub fn apply(&mut self, result: Result<User, ApiError>) -> bool {
        self.cache.apply("user", result)
    }
}
