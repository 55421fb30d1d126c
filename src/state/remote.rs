//! Stale-on-failure cache shared by the remote stores.

use chrono::{DateTime, Utc};

use crate::error::ApiError;

/// Last known-good copy of a backend resource.
///
/// A successful fetch replaces the value wholesale; a failed one leaves it
/// exactly as it was and is only visible through [`RemoteCache::last_error`].
/// Results are applied in the order they complete, so when two fetches race
/// the later completion wins.
#[derive(Debug, Clone, Default)]
pub struct RemoteCache<T> {
    value: T,
    loaded: bool,
    last_error: Option<ApiError>,
    last_refreshed: Option<DateTime<Utc>>,
}

impl<T> RemoteCache<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            loaded: false,
            last_error: None,
            last_refreshed: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether any fetch has succeeded yet.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Error from the most recent fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    /// When the current value arrived.
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    /// Apply a finished fetch. Returns `true` when the value was replaced.
    pub fn apply(&mut self, resource: &'static str, result: Result<T, ApiError>) -> bool {
        match result {
            Ok(value) => {
                self.value = value;
                self.loaded = true;
                self.last_error = None;
                self.last_refreshed = Some(Utc::now());
                tracing::debug!(resource, "refreshed");
                true
            }
            Err(err) => {
                tracing::warn!(
                    resource,
                    code = err.error_code(),
                    category = %err.category(),
                    error = %err,
                    "refresh failed, keeping cached value"
                );
                self.last_error = Some(err);
                false
            }
        }
    }
}
