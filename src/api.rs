//! GreenLens backend API client.
//!
//! Wraps the three endpoints the client consumes:
//!
//! - `GET  /api/user`        -> [`User`]
//! - `GET  /api/leaderboard` -> `Vec<LeaderboardEntry>` (rank order)
//! - `POST /api/scan`        -> [`Classification`] (multipart field `file`)
//!
//! Any transport failure, non-2xx status or body that does not match the
//! schema comes back as an [`ApiError`].

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::adapters::ReqwestHttpClient;
use crate::error::ApiError;
use crate::image_source::UploadPayload;
use crate::models::{Classification, LeaderboardEntry, User};
use crate::traits::{Headers, HttpClient, Response};

pub const USER_PATH: &str = "/api/user";
pub const LEADERBOARD_PATH: &str = "/api/leaderboard";
pub const SCAN_PATH: &str = "/api/scan";

/// Client for the GreenLens backend. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client backed by reqwest.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client over any [`HttpClient`] (mocks in tests).
    pub fn with_http(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_user(&self) -> Result<User, ApiError> {
        self.get_json(USER_PATH).await
    }

    pub async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.get_json(LEADERBOARD_PATH).await
    }

    /// Upload one image for classification. No retries.
    pub async fn scan(&self, payload: &UploadPayload) -> Result<Classification, ApiError> {
        let url = self.url(SCAN_PATH);
        tracing::debug!(
            url = %url,
            file = %payload.file_name,
            bytes = payload.bytes.len(),
            "uploading image for classification"
        );
        let response = self
            .http
            .post_multipart(&url, payload.to_upload(), &json_headers())
            .await
            .map_err(|e| ApiError::transport(&url, &e))?;
        decode(&url, response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self
            .http
            .get(&url, &json_headers())
            .await
            .map_err(|e| ApiError::transport(&url, &e))?;
        decode(&url, response)
    }
}

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}

fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::status(url, response.status, &response.body));
    }
    response.json().map_err(|e| ApiError::decode(url, &e))
}
