//! The HTTP seam between [`ApiClient`](crate::api::ApiClient) and the network.
//!
//! The backend only needs two request shapes: a JSON `GET` and a single-file
//! multipart `POST`. Implementations return any response they receive,
//! whatever its status; `Err` means no response arrived at all.

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use thiserror::Error;

/// Request headers, name to value.
pub type Headers = HashMap<String, String>;

/// A received response, any status.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    /// `Content-Type` as sent by the server, if any
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    /// A response carrying `value` serialised as JSON.
    pub fn from_json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string()).with_content_type("application/json")
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// The file part of a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartUpload {
    /// Form field the server reads
    pub field: String,
    /// Sent as the part's `filename`
    pub file_name: String,
    pub mime: String,
    pub bytes: Bytes,
}

/// Why no response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    /// The request could not be built (bad URL, bad MIME type).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The connection dropped while the body was being read.
    #[error("response body error: {0}")]
    Body(String),

    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    async fn post_multipart(
        &self,
        url: &str,
        upload: MultipartUpload,
        headers: &Headers,
    ) -> Result<Response, HttpError>;
}
