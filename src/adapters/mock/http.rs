//! Scriptable in-memory backend for tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::{Headers, HttpClient, HttpError, MultipartUpload, Response};

/// A request as the mock saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// `"GET"` or `"POST"`
    pub method: &'static str,
    pub url: String,
    pub headers: Headers,
    /// Present for multipart posts
    pub upload: Option<MultipartUpload>,
}

/// What the mock does for a request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Reply with this response, whatever its status
    Success(Response),
    /// Fail without a response
    Error(HttpError),
    /// Never resolve, like a backend that hangs
    Hang,
}

impl MockResponse {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::from_json(status, &value))
    }
}

#[derive(Debug, Default)]
struct Route {
    once: VecDeque<MockResponse>,
    sticky: Option<MockResponse>,
}

#[derive(Debug, Default)]
struct MockState {
    routes: HashMap<String, Route>,
    fallback: Option<MockResponse>,
    requests: Vec<RecordedRequest>,
}

/// [`HttpClient`] answering from a per-URL script.
///
/// Lookup order for a URL: responses queued with
/// [`queue_response`](Self::queue_response) (each used once), then the one
/// set with [`set_response`](Self::set_response), then the default. Every
/// request is recorded before it is answered, so a `Hang` still counts.
/// Clones share the script and the recording.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking test thread must not take every other assertion down with it.
    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.state().routes.entry(url.to_string()).or_default().sticky = Some(response);
    }

    pub fn queue_response(&self, url: &str, response: MockResponse) {
        self.state()
            .routes
            .entry(url.to_string())
            .or_default()
            .once
            .push_back(response);
    }

    /// Answer for URLs with nothing scripted.
    pub fn set_default_response(&self, response: MockResponse) {
        self.state().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    /// Requests whose URL ends with `suffix`, e.g. `"/api/scan"`.
    pub fn count_requests(&self, suffix: &str) -> usize {
        self.state()
            .requests
            .iter()
            .filter(|r| r.url.ends_with(suffix))
            .count()
    }

    pub fn clear_requests(&self) {
        self.state().requests.clear();
    }

    /// Record the request and pick its scripted answer under one lock.
    fn take_answer(&self, request: RecordedRequest) -> Option<MockResponse> {
        let mut state = self.state();
        let url = request.url.clone();
        state.requests.push(request);

        let scripted = state.routes.get_mut(&url).and_then(|route| {
            route.once.pop_front().or_else(|| route.sticky.clone())
        });
        scripted.or_else(|| state.fallback.clone())
    }

    async fn answer(&self, request: RecordedRequest) -> Result<Response, HttpError> {
        let url = request.url.clone();
        match self.take_answer(request) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Hang) => std::future::pending().await,
            None => Err(HttpError::Other(format!("no mock response for {}", url))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.answer(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            headers: headers.clone(),
            upload: None,
        })
        .await
    }

    async fn post_multipart(
        &self,
        url: &str,
        upload: MultipartUpload,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.answer(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            headers: headers.clone(),
            upload: Some(upload),
        })
        .await
    }
}
