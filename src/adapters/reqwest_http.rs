//! Production [`HttpClient`] on top of reqwest.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};

use crate::traits::{Headers, HttpClient, HttpError, MultipartUpload, Response};

/// reqwest-backed client.
///
/// No request timeout is configured: a hung backend leaves the caller
/// waiting until the connection resolves.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn classify(err: reqwest::Error) -> HttpError {
        let message = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(message)
        } else if err.is_connect() {
            HttpError::Connect(message)
        } else if err.is_builder() {
            HttpError::InvalidRequest(message)
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(message)
        } else {
            HttpError::Other(message)
        }
    }

    async fn execute(
        request: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(request, |req, (name, value)| req.header(name, value));

        let reply = request.send().await.map_err(Self::classify)?;
        let status = reply.status().as_u16();
        let content_type = reply
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = reply.bytes().await.map_err(Self::classify)?;

        tracing::trace!(status, bytes = body.len(), "http response");
        let response = Response::new(status, body);
        Ok(match content_type {
            Some(ct) => response.with_content_type(ct),
            None => response,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        Self::execute(self.client.get(url), headers).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        upload: MultipartUpload,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let len = upload.bytes.len() as u64;
        // Known length keeps the request out of chunked encoding.
        let part = Part::stream_with_length(reqwest::Body::from(upload.bytes), len)
            .file_name(upload.file_name)
            .mime_str(&upload.mime)
            .map_err(|e| HttpError::InvalidRequest(format!("MIME type {:?}: {}", upload.mime, e)))?;
        let form = Form::new().part(upload.field, part);

        Self::execute(self.client.post(url).multipart(form), headers).await
    }
}
