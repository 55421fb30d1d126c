//! Lifecycle of one scan attempt.
//!
//! ```text
//!            submit             complete(Ok)
//!   Idle ───────────▶ Pending ──────────────▶ Succeeded
//!    ▲                   │
//!    │  select_image     │ complete(Err)
//!    └────────────── Failed ◀─┘
//! ```
//!
//! `select_image` from a terminal state drops back to `Idle`; `submit` from
//! a terminal state starts a new attempt directly. While `Pending`, further
//! submits are rejected and completions for anything but the current attempt
//! cannot arrive, since only one request is ever outstanding.

use crate::api::ApiClient;
use crate::error::{ApiError, PreconditionViolation};
use crate::image_source::{PreviewHandle, SelectedImage, UploadPayload};
use crate::models::{Classification, ScanResult};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Pending,
    Succeeded(ScanResult),
    Failed(ScanResult),
}

impl ScanState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ScanState::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanState::Succeeded(_) | ScanState::Failed(_))
    }

    pub fn result(&self) -> Option<&ScanResult> {
        match self {
            ScanState::Succeeded(r) | ScanState::Failed(r) => Some(r),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScanState::Idle => "idle",
            ScanState::Pending => "pending",
            ScanState::Succeeded(_) => "succeeded",
            ScanState::Failed(_) => "failed",
        }
    }
}

/// Everything a caller needs to send the upload for an accepted submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    pub attempt: u64,
    pub payload: UploadPayload,
}

#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    selected: Option<SelectedImage>,
    state: ScanState,
    /// Preview captured at submit time, reattached to the result.
    in_flight: Option<PreviewHandle>,
    attempts: u64,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Last finished result, if any.
    pub fn result(&self) -> Option<&ScanResult> {
        self.state.result()
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Whether the scan action should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
            && self
                .selected
                .as_ref()
                .is_some_and(|s| !s.payload.is_empty())
    }

    /// Replace the selected image.
    ///
    /// `None` (a cancelled picker) changes nothing. A new selection clears
    /// a finished result; during `Pending` only the selection changes and
    /// the outstanding request keeps its own preview.
    pub fn select_image(&mut self, selection: Option<SelectedImage>) -> bool {
        let Some(selection) = selection else {
            return false;
        };
        tracing::debug!(
            file = %selection.preview.file_name,
            state = self.state.label(),
            "image selected"
        );
        self.selected = Some(selection);
        if self.state.is_terminal() {
            self.state = ScanState::Idle;
        }
        true
    }

    /// Move to `Pending` and hand back the upload to send.
    pub fn submit(&mut self) -> Result<ScanRequest, PreconditionViolation> {
        if self.is_pending() {
            return Err(PreconditionViolation::ScanInFlight);
        }
        let selected = self
            .selected
            .as_ref()
            .ok_or(PreconditionViolation::NoImageSelected)?;
        if selected.payload.is_empty() {
            return Err(PreconditionViolation::EmptyPayload);
        }

        self.attempts += 1;
        self.in_flight = Some(selected.preview.clone());
        self.state = ScanState::Pending;
        tracing::info!(
            attempt = self.attempts,
            file = %selected.payload.file_name,
            "scan submitted"
        );
        Ok(ScanRequest {
            attempt: self.attempts,
            payload: selected.payload.clone(),
        })
    }

    /// Record the outcome of the outstanding request.
    ///
    /// Returns the new result, or `None` when nothing was pending (the
    /// outcome is dropped). Failures become an `"Unknown"` card carrying the
    /// error's user-facing message.
    pub fn complete(
        &mut self,
        outcome: Result<Classification, ApiError>,
    ) -> Option<&ScanResult> {
        if !self.is_pending() {
            tracing::warn!(state = self.state.label(), "scan outcome with nothing pending");
            return None;
        }
        let Some(preview) = self.in_flight.take() else {
            tracing::warn!("pending scan lost its preview");
            self.state = ScanState::Idle;
            return None;
        };

        self.state = match outcome {
            Ok(classification) => {
                tracing::info!(
                    attempt = self.attempts,
                    kind = %classification.kind,
                    points = classification.points,
                    "scan succeeded"
                );
                ScanState::Succeeded(ScanResult::success(classification, preview))
            }
            Err(err) => {
                tracing::warn!(
                    attempt = self.attempts,
                    code = err.error_code(),
                    error = %err,
                    "scan failed"
                );
                ScanState::Failed(ScanResult::failure(err.user_message(), preview))
            }
        };
        self.state.result()
    }

    /// Submit, wait for the backend and complete in one call.
    ///
    /// The interactive app runs the request on a spawned task instead so the
    /// UI keeps drawing; this is the same flow for callers that can block.
    pub async fn scan(&mut self, api: &ApiClient) -> Result<&ScanResult, PreconditionViolation> {
        let request = self.submit()?;
        let outcome = api.scan(&request.payload).await;
        self.complete(outcome)
            .ok_or(PreconditionViolation::ScanInFlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::image_source::{select_image, RawImage};
    use crate::models::UNKNOWN_KIND;
    use crate::traits::HttpError;
    use std::sync::Arc;

    const SCAN_URL: &str = "http://greenlens.test/api/scan";

    fn image(name: &str, bytes: &[u8]) -> SelectedImage {
        select_image(Some(RawImage::new(name, bytes.to_vec()))).unwrap()
    }

    fn bottle() -> SelectedImage {
        image("bottle.png", b"\x89PNG\r\n\x1a\nbottle")
    }

    fn plastic() -> Classification {
        Classification {
            kind: "Plastic".to_string(),
            info: "Recyclable bottle".to_string(),
            points: 10,
            co2: 0.5,
        }
    }

    fn transport_error() -> ApiError {
        ApiError::transport(SCAN_URL, &HttpError::Connect("refused".to_string()))
    }

    #[test]
    fn test_submit_without_image_is_rejected() {
        let mut session = ScanSession::new();
        assert_eq!(session.submit(), Err(PreconditionViolation::NoImageSelected));
        assert_eq!(session.state(), &ScanState::Idle);
        assert!(!session.can_submit());
    }

    #[test]
    fn test_submit_empty_payload_is_rejected() {
        let mut session = ScanSession::new();
        session.select_image(Some(image("empty.png", b"")));
        assert_eq!(session.submit(), Err(PreconditionViolation::EmptyPayload));
        assert_eq!(session.state(), &ScanState::Idle);
    }

    #[test]
    fn test_submit_while_pending_is_rejected() {
        let mut session = ScanSession::new();
        session.select_image(Some(bottle()));
        session.submit().unwrap();

        assert_eq!(session.submit(), Err(PreconditionViolation::ScanInFlight));
        assert!(session.is_pending());
        assert_eq!(session.attempts(), 1);
        assert!(!session.can_submit());
    }

    #[test]
    fn test_success_attaches_submitted_preview() {
        let mut session = ScanSession::new();
        let selected = bottle();
        session.select_image(Some(selected.clone()));
        let request = session.submit().unwrap();
        assert_eq!(request.payload, selected.payload);

        let result = session.complete(Ok(plastic())).unwrap().clone();

        assert!(result.is_success());
        assert_eq!(result.kind(), "Plastic");
        assert_eq!(result.points(), 10);
        assert_eq!(result.image, selected.preview);
        assert!(matches!(session.state(), ScanState::Succeeded(_)));
    }

    #[test]
    fn test_failure_becomes_unknown_card() {
        let mut session = ScanSession::new();
        session.select_image(Some(bottle()));
        session.submit().unwrap();

        let result = session.complete(Err(transport_error())).unwrap().clone();

        assert_eq!(result.kind(), UNKNOWN_KIND);
        assert!(result.is_unknown());
        assert!(!result.info().is_empty());
        assert_eq!(result.points(), 0);
        assert!(matches!(session.state(), ScanState::Failed(_)));
    }

    #[test]
    fn test_complete_without_pending_is_ignored() {
        let mut session = ScanSession::new();
        assert!(session.complete(Ok(plastic())).is_none());
        assert_eq!(session.state(), &ScanState::Idle);
    }

    #[test]
    fn test_selecting_during_pending_keeps_request_preview() {
        let mut session = ScanSession::new();
        let first = bottle();
        session.select_image(Some(first.clone()));
        session.submit().unwrap();

        let second = image("can.jpg", b"\xff\xd8\xffcan");
        assert!(session.select_image(Some(second.clone())));
        assert!(session.is_pending());

        let result = session.complete(Ok(plastic())).unwrap().clone();
        assert_eq!(result.image, first.preview);
        assert_eq!(session.selected(), Some(&second));
    }

    #[test]
    fn test_new_selection_clears_finished_result() {
        let mut session = ScanSession::new();
        session.select_image(Some(bottle()));
        session.submit().unwrap();
        session.complete(Ok(plastic()));

        session.select_image(Some(image("can.jpg", b"\xff\xd8\xffcan")));

        assert_eq!(session.state(), &ScanState::Idle);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_cancelled_picker_changes_nothing() {
        let mut session = ScanSession::new();
        session.select_image(Some(bottle()));
        session.submit().unwrap();
        session.complete(Ok(plastic()));

        assert!(!session.select_image(None));

        assert!(matches!(session.state(), ScanState::Succeeded(_)));
        assert!(session.selected().is_some());
    }

    #[test]
    fn test_resubmit_from_terminal_state() {
        let mut session = ScanSession::new();
        session.select_image(Some(bottle()));
        session.submit().unwrap();
        session.complete(Err(transport_error()));

        let request = session.submit().unwrap();

        assert_eq!(request.attempt, 2);
        assert!(session.is_pending());
        assert!(session.result().is_none());
    }

    #[tokio::test]
    async fn test_scan_round_trip_through_api() {
        let mock = MockHttpClient::new();
        mock.set_response(
            SCAN_URL,
            MockResponse::json(
                200,
                serde_json::json!({"type": "Plastic", "info": "Recyclable bottle", "points": 10, "co2": 0.5}),
            ),
        );
        let api = ApiClient::with_http("http://greenlens.test", Arc::new(mock.clone()));
        let mut session = ScanSession::new();
        session.select_image(Some(bottle()));

        let result = session.scan(&api).await.unwrap();

        assert_eq!(result.kind(), "Plastic");
        assert_eq!(mock.count_requests("/api/scan"), 1);
    }

    #[tokio::test]
    async fn test_scan_server_error_is_unknown() {
        let mock = MockHttpClient::new();
        mock.set_response(SCAN_URL, MockResponse::json(500, serde_json::json!({})));
        let api = ApiClient::with_http("http://greenlens.test", Arc::new(mock));
        let mut session = ScanSession::new();
        session.select_image(Some(bottle()));

        let result = session.scan(&api).await.unwrap();

        assert!(result.is_unknown());
        assert!(result.info().contains("500"));
    }
}
