//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct (the shell that owns the
//! router, the scan session and both remote stores) and related types:
//! - [`AppMessage`] - completions of background tasks
//! - [`Notice`] - transient footer status line
//!
//! Every backend call runs on its own spawned task and reports back through
//! the message channel; [`App::handle_message`] applies the outcome.

mod handlers;
mod messages;
mod types;
pub(crate) mod utils;
mod view;

pub use messages::AppMessage;
pub use types::{Notice, NoticeKind, NOTICE_TTL_TICKS};

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::PreconditionViolation;
use crate::image_source::RawImage;
use crate::router::{ViewRouter, ViewState};
use crate::state::{RemoteLeaderboardStore, RemoteUserStore, ScanSession};

/// Main application state
pub struct App {
    /// Active screen
    pub router: ViewRouter,
    /// Selected image and the current scan attempt
    pub scan: ScanSession,
    /// Cached `GET /api/user`
    pub user: RemoteUserStore,
    /// Cached `GET /api/leaderboard`
    pub leaderboard: RemoteLeaderboardStore,
    /// Text of the Scanner's path field
    pub path_input: String,
    /// Footer status line
    pub notice: Option<Notice>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Tick counter for the spinner and notice expiry
    pub tick_count: u64,
    /// Store fetches started but not yet reported back
    pub refreshes_in_flight: usize,
    /// Receiver for async completions (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async completions (clone this into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Backend client (cheap to clone into tasks)
    pub api: ApiClient,
}

impl App {
    /// Create a new App talking to `api`.
    pub fn new(api: ApiClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            router: ViewRouter::new(),
            scan: ScanSession::new(),
            user: RemoteUserStore::new(),
            leaderboard: RemoteLeaderboardStore::new(),
            path_input: String::new(),
            notice: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            refreshes_in_flight: 0,
            message_rx: Some(message_rx),
            message_tx,
            api,
        }
    }

    /// Create an App with a reqwest-backed client for the configured backend.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(ApiClient::new(config.api_base_url.as_str()))
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    /// Advance animations and expire the notice.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self
            .notice
            .as_ref()
            .is_some_and(|n| n.is_expired(self.tick_count))
        {
            self.notice = None;
            self.mark_dirty();
        }
        if self.scan.is_pending() || self.refreshes_in_flight > 0 {
            self.mark_dirty();
        }
    }

    pub fn current_view(&self) -> ViewState {
        self.router.current()
    }

    pub fn navigate(&mut self, target: ViewState) {
        self.router.navigate(target);
        self.mark_dirty();
    }

    pub fn navigate_home(&mut self) {
        self.router.navigate_home();
        self.mark_dirty();
    }

    pub fn notify_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::info(text, self.tick_count));
        self.mark_dirty();
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::error(text, self.tick_count));
        self.mark_dirty();
    }

    /// Re-pull both stores. The two fetches are independent tasks and land
    /// in whatever order they complete.
    pub fn refresh_stores(&mut self) {
        tracing::debug!("refreshing user and leaderboard");
        self.refreshes_in_flight += 2;
        self.mark_dirty();

        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_user().await;
            let _ = tx.send(AppMessage::UserRefreshed(result));
        });

        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_leaderboard().await;
            let _ = tx.send(AppMessage::LeaderboardRefreshed(result));
        });
    }

    /// Read the file named in the path field in the background.
    ///
    /// Returns `false` when the field is blank.
    pub fn load_image(&mut self) -> bool {
        let Some(path) = utils::expand_path(&self.path_input) else {
            tracing::debug!("load requested with empty path");
            return false;
        };
        tracing::debug!(path = %path.display(), "loading image");

        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = RawImage::read(&path).await;
            let _ = tx.send(AppMessage::ImageLoaded { path, result });
        });
        true
    }

    /// Start a scan of the selected image.
    ///
    /// Rejections leave every piece of state untouched; the UI disables the
    /// action in those cases, so they are only logged.
    pub fn submit_scan(&mut self) -> Result<u64, PreconditionViolation> {
        let request = match self.scan.submit() {
            Ok(request) => request,
            Err(violation) => {
                tracing::debug!(reason = %violation, "scan submit ignored");
                return Err(violation);
            }
        };
        self.mark_dirty();

        let attempt = request.attempt;
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = api.scan(&request.payload).await;
            let _ = tx.send(AppMessage::ScanFinished { attempt, result });
        });
        Ok(attempt)
    }

    /// Wait for the next background completion and apply it.
    ///
    /// Returns `false` once the receiver has been taken by the event loop.
    pub async fn handle_next_message(&mut self) -> bool {
        let Some(rx) = self.message_rx.as_mut() else {
            return false;
        };
        match rx.recv().await {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }
}
