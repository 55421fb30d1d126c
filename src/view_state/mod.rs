//! View state module for decoupling UI rendering from application state.
//!
//! UI rendering is a pure function of data: the [`App`](crate::app::App)
//! lends out an [`AppViewState`] and the `ui` module draws from that alone,
//! so render code never reaches into the stores or the scan session.
//!
//! ```text
//!   App ──view_state()──▶ AppViewState<'_> ──▶ ui::render
//!  (owns)                    (borrows)          (pure)
//! ```
//!
//! - [`AppViewState`]: everything a frame needs
//! - [`ScanViewState`]: the Scanner's slice of it

mod app_view;
mod scan_view;

pub use app_view::AppViewState;
pub use scan_view::ScanViewState;
