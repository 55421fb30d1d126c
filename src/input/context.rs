//! Input context for determining which commands are available.

use crate::router::ViewState;

/// The slice of application state key dispatch depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    /// Current screen
    pub view: ViewState,
    /// A scan is outstanding
    pub scan_pending: bool,
    /// The Scanner's path field is empty
    pub path_is_empty: bool,
}

impl InputContext {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            scan_pending: false,
            path_is_empty: true,
        }
    }

    pub fn with_scan_pending(mut self, pending: bool) -> Self {
        self.scan_pending = pending;
        self
    }

    pub fn with_path_is_empty(mut self, empty: bool) -> Self {
        self.path_is_empty = empty;
        self
    }

    /// Whether printable keys edit the path field instead of acting as
    /// shortcuts.
    pub fn is_text_entry(&self) -> bool {
        self.view == ViewState::Scanner
    }
}
