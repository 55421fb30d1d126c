//! Scanner screen view data.

use crate::image_source::PreviewHandle;
use crate::models::ScanResult;
use crate::state::ScanState;

/// What the Scanner screen draws.
#[derive(Debug, Clone, Copy)]
pub struct ScanViewState<'a> {
    /// Current text of the path field
    pub path_input: &'a str,
    /// Preview of the selected image
    pub selected: Option<&'a PreviewHandle>,
    pub state: &'a ScanState,
    /// Whether the scan action is enabled
    pub can_submit: bool,
}

impl<'a> ScanViewState<'a> {
    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn result(&self) -> Option<&'a ScanResult> {
        self.state.result()
    }
}
