//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects: the
//! registry turns key events into commands and [`App::execute_command`]
//! applies them.
//!
//! [`App::execute_command`]: crate::app::App::execute_command

use crate::router::ViewState;

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, `q` on the Dashboard)
    Quit,
    /// Return to the Dashboard (Esc)
    NavigateHome,
    /// Switch to a screen
    Navigate(ViewState),
    /// Re-pull the user and leaderboard stores
    Refresh,

    // =========================================================================
    // Scanner Commands
    // =========================================================================
    /// Type a character into the path field
    InsertChar(char),
    /// Delete the last character of the path field
    Backspace,
    /// Clear the path field (Ctrl+U)
    ClearPath,
    /// Pasted text (bracketed paste) into the path field
    Paste(String),
    /// Read the file named in the path field (Enter)
    LoadImage,
    /// Upload the selected image (Ctrl+S)
    SubmitScan,

    // =========================================================================
    // Special Commands
    // =========================================================================
    /// Key recognised but deliberately ignored
    Noop,
}

impl Command {
    /// Returns true if this command may change what is on screen.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// Human-readable description (used by the footer's key hints).
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit",
            Command::NavigateHome => "Home",
            Command::Navigate(ViewState::Dashboard) => "Dashboard",
            Command::Navigate(ViewState::Scanner) => "Scan item",
            Command::Navigate(ViewState::Leaderboard) => "Leaderboard",
            Command::Navigate(ViewState::History) => "History",
            Command::Navigate(ViewState::RecyclingCenters) => "Recycling centers",
            Command::Refresh => "Refresh",
            Command::InsertChar(_) => "Insert character",
            Command::Backspace => "Delete character",
            Command::ClearPath => "Clear path",
            Command::Paste(_) => "Paste",
            Command::LoadImage => "Load image",
            Command::SubmitScan => "Scan",
            Command::Noop => "No operation",
        }
    }
}
