//! Raw terminal mode switching.
//!
//! GreenLens only needs two terminal features beyond raw mode: the alternate
//! screen, so the shell scrollback survives, and bracketed paste, so a dropped
//! file path arrives as one `Event::Paste` instead of a burst of key presses.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch `writer` to the alternate screen with bracketed paste on.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Undo [`enter_tui_mode`] and raw mode.
///
/// Errors are ignored: this runs from `Drop` and from the panic hook, where
/// there is nobody left to report to. Safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout, for paths that no longer own the terminal.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
