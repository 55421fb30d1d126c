//! Panic hook that hands the terminal back before the message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal restore in front of the current panic hook.
///
/// Call once in `main`, before [`TerminalManager::new`](super::TerminalManager::new),
/// so a panic inside the draw loop still leaves a usable shell.
///
/// ```no_run
/// greenlens::terminal::setup_panic_hook();
/// ```
pub fn setup_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        tracing::error!(panic = %info, "greenlens panicked");
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_installs() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }
}
