//! Command registry for dispatching keyboard input to commands.
//!
//! Priority, highest first:
//! 1. Global bindings (Ctrl+C, Esc)
//! 2. Screen bindings
//! 3. Path editing and character input on the Scanner

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key means nothing here.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = normalize(key);

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if let Some(cmd) = self.config.get_view(context.view, &combo) {
            if *cmd == Command::SubmitScan && context.scan_pending {
                return Some(Command::Noop);
            }
            return Some(cmd.clone());
        }

        if context.is_text_entry() {
            return self.dispatch_path_editing(combo, context);
        }

        None
    }

    fn dispatch_path_editing(&self, combo: KeyCombo, context: &InputContext) -> Option<Command> {
        if let Some(cmd) = self.config.get_path_editing(&combo) {
            if *cmd == Command::Backspace && context.path_is_empty {
                return Some(Command::Noop);
            }
            return Some(cmd.clone());
        }

        match combo.code {
            KeyCode::Char(c)
                if !combo
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}

/// Drop SHIFT from character keys: crossterm reports `Char('S')` with SHIFT
/// on some terminals and without it on others.
fn normalize(key: KeyEvent) -> KeyCombo {
    match key.code {
        KeyCode::Char(_) => KeyCombo::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)),
        _ => KeyCombo::new(key.code, key.modifiers),
    }
}
