//! Default keybindings for the application.
//!
//! Maps key combinations to commands, globally and per screen.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::router::ViewState;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active
    pub global: HashMap<KeyCombo, Command>,
    /// Per screen, checked after global
    pub view: HashMap<ViewState, HashMap<KeyCombo, Command>>,
    /// Editing keys for the Scanner's path field
    pub path_editing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            view: HashMap::new(),
            path_editing: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_view_bindings();
        config.setup_path_editing_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Esc), Command::NavigateHome);
    }

    fn setup_view_bindings(&mut self) {
        let mut dashboard = HashMap::new();
        for (keys, target) in [
            (['s', '1'], ViewState::Scanner),
            (['l', '2'], ViewState::Leaderboard),
            (['c', '3'], ViewState::RecyclingCenters),
            (['h', '4'], ViewState::History),
        ] {
            for key in keys {
                dashboard.insert(KeyCombo::plain(KeyCode::Char(key)), Command::Navigate(target));
            }
        }
        dashboard.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Refresh);
        self.view.insert(ViewState::Dashboard, dashboard);

        for view in [
            ViewState::Leaderboard,
            ViewState::History,
            ViewState::RecyclingCenters,
        ] {
            let mut bindings = HashMap::new();
            bindings.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Refresh);
            self.view.insert(view, bindings);
        }

        let mut scanner = HashMap::new();
        scanner.insert(KeyCombo::plain(KeyCode::Enter), Command::LoadImage);
        scanner.insert(KeyCombo::ctrl(KeyCode::Char('s')), Command::SubmitScan);
        scanner.insert(KeyCombo::ctrl(KeyCode::Char('r')), Command::Refresh);
        self.view.insert(ViewState::Scanner, scanner);
    }

    fn setup_path_editing_bindings(&mut self) {
        self.path_editing
            .insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        self.path_editing
            .insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearPath);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_view(&self, view: ViewState, combo: &KeyCombo) -> Option<&Command> {
        self.view.get(&view).and_then(|m| m.get(combo))
    }

    pub fn get_path_editing(&self, combo: &KeyCombo) -> Option<&Command> {
        self.path_editing.get(combo)
    }

    /// Key hints for the footer: `(key label, description)` for the given
    /// screen, in display order.
    pub fn hints(view: ViewState) -> &'static [(&'static str, &'static str)] {
        match view {
            ViewState::Dashboard => &[
                ("s", "scan"),
                ("l", "leaderboard"),
                ("c", "centers"),
                ("h", "history"),
                ("r", "refresh"),
                ("q", "quit"),
            ],
            ViewState::Scanner => &[
                ("Enter", "load image"),
                ("Ctrl+S", "scan"),
                ("Ctrl+R", "refresh"),
                ("Esc", "home"),
            ],
            ViewState::Leaderboard | ViewState::History | ViewState::RecyclingCenters => {
                &[("r", "refresh"), ("Esc", "home"), ("Ctrl+C", "quit")]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_combo_ctrl() {
        let combo = KeyCombo::ctrl(KeyCode::Char('s'));
        assert_eq!(combo.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_global_bindings() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::ctrl(KeyCode::Char('c'))),
            Some(&Command::Quit)
        );
        assert_eq!(
            config.get_global(&KeyCombo::plain(KeyCode::Esc)),
            Some(&Command::NavigateHome)
        );
    }

    #[test]
    fn test_dashboard_reaches_every_screen() {
        let config = KeybindingConfig::new();
        for (key, target) in [
            ('s', ViewState::Scanner),
            ('2', ViewState::Leaderboard),
            ('c', ViewState::RecyclingCenters),
            ('4', ViewState::History),
        ] {
            assert_eq!(
                config.get_view(ViewState::Dashboard, &KeyCombo::plain(KeyCode::Char(key))),
                Some(&Command::Navigate(target))
            );
        }
    }

    #[test]
    fn test_refresh_bound_outside_scanner() {
        let config = KeybindingConfig::new();
        let r = KeyCombo::plain(KeyCode::Char('r'));
        for view in ViewState::ALL {
            let expected = if view == ViewState::Scanner {
                None
            } else {
                Some(&Command::Refresh)
            };
            assert_eq!(config.get_view(view, &r), expected, "{view}");
        }
    }

    #[test]
    fn test_every_view_has_hints() {
        for view in ViewState::ALL {
            assert!(!KeybindingConfig::hints(view).is_empty());
        }
    }
}
