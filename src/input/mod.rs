//! Input handling module for keyboard and command processing.
//!
//! All input goes through the same path:
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! # Modules
//!
//! - [`command`] - The [`Command`] enum with all possible user actions
//! - [`context`] - [`InputContext`] for the state dispatch depends on
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands
//! - [`keybindings`] - Default key binding configuration

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crate::app::App;
use crate::router::ViewState;

impl App {
    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        InputContext::new(self.router.current())
            .with_scan_pending(self.scan.is_pending())
            .with_path_is_empty(self.path_input.is_empty())
    }

    /// Executes a command.
    ///
    /// Returns `true` if the command changed something.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::debug!(?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        match cmd {
            Command::Quit => {
                self.quit();
                true
            }
            Command::NavigateHome => {
                let was_home = self.router.is_home();
                self.navigate_home();
                !was_home
            }
            Command::Navigate(target) => {
                self.navigate(target);
                true
            }
            Command::Refresh => {
                self.refresh_stores();
                true
            }
            Command::InsertChar(c) => {
                self.path_input.push(c);
                true
            }
            Command::Backspace => self.path_input.pop().is_some(),
            Command::ClearPath => {
                let had_text = !self.path_input.is_empty();
                self.path_input.clear();
                had_text
            }
            Command::Paste(text) => {
                if self.router.current() != ViewState::Scanner {
                    return false;
                }
                // The path field is a single line.
                self.path_input
                    .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
                true
            }
            Command::LoadImage => {
                if self.load_image() {
                    true
                } else {
                    self.notify_info("Type the path of an image file, then press Enter.");
                    false
                }
            }
            Command::SubmitScan => self.submit_scan().is_ok(),
            Command::Noop => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::api::ApiClient;
    use crate::image_source::{select_image, RawImage};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;

    fn create_test_app() -> App {
        App::new(ApiClient::with_http(
            "http://greenlens.test",
            Arc::new(MockHttpClient::new()),
        ))
    }

    fn type_keys(app: &mut App, registry: &CommandRegistry, text: &str) {
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            if let Some(cmd) = registry.dispatch(key, &app.build_input_context()) {
                app.execute_command(cmd);
            }
        }
    }

    #[test]
    fn test_build_input_context_default() {
        let app = create_test_app();
        let ctx = app.build_input_context();
        assert_eq!(ctx.view, ViewState::Dashboard);
        assert!(!ctx.scan_pending);
        assert!(ctx.path_is_empty);
    }

    #[test]
    fn test_navigation_round_trip() {
        let mut app = create_test_app();
        assert!(app.execute_command(Command::Navigate(ViewState::History)));
        assert_eq!(app.current_view(), ViewState::History);
        assert!(app.execute_command(Command::NavigateHome));
        assert_eq!(app.current_view(), ViewState::Dashboard);
        assert!(!app.execute_command(Command::NavigateHome));
    }

    #[test]
    fn test_typing_on_scanner_fills_path() {
        let mut app = create_test_app();
        let registry = CommandRegistry::new();
        app.execute_command(Command::Navigate(ViewState::Scanner));

        type_keys(&mut app, &registry, "/tmp/q.png");

        assert_eq!(app.path_input, "/tmp/q.png");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_typing_on_dashboard_does_not_fill_path() {
        let mut app = create_test_app();
        let registry = CommandRegistry::new();
        type_keys(&mut app, &registry, "l");
        assert_eq!(app.current_view(), ViewState::Leaderboard);
        assert!(app.path_input.is_empty());
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut app = create_test_app();
        app.execute_command(Command::Navigate(ViewState::Scanner));
        app.execute_command(Command::Paste("/tmp/a.png\n".to_string()));
        assert_eq!(app.path_input, "/tmp/a.png");
    }

    #[test]
    fn test_paste_ignored_off_scanner() {
        let mut app = create_test_app();
        assert!(!app.execute_command(Command::Paste("x".to_string())));
        assert!(app.path_input.is_empty());
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = create_test_app();
        app.path_input = "ab".to_string();
        assert!(app.execute_command(Command::Backspace));
        assert_eq!(app.path_input, "a");
        assert!(app.execute_command(Command::ClearPath));
        assert!(!app.execute_command(Command::Backspace));
    }

    #[test]
    fn test_submit_without_image_is_ignored() {
        let mut app = create_test_app();
        assert!(!app.execute_command(Command::SubmitScan));
        assert!(!app.scan.is_pending());
    }

    #[tokio::test]
    async fn test_submit_with_image_goes_pending() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Hang);
        let mut app = App::new(ApiClient::with_http("http://greenlens.test", Arc::new(mock)));
        app.scan.select_image(select_image(Some(RawImage::new(
            "a.png",
            b"\x89PNG\r\n\x1a\n".to_vec(),
        ))));

        assert!(app.execute_command(Command::SubmitScan));
        assert!(app.scan.is_pending());
        assert!(app.build_input_context().scan_pending);
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        app.execute_command(Command::Quit);
        assert!(app.should_quit);
    }
}
