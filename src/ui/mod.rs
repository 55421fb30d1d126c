//! UI rendering for GreenLens+
//!
//! Every frame has the same frame of chrome:
//! - Header with the app title, current screen and sync status
//! - Body drawn by the active screen
//! - Footer with the transient notice and key hints
//!
//! Rendering reads only from [`AppViewState`]; nothing here mutates the app.

mod centers;
mod chrome;
mod dashboard;
mod helpers;
mod history;
mod leaderboard;
mod scanner;
mod theme;

pub use chrome::APP_TITLE;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::router::ViewState;
use crate::view_state::AppViewState;

use centers::render_centers;
use chrome::{render_footer, render_header};
use dashboard::render_dashboard;
use helpers::inner_rect;
use history::render_history;
use leaderboard::render_leaderboard;
use scanner::render_scanner;

/// Render one frame for the active screen.
pub fn render(frame: &mut Frame, view: &AppViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view);

    let body = inner_rect(chunks[1], 1);
    match view.view {
        ViewState::Dashboard => render_dashboard(frame, body, view),
        ViewState::Scanner => render_scanner(frame, body, view),
        ViewState::Leaderboard => render_leaderboard(frame, body, view),
        ViewState::History => render_history(frame, body, view),
        ViewState::RecyclingCenters => render_centers(frame, body),
    }

    render_footer(frame, chunks[2], view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::api::ApiClient;
    use crate::app::App;
    use crate::error::ApiError;
    use crate::image_source::{select_image, RawImage};
    use crate::models::{Classification, LeaderboardEntry, ScanRecord, User};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn create_test_app() -> App {
        App::new(ApiClient::with_http(
            "http://greenlens.test",
            Arc::new(MockHttpClient::new()),
        ))
    }

    fn loaded_app() -> App {
        let mut app = create_test_app();
        app.user.apply(Ok(User {
            name: Some("You".to_string()),
            eco_points: 40,
            co2_saved: 13.0,
            history: vec![
                ScanRecord {
                    kind: "plastic".to_string(),
                    info: "Rinse and dry before recycling.".to_string(),
                    points: 20,
                    co2: 5.0,
                    timestamp: 1_700_000_000,
                },
                ScanRecord {
                    kind: "glass".to_string(),
                    info: "Remove labels and lids.".to_string(),
                    points: 20,
                    co2: 8.0,
                    timestamp: 1_700_000_100,
                },
            ],
        }));
        app.leaderboard.apply(Ok(vec![
            LeaderboardEntry {
                name: "Ada".to_string(),
                points: 120,
            },
            LeaderboardEntry {
                name: "You".to_string(),
                points: 40,
            },
        ]));
        app
    }

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                render(f, &app.view_state());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_dashboard_shows_totals_and_menu() {
        let app = loaded_app();
        let screen = render_to_string(&app);
        assert!(screen.contains(APP_TITLE));
        assert!(screen.contains("Eco-Points: 40"));
        assert!(screen.contains("CO₂ Saved:  13 kg"));
        assert!(screen.contains("[s] Scan Item"));
        assert!(screen.contains("[c] Recycling Centers"));
        assert!(!screen.contains("Loading..."));
    }

    #[test]
    fn test_dashboard_before_first_fetch() {
        let app = create_test_app();
        let screen = render_to_string(&app);
        assert!(screen.contains("Eco-Points: 0"));
        assert!(screen.contains("Loading..."));
    }

    #[test]
    fn test_stale_marker_after_failed_refresh() {
        let mut app = loaded_app();
        app.user.apply(Err(ApiError::Transport {
            url: "http://greenlens.test/api/user".to_string(),
            message: "connection refused".to_string(),
        }));
        let screen = render_to_string(&app);
        assert!(screen.contains("offline: last sync "));
        // Last good values stay on screen.
        assert!(screen.contains("Eco-Points: 40"));
    }

    #[test]
    fn test_stale_marker_without_any_sync() {
        let mut app = create_test_app();
        app.leaderboard.apply(Err(ApiError::Transport {
            url: "http://greenlens.test/api/leaderboard".to_string(),
            message: "connection refused".to_string(),
        }));
        let view = app.view_state();
        assert!(view.synced_at.is_none());
        assert!(render_to_string(&app).contains("offline: showing last data"));
    }

    #[test]
    fn test_synced_at_is_the_older_store() {
        let app = loaded_app();
        let view = app.view_state();
        let user_at = app.user.last_refreshed().unwrap();
        let board_at = app.leaderboard.last_refreshed().unwrap();
        assert_eq!(view.synced_at, Some(user_at.min(board_at)));
    }

    #[test]
    fn test_leaderboard_ranks_in_server_order() {
        let mut app = loaded_app();
        app.navigate(ViewState::Leaderboard);
        let screen = render_to_string(&app);
        let ada = screen.find("1.").unwrap();
        let you = screen.find("2.").unwrap();
        assert!(ada < you);
        assert!(screen.contains("Ada"));
        assert!(screen.contains("120 pts"));
        assert!(screen.contains("Esc: home"));
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut app = loaded_app();
        app.navigate(ViewState::History);
        let screen = render_to_string(&app);
        let glass = screen.find("glass").unwrap();
        let plastic = screen.find("plastic").unwrap();
        assert!(glass < plastic);
        assert!(screen.contains("+20 pts | 8 kg CO₂"));
    }

    #[test]
    fn test_history_empty() {
        let mut app = create_test_app();
        app.user.apply(Ok(User::default()));
        app.navigate(ViewState::History);
        assert!(render_to_string(&app).contains("No scans yet."));
    }

    #[test]
    fn test_centers_listed() {
        let mut app = create_test_app();
        app.navigate(ViewState::RecyclingCenters);
        let screen = render_to_string(&app);
        assert!(screen.contains("Eco Hub — 123 Green St"));
        assert!(screen.contains("Community Center — 456 Oak Ave"));
    }

    #[test]
    fn test_scanner_without_image() {
        let mut app = create_test_app();
        app.navigate(ViewState::Scanner);
        let screen = render_to_string(&app);
        assert!(screen.contains("No image selected"));
        assert!(screen.contains("select an image first"));
    }

    #[test]
    fn test_scanner_shows_result_card() {
        let mut app = create_test_app();
        app.navigate(ViewState::Scanner);
        app.scan.select_image(select_image(Some(RawImage::new(
            "bottle.png",
            b"\x89PNG\r\n\x1a\nbottle".to_vec(),
        ))));
        app.scan.submit().unwrap();
        app.scan.complete(Ok(Classification {
            kind: "Plastic".to_string(),
            info: "Recyclable bottle".to_string(),
            points: 10,
            co2: 0.5,
        }));

        let screen = render_to_string(&app);
        assert!(screen.contains("bottle.png"));
        assert!(screen.contains("Plastic"));
        assert!(screen.contains("Recyclable bottle"));
        assert!(screen.contains("+10 points | 0.5 kg CO₂ saved"));
    }

    #[test]
    fn test_scanner_pending_shows_spinner_text() {
        let mut app = create_test_app();
        app.navigate(ViewState::Scanner);
        app.scan.select_image(select_image(Some(RawImage::new(
            "bottle.png",
            b"\x89PNG\r\n\x1a\nbottle".to_vec(),
        ))));
        app.scan.submit().unwrap();
        assert!(render_to_string(&app).contains("Scanning..."));
    }

    #[test]
    fn test_notice_in_footer() {
        let mut app = create_test_app();
        app.notify_error("File not found: /tmp/missing.png");
        assert!(render_to_string(&app).contains("File not found: /tmp/missing.png"));
    }
}
