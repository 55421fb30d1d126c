use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::router::ViewState;
use crate::view_state::AppViewState;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_HIGHLIGHT_BG, COLOR_WARN};

pub fn render_leaderboard(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", ViewState::Leaderboard.title()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    if view.leaderboard.is_empty() {
        let (text, color) = if view.leaderboard_error.is_some() {
            (" Leaderboard unavailable. Press r to retry.", COLOR_WARN)
        } else if view.leaderboard_loaded {
            (" Nobody has scanned anything yet.", COLOR_DIM)
        } else {
            (" Loading...", COLOR_DIM)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(color))).block(block),
            area,
        );
        return;
    }

    let me = view.user_name();
    let rows: Vec<Row> = view
        .leaderboard
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let row = Row::new(vec![
                Cell::from(format!(" {}.", i + 1)),
                Cell::from(entry.name.clone()),
                Cell::from(format!("{} pts", entry.points)),
            ]);
            if me == Some(entry.name.as_str()) {
                row.style(
                    Style::default()
                        .bg(COLOR_HIGHLIGHT_BG)
                        .fg(COLOR_BRAND)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(12),
            Constraint::Length(12),
        ],
    )
    .block(block);
    frame.render_widget(table, area);
}
