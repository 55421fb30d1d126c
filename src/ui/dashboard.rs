//! Dashboard: running totals and the way to every other screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::router::ViewState;
use crate::view_state::AppViewState;

use super::helpers::format_kg;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_WARN};

/// Menu entries in display order.
const MENU: [(&str, ViewState, &str); 4] = [
    ("s", ViewState::Scanner, "Scan Item"),
    ("l", ViewState::Leaderboard, "Leaderboard"),
    ("c", ViewState::RecyclingCenters, "Recycling Centers"),
    ("h", ViewState::History, "History"),
];

pub fn render_dashboard(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(area);

    render_impact(frame, chunks[0], view);
    render_menu(frame, chunks[1]);
}

fn render_impact(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", ViewState::Dashboard.title()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let value_style = Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::raw("  Eco-Points: "),
            Span::styled(view.user.eco_points.to_string(), value_style),
        ]),
        Line::from(vec![
            Span::raw("  CO₂ Saved:  "),
            Span::styled(format!("{} kg", format_kg(view.user.co2_saved)), value_style),
        ]),
    ];

    if !view.user_loaded {
        let note = if view.user_error.is_some() {
            Span::styled(
                "  Could not reach the server yet. Press r to retry.",
                Style::default().fg(COLOR_WARN),
            )
        } else {
            Span::styled("  Loading...", Style::default().fg(COLOR_DIM))
        };
        lines.push(Line::from(""));
        lines.push(Line::from(note));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_menu(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines: Vec<Line> = MENU
        .iter()
        .map(|(key, _, label)| {
            Line::from(vec![
                Span::styled(
                    format!("  [{}] ", key),
                    Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*label, Style::default().fg(COLOR_ACCENT)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Command, KeybindingConfig, KeyCombo};
    use crossterm::event::KeyCode;

    #[test]
    fn test_menu_keys_match_bindings() {
        let config = KeybindingConfig::new();
        for (key, target, _) in MENU {
            let c = key.chars().next().unwrap();
            assert_eq!(
                config.get_view(ViewState::Dashboard, &KeyCombo::plain(KeyCode::Char(c))),
                Some(&Command::Navigate(target))
            );
        }
    }
}
