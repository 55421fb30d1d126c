use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::ScanRecord;
use crate::router::ViewState;
use crate::view_state::AppViewState;

use super::helpers::{format_kg, format_timestamp};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM};

pub fn render_history(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", ViewState::History.title()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    if view.user.history.is_empty() {
        let text = if view.user_loaded { " No scans yet." } else { " Loading..." };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM))).block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = view.user.history_newest_first().map(history_item).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn history_item(record: &ScanRecord) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {}", record.kind),
                Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {}", record.info)),
        ]),
        Line::from(Span::styled(
            format!(
                "   +{} pts | {} kg CO₂ | {}",
                record.points,
                format_kg(record.co2),
                format_timestamp(record.timestamp)
            ),
            Style::default().fg(COLOR_DIM),
        )),
    ])
}
