use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::RECYCLING_CENTERS;
use crate::router::ViewState;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM};

pub fn render_centers(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", ViewState::RecyclingCenters.title()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines: Vec<Line> = RECYCLING_CENTERS
        .iter()
        .map(|center| {
            Line::from(vec![
                Span::styled(
                    format!(" {}", center.name),
                    Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" — ", Style::default().fg(COLOR_DIM)),
                Span::raw(center.address),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
