//! Header and footer shared by every screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::NoticeKind;
use crate::input::KeybindingConfig;
use crate::router::ViewState;
use crate::view_state::AppViewState;

use super::helpers::{format_clock, spinner_frame};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_WARN};

pub const APP_TITLE: &str = "GreenLens+";

pub fn render_header(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(40)])
        .split(inner);

    let mut title = vec![Span::styled(
        format!(" {}", APP_TITLE),
        Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
    )];
    if view.view != ViewState::Dashboard {
        title.push(Span::styled("  ·  ", Style::default().fg(COLOR_DIM)));
        title.push(Span::styled(
            view.view.title(),
            Style::default().fg(COLOR_ACCENT),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

    frame.render_widget(
        Paragraph::new(header_status(view)).alignment(Alignment::Right),
        chunks[1],
    );
}

fn header_status(view: &AppViewState) -> Line<'static> {
    let mut spans = Vec::new();
    if view.refreshing {
        spans.push(Span::styled(
            format!("{} syncing ", spinner_frame(view.tick_count)),
            Style::default().fg(COLOR_DIM),
        ));
    } else if view.is_stale() {
        let text = match view.synced_at {
            Some(at) => format!("offline: last sync {} ", format_clock(at)),
            None => "offline: showing last data ".to_string(),
        };
        spans.push(Span::styled(text, Style::default().fg(COLOR_WARN)));
    }
    if view.view != ViewState::Dashboard {
        spans.push(Span::styled("Esc: home ", Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    if let Some(notice) = view.notice {
        let color = match notice.kind {
            NoticeKind::Info => COLOR_BRAND,
            NoticeKind::Error => COLOR_ERROR,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", notice.text),
                Style::default().fg(color),
            ))),
            rows[0],
        );
    }

    let mut hints = Vec::new();
    for (i, (key, label)) in KeybindingConfig::hints(view.view).iter().enumerate() {
        if i > 0 {
            hints.push(Span::styled("  ", Style::default()));
        }
        hints.push(Span::styled(
            format!(" {}", key),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
        hints.push(Span::styled(format!(" {}", label), Style::default().fg(COLOR_DIM)));
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(32)])
        .split(rows[1]);
    frame.render_widget(Paragraph::new(Line::from(hints)), cols[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} ", view.base_url),
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Right),
        cols[1],
    );
}
