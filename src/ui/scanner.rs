//! Scanner screen: path entry, preview, scan action and the result card.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::image_source::PreviewHandle;
use crate::models::ScanResult;
use crate::router::ViewState;
use crate::view_state::{AppViewState, ScanViewState};

use super::helpers::{format_kg, spinner_frame, truncate_string};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS, COLOR_WARN,
};

const PATH_PLACEHOLDER: &str = "Type or paste an image path, then press Enter";

pub fn render_scanner(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let scan = &view.scan;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // path field
            Constraint::Length(5), // preview
            Constraint::Length(1), // action
            Constraint::Min(5),    // result
        ])
        .split(area);

    render_path_field(frame, chunks[0], scan);
    render_preview(frame, chunks[1], scan.selected);
    frame.render_widget(Paragraph::new(action_line(scan, view.tick_count)), chunks[2]);
    if let Some(result) = scan.result() {
        render_result(frame, chunks[3], result);
    }
}

fn render_path_field(frame: &mut Frame, area: Rect, scan: &ScanViewState) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", ViewState::Scanner.title()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);

    let content = if scan.path_input.is_empty() {
        Line::from(Span::styled(
            format!(" {}", PATH_PLACEHOLDER),
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        Line::from(Span::raw(format!(" {}", scan.path_input)))
    };
    frame.render_widget(Paragraph::new(content).block(block), area);

    // Keep the cursor at the end of the text, clamped to the field.
    let typed = u16::try_from(scan.path_input.width()).unwrap_or(u16::MAX);
    let x = inner.x + typed.saturating_add(1).min(inner.width.saturating_sub(1));
    frame.set_cursor_position(Position::new(x, inner.y));
}

fn render_preview(frame: &mut Frame, area: Rect, selected: Option<&PreviewHandle>) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines = match selected {
        None => vec![Line::from(Span::styled(
            " No image selected",
            Style::default().fg(COLOR_DIM),
        ))],
        Some(preview) => {
            let dims = preview
                .dimensions
                .map(|(w, h)| format!("{}×{}", w, h))
                .unwrap_or_else(|| "unknown size".to_string());
            vec![
                Line::from(Span::styled(
                    format!(" {}", truncate_string(&preview.file_name, 60)),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::raw(format!(
                    " {} · {} · {} bytes",
                    preview.mime, dims, preview.byte_len
                ))),
                Line::from(Span::styled(
                    format!(" sha256 {}", preview.short_fingerprint()),
                    Style::default().fg(COLOR_DIM),
                )),
            ]
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn action_line(scan: &ScanViewState, tick: u64) -> Line<'static> {
    if scan.is_pending() {
        return Line::from(Span::styled(
            format!(" {} Scanning...", spinner_frame(tick)),
            Style::default().fg(COLOR_WARN),
        ));
    }
    if scan.can_submit {
        Line::from(vec![
            Span::styled(
                " [Ctrl+S] ",
                Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Scan", Style::default().fg(COLOR_ACCENT)),
        ])
    } else {
        Line::from(Span::styled(
            " [Ctrl+S] Scan (select an image first)",
            Style::default().fg(COLOR_DIM),
        ))
    }
}

fn render_result(frame: &mut Frame, area: Rect, result: &ScanResult) {
    let kind_color = if result.is_unknown() {
        COLOR_ERROR
    } else {
        COLOR_SUCCESS
    };
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(kind_color));

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", result.kind()),
            Style::default().fg(kind_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!(" {}", result.info()))),
        Line::from(Span::styled(
            format!(
                " +{} points | {} kg CO₂ saved",
                result.points(),
                format_kg(result.co2())
            ),
            Style::default().fg(COLOR_BRAND),
        )),
        Line::from(Span::styled(
            format!(" {}", result.image.summary()),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
