//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for formatting and common UI patterns.

use chrono::{DateTime, Local, TimeZone, Utc};
use ratatui::layout::Rect;

/// Spinner frames for the pending scan
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Format a kilogram figure the way the backend's numbers read: whole
/// numbers without decimals, otherwise at most two decimals.
/// `5.0 -> "5"`, `0.5 -> "0.5"`, `1.256 -> "1.26"`.
pub fn format_kg(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Render epoch seconds as local date and time.
pub fn format_timestamp(epoch_secs: i64) -> String {
    match Local.timestamp_opt(epoch_secs, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => epoch_secs.to_string(),
    }
}

/// Local wall-clock time of day, `HH:MM`.
pub fn format_clock(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

/// Truncate to at most `max_chars` characters, adding "..." if truncated.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}
