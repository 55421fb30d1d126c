//! Color theme constants for the GreenLens UI

use ratatui::style::Color;

/// Border color for panels
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Brand color for the header and positive figures
pub const COLOR_BRAND: Color = Color::Rgb(46, 160, 67);

/// Highlights and enabled actions
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Successful classification
pub const COLOR_SUCCESS: Color = Color::LightGreen;

/// Unknown classification and errors
pub const COLOR_ERROR: Color = Color::Red;

/// Stale data and in-progress indicators
pub const COLOR_WARN: Color = Color::Yellow;

/// Row highlight for the user's own leaderboard entry
pub const COLOR_HIGHLIGHT_BG: Color = Color::Rgb(20, 50, 30);
