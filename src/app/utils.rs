//! Utility functions for the application.

use std::path::PathBuf;

/// Turn the path field's text into a filesystem path.
///
/// Surrounding whitespace and one pair of matching quotes are stripped
/// (terminals often quote dropped files) and a leading `~` expands to the
/// home directory.
pub(crate) fn expand_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);
    if unquoted.is_empty() {
        return None;
    }

    if unquoted == "~" {
        return dirs::home_dir().or_else(|| Some(PathBuf::from(unquoted)));
    }
    if let Some(rest) = unquoted.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Some(home.join(rest));
        }
    }
    Some(PathBuf::from(unquoted))
}
