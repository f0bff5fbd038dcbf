//! Common display utilities and helpers

use colored::{ColoredString, Colorize};

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// `--` for empty values, so table cells never collapse
pub fn or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        "--".to_string()
    } else {
        s.to_string()
    }
}

pub fn opt_or_dash(s: Option<&str>) -> String {
    or_dash(s.unwrap_or_default())
}

/// Colour a review status wire name by outcome.
pub fn status_badge(status: &str) -> ColoredString {
    let label = crate::program::status_label(status);
    match status {
        "verified" | "approved" | "completed" | "active" => label.green(),
        "featured" => label.purple(),
        "flagged" | "paused" => label.yellow(),
        "rejected" => label.red(),
        "submitted" | "pending" | "in_progress" => label.cyan(),
        _ => label.dimmed(),
    }
}
