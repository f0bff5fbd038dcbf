//! Reusable formatting utilities for CLI output
//!
//! The backend sends RFC 3339 timestamps; these helpers turn them into short
//! local times and relative ages.

use chrono::{DateTime, Local, Utc};

/// Parse an RFC 3339 timestamp from the API.
fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format an API timestamp as a local date and time.
///
/// Returns "--" if the timestamp is empty or invalid.
///
/// # Example output
/// `15 Jan 2025 15:00`
pub fn format_timestamp_local(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => dt.with_timezone(&Local).format("%d %b %Y %H:%M").to_string(),
        None => "--".to_string(),
    }
}

/// Age of an API timestamp relative to `now`.
///
/// # Example output
/// - `just now` (under a minute)
/// - `5m ago`, `3h ago`, `2d ago`
pub fn format_relative(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(dt) = parse_timestamp(timestamp) else {
        return "--".to_string();
    };

    let age = now.signed_duration_since(dt);
    if age.num_minutes() < 1 {
        "just now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m ago", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h ago", age.num_hours())
    } else {
        format!("{}d ago", age.num_days())
    }
}

/// `done/total (pct%)`, with 0% for an empty total.
pub fn format_progress(done: u32, total: u32) -> String {
    let pct = if total == 0 { 0 } else { done * 100 / total };
    format!("{}/{} ({}%)", done, total, pct)
}
