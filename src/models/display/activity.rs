//! Activity feed display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{opt_or_dash, truncate_string};
use crate::client::models::ActivityLogEntry;
use crate::output::formatters::format_relative;
use crate::program::activity_label;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ActivityDisplay {
    #[tabled(rename = "WHEN")]
    pub when: String,

    #[tabled(rename = "TYPE")]
    pub kind: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "BY")]
    pub by: String,
}

impl From<ActivityLogEntry> for ActivityDisplay {
    fn from(entry: ActivityLogEntry) -> Self {
        Self {
            when: format_relative(&entry.timestamp, chrono::Utc::now()),
            kind: activity_label(&entry.activity_type).to_string(),
            title: truncate_string(&entry.title, 60),
            by: opt_or_dash(entry.user_name.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_display_labels_type() {
        let entry = ActivityLogEntry {
            id: "a-1".to_string(),
            user: None,
            user_name: Some("Swinfy Admin".to_string()),
            activity_type: "submission_verified".to_string(),
            title: "Day 2 verified for ZPHS Gachibowli".to_string(),
            description: String::new(),
            is_uwh_visible: true,
            metadata: serde_json::Map::new(),
            thumbnail_url: None,
            timestamp: "2025-01-15T10:00:00Z".to_string(),
        };

        let display = ActivityDisplay::from(entry);

        assert_eq!(display.kind, "Verified");
        assert_eq!(display.by, "Swinfy Admin");
    }
}
