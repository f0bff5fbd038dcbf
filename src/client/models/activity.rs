//! Activity log models

use serde::{Deserialize, Serialize};

/// Immutable activity feed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    /// Event kind, e.g. `submission_verified`
    pub activity_type: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Whether sponsors see this event in their feed
    #[serde(default)]
    pub is_uwh_visible: bool,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub timestamp: String,
}
