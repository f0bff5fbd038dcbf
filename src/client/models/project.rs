//! Student project highlight models

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Review state of a project highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Pending,
    Approved,
    Featured,
    Rejected,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::Approved => "approved",
            ProjectStatus::Featured => "featured",
            ProjectStatus::Rejected => "rejected",
        }
    }
}

/// Student project artifact attached to a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectHighlight {
    pub id: String,
    pub student_name: String,
    #[serde(default)]
    pub student_age: Option<u8>,
    #[serde(default)]
    pub student_grade: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub approval_status: ProjectStatus,
    #[serde(default)]
    pub rejection_reason: String,
    /// Sponsor-facing description written by the admin
    #[serde(default)]
    pub uwh_description: String,
    #[serde(default)]
    pub swinfy_notes: String,
    /// What the sponsor actually sees
    #[serde(default)]
    pub display_description: String,
    #[serde(default)]
    pub created_at: String,
}

/// Trainer form for a new project highlight (sent as multipart)
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub student_name: String,
    pub student_age: Option<u8>,
    pub student_grade: String,
    pub title: String,
    pub description: String,
    pub image: Option<PathBuf>,
}
