//! Sponsor-facing control panel models

use serde::{Deserialize, Serialize};

/// Overall program status shown to the sponsor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramStatus {
    Active,
    Paused,
    Completed,
}

impl ProgramStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramStatus::Active => "active",
            ProgramStatus::Paused => "paused",
            ProgramStatus::Completed => "completed",
        }
    }
}

impl std::str::FromStr for ProgramStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProgramStatus::Active),
            "paused" => Ok(ProgramStatus::Paused),
            "completed" => Ok(ProgramStatus::Completed),
            other => Err(format!(
                "Unknown program status '{}' (expected active, paused, completed)",
                other
            )),
        }
    }
}

/// Admin view of what the sponsor sees (`GET /swinfy/uwh-control/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorControl {
    pub status: ProgramStatus,
    #[serde(default)]
    pub status_message: String,
    #[serde(default)]
    pub status_color: String,
    #[serde(default)]
    pub financial_summary: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub updated_at: String,
}

/// One-line status banner; also the body of the banner update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBanner {
    pub status: String,
    pub message: String,
    pub color: String,
}
