//! Districts, schools and curriculum

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub school_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl SchoolStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SchoolStatus::NotStarted => "Not Started",
            SchoolStatus::InProgress => "In Progress",
            SchoolStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub district_name: String,
    pub status: SchoolStatus,
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub assigned_trainer: Option<String>,
    #[serde(default)]
    pub trainer_name: Option<String>,
    #[serde(default)]
    pub total_days: u8,
}

/// One curriculum day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    pub id: String,
    pub day_number: u8,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
}

/// Per-district school completion rollup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictProgress {
    pub id: String,
    pub name: String,
    pub total_schools: u32,
    pub completed: u32,
    pub in_progress: u32,
}
