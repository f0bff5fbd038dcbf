//! Trainer account models

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::SchoolStatus;

/// School assigned to the signed-in trainer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignedSchool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub district_name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub total_days: u8,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub poc_name: String,
    #[serde(default)]
    pub poc_designation: String,
    #[serde(default)]
    pub poc_phone: String,
    #[serde(default)]
    pub principal_phone: String,
    #[serde(default)]
    pub co_trainer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub assigned_school: Option<AssignedSchool>,
}

/// Profile fields a trainer may change (sent as multipart)
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub profile_photo: Option<PathBuf>,
}

/// School as listed on the admin trainer roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerSchool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub district_name: String,
    pub status: SchoolStatus,
}

/// Trainer roster entry with submission counters (admin view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwinfyTrainer {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub schools: Vec<TrainerSchool>,
    #[serde(default)]
    pub total_submissions: u32,
    #[serde(default)]
    pub verified_submissions: u32,
    #[serde(default)]
    pub pending_submissions: u32,
    #[serde(default)]
    pub flagged_submissions: u32,
}
