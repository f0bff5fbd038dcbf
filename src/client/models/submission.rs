//! Session submission models

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ProjectHighlight, SessionPhoto};
use crate::error::{Error, Result};

/// Lifecycle state of a trainer's session report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    Verified,
    Flagged,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "draft",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Verified => "verified",
            SubmissionStatus::Flagged => "flagged",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "Draft",
            SubmissionStatus::Submitted => "Submitted",
            SubmissionStatus::Verified => "Verified",
            SubmissionStatus::Flagged => "Flagged",
            SubmissionStatus::Rejected => "Rejected",
        }
    }
}

/// Submission as listed in queues and history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub school_name: String,
    #[serde(default)]
    pub trainer: String,
    #[serde(default)]
    pub trainer_name: String,
    pub day_number: u8,
    #[serde(default)]
    pub student_count: u32,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub photo_count: u32,
    #[serde(default)]
    pub project_count: u32,
    #[serde(default)]
    pub created_at: String,
}

/// Full submission with media
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionDetail {
    pub id: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub school_name: String,
    #[serde(default)]
    pub trainer: String,
    #[serde(default)]
    pub trainer_name: String,
    pub day_number: u8,
    #[serde(default)]
    pub curriculum: Option<String>,
    #[serde(default)]
    pub student_count: u32,
    #[serde(default)]
    pub topics_covered: Vec<String>,
    #[serde(default)]
    pub trainer_notes: String,
    #[serde(default)]
    pub challenges: String,
    #[serde(default)]
    pub attendance_file: Option<String>,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub verified_by: Option<String>,
    #[serde(default)]
    pub verified_at: Option<String>,
    #[serde(default)]
    pub flag_reason: String,
    #[serde(default)]
    pub rejection_reason: String,
    #[serde(default)]
    pub swinfy_notes: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub photos: Vec<SessionPhoto>,
    #[serde(default)]
    pub project_highlights: Vec<ProjectHighlight>,
}

/// Acknowledgement returned by single-entity review actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionStatus {
    pub status: String,
}

/// Count of rows touched by a bulk photo action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected: Option<u32>,
}

/// Photos a session report must carry
pub const MIN_SESSION_PHOTOS: usize = 3;
pub const MAX_SESSION_PHOTOS: usize = 5;
/// Curriculum length in days
pub const CURRICULUM_DAYS: u8 = 4;

/// Trainer's daily session report (sent as multipart)
#[derive(Debug, Clone, Default)]
pub struct NewSubmission {
    pub school: String,
    pub day_number: u8,
    /// Curriculum id matching `day_number`, if known
    pub curriculum: Option<String>,
    pub student_count: u32,
    pub topics_covered: Vec<String>,
    pub trainer_notes: String,
    pub challenges: String,
    pub photos: Vec<PathBuf>,
    pub attendance_file: Option<PathBuf>,
}

impl NewSubmission {
    /// Check the form before anything is uploaded.
    pub fn validate(&self) -> Result<()> {
        if self.school.trim().is_empty() {
            return Err(Error::Validation("school is required".to_string()));
        }
        if !(1..=CURRICULUM_DAYS).contains(&self.day_number) {
            return Err(Error::Validation(format!(
                "day must be between 1 and {}",
                CURRICULUM_DAYS
            )));
        }
        if self.student_count == 0 {
            return Err(Error::Validation(
                "student count must be at least 1".to_string(),
            ));
        }
        if self.photos.len() < MIN_SESSION_PHOTOS {
            return Err(Error::Validation(format!(
                "at least {} photos are required",
                MIN_SESSION_PHOTOS
            )));
        }
        if self.photos.len() > MAX_SESSION_PHOTOS {
            return Err(Error::Validation(format!(
                "at most {} photos are allowed",
                MAX_SESSION_PHOTOS
            )));
        }
        Ok(())
    }
}
