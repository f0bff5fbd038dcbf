//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use super::models::{
    AdminSummary, District, ProgramStatus, ProjectHighlight, ProjectStatus, SessionPhoto,
    PhotoStatus, SponsorControl, SponsorKpis, SponsorSummary, StatusBanner, Student, Submission,
    SubmissionStatus, TrainerProfile, TrainerSummary,
};

// ============================================================================
// SubmissionBuilder
// ============================================================================

/// Builder for creating test Submission instances.
///
/// # Example
/// ```ignore
/// let submission = SubmissionBuilder::new("sub-1")
///     .status(SubmissionStatus::Flagged)
///     .day(3)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct SubmissionBuilder {
    id: String,
    school_name: String,
    trainer_name: String,
    day_number: u8,
    student_count: u32,
    status: SubmissionStatus,
    photo_count: u32,
}

impl SubmissionBuilder {
    /// Create a submitted day-1 report with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            school_name: "ZPHS Gachibowli".to_string(),
            trainer_name: "Asha Rao".to_string(),
            day_number: 1,
            student_count: 42,
            status: SubmissionStatus::Submitted,
            photo_count: 3,
        }
    }

    pub fn status(mut self, status: SubmissionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn day(mut self, day: u8) -> Self {
        self.day_number = day;
        self
    }

    pub fn school_name(mut self, name: impl Into<String>) -> Self {
        self.school_name = name.into();
        self
    }

    pub fn trainer_name(mut self, name: impl Into<String>) -> Self {
        self.trainer_name = name.into();
        self
    }

    pub fn build(self) -> Submission {
        Submission {
            school: format!("school-{}", self.id),
            trainer: "trainer-1".to_string(),
            id: self.id,
            school_name: self.school_name,
            trainer_name: self.trainer_name,
            day_number: self.day_number,
            student_count: self.student_count,
            status: self.status,
            submitted_at: Some("2025-01-15T09:30:00Z".to_string()),
            photo_count: self.photo_count,
            project_count: 0,
            created_at: "2025-01-15T09:00:00Z".to_string(),
        }
    }
}

// ============================================================================
// PhotoBuilder
// ============================================================================

/// Builder for creating test SessionPhoto instances.
#[derive(Debug, Clone)]
pub struct PhotoBuilder {
    id: String,
    caption: String,
    status: PhotoStatus,
    featured: bool,
}

impl PhotoBuilder {
    /// Create a pending photo with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            caption: String::new(),
            status: PhotoStatus::Pending,
            featured: false,
        }
    }

    pub fn status(mut self, status: PhotoStatus) -> Self {
        self.status = status;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn build(self) -> SessionPhoto {
        SessionPhoto {
            image: Some(format!("/media/session_photos/{}.jpg", self.id)),
            image_url: Some(format!(
                "http://localhost:8000/media/session_photos/{}.jpg",
                self.id
            )),
            id: self.id,
            caption: self.caption,
            approval_status: self.status,
            is_featured: self.featured,
            rejection_reason: String::new(),
            uploaded_at: "2025-01-15T09:31:00Z".to_string(),
        }
    }
}

// ============================================================================
// ProjectBuilder
// ============================================================================

/// Builder for creating test ProjectHighlight instances.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    id: String,
    title: String,
    student_name: String,
    status: ProjectStatus,
}

impl ProjectBuilder {
    /// Create a pending project with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: format!("Project {}", &id),
            id,
            student_name: "Ravi Kumar".to_string(),
            status: ProjectStatus::Pending,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> ProjectHighlight {
        ProjectHighlight {
            id: self.id,
            student_name: self.student_name,
            student_age: Some(13),
            student_grade: "8".to_string(),
            title: self.title,
            description: "A chatbot that answers questions about local crops".to_string(),
            image: None,
            image_url: None,
            approval_status: self.status,
            rejection_reason: String::new(),
            uwh_description: String::new(),
            swinfy_notes: String::new(),
            display_description: String::new(),
            created_at: "2025-01-16T11:00:00Z".to_string(),
        }
    }
}

// ============================================================================
// StudentBuilder
// ============================================================================

/// Builder for creating test Student instances.
#[derive(Debug, Clone)]
pub struct StudentBuilder {
    id: String,
    name: String,
    grade: String,
}

impl StudentBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("Student {}", &id),
            id,
            grade: "7".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> Student {
        Student {
            id: self.id,
            name: self.name,
            age: Some(12),
            grade: self.grade,
            school: "school-1".to_string(),
            school_name: "ZPHS Gachibowli".to_string(),
            parent_name: String::new(),
            parent_phone: String::new(),
            notes: String::new(),
        }
    }
}

// ============================================================================
// Single-object fixtures
// ============================================================================

pub fn admin_summary() -> AdminSummary {
    AdminSummary {
        total_schools: 120,
        schools_completed: 45,
        total_students: 5400,
        students_trained: 2100,
        pending_submissions: 0,
        pending_photos: 0,
        pending_projects: 0,
    }
}

pub fn trainer_summary() -> TrainerSummary {
    TrainerSummary {
        assigned_schools: 1,
        submissions_count: 2,
        verified_count: 1,
        flagged_count: 0,
        student_count: 0,
        project_count: 0,
    }
}

pub fn status_banner() -> StatusBanner {
    StatusBanner {
        status: "active".to_string(),
        message: "Program running on schedule".to_string(),
        color: "green".to_string(),
    }
}

pub fn sponsor_summary() -> SponsorSummary {
    SponsorSummary {
        status_banner: status_banner(),
        kpis: SponsorKpis {
            total_schools: 120,
            schools_completed: 45,
            schools_in_progress: 30,
            total_students_trained: 2100,
            total_sessions: 310,
            total_districts: 6,
        },
        financial_summary: serde_json::Map::new(),
    }
}

pub fn sponsor_control() -> SponsorControl {
    SponsorControl {
        status: ProgramStatus::Active,
        status_message: "Program running on schedule".to_string(),
        status_color: "green".to_string(),
        financial_summary: serde_json::Map::new(),
        updated_at: "2025-01-15T08:00:00Z".to_string(),
    }
}

pub fn trainer_profile() -> TrainerProfile {
    TrainerProfile {
        id: "trainer-1".to_string(),
        email: "asha@example.org".to_string(),
        username: "Asha Rao".to_string(),
        profile_photo_url: None,
        assigned_school: None,
    }
}

pub fn district(id: &str, name: &str) -> District {
    District {
        id: id.to_string(),
        name: name.to_string(),
        state: "Telangana".to_string(),
        school_count: 20,
    }
}
