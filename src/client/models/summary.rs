//! Server-computed KPI rollups
//!
//! `GET /summary/` answers differently per role; each role reads its own shape.

use serde::{Deserialize, Serialize};

use super::StatusBanner;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    pub total_schools: u32,
    pub schools_completed: u32,
    pub total_students: u32,
    pub students_trained: u32,
    /// Size of the verification queue
    pub pending_submissions: u32,
    pub pending_photos: u32,
    pub pending_projects: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerSummary {
    pub assigned_schools: u32,
    pub submissions_count: u32,
    pub verified_count: u32,
    pub flagged_count: u32,
    pub student_count: u32,
    pub project_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorKpis {
    pub total_schools: u32,
    pub schools_completed: u32,
    pub schools_in_progress: u32,
    pub total_students_trained: u32,
    pub total_sessions: u32,
    pub total_districts: u32,
}

/// Dedicated sponsor summary (`GET /uwh/summary/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorSummary {
    pub status_banner: StatusBanner,
    pub kpis: SponsorKpis,
    #[serde(default)]
    pub financial_summary: serde_json::Map<String, serde_json::Value>,
}
