//! Admin (Swinfy) API trait
//!
//! Covers the verification queue, photo and project review, the trainer
//! roster, the activity log, and the control panel that drives what the
//! sponsor sees.

use async_trait::async_trait;

use crate::client::filters::{PhotoFilters, ProjectFilters, SubmissionFilters};
use crate::client::models::{
    ActionStatus, ActivityLogEntry, BulkResult, ProjectHighlight, Reason, SessionPhoto,
    SponsorControl, StatusBanner, Submission, SubmissionDetail, SwinfyTrainer,
};
use crate::error::Result;

#[async_trait]
pub trait AdminApi: Send + Sync {
    // ========================================================================
    // Submissions
    // ========================================================================

    async fn list_submissions(&self, filters: &SubmissionFilters) -> Result<Vec<Submission>>;

    async fn get_submission(&self, id: &str) -> Result<SubmissionDetail>;

    async fn verify_submission(&self, id: &str, notes: Option<&str>) -> Result<ActionStatus>;

    async fn flag_submission(&self, id: &str, reason: &Reason) -> Result<ActionStatus>;

    async fn reject_submission(&self, id: &str, reason: &Reason) -> Result<ActionStatus>;

    // ========================================================================
    // Photos
    // ========================================================================

    async fn list_photos(&self, filters: &PhotoFilters) -> Result<Vec<SessionPhoto>>;

    async fn approve_photo(&self, id: &str) -> Result<ActionStatus>;

    /// Approve and mark as featured in the sponsor gallery
    async fn feature_photo(&self, id: &str) -> Result<ActionStatus>;

    async fn reject_photo(&self, id: &str, reason: Option<&str>) -> Result<ActionStatus>;

    async fn delete_photo(&self, id: &str) -> Result<()>;

    /// Approve many photos in one request
    async fn bulk_approve_photos(&self, ids: &[String]) -> Result<BulkResult>;

    /// Reject many photos in one request
    async fn bulk_reject_photos(&self, ids: &[String], reason: &Reason) -> Result<BulkResult>;

    // ========================================================================
    // Projects
    // ========================================================================

    async fn list_projects(&self, filters: &ProjectFilters) -> Result<Vec<ProjectHighlight>>;

    async fn approve_project(&self, id: &str) -> Result<ActionStatus>;

    async fn feature_project(&self, id: &str) -> Result<ActionStatus>;

    async fn reject_project(&self, id: &str, reason: Option<&str>) -> Result<ActionStatus>;

    /// Set the sponsor-facing description and internal notes of a project
    async fn edit_project_for_sponsor(
        &self,
        id: &str,
        description: &str,
        notes: Option<&str>,
    ) -> Result<ProjectHighlight>;

    // ========================================================================
    // Roster, activity, control panel
    // ========================================================================

    async fn list_trainers(&self, district: Option<&str>) -> Result<Vec<SwinfyTrainer>>;

    async fn activity_log(&self) -> Result<Vec<ActivityLogEntry>>;

    async fn sponsor_control(&self) -> Result<SponsorControl>;

    async fn update_status_banner(&self, banner: &StatusBanner) -> Result<SponsorControl>;

    async fn update_financial_summary(
        &self,
        data: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<SponsorControl>;
}
