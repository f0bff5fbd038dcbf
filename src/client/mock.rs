//! Mock dashboard API client for testing
//!
//! Keeps an in-memory copy of the backend state so that mutations are
//! visible to later reads: verifying a submission changes its status and
//! shrinks the pending count in the admin summary, the way the real backend
//! does.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AdminApi, AuthApi, SharedApi, SponsorApi, TrainerApi};
use super::filters::{PhotoFilters, ProjectFilters, SponsorFilters, SubmissionFilters};
use super::fixtures;
use super::models::{
    AccountUser, ActionStatus, ActivityLogEntry, AdminSummary, BulkResult, Curriculum, District,
    DistrictProgress, Gallery, LoginResponse, NewProject, NewSubmission, PhotoStatus,
    ProfileUpdate, ProgramStatus, ProjectHighlight, ProjectStatus, Reason, School, SessionPhoto,
    SponsorControl, SponsorSummary, StatusBanner, Student, StudentForm, Submission,
    SubmissionDetail, SubmissionStatus, SwinfyTrainer, TrainerGalleryPhoto, TrainerProfile,
    TrainerSummary,
};
use crate::error::{ApiError, Result};
use crate::session::{Role, SessionStore};

/// Mock API client for testing.
///
/// Configure state via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockDashboardClient::new()
///     .with_submissions(vec![SubmissionBuilder::new("sub-1").build()])
///     .await;
///
/// let queue = mock.list_submissions(&SubmissionFilters::default()).await?;
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Default)]
pub struct MockDashboardClient {
    state: Arc<Mutex<MockState>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Delay applied to every call, for overlapping-request tests
    latency: Arc<Mutex<Option<Duration>>>,
    /// Session terminated on a configured 401, like the HTTP client does
    session: Option<SessionStore>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Backend state held by the mock
struct MockState {
    summary: AdminSummary,
    trainer_summary: TrainerSummary,
    sponsor_summary: SponsorSummary,
    control: SponsorControl,
    profile: TrainerProfile,
    submissions: Vec<Submission>,
    photos: Vec<SessionPhoto>,
    projects: Vec<ProjectHighlight>,
    students: Vec<Student>,
    districts: Vec<District>,
    schools: Vec<School>,
    curriculum: Vec<Curriculum>,
    trainers: Vec<SwinfyTrainer>,
    activity: Vec<ActivityLogEntry>,
    progress: Vec<DistrictProgress>,
    next_id: usize,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            summary: fixtures::admin_summary(),
            trainer_summary: fixtures::trainer_summary(),
            sponsor_summary: fixtures::sponsor_summary(),
            control: fixtures::sponsor_control(),
            profile: fixtures::trainer_profile(),
            submissions: Vec::new(),
            photos: Vec::new(),
            projects: Vec::new(),
            students: Vec::new(),
            districts: Vec::new(),
            schools: Vec::new(),
            curriculum: Vec::new(),
            trainers: Vec::new(),
            activity: Vec::new(),
            progress: Vec::new(),
            next_id: 1,
        }
    }
}

impl MockState {
    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{}-{}", prefix, self.next_id);
        self.next_id += 1;
        id
    }

    fn submission_mut(&mut self, id: &str) -> Result<&mut Submission> {
        self.submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Submission not found: {}", id)).into())
    }

    fn photo_mut(&mut self, id: &str) -> Result<&mut SessionPhoto> {
        self.photos
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Photo not found: {}", id)).into())
    }

    fn project_mut(&mut self, id: &str) -> Result<&mut ProjectHighlight> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Project not found: {}", id)).into())
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Status filter semantics of the review endpoints: `all` means no filter.
fn status_matches(filter: Option<&str>, status: &str) -> bool {
    match filter.map(str::trim) {
        None | Some("") | Some("all") => true,
        Some(wanted) => wanted == status,
    }
}

fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

fn acknowledged(status: &str) -> ActionStatus {
    ActionStatus {
        status: status.to_string(),
    }
}

fn detail_of(submission: &Submission) -> SubmissionDetail {
    SubmissionDetail {
        id: submission.id.clone(),
        school: submission.school.clone(),
        school_name: submission.school_name.clone(),
        trainer: submission.trainer.clone(),
        trainer_name: submission.trainer_name.clone(),
        day_number: submission.day_number,
        curriculum: None,
        student_count: submission.student_count,
        topics_covered: Vec::new(),
        trainer_notes: String::new(),
        challenges: String::new(),
        attendance_file: None,
        status: submission.status,
        verified_by: None,
        verified_at: None,
        flag_reason: String::new(),
        rejection_reason: String::new(),
        swinfy_notes: String::new(),
        submitted_at: submission.submitted_at.clone(),
        photos: Vec::new(),
        project_highlights: Vec::new(),
    }
}

/// Tracks API call counts per method for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    by_method: HashMap<&'static str, usize>,
}

impl CallCounts {
    /// Number of calls to one API method.
    pub fn get(&self, method: &str) -> usize {
        self.by_method.get(method).copied().unwrap_or(0)
    }

    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.by_method.values().sum()
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "list_photos", "bulk_approve_photos")
    pub method: &'static str,
    /// Entity ids the call targeted
    pub ids: Vec<String>,
    /// Query parameters, exactly as they would be sent
    pub params: Vec<(&'static str, String)>,
}

impl MockDashboardClient {
    /// Create a new mock client with fixture defaults and empty lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminate `session` whenever the mock answers 401.
    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    pub async fn with_submissions(self, submissions: Vec<Submission>) -> Self {
        self.state.lock().await.submissions = submissions;
        self
    }

    pub async fn with_photos(self, photos: Vec<SessionPhoto>) -> Self {
        self.state.lock().await.photos = photos;
        self
    }

    pub async fn with_projects(self, projects: Vec<ProjectHighlight>) -> Self {
        self.state.lock().await.projects = projects;
        self
    }

    pub async fn with_students(self, students: Vec<Student>) -> Self {
        self.state.lock().await.students = students;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Queue an error for the next call on an already-shared mock.
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    /// Delay every call by `latency`.
    pub async fn with_latency(self, latency: Duration) -> Self {
        *self.latency.lock().await = Some(latency);
        self
    }

    /// Add a pending photo after construction, as another reviewer's upload would.
    pub async fn push_photo(&self, photo: SessionPhoto) {
        self.state.lock().await.photos.push(photo);
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Count, capture, and apply any configured latency or error.
    async fn enter(
        &self,
        method: &'static str,
        ids: &[&str],
        params: Vec<(&'static str, String)>,
    ) -> Result<()> {
        *self
            .call_count
            .lock()
            .await
            .by_method
            .entry(method)
            .or_default() += 1;

        self.captured_requests.lock().await.push(CapturedRequest {
            method,
            ids: ids.iter().map(|s| s.to_string()).collect(),
            params,
        });

        let latency = *self.latency.lock().await;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let error = self.error.lock().await.take();
        if let Some(e) = error {
            if e == ApiError::Unauthorized {
                if let Some(ref session) = self.session {
                    session.terminate();
                }
            }
            return Err(e.into());
        }

        Ok(())
    }
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockDashboardClient {
    async fn login(&self, email: &str, _password: &str) -> Result<LoginResponse> {
        self.enter("login", &[], Vec::new()).await?;

        let exp = (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp();
        Ok(LoginResponse {
            user: AccountUser {
                id: "user-1".to_string(),
                email: email.to_string(),
                username: "Mock User".to_string(),
                role: Role::Admin,
                profile_photo_url: None,
            },
            access: crate::session::make_test_jwt(exp),
            refresh: "mock-refresh".to_string(),
        })
    }
}

// ============================================================================
// SharedApi Implementation
// ============================================================================

#[async_trait]
impl SharedApi for MockDashboardClient {
    async fn admin_summary(&self) -> Result<AdminSummary> {
        self.enter("admin_summary", &[], Vec::new()).await?;

        let state = self.state.lock().await;
        let mut summary = state.summary.clone();
        summary.pending_submissions = count(
            state
                .submissions
                .iter()
                .filter(|s| s.status == SubmissionStatus::Submitted)
                .count(),
        );
        summary.pending_photos = count(
            state
                .photos
                .iter()
                .filter(|p| p.approval_status == PhotoStatus::Pending)
                .count(),
        );
        summary.pending_projects = count(
            state
                .projects
                .iter()
                .filter(|p| p.approval_status == ProjectStatus::Pending)
                .count(),
        );
        Ok(summary)
    }

    async fn trainer_summary(&self) -> Result<TrainerSummary> {
        self.enter("trainer_summary", &[], Vec::new()).await?;

        let state = self.state.lock().await;
        let mut summary = state.trainer_summary.clone();
        summary.student_count = count(state.students.len());
        summary.submissions_count = count(state.submissions.len());
        Ok(summary)
    }

    async fn districts(&self) -> Result<Vec<District>> {
        self.enter("districts", &[], Vec::new()).await?;
        Ok(self.state.lock().await.districts.clone())
    }

    async fn schools(&self, district: Option<&str>) -> Result<Vec<School>> {
        let params = super::filters::district_params(district);
        self.enter("schools", &[], params.clone()).await?;

        let state = self.state.lock().await;
        Ok(state
            .schools
            .iter()
            .filter(|s| param(&params, "district").is_none_or(|d| s.district == d))
            .cloned()
            .collect())
    }

    async fn curriculum(&self) -> Result<Vec<Curriculum>> {
        self.enter("curriculum", &[], Vec::new()).await?;
        Ok(self.state.lock().await.curriculum.clone())
    }
}

// ============================================================================
// AdminApi Implementation
// ============================================================================

#[async_trait]
impl AdminApi for MockDashboardClient {
    async fn list_submissions(&self, filters: &SubmissionFilters) -> Result<Vec<Submission>> {
        let params = filters.to_query_params();
        self.enter("list_submissions", &[], params.clone()).await?;

        let state = self.state.lock().await;
        let day = param(&params, "day");
        Ok(state
            .submissions
            .iter()
            .filter(|s| status_matches(param(&params, "status"), s.status.as_str()))
            .filter(|s| day.is_none_or(|d| s.day_number.to_string() == d))
            .cloned()
            .collect())
    }

    async fn get_submission(&self, id: &str) -> Result<SubmissionDetail> {
        self.enter("get_submission", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        Ok(detail_of(state.submission_mut(id)?))
    }

    async fn verify_submission(&self, id: &str, _notes: Option<&str>) -> Result<ActionStatus> {
        self.enter("verify_submission", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        state.submission_mut(id)?.status = SubmissionStatus::Verified;
        Ok(acknowledged("verified"))
    }

    async fn flag_submission(&self, id: &str, _reason: &Reason) -> Result<ActionStatus> {
        self.enter("flag_submission", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        state.submission_mut(id)?.status = SubmissionStatus::Flagged;
        Ok(acknowledged("flagged"))
    }

    async fn reject_submission(&self, id: &str, _reason: &Reason) -> Result<ActionStatus> {
        self.enter("reject_submission", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        state.submission_mut(id)?.status = SubmissionStatus::Rejected;
        Ok(acknowledged("rejected"))
    }

    async fn list_photos(&self, filters: &PhotoFilters) -> Result<Vec<SessionPhoto>> {
        let params = filters.to_query_params();
        self.enter("list_photos", &[], params.clone()).await?;

        let state = self.state.lock().await;
        Ok(state
            .photos
            .iter()
            .filter(|p| status_matches(param(&params, "status"), p.approval_status.as_str()))
            .cloned()
            .collect())
    }

    async fn approve_photo(&self, id: &str) -> Result<ActionStatus> {
        self.enter("approve_photo", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        state.photo_mut(id)?.approval_status = PhotoStatus::Approved;
        Ok(acknowledged("approved"))
    }

    async fn feature_photo(&self, id: &str) -> Result<ActionStatus> {
        self.enter("feature_photo", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        let photo = state.photo_mut(id)?;
        photo.approval_status = PhotoStatus::Approved;
        photo.is_featured = true;
        Ok(acknowledged("featured"))
    }

    async fn reject_photo(&self, id: &str, reason: Option<&str>) -> Result<ActionStatus> {
        self.enter("reject_photo", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        let photo = state.photo_mut(id)?;
        photo.approval_status = PhotoStatus::Rejected;
        photo.rejection_reason = reason.unwrap_or_default().to_string();
        Ok(acknowledged("rejected"))
    }

    async fn delete_photo(&self, id: &str) -> Result<()> {
        self.enter("delete_photo", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        let before = state.photos.len();
        state.photos.retain(|p| p.id != id);
        if state.photos.len() == before {
            return Err(ApiError::NotFound(format!("Photo not found: {}", id)).into());
        }
        Ok(())
    }

    async fn bulk_approve_photos(&self, ids: &[String]) -> Result<BulkResult> {
        let targets: Vec<&str> = ids.iter().map(String::as_str).collect();
        self.enter("bulk_approve_photos", &targets, Vec::new())
            .await?;

        let mut state = self.state.lock().await;
        let mut approved = 0;
        for photo in state.photos.iter_mut().filter(|p| ids.contains(&p.id)) {
            photo.approval_status = PhotoStatus::Approved;
            approved += 1;
        }
        Ok(BulkResult {
            approved: Some(approved),
            rejected: None,
        })
    }

    async fn bulk_reject_photos(&self, ids: &[String], reason: &Reason) -> Result<BulkResult> {
        let targets: Vec<&str> = ids.iter().map(String::as_str).collect();
        self.enter("bulk_reject_photos", &targets, Vec::new())
            .await?;

        let mut state = self.state.lock().await;
        let mut rejected = 0;
        for photo in state.photos.iter_mut().filter(|p| ids.contains(&p.id)) {
            photo.approval_status = PhotoStatus::Rejected;
            photo.rejection_reason = reason.to_string();
            rejected += 1;
        }
        Ok(BulkResult {
            approved: None,
            rejected: Some(rejected),
        })
    }

    async fn list_projects(&self, filters: &ProjectFilters) -> Result<Vec<ProjectHighlight>> {
        let params = filters.to_query_params();
        self.enter("list_projects", &[], params.clone()).await?;

        let state = self.state.lock().await;
        Ok(state
            .projects
            .iter()
            .filter(|p| status_matches(param(&params, "status"), p.approval_status.as_str()))
            .cloned()
            .collect())
    }

    async fn approve_project(&self, id: &str) -> Result<ActionStatus> {
        self.enter("approve_project", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        state.project_mut(id)?.approval_status = ProjectStatus::Approved;
        Ok(acknowledged("approved"))
    }

    async fn feature_project(&self, id: &str) -> Result<ActionStatus> {
        self.enter("feature_project", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        state.project_mut(id)?.approval_status = ProjectStatus::Featured;
        Ok(acknowledged("featured"))
    }

    async fn reject_project(&self, id: &str, reason: Option<&str>) -> Result<ActionStatus> {
        self.enter("reject_project", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        let project = state.project_mut(id)?;
        project.approval_status = ProjectStatus::Rejected;
        project.rejection_reason = reason.unwrap_or_default().to_string();
        Ok(acknowledged("rejected"))
    }

    async fn edit_project_for_sponsor(
        &self,
        id: &str,
        description: &str,
        notes: Option<&str>,
    ) -> Result<ProjectHighlight> {
        self.enter("edit_project_for_sponsor", &[id], Vec::new())
            .await?;
        let mut state = self.state.lock().await;
        let project = state.project_mut(id)?;
        project.uwh_description = description.to_string();
        project.display_description = description.to_string();
        if let Some(notes) = notes {
            project.swinfy_notes = notes.to_string();
        }
        Ok(project.clone())
    }

    async fn list_trainers(&self, district: Option<&str>) -> Result<Vec<SwinfyTrainer>> {
        let params = super::filters::district_params(district);
        self.enter("list_trainers", &[], params).await?;
        Ok(self.state.lock().await.trainers.clone())
    }

    async fn activity_log(&self) -> Result<Vec<ActivityLogEntry>> {
        self.enter("activity_log", &[], Vec::new()).await?;
        Ok(self.state.lock().await.activity.clone())
    }

    async fn sponsor_control(&self) -> Result<SponsorControl> {
        self.enter("sponsor_control", &[], Vec::new()).await?;
        Ok(self.state.lock().await.control.clone())
    }

    async fn update_status_banner(&self, banner: &StatusBanner) -> Result<SponsorControl> {
        self.enter("update_status_banner", &[], Vec::new()).await?;

        let status: ProgramStatus = banner.status.parse().map_err(ApiError::BadRequest)?;
        let mut state = self.state.lock().await;
        state.control.status = status;
        state.control.status_message = banner.message.clone();
        state.control.status_color = banner.color.clone();
        state.sponsor_summary.status_banner = banner.clone();
        Ok(state.control.clone())
    }

    async fn update_financial_summary(
        &self,
        data: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<SponsorControl> {
        self.enter("update_financial_summary", &[], Vec::new())
            .await?;
        let mut state = self.state.lock().await;
        state.control.financial_summary = data.clone();
        state.sponsor_summary.financial_summary = data.clone();
        Ok(state.control.clone())
    }
}

// ============================================================================
// SponsorApi Implementation
// ============================================================================

#[async_trait]
impl SponsorApi for MockDashboardClient {
    async fn sponsor_summary(&self, filters: &SponsorFilters) -> Result<SponsorSummary> {
        self.enter("sponsor_summary", &[], filters.to_query_params())
            .await?;
        Ok(self.state.lock().await.sponsor_summary.clone())
    }

    async fn gallery(&self, filters: &SponsorFilters) -> Result<Gallery> {
        self.enter("gallery", &[], filters.to_query_params())
            .await?;

        let state = self.state.lock().await;
        let (featured, photos): (Vec<SessionPhoto>, Vec<SessionPhoto>) = state
            .photos
            .iter()
            .filter(|p| p.approval_status == PhotoStatus::Approved)
            .cloned()
            .partition(|p| p.is_featured);
        Ok(Gallery { featured, photos })
    }

    async fn sponsor_projects(&self, filters: &SponsorFilters) -> Result<Vec<ProjectHighlight>> {
        self.enter("sponsor_projects", &[], filters.to_query_params())
            .await?;

        let state = self.state.lock().await;
        Ok(state
            .projects
            .iter()
            .filter(|p| {
                matches!(
                    p.approval_status,
                    ProjectStatus::Approved | ProjectStatus::Featured
                )
            })
            .cloned()
            .collect())
    }

    async fn activity_feed(&self) -> Result<Vec<ActivityLogEntry>> {
        self.enter("activity_feed", &[], Vec::new()).await?;

        let state = self.state.lock().await;
        Ok(state
            .activity
            .iter()
            .filter(|a| a.is_uwh_visible)
            .cloned()
            .collect())
    }

    async fn district_progress(&self) -> Result<Vec<DistrictProgress>> {
        self.enter("district_progress", &[], Vec::new()).await?;
        Ok(self.state.lock().await.progress.clone())
    }
}

// ============================================================================
// TrainerApi Implementation
// ============================================================================

#[async_trait]
impl TrainerApi for MockDashboardClient {
    async fn trainer_submissions(&self) -> Result<Vec<Submission>> {
        self.enter("trainer_submissions", &[], Vec::new()).await?;
        Ok(self.state.lock().await.submissions.clone())
    }

    async fn trainer_submission(&self, id: &str) -> Result<SubmissionDetail> {
        self.enter("trainer_submission", &[id], Vec::new()).await?;
        let mut state = self.state.lock().await;
        Ok(detail_of(state.submission_mut(id)?))
    }

    async fn submit_session(&self, submission: &NewSubmission) -> Result<SubmissionDetail> {
        submission.validate()?;
        self.enter("submit_session", &[], Vec::new()).await?;

        let mut state = self.state.lock().await;
        let id = state.next_id("sub");
        let created = Submission {
            id,
            school: submission.school.clone(),
            school_name: String::new(),
            trainer: state.profile.id.clone(),
            trainer_name: state.profile.username.clone(),
            day_number: submission.day_number,
            student_count: submission.student_count,
            status: SubmissionStatus::Submitted,
            submitted_at: Some(chrono::Utc::now().to_rfc3339()),
            photo_count: count(submission.photos.len()),
            project_count: 0,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        let detail = detail_of(&created);
        state.submissions.push(created);
        Ok(detail)
    }

    async fn add_project(
        &self,
        submission_id: &str,
        project: &NewProject,
    ) -> Result<ProjectHighlight> {
        self.enter("add_project", &[submission_id], Vec::new())
            .await?;

        let mut state = self.state.lock().await;
        state.submission_mut(submission_id)?.project_count += 1;
        let id = state.next_id("proj");
        let created = ProjectHighlight {
            id,
            student_name: project.student_name.clone(),
            student_age: project.student_age,
            student_grade: project.student_grade.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            image: None,
            image_url: None,
            approval_status: ProjectStatus::Pending,
            rejection_reason: String::new(),
            uwh_description: String::new(),
            swinfy_notes: String::new(),
            display_description: project.description.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        state.projects.push(created.clone());
        Ok(created)
    }

    async fn trainer_students(&self) -> Result<Vec<Student>> {
        self.enter("trainer_students", &[], Vec::new()).await?;
        Ok(self.state.lock().await.students.clone())
    }

    async fn add_student(&self, form: &StudentForm) -> Result<Student> {
        self.enter("add_student", &[], Vec::new()).await?;

        let mut state = self.state.lock().await;
        let id = state.next_id("st");
        let student = Student {
            id,
            name: form.name.clone().unwrap_or_default(),
            age: form.age,
            grade: form.grade.clone().unwrap_or_default(),
            school: String::new(),
            school_name: String::new(),
            parent_name: form.parent_name.clone().unwrap_or_default(),
            parent_phone: form.parent_phone.clone().unwrap_or_default(),
            notes: form.notes.clone().unwrap_or_default(),
        };
        state.students.push(student.clone());
        Ok(student)
    }

    async fn update_student(&self, id: &str, form: &StudentForm) -> Result<Student> {
        self.enter("update_student", &[id], Vec::new()).await?;

        let mut state = self.state.lock().await;
        let student = state
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Student not found: {}", id)))?;
        if let Some(ref name) = form.name {
            student.name = name.clone();
        }
        if form.age.is_some() {
            student.age = form.age;
        }
        if let Some(ref grade) = form.grade {
            student.grade = grade.clone();
        }
        if let Some(ref notes) = form.notes {
            student.notes = notes.clone();
        }
        Ok(student.clone())
    }

    async fn delete_student(&self, id: &str) -> Result<()> {
        self.enter("delete_student", &[id], Vec::new()).await?;

        let mut state = self.state.lock().await;
        let before = state.students.len();
        state.students.retain(|s| s.id != id);
        if state.students.len() == before {
            return Err(ApiError::NotFound(format!("Student not found: {}", id)).into());
        }
        Ok(())
    }

    async fn trainer_projects(&self) -> Result<Vec<ProjectHighlight>> {
        self.enter("trainer_projects", &[], Vec::new()).await?;
        Ok(self.state.lock().await.projects.clone())
    }

    async fn trainer_gallery(&self) -> Result<Vec<TrainerGalleryPhoto>> {
        self.enter("trainer_gallery", &[], Vec::new()).await?;

        let state = self.state.lock().await;
        Ok(state
            .photos
            .iter()
            .map(|p| TrainerGalleryPhoto {
                id: p.id.clone(),
                image_url: p.image_url.clone(),
                caption: p.caption.clone(),
                approval_status: p.approval_status,
                is_featured: p.is_featured,
                rejection_reason: p.rejection_reason.clone(),
                uploaded_at: p.uploaded_at.clone(),
                school_name: String::new(),
                day_number: 1,
            })
            .collect())
    }

    async fn trainer_profile(&self) -> Result<TrainerProfile> {
        self.enter("trainer_profile", &[], Vec::new()).await?;
        Ok(self.state.lock().await.profile.clone())
    }

    async fn update_trainer_profile(&self, update: &ProfileUpdate) -> Result<TrainerProfile> {
        self.enter("update_trainer_profile", &[], Vec::new())
            .await?;

        let mut state = self.state.lock().await;
        if let Some(ref username) = update.username {
            state.profile.username = username.clone();
        }
        Ok(state.profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{PhotoBuilder, SubmissionBuilder};
    use crate::session::test_session;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockDashboardClient::new();

        let submissions = mock
            .list_submissions(&SubmissionFilters::default())
            .await
            .unwrap();
        assert!(submissions.is_empty());

        let summary = mock.admin_summary().await.unwrap();
        assert_eq!(summary.pending_submissions, 0);
    }

    #[tokio::test]
    async fn test_verify_updates_summary() {
        let mock = MockDashboardClient::new()
            .with_submissions(vec![
                SubmissionBuilder::new("sub-1").build(),
                SubmissionBuilder::new("sub-2").build(),
            ])
            .await;

        assert_eq!(mock.admin_summary().await.unwrap().pending_submissions, 2);

        let ack = mock.verify_submission("sub-1", None).await.unwrap();
        assert_eq!(ack.status, "verified");
        assert_eq!(mock.admin_summary().await.unwrap().pending_submissions, 1);
    }

    #[tokio::test]
    async fn test_photo_status_filter() {
        let mock = MockDashboardClient::new()
            .with_photos(vec![
                PhotoBuilder::new("p-1").build(),
                PhotoBuilder::new("p-2").status(PhotoStatus::Approved).build(),
            ])
            .await;

        let pending = mock.list_photos(&PhotoFilters::default()).await.unwrap();
        assert_eq!(pending.len(), 1);

        let all = mock
            .list_photos(&PhotoFilters::with_status("all"))
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockDashboardClient::new()
            .with_error(ApiError::Forbidden)
            .await;

        let result = mock.districts().await;
        assert!(matches!(
            result,
            Err(crate::error::Error::Api(ApiError::Forbidden))
        ));

        // Error is consumed
        assert!(mock.districts().await.is_ok());
    }

    #[tokio::test]
    async fn test_unauthorized_terminates_attached_session() {
        let session = SessionStore::with_session(test_session(Role::Admin));
        let mock = MockDashboardClient::new()
            .with_session(session.clone())
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(mock.activity_log().await.is_err());
        assert!(!session.is_active());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockDashboardClient::new();

        mock.districts().await.unwrap();
        mock.districts().await.unwrap();
        mock.curriculum().await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.get("districts"), 2);
        assert_eq!(counts.get("curriculum"), 1);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_client_captured_requests() {
        let mock = MockDashboardClient::new();
        let filters = SubmissionFilters {
            status: Some("flagged".to_string()),
            district: Some(" ".to_string()),
            ..SubmissionFilters::default()
        };
        mock.list_submissions(&filters).await.unwrap();

        let captured = mock.captured_requests().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].method, "list_submissions");
        assert_eq!(captured[0].params, vec![("status", "flagged".to_string())]);
    }

    #[tokio::test]
    async fn test_delete_missing_student_is_not_found() {
        let mock = MockDashboardClient::new();
        let result = mock.delete_student("st-404").await;
        assert!(matches!(
            result,
            Err(crate::error::Error::Api(ApiError::NotFound(_)))
        ));
    }
}
