//! Dashboard REST client
//!
//! Every request goes through [`DashboardClient::dispatch`], which paces the
//! request, attaches the bearer token from the shared [`SessionStore`], and
//! maps the response status onto [`ApiError`]. A 401 ends the session before
//! the error is returned. Nothing is retried.

use std::num::NonZeroU32;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::api::{AdminApi, AuthApi, SharedApi, SponsorApi, TrainerApi};
use super::filters::{
    PhotoFilters, ProjectFilters, SponsorFilters, SubmissionFilters, district_params,
};
use super::models::{
    ActionStatus, ActivityLogEntry, AdminSummary, BulkResult, Curriculum, District,
    DistrictProgress, Gallery, LoginResponse, NewProject, NewSubmission, ProfileUpdate,
    ProjectHighlight, Reason, School, SessionPhoto, SponsorControl, SponsorSummary, StatusBanner,
    Student, StudentForm, Submission, SubmissionDetail, SwinfyTrainer, TrainerGalleryPhoto,
    TrainerProfile, TrainerSummary,
};
use crate::error::{ApiError, Error, Result};
use crate::session::SessionStore;

/// Prefix of every dashboard endpoint
const DASHBOARD: &str = "/api/dashboard";

/// Token endpoint
const LOGIN_PATH: &str = "/api/auth/login/";

/// Client-side pacing shared by every call made through one client
const REQUESTS_PER_SECOND: NonZeroU32 = NonZeroU32::new(10).unwrap();

type Params = [(&'static str, String)];

/// Authenticated client for the dashboard API
pub struct DashboardClient {
    http: HttpClient,
    base_url: String,
    session: SessionStore,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl DashboardClient {
    /// Create a client for the API at `base_url`, reading credentials from `session`.
    pub fn new(base_url: &str, session: SessionStore) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            rate_limiter: Arc::new(RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND))),
        })
    }

    /// The session store this client reads its token from
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request with an optional JSON body and query parameters.
    ///
    /// Empty parameter lists add no query string at all.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &Params,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = self.http.request(method, self.url(path));
        if !params.is_empty() {
            builder = builder.query(params);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.dispatch(builder).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None, params).await
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(method, path, Some(body), &[]).await
    }

    async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T> {
        let builder = self.http.request(method, self.url(path)).multipart(form);
        self.dispatch(builder).await
    }

    /// Pace, authenticate, send, and decode one request.
    async fn dispatch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let builder = match self.session.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        log::debug!("{} {}", status.as_u16(), response.url().path());

        if status.is_success() {
            let bytes = response.bytes().await.map_err(ApiError::from)?;
            return decode_body(&bytes);
        }

        match status {
            StatusCode::UNAUTHORIZED => {
                self.session.terminate();
                Err(ApiError::Unauthorized.into())
            }
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into()),
        }
    }
}

/// Decode a success body; an empty body (204) decodes as JSON `null`.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let parsed = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };
    parsed.map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
    })
}

/// Read a file into a multipart part named after the file.
async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(Part::bytes(bytes).file_name(file_name))
}

async fn submission_form(submission: &NewSubmission) -> Result<Form> {
    let mut form = Form::new()
        .text("school", submission.school.clone())
        .text("day_number", submission.day_number.to_string())
        .text("student_count", submission.student_count.to_string())
        .text(
            "topics_covered",
            serde_json::to_string(&submission.topics_covered)?,
        )
        .text("trainer_notes", submission.trainer_notes.clone())
        .text("challenges", submission.challenges.clone());

    if let Some(ref curriculum) = submission.curriculum {
        form = form.text("curriculum", curriculum.clone());
    }
    for photo in &submission.photos {
        form = form.part("photos", file_part(photo).await?);
    }
    if let Some(ref attendance) = submission.attendance_file {
        form = form.part("attendance_file", file_part(attendance).await?);
    }
    Ok(form)
}

async fn project_form(project: &NewProject) -> Result<Form> {
    let mut form = Form::new()
        .text("student_name", project.student_name.clone())
        .text("student_grade", project.student_grade.clone())
        .text("title", project.title.clone())
        .text("description", project.description.clone());

    if let Some(age) = project.student_age {
        form = form.text("student_age", age.to_string());
    }
    if let Some(ref image) = project.image {
        form = form.part("image", file_part(image).await?);
    }
    Ok(form)
}

async fn profile_form(update: &ProfileUpdate) -> Result<Form> {
    let mut form = Form::new();
    if let Some(ref username) = update.username {
        form = form.text("username", username.clone());
    }
    if let Some(ref photo) = update.profile_photo {
        form = form.part("profile_photo", file_part(photo).await?);
    }
    Ok(form)
}

#[async_trait]
impl AuthApi for DashboardClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.rate_limiter.until_ready().await;

        // Bypasses dispatch: a rejected login is bad input, not an expired session
        let response = self
            .http
            .post(self.url(LOGIN_PATH))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if matches!(status, StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED) {
            return Err(ApiError::BadRequest("Invalid email or password".to_string()).into());
        }
        if !status.is_success() {
            return Err(ApiError::ServerError(format!("Login failed with status {}", status)).into());
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&response_text).map_err(|e| {
            Error::from(ApiError::InvalidResponse(format!(
                "Failed to parse login response: {}",
                e
            )))
        })
    }
}

#[async_trait]
impl SharedApi for DashboardClient {
    async fn admin_summary(&self) -> Result<AdminSummary> {
        self.get(&format!("{DASHBOARD}/summary/"), &[]).await
    }

    async fn trainer_summary(&self) -> Result<TrainerSummary> {
        self.get(&format!("{DASHBOARD}/summary/"), &[]).await
    }

    async fn districts(&self) -> Result<Vec<District>> {
        self.get(&format!("{DASHBOARD}/districts/"), &[]).await
    }

    async fn schools(&self, district: Option<&str>) -> Result<Vec<School>> {
        self.get(&format!("{DASHBOARD}/schools/"), &district_params(district))
            .await
    }

    async fn curriculum(&self) -> Result<Vec<Curriculum>> {
        self.get(&format!("{DASHBOARD}/curriculum/"), &[]).await
    }
}

#[async_trait]
impl AdminApi for DashboardClient {
    async fn list_submissions(&self, filters: &SubmissionFilters) -> Result<Vec<Submission>> {
        self.get(
            &format!("{DASHBOARD}/swinfy/submissions/"),
            &filters.to_query_params(),
        )
        .await
    }

    async fn get_submission(&self, id: &str) -> Result<SubmissionDetail> {
        self.get(&format!("{DASHBOARD}/swinfy/submissions/{id}/"), &[])
            .await
    }

    async fn verify_submission(&self, id: &str, notes: Option<&str>) -> Result<ActionStatus> {
        let path = format!("{DASHBOARD}/swinfy/submissions/{id}/verify/");
        self.send(Method::PATCH, &path, &json!({ "notes": notes.unwrap_or_default() }))
            .await
    }

    async fn flag_submission(&self, id: &str, reason: &Reason) -> Result<ActionStatus> {
        let path = format!("{DASHBOARD}/swinfy/submissions/{id}/flag/");
        self.send(Method::PATCH, &path, &json!({ "reason": reason }))
            .await
    }

    async fn reject_submission(&self, id: &str, reason: &Reason) -> Result<ActionStatus> {
        let path = format!("{DASHBOARD}/swinfy/submissions/{id}/reject/");
        self.send(Method::PATCH, &path, &json!({ "reason": reason }))
            .await
    }

    async fn list_photos(&self, filters: &PhotoFilters) -> Result<Vec<SessionPhoto>> {
        self.get(
            &format!("{DASHBOARD}/swinfy/photos/pending/"),
            &filters.to_query_params(),
        )
        .await
    }

    async fn approve_photo(&self, id: &str) -> Result<ActionStatus> {
        let path = format!("{DASHBOARD}/swinfy/photos/{id}/approve/");
        self.send(Method::PATCH, &path, &json!({})).await
    }

    async fn feature_photo(&self, id: &str) -> Result<ActionStatus> {
        let path = format!("{DASHBOARD}/swinfy/photos/{id}/feature/");
        self.send(Method::PATCH, &path, &json!({})).await
    }

    async fn reject_photo(&self, id: &str, reason: Option<&str>) -> Result<ActionStatus> {
        let path = format!("{DASHBOARD}/swinfy/photos/{id}/reject/");
        self.send(
            Method::PATCH,
            &path,
            &json!({ "reason": reason.unwrap_or_default() }),
        )
        .await
    }

    async fn delete_photo(&self, id: &str) -> Result<()> {
        let path = format!("{DASHBOARD}/swinfy/photos/{id}/delete/");
        self.request::<(), ()>(Method::DELETE, &path, None, &[])
            .await
    }

    async fn bulk_approve_photos(&self, ids: &[String]) -> Result<BulkResult> {
        let path = format!("{DASHBOARD}/swinfy/photos/bulk-approve/");
        self.send(Method::POST, &path, &json!({ "photo_ids": ids }))
            .await
    }

    async fn bulk_reject_photos(&self, ids: &[String], reason: &Reason) -> Result<BulkResult> {
        let path = format!("{DASHBOARD}/swinfy/photos/bulk-reject/");
        self.send(
            Method::POST,
            &path,
            &json!({ "photo_ids": ids, "reason": reason }),
        )
        .await
    }

    async fn list_projects(&self, filters: &ProjectFilters) -> Result<Vec<ProjectHighlight>> {
        self.get(
            &format!("{DASHBOARD}/swinfy/projects/pending/"),
            &filters.to_query_params(),
        )
        .await
    }

    async fn approve_project(&self, id: &str) -> Result<ActionStatus> {
        let path = format!("{DASHBOARD}/swinfy/projects/{id}/approve/");
        self.send(Method::PATCH, &path, &json!({})).await
    }

    async fn feature_project(&self, id: &str) -> Result<ActionStatus> {
        let path = format!("{DASHBOARD}/swinfy/projects/{id}/feature/");
        self.send(Method::PATCH, &path, &json!({})).await
    }

    async fn reject_project(&self, id: &str, reason: Option<&str>) -> Result<ActionStatus> {
        let path = format!("{DASHBOARD}/swinfy/projects/{id}/reject/");
        self.send(
            Method::PATCH,
            &path,
            &json!({ "reason": reason.unwrap_or_default() }),
        )
        .await
    }

    async fn edit_project_for_sponsor(
        &self,
        id: &str,
        description: &str,
        notes: Option<&str>,
    ) -> Result<ProjectHighlight> {
        let path = format!("{DASHBOARD}/swinfy/projects/{id}/edit-for-uwh/");
        self.send(
            Method::PATCH,
            &path,
            &json!({ "description": description, "notes": notes.unwrap_or_default() }),
        )
        .await
    }

    async fn list_trainers(&self, district: Option<&str>) -> Result<Vec<SwinfyTrainer>> {
        self.get(
            &format!("{DASHBOARD}/swinfy/trainers/"),
            &district_params(district),
        )
        .await
    }

    async fn activity_log(&self) -> Result<Vec<ActivityLogEntry>> {
        self.get(&format!("{DASHBOARD}/swinfy/activity-log/"), &[])
            .await
    }

    async fn sponsor_control(&self) -> Result<SponsorControl> {
        self.get(&format!("{DASHBOARD}/swinfy/uwh-control/"), &[])
            .await
    }

    async fn update_status_banner(&self, banner: &StatusBanner) -> Result<SponsorControl> {
        let path = format!("{DASHBOARD}/swinfy/uwh-control/status-banner/");
        self.send(Method::PATCH, &path, banner).await
    }

    async fn update_financial_summary(
        &self,
        data: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<SponsorControl> {
        let path = format!("{DASHBOARD}/swinfy/uwh-control/financial-summary/");
        self.send(Method::PATCH, &path, &json!({ "data": data }))
            .await
    }
}

#[async_trait]
impl SponsorApi for DashboardClient {
    async fn sponsor_summary(&self, filters: &SponsorFilters) -> Result<SponsorSummary> {
        self.get(&format!("{DASHBOARD}/uwh/summary/"), &filters.to_query_params())
            .await
    }

    async fn gallery(&self, filters: &SponsorFilters) -> Result<Gallery> {
        self.get(&format!("{DASHBOARD}/uwh/gallery/"), &filters.to_query_params())
            .await
    }

    async fn sponsor_projects(&self, filters: &SponsorFilters) -> Result<Vec<ProjectHighlight>> {
        self.get(
            &format!("{DASHBOARD}/uwh/projects/"),
            &filters.to_query_params(),
        )
        .await
    }

    async fn activity_feed(&self) -> Result<Vec<ActivityLogEntry>> {
        self.get(&format!("{DASHBOARD}/uwh/activity-feed/"), &[])
            .await
    }

    async fn district_progress(&self) -> Result<Vec<DistrictProgress>> {
        self.get(&format!("{DASHBOARD}/uwh/district-progress/"), &[])
            .await
    }
}

#[async_trait]
impl TrainerApi for DashboardClient {
    async fn trainer_submissions(&self) -> Result<Vec<Submission>> {
        self.get(&format!("{DASHBOARD}/trainer/submissions/"), &[])
            .await
    }

    async fn trainer_submission(&self, id: &str) -> Result<SubmissionDetail> {
        self.get(&format!("{DASHBOARD}/trainer/submissions/{id}/"), &[])
            .await
    }

    async fn submit_session(&self, submission: &NewSubmission) -> Result<SubmissionDetail> {
        submission.validate()?;
        let form = submission_form(submission).await?;
        self.send_multipart(Method::POST, &format!("{DASHBOARD}/trainer/submit/"), form)
            .await
    }

    async fn add_project(
        &self,
        submission_id: &str,
        project: &NewProject,
    ) -> Result<ProjectHighlight> {
        let form = project_form(project).await?;
        let path = format!("{DASHBOARD}/trainer/submissions/{submission_id}/projects/");
        self.send_multipart(Method::POST, &path, form).await
    }

    async fn trainer_students(&self) -> Result<Vec<Student>> {
        self.get(&format!("{DASHBOARD}/trainer/students/"), &[])
            .await
    }

    async fn add_student(&self, form: &StudentForm) -> Result<Student> {
        self.send(Method::POST, &format!("{DASHBOARD}/trainer/students/add/"), form)
            .await
    }

    async fn update_student(&self, id: &str, form: &StudentForm) -> Result<Student> {
        self.send(
            Method::PATCH,
            &format!("{DASHBOARD}/trainer/students/{id}/"),
            form,
        )
        .await
    }

    async fn delete_student(&self, id: &str) -> Result<()> {
        let path = format!("{DASHBOARD}/trainer/students/{id}/delete/");
        self.request::<(), ()>(Method::DELETE, &path, None, &[])
            .await
    }

    async fn trainer_projects(&self) -> Result<Vec<ProjectHighlight>> {
        self.get(&format!("{DASHBOARD}/trainer/projects/"), &[])
            .await
    }

    async fn trainer_gallery(&self) -> Result<Vec<TrainerGalleryPhoto>> {
        self.get(&format!("{DASHBOARD}/trainer/gallery/"), &[])
            .await
    }

    async fn trainer_profile(&self) -> Result<TrainerProfile> {
        self.get(&format!("{DASHBOARD}/trainer/profile/"), &[])
            .await
    }

    async fn update_trainer_profile(&self, update: &ProfileUpdate) -> Result<TrainerProfile> {
        let form = profile_form(update).await?;
        self.send_multipart(Method::PATCH, &format!("{DASHBOARD}/trainer/profile/"), form)
            .await
    }
}
