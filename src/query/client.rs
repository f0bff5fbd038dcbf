//! Query client: cached reads and invalidating writes
//!
//! Reads go through [`QueryClient::fetch`]. A fresh cache entry answers
//! without a request; otherwise the query runs and its result is stored. A
//! failed fetch leaves the cache untouched and reports the last-known value
//! next to the error, except after a 401, where nothing is shown.
//!
//! Writes go through [`QueryClient::mutate`]: local validation first, then a
//! duplicate check, then the call, then invalidation of every group the
//! [`Mutation`] declares.

use std::collections::HashSet;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::poller::{self, Subscription};
use super::{Mutation, Query, QueryCache};
use crate::client::DashboardApi;
use crate::client::filters::{PhotoFilters, ProjectFilters, SponsorFilters, SubmissionFilters};
use crate::client::models::{
    ActionStatus, ActivityLogEntry, AdminSummary, BulkResult, Curriculum, District,
    DistrictProgress, Gallery, NewProject, NewSubmission, ProfileUpdate, ProgramStatus,
    ProjectHighlight, Reason, School, SessionPhoto, SponsorControl, SponsorSummary, StatusBanner, Student,
    StudentForm, Submission, SubmissionDetail, SwinfyTrainer, TrainerGalleryPhoto,
    TrainerProfile, TrainerSummary,
};
use crate::error::{ApiError, Error, Result};

/// Result of one read: the data to show and what went wrong, if anything.
///
/// `data` and `error` can both be set: the refetch failed and `data` is the
/// last value fetched successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshot<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Answered from cache without a request
    pub from_cache: bool,
}

impl<T> QuerySnapshot<T> {
    fn failed(error: ApiError) -> Self {
        Self {
            data: None,
            error: Some(error),
            fetched_at: None,
            from_cache: false,
        }
    }

    /// Data if any is available; an error only when there is nothing to show.
    pub fn into_result(self) -> Result<T> {
        match (self.data, self.error) {
            (Some(data), None) => Ok(data),
            (Some(data), Some(err)) => {
                log::warn!("Showing last fetched data: {}", err);
                Ok(data)
            }
            (None, Some(err)) => Err(err.into()),
            (None, None) => Err(ApiError::InvalidResponse("empty response".to_string()).into()),
        }
    }
}

impl QuerySnapshot<Value> {
    /// Decode the JSON payload into a model type.
    pub fn decode<T: DeserializeOwned>(self) -> QuerySnapshot<T> {
        let (data, error) = match self.data.map(serde_json::from_value::<T>) {
            Some(Ok(data)) => (Some(data), self.error),
            Some(Err(e)) => (None, Some(ApiError::InvalidResponse(e.to_string()))),
            None => (None, self.error),
        };
        QuerySnapshot {
            data,
            error,
            fetched_at: self.fetched_at,
            from_cache: self.from_cache,
        }
    }
}

type InFlightSet = Arc<Mutex<HashSet<(Mutation, String)>>>;

/// Marks one mutation on one target as pending; cleared on drop.
struct InFlight {
    set: InFlightSet,
    entry: (Mutation, String),
}

impl InFlight {
    fn acquire(set: &InFlightSet, mutation: Mutation, target: &str) -> Result<Self> {
        let entry = (mutation, target.to_string());
        let inserted = set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(entry.clone());
        if !inserted {
            return Err(ApiError::MutationInFlight(format!("{} {}", mutation.label(), target)).into());
        }
        Ok(Self {
            set: Arc::clone(set),
            entry,
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.entry);
    }
}

fn require_ids(ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        return Err(Error::Validation("select at least one photo".to_string()));
    }
    Ok(())
}

/// Cached, invalidating front end over any [`DashboardApi`].
pub struct QueryClient<C: DashboardApi> {
    api: Arc<C>,
    cache: Arc<QueryCache>,
    in_flight: InFlightSet,
    /// When false every read goes to the server (`--no-cache`)
    use_cache: bool,
}

impl<C: DashboardApi> Clone for QueryClient<C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            cache: Arc::clone(&self.cache),
            in_flight: Arc::clone(&self.in_flight),
            use_cache: self.use_cache,
        }
    }
}

impl<C: DashboardApi + 'static> QueryClient<C> {
    /// Create a client with its own cache.
    pub fn new(api: C) -> Self {
        Self::with_cache(Arc::new(api), Arc::new(QueryCache::new()))
    }

    /// Create a client over a shared API handle and cache.
    pub fn with_cache(api: Arc<C>, cache: Arc<QueryCache>) -> Self {
        Self {
            api,
            cache,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
            use_cache: true,
        }
    }

    /// Always ask the server, never answer from cache.
    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Read `query`, answering from cache while the entry is fresh.
    pub async fn fetch_value(&self, query: &Query) -> QuerySnapshot<Value> {
        let key = query.key();

        if self.use_cache
            && let Some(entry) = self.cache.get_fresh(&key, query.poll_interval())
        {
            log::debug!("Cache hit: {}", key);
            return QuerySnapshot {
                data: Some(entry.value),
                error: None,
                fetched_at: Some(entry.fetched_at),
                from_cache: true,
            };
        }

        self.refetch_value(query).await
    }

    /// Read `query` from the server regardless of cache freshness.
    pub async fn refetch_value(&self, query: &Query) -> QuerySnapshot<Value> {
        let key = query.key();
        log::debug!("Fetching {}", key);

        match query.run(self.api.as_ref()).await {
            Ok(value) => {
                let fetched_at = self.cache.store(key, value.clone());
                QuerySnapshot {
                    data: Some(value),
                    error: None,
                    fetched_at: Some(fetched_at),
                    from_cache: false,
                }
            }
            Err(err) if err.is_unauthorized() => {
                // The session is gone; nothing cached for it may be shown
                self.cache.clear();
                QuerySnapshot::failed(ApiError::Unauthorized)
            }
            Err(err) => {
                let error = ApiError::from(&err);
                log::warn!("Fetching {} failed: {}", key, error);
                match self.cache.peek(&key) {
                    Some(entry) => QuerySnapshot {
                        data: Some(entry.value),
                        error: Some(error),
                        fetched_at: Some(entry.fetched_at),
                        from_cache: true,
                    },
                    None => QuerySnapshot::failed(error),
                }
            }
        }
    }

    /// Read `query` and decode it as `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, query: &Query) -> QuerySnapshot<T> {
        self.fetch_value(query).await.decode()
    }

    /// Keep `query` up to date in the background until the subscription is dropped.
    pub fn watch<T: DeserializeOwned>(&self, query: Query) -> Subscription<T> {
        poller::spawn(self.clone(), query, PhantomData)
    }

    pub async fn admin_summary(&self) -> QuerySnapshot<AdminSummary> {
        self.fetch(&Query::AdminSummary).await
    }

    pub async fn submissions(&self, filters: &SubmissionFilters) -> QuerySnapshot<Vec<Submission>> {
        self.fetch(&Query::Submissions(filters.clone())).await
    }

    pub async fn submission(&self, id: &str) -> QuerySnapshot<SubmissionDetail> {
        self.fetch(&Query::Submission(id.to_string())).await
    }

    pub async fn photos(&self, filters: &PhotoFilters) -> QuerySnapshot<Vec<SessionPhoto>> {
        self.fetch(&Query::Photos(filters.clone())).await
    }

    pub async fn projects(&self, filters: &ProjectFilters) -> QuerySnapshot<Vec<ProjectHighlight>> {
        self.fetch(&Query::Projects(filters.clone())).await
    }

    pub async fn activity_log(&self) -> QuerySnapshot<Vec<ActivityLogEntry>> {
        self.fetch(&Query::ActivityLog).await
    }

    pub async fn sponsor_control(&self) -> QuerySnapshot<SponsorControl> {
        self.fetch(&Query::SponsorControl).await
    }

    pub async fn trainers(&self, district: Option<&str>) -> QuerySnapshot<Vec<SwinfyTrainer>> {
        self.fetch(&Query::Trainers(district.map(str::to_string)))
            .await
    }

    pub async fn districts(&self) -> QuerySnapshot<Vec<District>> {
        self.fetch(&Query::Districts).await
    }

    pub async fn schools(&self, district: Option<&str>) -> QuerySnapshot<Vec<School>> {
        self.fetch(&Query::Schools(district.map(str::to_string)))
            .await
    }

    pub async fn curriculum(&self) -> QuerySnapshot<Vec<Curriculum>> {
        self.fetch(&Query::Curriculum).await
    }

    pub async fn sponsor_summary(&self, filters: &SponsorFilters) -> QuerySnapshot<SponsorSummary> {
        self.fetch(&Query::SponsorSummary(filters.clone())).await
    }

    pub async fn gallery(&self, filters: &SponsorFilters) -> QuerySnapshot<Gallery> {
        self.fetch(&Query::Gallery(filters.clone())).await
    }

    pub async fn sponsor_projects(
        &self,
        filters: &SponsorFilters,
    ) -> QuerySnapshot<Vec<ProjectHighlight>> {
        self.fetch(&Query::SponsorProjects(filters.clone())).await
    }

    pub async fn activity_feed(&self) -> QuerySnapshot<Vec<ActivityLogEntry>> {
        self.fetch(&Query::ActivityFeed).await
    }

    pub async fn district_progress(&self) -> QuerySnapshot<Vec<DistrictProgress>> {
        self.fetch(&Query::DistrictProgress).await
    }

    pub async fn trainer_summary(&self) -> QuerySnapshot<TrainerSummary> {
        self.fetch(&Query::TrainerSummary).await
    }

    pub async fn trainer_submissions(&self) -> QuerySnapshot<Vec<Submission>> {
        self.fetch(&Query::TrainerSubmissions).await
    }

    pub async fn trainer_submission(&self, id: &str) -> QuerySnapshot<SubmissionDetail> {
        self.fetch(&Query::TrainerSubmission(id.to_string())).await
    }

    pub async fn trainer_profile(&self) -> QuerySnapshot<TrainerProfile> {
        self.fetch(&Query::TrainerProfile).await
    }

    pub async fn trainer_students(&self) -> QuerySnapshot<Vec<Student>> {
        self.fetch(&Query::TrainerStudents).await
    }

    pub async fn trainer_projects(&self) -> QuerySnapshot<Vec<ProjectHighlight>> {
        self.fetch(&Query::TrainerProjects).await
    }

    pub async fn trainer_gallery(&self) -> QuerySnapshot<Vec<TrainerGalleryPhoto>> {
        self.fetch(&Query::TrainerGallery).await
    }

    pub async fn trainer_schools(&self) -> QuerySnapshot<Vec<School>> {
        self.fetch(&Query::TrainerSchools).await
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Run one mutation on `target`.
    ///
    /// A second call for the same mutation and target while the first is
    /// pending fails with [`ApiError::MutationInFlight`]. The cache is only
    /// touched after success.
    pub async fn mutate<T, F, Fut>(&self, mutation: Mutation, target: &str, call: F) -> Result<T>
    where
        F: FnOnce(Arc<C>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let _pending = InFlight::acquire(&self.in_flight, mutation, target)?;

        let result = call(Arc::clone(&self.api)).await;
        match result {
            Ok(value) => {
                for group in mutation.invalidates() {
                    self.cache.invalidate(*group);
                }
                log::debug!("{} {} succeeded", mutation.label(), target);
                Ok(value)
            }
            Err(err) => {
                if err.is_unauthorized() {
                    self.cache.clear();
                }
                Err(err)
            }
        }
    }

    pub async fn verify_submission(&self, id: &str, notes: Option<&str>) -> Result<ActionStatus> {
        self.mutate(Mutation::VerifySubmission, id, |api| async move {
            api.verify_submission(id, notes).await
        })
        .await
    }

    /// Flag a submission; a blank reason is refused without a request.
    pub async fn flag_submission(&self, id: &str, reason: &str) -> Result<ActionStatus> {
        let reason = Reason::new(reason)?;
        self.mutate(Mutation::FlagSubmission, id, |api| async move {
            api.flag_submission(id, &reason).await
        })
        .await
    }

    /// Reject a submission; a blank reason is refused without a request.
    pub async fn reject_submission(&self, id: &str, reason: &str) -> Result<ActionStatus> {
        let reason = Reason::new(reason)?;
        self.mutate(Mutation::RejectSubmission, id, |api| async move {
            api.reject_submission(id, &reason).await
        })
        .await
    }

    pub async fn approve_photo(&self, id: &str) -> Result<ActionStatus> {
        self.mutate(Mutation::ApprovePhoto, id, |api| async move {
            api.approve_photo(id).await
        })
        .await
    }

    pub async fn feature_photo(&self, id: &str) -> Result<ActionStatus> {
        self.mutate(Mutation::FeaturePhoto, id, |api| async move {
            api.feature_photo(id).await
        })
        .await
    }

    pub async fn reject_photo(&self, id: &str, reason: Option<&str>) -> Result<ActionStatus> {
        self.mutate(Mutation::RejectPhoto, id, |api| async move {
            api.reject_photo(id, reason).await
        })
        .await
    }

    pub async fn delete_photo(&self, id: &str) -> Result<()> {
        self.mutate(Mutation::DeletePhoto, id, |api| async move {
            api.delete_photo(id).await
        })
        .await
    }

    /// Approve many photos with a single request.
    pub async fn bulk_approve_photos(&self, ids: &[String]) -> Result<BulkResult> {
        require_ids(ids)?;
        self.mutate(Mutation::BulkApprovePhotos, &ids.join(","), |api| async move {
            api.bulk_approve_photos(ids).await
        })
        .await
    }

    /// Reject many photos with a single request; the reason is required.
    pub async fn bulk_reject_photos(&self, ids: &[String], reason: &str) -> Result<BulkResult> {
        let reason = Reason::new(reason)?;
        require_ids(ids)?;
        self.mutate(Mutation::BulkRejectPhotos, &ids.join(","), |api| async move {
            api.bulk_reject_photos(ids, &reason).await
        })
        .await
    }

    pub async fn approve_project(&self, id: &str) -> Result<ActionStatus> {
        self.mutate(Mutation::ApproveProject, id, |api| async move {
            api.approve_project(id).await
        })
        .await
    }

    pub async fn feature_project(&self, id: &str) -> Result<ActionStatus> {
        self.mutate(Mutation::FeatureProject, id, |api| async move {
            api.feature_project(id).await
        })
        .await
    }

    pub async fn reject_project(&self, id: &str, reason: Option<&str>) -> Result<ActionStatus> {
        self.mutate(Mutation::RejectProject, id, |api| async move {
            api.reject_project(id, reason).await
        })
        .await
    }

    pub async fn edit_project_for_sponsor(
        &self,
        id: &str,
        description: &str,
        notes: Option<&str>,
    ) -> Result<ProjectHighlight> {
        if description.trim().is_empty() {
            return Err(Error::Validation("a sponsor description is required".to_string()));
        }
        self.mutate(Mutation::EditProjectForSponsor, id, |api| async move {
            api.edit_project_for_sponsor(id, description, notes).await
        })
        .await
    }

    /// Replace the sponsor status banner; the status must be a program status.
    pub async fn update_status_banner(&self, banner: &StatusBanner) -> Result<SponsorControl> {
        banner
            .status
            .parse::<ProgramStatus>()
            .map_err(Error::Validation)?;
        self.mutate(Mutation::UpdateStatusBanner, "banner", |api| async move {
            api.update_status_banner(banner).await
        })
        .await
    }

    pub async fn update_financial_summary(
        &self,
        data: &serde_json::Map<String, Value>,
    ) -> Result<SponsorControl> {
        self.mutate(Mutation::UpdateFinancialSummary, "financials", |api| async move {
            api.update_financial_summary(data).await
        })
        .await
    }

    /// Upload a session report; the form is checked before any upload.
    pub async fn submit_session(&self, submission: &NewSubmission) -> Result<SubmissionDetail> {
        submission.validate()?;
        let target = format!("{}/day-{}", submission.school, submission.day_number);
        self.mutate(Mutation::SubmitSession, &target, |api| async move {
            api.submit_session(submission).await
        })
        .await
    }

    pub async fn add_project(
        &self,
        submission_id: &str,
        project: &NewProject,
    ) -> Result<ProjectHighlight> {
        if project.title.trim().is_empty() || project.student_name.trim().is_empty() {
            return Err(Error::Validation(
                "a project needs a title and a student name".to_string(),
            ));
        }
        self.mutate(Mutation::AddProject, submission_id, |api| async move {
            api.add_project(submission_id, project).await
        })
        .await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<TrainerProfile> {
        if update.username.is_none() && update.profile_photo.is_none() {
            return Err(Error::Validation("nothing to update".to_string()));
        }
        self.mutate(Mutation::UpdateProfile, "profile", |api| async move {
            api.update_trainer_profile(update).await
        })
        .await
    }

    pub async fn add_student(&self, form: &StudentForm) -> Result<Student> {
        if form.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            return Err(Error::Validation("a student name is required".to_string()));
        }
        self.mutate(Mutation::AddStudent, "new", |api| async move {
            api.add_student(form).await
        })
        .await
    }

    pub async fn update_student(&self, id: &str, form: &StudentForm) -> Result<Student> {
        if form.is_empty() {
            return Err(Error::Validation("nothing to update".to_string()));
        }
        self.mutate(Mutation::UpdateStudent, id, |api| async move {
            api.update_student(id, form).await
        })
        .await
    }

    pub async fn delete_student(&self, id: &str) -> Result<()> {
        self.mutate(Mutation::DeleteStudent, id, |api| async move {
            api.delete_student(id).await
        })
        .await
    }
}
