//! Keyed query cache with polling and mutation-driven invalidation
//!
//! Every read the dashboard performs is a [`Query`]. A query knows its cache
//! key, how often it polls, and how to run itself against a
//! [`DashboardApi`]. The [`QueryClient`] ties queries to the shared
//! [`QueryCache`] and performs mutations, invalidating the groups each
//! [`Mutation`] declares.

mod cache;
mod client;
mod key;
mod mutation;
mod poller;

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::client::DashboardApi;
use crate::client::filters::{PhotoFilters, ProjectFilters, SponsorFilters, SubmissionFilters};
use crate::error::Result;

pub use cache::{CacheEntry, QueryCache};
pub use client::{QueryClient, QuerySnapshot};
pub use key::{QueryGroup, QueryKey};
pub use mutation::Mutation;
pub use poller::Subscription;

/// Polling interval per data type
///
/// Reads without an interval are fetched once and then only after an
/// invalidation.
pub struct PollInterval;

impl PollInterval {
    // Review queues - trainers upload throughout the day
    pub const REVIEW: Duration = Duration::from_secs(15);

    // Feeds and rollups
    pub const FEED: Duration = Duration::from_secs(30);

    // Sponsor media - changes only after a review
    pub const MEDIA: Duration = Duration::from_secs(60);
}

/// Every read the dashboard performs
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    // Admin
    AdminSummary,
    Submissions(SubmissionFilters),
    Submission(String),
    Photos(PhotoFilters),
    Projects(ProjectFilters),
    ActivityLog,
    SponsorControl,
    Trainers(Option<String>),

    // Shared reference data
    Districts,
    Schools(Option<String>),
    Curriculum,

    // Sponsor
    SponsorSummary(SponsorFilters),
    Gallery(SponsorFilters),
    SponsorProjects(SponsorFilters),
    ActivityFeed,
    DistrictProgress,

    // Trainer
    TrainerSummary,
    TrainerSubmissions,
    TrainerSubmission(String),
    TrainerProfile,
    TrainerStudents,
    TrainerProjects,
    TrainerGallery,
    TrainerSchools,
}

fn district_pair(district: &Option<String>) -> Vec<(&'static str, String)> {
    district.iter().map(|d| ("district", d.clone())).collect()
}

impl Query {
    pub fn key(&self) -> QueryKey {
        match self {
            Query::AdminSummary => QueryKey::new(&["admin", "summary"]),
            Query::Submissions(f) => {
                QueryKey::new(&["swinfy", "submissions"]).with_params(f.to_query_params())
            }
            Query::Submission(id) => QueryKey::new(&["swinfy", "submission"]).segment(id),
            Query::Photos(f) => {
                QueryKey::new(&["swinfy", "photos"]).with_params(f.to_query_params())
            }
            Query::Projects(f) => {
                QueryKey::new(&["swinfy", "projects"]).with_params(f.to_query_params())
            }
            Query::ActivityLog => QueryKey::new(&["swinfy", "activity-log"]),
            Query::SponsorControl => QueryKey::new(&["swinfy", "uwh-control"]),
            Query::Trainers(d) => {
                QueryKey::new(&["swinfy", "trainers"]).with_params(district_pair(d))
            }
            Query::Districts => QueryKey::new(&["districts"]),
            Query::Schools(d) => QueryKey::new(&["schools"]).with_params(district_pair(d)),
            Query::Curriculum => QueryKey::new(&["curriculum"]),
            Query::SponsorSummary(f) => {
                QueryKey::new(&["uwh", "summary"]).with_params(f.to_query_params())
            }
            Query::Gallery(f) => QueryKey::new(&["uwh", "gallery"]).with_params(f.to_query_params()),
            Query::SponsorProjects(f) => {
                QueryKey::new(&["uwh", "projects"]).with_params(f.to_query_params())
            }
            Query::ActivityFeed => QueryKey::new(&["uwh", "activity-feed"]),
            Query::DistrictProgress => QueryKey::new(&["uwh", "district-progress"]),
            Query::TrainerSummary => QueryKey::new(&["trainer", "summary"]),
            Query::TrainerSubmissions => QueryKey::new(&["trainer", "submissions"]),
            Query::TrainerSubmission(id) => QueryKey::new(&["trainer", "submissions"]).segment(id),
            Query::TrainerProfile => QueryKey::new(&["trainer", "profile"]),
            Query::TrainerStudents => QueryKey::new(&["trainer", "students"]),
            Query::TrainerProjects => QueryKey::new(&["trainer", "projects"]),
            Query::TrainerGallery => QueryKey::new(&["trainer", "gallery"]),
            Query::TrainerSchools => QueryKey::new(&["trainer", "schools"]),
        }
    }

    /// How often an active view refetches this query.
    pub fn poll_interval(&self) -> Option<Duration> {
        match self {
            Query::AdminSummary | Query::Submissions(_) | Query::Photos(_) | Query::Projects(_) => {
                Some(PollInterval::REVIEW)
            }
            Query::ActivityLog
            | Query::SponsorSummary(_)
            | Query::ActivityFeed
            | Query::DistrictProgress => Some(PollInterval::FEED),
            Query::Gallery(_) | Query::SponsorProjects(_) => Some(PollInterval::MEDIA),
            _ => None,
        }
    }

    /// Run the query against the API, returning the decoded response as JSON.
    pub async fn run<C: DashboardApi + ?Sized>(&self, api: &C) -> Result<Value> {
        match self {
            Query::AdminSummary => to_value(api.admin_summary().await?),
            Query::Submissions(f) => to_value(api.list_submissions(f).await?),
            Query::Submission(id) => to_value(api.get_submission(id).await?),
            Query::Photos(f) => to_value(api.list_photos(f).await?),
            Query::Projects(f) => to_value(api.list_projects(f).await?),
            Query::ActivityLog => to_value(api.activity_log().await?),
            Query::SponsorControl => to_value(api.sponsor_control().await?),
            Query::Trainers(d) => to_value(api.list_trainers(d.as_deref()).await?),
            Query::Districts => to_value(api.districts().await?),
            Query::Schools(d) => to_value(api.schools(d.as_deref()).await?),
            Query::Curriculum => to_value(api.curriculum().await?),
            Query::SponsorSummary(f) => to_value(api.sponsor_summary(f).await?),
            Query::Gallery(f) => to_value(api.gallery(f).await?),
            Query::SponsorProjects(f) => to_value(api.sponsor_projects(f).await?),
            Query::ActivityFeed => to_value(api.activity_feed().await?),
            Query::DistrictProgress => to_value(api.district_progress().await?),
            Query::TrainerSummary => to_value(api.trainer_summary().await?),
            Query::TrainerSubmissions => to_value(api.trainer_submissions().await?),
            Query::TrainerSubmission(id) => to_value(api.trainer_submission(id).await?),
            Query::TrainerProfile => to_value(api.trainer_profile().await?),
            Query::TrainerStudents => to_value(api.trainer_students().await?),
            Query::TrainerProjects => to_value(api.trainer_projects().await?),
            Query::TrainerGallery => to_value(api.trainer_gallery().await?),
            Query::TrainerSchools => to_value(api.schools(None).await?),
        }
    }
}

fn to_value<T: Serialize>(data: T) -> Result<Value> {
    Ok(serde_json::to_value(data)?)
}
