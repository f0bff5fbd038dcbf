//! Sponsor (UWH) API trait
//!
//! Read-only views. The backend only exposes verified data here.

use async_trait::async_trait;

use crate::client::filters::SponsorFilters;
use crate::client::models::{
    ActivityLogEntry, DistrictProgress, Gallery, ProjectHighlight, SponsorSummary,
};
use crate::error::Result;

#[async_trait]
pub trait SponsorApi: Send + Sync {
    async fn sponsor_summary(&self, filters: &SponsorFilters) -> Result<SponsorSummary>;

    async fn gallery(&self, filters: &SponsorFilters) -> Result<Gallery>;

    async fn sponsor_projects(&self, filters: &SponsorFilters) -> Result<Vec<ProjectHighlight>>;

    async fn activity_feed(&self) -> Result<Vec<ActivityLogEntry>>;

    async fn district_progress(&self) -> Result<Vec<DistrictProgress>>;
}
