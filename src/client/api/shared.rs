//! Endpoints readable by more than one role

use async_trait::async_trait;

use crate::client::models::{AdminSummary, Curriculum, District, School, TrainerSummary};
use crate::error::Result;

#[async_trait]
pub trait SharedApi: Send + Sync {
    /// `GET /summary/` as seen by an admin
    async fn admin_summary(&self) -> Result<AdminSummary>;

    /// `GET /summary/` as seen by a trainer
    async fn trainer_summary(&self) -> Result<TrainerSummary>;

    async fn districts(&self) -> Result<Vec<District>>;

    /// Schools, optionally narrowed to one district
    async fn schools(&self, district: Option<&str>) -> Result<Vec<School>>;

    async fn curriculum(&self) -> Result<Vec<Curriculum>>;
}
