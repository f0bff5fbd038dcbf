//! Dashboard API client
//!
//! The client is split into sub-traits by dashboard area (see [`api`]).
//! [`DashboardApi`] combines them; it is implemented by the real HTTP client
//! and, in tests, by the in-memory mock.

pub mod api;
mod dashboard;
pub mod filters;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AdminApi, AuthApi, SharedApi, SponsorApi, TrainerApi};
pub use dashboard::DashboardClient;
pub use filters::{PhotoFilters, ProjectFilters, SponsorFilters, SubmissionFilters};
#[cfg(test)]
pub use mock::MockDashboardClient;

/// Complete dashboard API
pub trait DashboardApi: AuthApi + SharedApi + AdminApi + SponsorApi + TrainerApi {}

impl<T> DashboardApi for T where T: AuthApi + SharedApi + AdminApi + SponsorApi + TrainerApi {}
