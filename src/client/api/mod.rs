//! API trait definitions split by dashboard area
//!
//! - [`AuthApi`] - Sign-in
//! - [`SharedApi`] - Summary and reference data every role reads
//! - [`AdminApi`] - Swinfy verification and control panel
//! - [`SponsorApi`] - UWH read-only reporting
//! - [`TrainerApi`] - Trainer self-service
//!
//! The [`DashboardApi`](super::DashboardApi) super-trait combines all five.

mod admin;
mod auth;
mod shared;
mod sponsor;
mod trainer;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use shared::SharedApi;
pub use sponsor::SponsorApi;
pub use trainer::TrainerApi;
