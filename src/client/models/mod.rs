//! Dashboard API data models
//!
//! Shapes mirror the backend serializers. Status fields are closed enums so
//! that a typo in a status can never silently become a new state.

mod activity;
mod auth;
mod control;
mod photo;
mod project;
mod reason;
mod school;
mod student;
mod submission;
mod summary;
mod trainer;

pub use activity::ActivityLogEntry;
pub use auth::{AccountUser, LoginResponse};
pub use control::{ProgramStatus, SponsorControl, StatusBanner};
pub use photo::{Gallery, PhotoStatus, SessionPhoto, TrainerGalleryPhoto};
pub use project::{NewProject, ProjectHighlight, ProjectStatus};
pub use reason::Reason;
pub use school::{Curriculum, District, DistrictProgress, School, SchoolStatus};
pub use student::{Student, StudentForm};
pub use submission::{
    ActionStatus, BulkResult, NewSubmission, Submission, SubmissionDetail, SubmissionStatus,
};
pub use summary::{AdminSummary, SponsorKpis, SponsorSummary, TrainerSummary};
pub use trainer::{AssignedSchool, ProfileUpdate, SwinfyTrainer, TrainerProfile, TrainerSchool};
