//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod activity;
mod common;
mod photo;
mod project;
mod roster;
mod submission;
mod summary;

pub use activity::ActivityDisplay;
pub use photo::{PhotoDisplay, TrainerPhotoDisplay, gallery_rows};
pub use project::ProjectDisplay;
pub use roster::{
    CurriculumDisplay, DistrictDisplay, DistrictProgressDisplay, SchoolDisplay, StudentDisplay,
    TrainerDisplay,
};
pub use submission::SubmissionDisplay;
