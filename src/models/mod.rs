//! Display models for CLI output
//!
//! Table rows for every list the dashboard shows, plus the pretty views of
//! single records (see [`crate::output::Pretty`]).

pub mod display;

pub use display::{
    ActivityDisplay, CurriculumDisplay, DistrictDisplay, DistrictProgressDisplay, PhotoDisplay,
    ProjectDisplay, SchoolDisplay, StudentDisplay, SubmissionDisplay, TrainerDisplay,
    TrainerPhotoDisplay, gallery_rows,
};
