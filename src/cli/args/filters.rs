//! Filter argument types for CLI commands
//!
//! Blank values are accepted and dropped later, so `--district ""` behaves
//! like leaving the flag out.

use clap::Args;

use crate::cli::completions::district_candidates;
use crate::client::filters::{PhotoFilters, ProjectFilters, SponsorFilters, SubmissionFilters};

/// Filters for the submission queue and the photo queue.
#[derive(Args, Debug, Default, Clone)]
pub struct SubmissionFilterArgs {
    /// Filter by status (`all` for every status)
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Filter by district ID
    #[arg(long, short = 'd', add = district_candidates())]
    pub district: Option<String>,

    /// Filter by school ID
    #[arg(long)]
    pub school: Option<String>,

    /// Filter by trainer ID
    #[arg(long, short = 't')]
    pub trainer: Option<String>,

    /// Filter by curriculum day (1-4)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub day: Option<u8>,
}

impl SubmissionFilterArgs {
    pub fn to_submission_filters(&self) -> SubmissionFilters {
        SubmissionFilters {
            status: self.status.clone(),
            district: self.district.clone(),
            school: self.school.clone(),
            trainer: self.trainer.clone(),
            day: self.day,
        }
    }

    /// Photo queue filters; status defaults to pending.
    pub fn to_photo_filters(&self) -> PhotoFilters {
        PhotoFilters {
            status: self.status.clone(),
            district: self.district.clone(),
            school: self.school.clone(),
            trainer: self.trainer.clone(),
            day: self.day,
        }
    }
}

/// Filters for the project review queue.
#[derive(Args, Debug, Default, Clone)]
pub struct ReviewFilterArgs {
    /// Filter by status (defaults to pending, `all` for every status)
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Filter by district ID
    #[arg(long, short = 'd', add = district_candidates())]
    pub district: Option<String>,

    /// Filter by school ID
    #[arg(long)]
    pub school: Option<String>,

    /// Filter by trainer ID
    #[arg(long, short = 't')]
    pub trainer: Option<String>,
}

impl ReviewFilterArgs {
    pub fn to_project_filters(&self) -> ProjectFilters {
        ProjectFilters {
            status: self.status.clone(),
            district: self.district.clone(),
            school: self.school.clone(),
            trainer: self.trainer.clone(),
        }
    }
}

/// Filters for the sponsor views.
#[derive(Args, Debug, Default, Clone)]
pub struct SponsorFilterArgs {
    /// Filter by district ID
    #[arg(long, short = 'd', add = district_candidates())]
    pub district: Option<String>,

    /// Filter by school ID
    #[arg(long)]
    pub school: Option<String>,
}

impl SponsorFilterArgs {
    pub fn to_filters(&self) -> SponsorFilters {
        SponsorFilters {
            district: self.district.clone(),
            school: self.school.clone(),
        }
    }
}
