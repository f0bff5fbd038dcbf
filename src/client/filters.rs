//! Filter parameters for list endpoints
//!
//! Every filter struct turns into query parameters through [`clean_params`],
//! which drops absent and blank values: an unset filter is never sent as
//! `key=`. Parameters come out sorted by name so that equal filters always
//! produce equal requests and equal cache keys.

use serde::{Deserialize, Serialize};

/// Status sent when a photo or project filter leaves it unset
pub const DEFAULT_REVIEW_STATUS: &str = "pending";

/// Drop blank values and sort by key.
pub fn clean_params(raw: &[(&'static str, Option<&str>)]) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = raw
        .iter()
        .filter_map(|(k, v)| {
            v.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (*k, v.to_string()))
        })
        .collect();
    params.sort_by_key(|(k, _)| *k);
    params
}

fn day_param(day: Option<u8>) -> Option<String> {
    day.filter(|d| *d > 0).map(|d| d.to_string())
}

fn or_default_status(status: &Option<String>) -> Option<&str> {
    match status.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Some(s),
        _ => Some(DEFAULT_REVIEW_STATUS),
    }
}

/// Verification list filters (`/swinfy/submissions/`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFilters {
    pub status: Option<String>,
    pub district: Option<String>,
    pub school: Option<String>,
    pub trainer: Option<String>,
    pub day: Option<u8>,
}

impl SubmissionFilters {
    /// Filter on status only.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let day = day_param(self.day);
        clean_params(&[
            ("status", self.status.as_deref()),
            ("district", self.district.as_deref()),
            ("school", self.school.as_deref()),
            ("trainer", self.trainer.as_deref()),
            ("day", day.as_deref()),
        ])
    }
}

/// Photo review filters (`/swinfy/photos/pending/`); status defaults to pending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoFilters {
    pub status: Option<String>,
    pub district: Option<String>,
    pub school: Option<String>,
    pub trainer: Option<String>,
    pub day: Option<u8>,
}

impl PhotoFilters {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let day = day_param(self.day);
        clean_params(&[
            ("status", or_default_status(&self.status)),
            ("district", self.district.as_deref()),
            ("school", self.school.as_deref()),
            ("trainer", self.trainer.as_deref()),
            ("day", day.as_deref()),
        ])
    }
}

/// Project review filters (`/swinfy/projects/pending/`); status defaults to pending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilters {
    pub status: Option<String>,
    pub district: Option<String>,
    pub school: Option<String>,
    pub trainer: Option<String>,
}

impl ProjectFilters {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        clean_params(&[
            ("status", or_default_status(&self.status)),
            ("district", self.district.as_deref()),
            ("school", self.school.as_deref()),
            ("trainer", self.trainer.as_deref()),
        ])
    }
}

/// Sponsor view filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorFilters {
    pub district: Option<String>,
    pub school: Option<String>,
}

impl SponsorFilters {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        clean_params(&[
            ("district", self.district.as_deref()),
            ("school", self.school.as_deref()),
        ])
    }
}

/// Single optional district filter (schools, trainer roster)
pub fn district_params(district: Option<&str>) -> Vec<(&'static str, String)> {
    clean_params(&[("district", district)])
}
