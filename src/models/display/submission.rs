//! Submission display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{opt_or_dash, or_dash, status_badge, truncate_string};
use crate::client::models::{Submission, SubmissionDetail};
use crate::output::Pretty;
use crate::output::formatters::format_timestamp_local;
use crate::program;

/// Submission row for queue and history tables.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SubmissionDisplay {
    #[tabled(rename = "SUBMISSION ID")]
    pub id: String,

    #[tabled(rename = "SCHOOL")]
    pub school: String,

    #[tabled(rename = "TRAINER")]
    pub trainer: String,

    /// Curriculum day, e.g. "Day 2"
    #[tabled(rename = "DAY")]
    pub day: String,

    #[tabled(rename = "STUDENTS")]
    pub students: u32,

    #[tabled(rename = "PHOTOS")]
    pub photos: u32,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "SUBMITTED")]
    pub submitted: String,
}

impl From<Submission> for SubmissionDisplay {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            school: truncate_string(&or_dash(&s.school_name), 32),
            trainer: or_dash(&s.trainer_name),
            day: format!("Day {}", s.day_number),
            students: s.student_count,
            photos: s.photo_count,
            status: s.status.label().to_string(),
            submitted: s
                .submitted_at
                .as_deref()
                .map(format_timestamp_local)
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl Pretty for SubmissionDetail {
    fn pretty(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "Submission".bold(), self.id.dimmed()),
            format!(
                "{} | {} | Day {}: {}",
                or_dash(&self.school_name).bold(),
                or_dash(&self.trainer_name),
                self.day_number,
                program::day_title(self.day_number)
            ),
            format!(
                "Status: {} | Students: {} | Submitted: {}",
                status_badge(self.status.as_str()),
                self.student_count,
                self.submitted_at
                    .as_deref()
                    .map(format_timestamp_local)
                    .unwrap_or_else(|| "--".to_string())
            ),
        ];

        if !self.topics_covered.is_empty() {
            lines.push(format!("Topics: {}", self.topics_covered.join(", ")));
        }
        if !self.trainer_notes.is_empty() {
            lines.push(format!("Notes: {}", self.trainer_notes));
        }
        if !self.challenges.is_empty() {
            lines.push(format!("Challenges: {}", self.challenges));
        }
        if !self.flag_reason.is_empty() {
            lines.push(format!("{} {}", "Flagged:".yellow(), self.flag_reason));
        }
        if !self.rejection_reason.is_empty() {
            lines.push(format!("{} {}", "Rejected:".red(), self.rejection_reason));
        }
        if let Some(ref by) = self.verified_by {
            lines.push(format!(
                "Verified by {} at {}",
                by,
                opt_or_dash(self.verified_at.as_deref())
            ));
        }
        if !self.swinfy_notes.is_empty() {
            lines.push(format!("Reviewer notes: {}", self.swinfy_notes));
        }

        lines.push(String::new());
        lines.push(format!("{} ({})", "Photos".bold(), self.photos.len()));
        for photo in &self.photos {
            lines.push(format!(
                "  {} {} {}",
                photo.id.dimmed(),
                status_badge(photo.approval_status.as_str()),
                opt_or_dash(photo.image_url.as_deref())
            ));
        }

        if !self.project_highlights.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "{} ({})",
                "Projects".bold(),
                self.project_highlights.len()
            ));
            for project in &self.project_highlights {
                lines.push(format!(
                    "  {} {} by {} {}",
                    project.id.dimmed(),
                    project.title,
                    project.student_name,
                    status_badge(project.approval_status.as_str())
                ));
            }
        }

        lines.join("\n")
    }
}
