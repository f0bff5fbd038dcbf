//! Pretty views for rollups, the sponsor control panel, profiles, and
//! mutation acknowledgements

use colored::Colorize;

use super::common::{opt_or_dash, or_dash, status_badge};
use crate::client::models::{
    ActionStatus, AdminSummary, BulkResult, SponsorControl, SponsorSummary, StatusBanner,
    TrainerProfile, TrainerSummary,
};
use crate::output::Pretty;
use crate::output::formatters::{format_progress, format_timestamp_local};
use crate::output::table::format_pairs;
use crate::program;

impl Pretty for AdminSummary {
    fn pretty(&self) -> String {
        let table = format_pairs(&[
            (
                "Schools completed",
                format_progress(self.schools_completed, self.total_schools),
            ),
            (
                "Students trained",
                format_progress(self.students_trained, self.total_students),
            ),
            ("Pending submissions", self.pending_submissions.to_string()),
            ("Pending photos", self.pending_photos.to_string()),
            ("Pending projects", self.pending_projects.to_string()),
            (
                "Program target",
                format!(
                    "{} schools, {} students",
                    program::TOTAL_SCHOOLS,
                    program::TOTAL_TARGET_STUDENTS
                ),
            ),
        ]);
        format!(
            "{} | {} | delivered by {}\n{}",
            program::PROGRAM_NAME.bold(),
            program::ORGANIZATION,
            program::IMPLEMENTING_PARTNER,
            table
        )
    }
}

impl Pretty for TrainerSummary {
    fn pretty(&self) -> String {
        format_pairs(&[
            ("Assigned schools", self.assigned_schools.to_string()),
            ("Submissions", self.submissions_count.to_string()),
            ("Verified", self.verified_count.to_string()),
            ("Flagged", self.flagged_count.to_string()),
            ("Students", self.student_count.to_string()),
            ("Projects", self.project_count.to_string()),
        ])
    }
}

fn banner_line(banner: &StatusBanner) -> String {
    format!("{} {}", status_badge(&banner.status), or_dash(&banner.message))
}

fn financial_lines(summary: &serde_json::Map<String, serde_json::Value>) -> Vec<String> {
    summary
        .iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(s) => format!("  {}: {}", key, s),
            other => format!("  {}: {}", key, other),
        })
        .collect()
}

impl Pretty for SponsorSummary {
    fn pretty(&self) -> String {
        let kpis = &self.kpis;
        let mut lines = vec![
            format!("{} | {}", program::PROGRAM_NAME.bold(), program::SPONSOR),
            banner_line(&self.status_banner),
            format_pairs(&[
                (
                    "Schools completed",
                    format_progress(kpis.schools_completed, kpis.total_schools),
                ),
                ("Schools in progress", kpis.schools_in_progress.to_string()),
                ("Students trained", kpis.total_students_trained.to_string()),
                ("Sessions", kpis.total_sessions.to_string()),
                ("Districts", kpis.total_districts.to_string()),
            ]),
        ];
        if !self.financial_summary.is_empty() {
            lines.push("Financials".bold().to_string());
            lines.extend(financial_lines(&self.financial_summary));
        }
        lines.join("\n")
    }
}

impl Pretty for SponsorControl {
    fn pretty(&self) -> String {
        let mut lines = vec![
            "Sponsor control panel".bold().to_string(),
            format!(
                "Status: {} ({})",
                status_badge(self.status.as_str()),
                or_dash(&self.status_color)
            ),
            format!("Message: {}", or_dash(&self.status_message)),
            format!("Updated: {}", format_timestamp_local(&self.updated_at)),
        ];
        if self.financial_summary.is_empty() {
            lines.push(format!("Financials: {}", "none".dimmed()));
        } else {
            lines.push("Financials:".to_string());
            lines.extend(financial_lines(&self.financial_summary));
        }
        lines.join("\n")
    }
}

impl Pretty for TrainerProfile {
    fn pretty(&self) -> String {
        let mut lines = vec![
            format!("{} <{}>", or_dash(&self.username).bold(), self.email),
            format!("Photo: {}", opt_or_dash(self.profile_photo_url.as_deref())),
        ];
        match &self.assigned_school {
            Some(school) => {
                lines.push(format!(
                    "School: {} ({})",
                    school.name.bold(),
                    or_dash(&school.district_name)
                ));
                lines.push(format!(
                    "  Students: {} | Days: {} | Status: {}",
                    school.total_students,
                    school.total_days,
                    status_badge(&school.status)
                ));
                if !school.poc_name.is_empty() {
                    lines.push(format!(
                        "  Contact: {} {} {}",
                        school.poc_name,
                        or_dash(&school.poc_designation),
                        or_dash(&school.poc_phone)
                    ));
                }
                if let Some(ref co) = school.co_trainer {
                    lines.push(format!("  Co-trainer: {}", co));
                }
            }
            None => lines.push(format!("School: {}", "not assigned".dimmed())),
        }
        lines.join("\n")
    }
}

impl Pretty for ActionStatus {
    fn pretty(&self) -> String {
        format!("{} {}", "✓".green(), program::status_label(&self.status))
    }
}

impl Pretty for BulkResult {
    fn pretty(&self) -> String {
        match (self.approved, self.rejected) {
            (Some(n), _) => format!("{} {} photo(s) approved", "✓".green(), n),
            (None, Some(n)) => format!("{} {} photo(s) rejected", "✓".green(), n),
            (None, None) => format!("{} No photos changed", "○".dimmed()),
        }
    }
}
