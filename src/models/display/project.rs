//! Project highlight display models

use serde::Serialize;
use tabled::Tabled;

use colored::Colorize;

use super::common::{opt_or_dash, or_dash, status_badge, truncate_string};
use crate::client::models::ProjectHighlight;
use crate::output::Pretty;
use crate::program::status_label;

/// Project row for review queues and sponsor listings.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProjectDisplay {
    #[tabled(rename = "PROJECT ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "STUDENT")]
    pub student: String,

    #[tabled(rename = "GRADE")]
    pub grade: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Sponsor-facing text when set, otherwise the trainer's description
    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<ProjectHighlight> for ProjectDisplay {
    fn from(project: ProjectHighlight) -> Self {
        let description = [
            &project.display_description,
            &project.uwh_description,
            &project.description,
        ]
        .into_iter()
        .find(|d| !d.trim().is_empty())
        .cloned()
        .unwrap_or_default();

        Self {
            id: project.id,
            title: truncate_string(&project.title, 36),
            student: project.student_name,
            grade: or_dash(&project.student_grade),
            status: status_label(project.approval_status.as_str()).to_string(),
            description: truncate_string(&or_dash(&description), 48),
        }
    }
}

impl Pretty for ProjectHighlight {
    fn pretty(&self) -> String {
        let mut lines = vec![
            format!("{} {}", self.title.bold(), self.id.dimmed()),
            format!(
                "By {} (grade {}) | {}",
                self.student_name,
                or_dash(&self.student_grade),
                status_badge(self.approval_status.as_str())
            ),
            format!("Description: {}", or_dash(&self.description)),
        ];
        if !self.uwh_description.is_empty() {
            lines.push(format!("Sponsor text: {}", self.uwh_description));
        }
        if !self.swinfy_notes.is_empty() {
            lines.push(format!("Reviewer notes: {}", self.swinfy_notes));
        }
        if !self.rejection_reason.is_empty() {
            lines.push(format!("{} {}", "Rejected:".red(), self.rejection_reason));
        }
        lines.push(format!(
            "Image: {}",
            opt_or_dash(self.image_url.as_deref().or(self.image.as_deref()))
        ));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::ProjectBuilder;
    use crate::client::models::ProjectStatus;

    #[test]
    fn test_project_display_prefers_sponsor_text() {
        let mut project = ProjectBuilder::new("pr-1")
            .status(ProjectStatus::Featured)
            .build();
        project.uwh_description = "Built a crop advisor".to_string();

        let display = ProjectDisplay::from(project);

        assert_eq!(display.status, "Featured");
        assert_eq!(display.description, "Built a crop advisor");
    }

    #[test]
    fn test_project_display_falls_back_to_description() {
        let display = ProjectDisplay::from(ProjectBuilder::new("pr-2").build());
        assert!(display.description.starts_with("A chatbot"));
    }
}
