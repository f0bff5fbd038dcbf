//! Static program constants
//!
//! Curriculum schedule, districts, and the labels display code uses for
//! activity events and review states.

use chrono::NaiveDate;

pub const PROGRAM_NAME: &str = "AI Literacy Program";
pub const ORGANIZATION: &str = "TMREIS";
pub const SPONSOR: &str = "United Way Hyderabad";
pub const IMPLEMENTING_PARTNER: &str = "Swinfy";

pub const TOTAL_SCHOOLS: u32 = 40;
pub const TARGET_STUDENTS_PER_SCHOOL: u32 = 57;
pub const TOTAL_TARGET_STUDENTS: u32 = TOTAL_SCHOOLS * TARGET_STUDENTS_PER_SCHOOL;

/// One day of the curriculum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleDay {
    pub day: u8,
    /// ISO date the day is delivered on
    pub date: &'static str,
    pub title: &'static str,
}

impl ScheduleDay {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }
}

pub const SCHEDULE: [ScheduleDay; 4] = [
    ScheduleDay {
        day: 1,
        date: "2026-02-21",
        title: "Introduction to AI & Machine Learning Basics",
    },
    ScheduleDay {
        day: 2,
        date: "2026-02-22",
        title: "Data Literacy & AI Tools",
    },
    ScheduleDay {
        day: 3,
        date: "2026-02-23",
        title: "AI for Problem Solving",
    },
    ScheduleDay {
        day: 4,
        date: "2026-02-24",
        title: "AI Projects & Showcase",
    },
];

pub fn schedule_day(day: u8) -> Option<&'static ScheduleDay> {
    SCHEDULE.iter().find(|d| d.day == day)
}

/// Title of a curriculum day, or `Day N` outside the schedule.
pub fn day_title(day: u8) -> String {
    schedule_day(day)
        .map(|d| d.title.to_string())
        .unwrap_or_else(|| format!("Day {}", day))
}

/// Short delivery date such as `Sat 21 Feb`; empty outside the schedule.
pub fn day_date(day: u8) -> String {
    schedule_day(day)
        .and_then(ScheduleDay::date)
        .map(|date| date.format("%a %-d %b").to_string())
        .unwrap_or_default()
}

/// Display label for an activity event kind.
pub fn activity_label(activity_type: &str) -> &str {
    match activity_type {
        "submission_created" => "Submission",
        "submission_verified" => "Verified",
        "submission_flagged" => "Flagged",
        "submission_rejected" => "Rejected",
        "photo_approved" => "Photo Approved",
        "photo_rejected" => "Photo Rejected",
        "project_approved" => "Project Approved",
        "project_featured" => "Project Featured",
        other => other,
    }
}

/// Display label for a review state wire name.
pub fn status_label(status: &str) -> &str {
    match status {
        "draft" => "Draft",
        "submitted" => "Submitted",
        "verified" => "Verified",
        "flagged" => "Flagged",
        "rejected" => "Rejected",
        "pending" => "Pending",
        "approved" => "Approved",
        "featured" => "Featured",
        "not_started" => "Not Started",
        "in_progress" => "In Progress",
        "completed" => "Completed",
        "active" => "Active",
        "paused" => "Paused",
        other => other,
    }
}
