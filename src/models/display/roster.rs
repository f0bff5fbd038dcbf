//! Display models for people and places: students, trainers, schools,
//! districts, and curriculum days

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{opt_or_dash, or_dash, truncate_string};
use crate::client::models::{
    Curriculum, District, DistrictProgress, School, Student, SwinfyTrainer,
};
use crate::output::Pretty;
use crate::output::formatters::format_progress;
use crate::program;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StudentDisplay {
    #[tabled(rename = "STUDENT ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "AGE")]
    pub age: String,

    #[tabled(rename = "GRADE")]
    pub grade: String,

    #[tabled(rename = "PARENT")]
    pub parent: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,
}

impl From<Student> for StudentDisplay {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            age: student
                .age
                .map(|a| a.to_string())
                .unwrap_or_else(|| "--".to_string()),
            grade: or_dash(&student.grade),
            parent: or_dash(&student.parent_name),
            phone: or_dash(&student.parent_phone),
        }
    }
}

impl Pretty for Student {
    fn pretty(&self) -> String {
        let age = self.age.map(|a| a.to_string());
        [
            format!("{} {}", self.name.bold(), self.id.dimmed()),
            format!(
                "Age: {} | Grade: {} | School: {}",
                opt_or_dash(age.as_deref()),
                or_dash(&self.grade),
                or_dash(&self.school_name)
            ),
            format!(
                "Parent: {} {}",
                or_dash(&self.parent_name),
                or_dash(&self.parent_phone)
            ),
        ]
        .join("\n")
    }
}

/// Trainer roster row with submission counters.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TrainerDisplay {
    #[tabled(rename = "TRAINER ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "SCHOOLS")]
    pub schools: String,

    #[tabled(rename = "VERIFIED")]
    pub verified: String,

    #[tabled(rename = "PENDING")]
    pub pending: u32,

    #[tabled(rename = "FLAGGED")]
    pub flagged: u32,
}

impl From<SwinfyTrainer> for TrainerDisplay {
    fn from(trainer: SwinfyTrainer) -> Self {
        let schools: Vec<&str> = trainer.schools.iter().map(|s| s.name.as_str()).collect();
        Self {
            id: trainer.id,
            name: or_dash(&trainer.full_name),
            email: trainer.email,
            schools: truncate_string(&or_dash(&schools.join(", ")), 40),
            verified: format!(
                "{}/{}",
                trainer.verified_submissions, trainer.total_submissions
            ),
            pending: trainer.pending_submissions,
            flagged: trainer.flagged_submissions,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SchoolDisplay {
    #[tabled(rename = "SCHOOL ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DISTRICT")]
    pub district: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "STUDENTS")]
    pub students: u32,

    #[tabled(rename = "TRAINER")]
    pub trainer: String,
}

impl From<School> for SchoolDisplay {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: truncate_string(&school.name, 36),
            district: or_dash(&school.district_name),
            status: school.status.label().to_string(),
            students: school.total_students,
            trainer: opt_or_dash(school.trainer_name.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DistrictDisplay {
    #[tabled(rename = "DISTRICT ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "STATE")]
    pub state: String,

    #[tabled(rename = "SCHOOLS")]
    pub schools: u32,
}

impl From<District> for DistrictDisplay {
    fn from(district: District) -> Self {
        Self {
            id: district.id,
            name: district.name,
            state: or_dash(&district.state),
            schools: district.school_count,
        }
    }
}

/// Per-district completion rollup row.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DistrictProgressDisplay {
    #[tabled(rename = "DISTRICT")]
    pub name: String,

    #[tabled(rename = "COMPLETED")]
    pub completed: String,

    #[tabled(rename = "IN PROGRESS")]
    pub in_progress: u32,

    #[tabled(rename = "NOT STARTED")]
    pub not_started: u32,
}

impl From<DistrictProgress> for DistrictProgressDisplay {
    fn from(progress: DistrictProgress) -> Self {
        let not_started = progress
            .total_schools
            .saturating_sub(progress.completed + progress.in_progress);
        Self {
            completed: format_progress(progress.completed, progress.total_schools),
            name: progress.name,
            in_progress: progress.in_progress,
            not_started,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CurriculumDisplay {
    #[tabled(rename = "DAY")]
    pub day: u8,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "OBJECTIVES")]
    pub objectives: usize,
}

impl From<Curriculum> for CurriculumDisplay {
    fn from(day: Curriculum) -> Self {
        Self {
            date: or_dash(&program::day_date(day.day_number)),
            day: day.day_number,
            title: day.title,
            objectives: day.learning_objectives.len(),
        }
    }
}
