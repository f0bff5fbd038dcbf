//! Trainer self-service API trait

use async_trait::async_trait;

use crate::client::models::{
    NewProject, NewSubmission, ProfileUpdate, ProjectHighlight, Student, StudentForm, Submission,
    SubmissionDetail, TrainerGalleryPhoto, TrainerProfile,
};
use crate::error::Result;

#[async_trait]
pub trait TrainerApi: Send + Sync {
    async fn trainer_submissions(&self) -> Result<Vec<Submission>>;

    async fn trainer_submission(&self, id: &str) -> Result<SubmissionDetail>;

    /// Upload a session report with its photos
    async fn submit_session(&self, submission: &NewSubmission) -> Result<SubmissionDetail>;

    /// Attach a student project to one of the trainer's submissions
    async fn add_project(
        &self,
        submission_id: &str,
        project: &NewProject,
    ) -> Result<ProjectHighlight>;

    async fn trainer_students(&self) -> Result<Vec<Student>>;

    async fn add_student(&self, form: &StudentForm) -> Result<Student>;

    async fn update_student(&self, id: &str, form: &StudentForm) -> Result<Student>;

    async fn delete_student(&self, id: &str) -> Result<()>;

    async fn trainer_projects(&self) -> Result<Vec<ProjectHighlight>>;

    async fn trainer_gallery(&self) -> Result<Vec<TrainerGalleryPhoto>>;

    async fn trainer_profile(&self) -> Result<TrainerProfile>;

    async fn update_trainer_profile(&self, update: &ProfileUpdate) -> Result<TrainerProfile>;
}
