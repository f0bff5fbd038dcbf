//! Trainer commands
//!
//! Session reports, the student roster, and the trainer's own profile, all
//! inside the `/trainer` zone.

use log::debug;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm, print_done, rows, run_mutation, show};
use crate::cli::{CommandContext, StudentArgs, StudentCommands, TrainerCommands};
use crate::client::models::{
    Curriculum, NewProject, NewSubmission, ProfileUpdate, ProjectHighlight, School, Student,
    StudentForm, Submission, SubmissionDetail, TrainerGalleryPhoto, TrainerProfile,
    TrainerSummary,
};
use crate::error::Result;
use crate::models::{
    CurriculumDisplay, ProjectDisplay, SchoolDisplay, StudentDisplay, SubmissionDisplay,
    TrainerPhotoDisplay,
};
use crate::output::print_detail;
use crate::query::Query;

fn view_path(cmd: &TrainerCommands) -> &'static str {
    match cmd {
        TrainerCommands::Summary | TrainerCommands::Curriculum => "/trainer/dashboard",
        TrainerCommands::Submissions | TrainerCommands::Submission { .. } => {
            "/trainer/submissions"
        }
        TrainerCommands::Submit { .. } | TrainerCommands::AddProject { .. } => "/trainer/form",
        TrainerCommands::Students | TrainerCommands::Student(_) => "/trainer/students",
        TrainerCommands::Projects => "/trainer/projects",
        TrainerCommands::Gallery => "/trainer/gallery",
        TrainerCommands::Profile
        | TrainerCommands::UpdateProfile { .. }
        | TrainerCommands::Schools => "/trainer/school-info",
    }
}

/// Run a trainer command
pub async fn run(opts: &GlobalOptions, cmd: TrainerCommands) -> Result<()> {
    let ctx = CommandContext::for_view(opts, view_path(&cmd))?;

    match cmd {
        TrainerCommands::Summary => {
            show(&ctx, Query::TrainerSummary, |summary: TrainerSummary, format| {
                print_detail(&summary, format)
            })
            .await
        }
        TrainerCommands::Submissions => {
            show(&ctx, Query::TrainerSubmissions, rows::<Submission, SubmissionDisplay>).await
        }
        TrainerCommands::Submission { id } => {
            show(
                &ctx,
                Query::TrainerSubmission(id),
                |detail: SubmissionDetail, format| print_detail(&detail, format),
            )
            .await
        }
        TrainerCommands::Submit {
            school,
            day,
            students,
            topics,
            notes,
            challenges,
            photos,
            attendance,
        } => {
            let mut submission = NewSubmission {
                school,
                day_number: day,
                curriculum: None,
                student_count: students,
                topics_covered: topics,
                trainer_notes: notes,
                challenges,
                photos,
                attendance_file: attendance,
            };
            // Fail on the form before spending a request on the curriculum
            submission.validate()?;
            let curriculum = ctx.query.curriculum().await.into_result()?;
            submission.curriculum = curriculum_for_day(&curriculum, day);
            debug!("Day {} curriculum: {:?}", day, submission.curriculum);

            run_mutation(
                &ctx,
                &format!("Uploading day {} report...", day),
                ctx.query.submit_session(&submission),
            )
            .await
        }
        TrainerCommands::AddProject {
            submission_id,
            student,
            title,
            description,
            age,
            grade,
            image,
        } => {
            let project = NewProject {
                student_name: student,
                student_age: age,
                student_grade: grade,
                title,
                description,
                image,
            };
            run_mutation(
                &ctx,
                "Adding project...",
                ctx.query.add_project(&submission_id, &project),
            )
            .await
        }
        TrainerCommands::Students => {
            show(&ctx, Query::TrainerStudents, rows::<Student, StudentDisplay>).await
        }
        TrainerCommands::Student(cmd) => student(&ctx, cmd).await,
        TrainerCommands::Projects => {
            show(
                &ctx,
                Query::TrainerProjects,
                rows::<ProjectHighlight, ProjectDisplay>,
            )
            .await
        }
        TrainerCommands::Gallery => {
            show(
                &ctx,
                Query::TrainerGallery,
                rows::<TrainerGalleryPhoto, TrainerPhotoDisplay>,
            )
            .await
        }
        TrainerCommands::Profile => {
            show(&ctx, Query::TrainerProfile, |profile: TrainerProfile, format| {
                print_detail(&profile, format)
            })
            .await
        }
        TrainerCommands::UpdateProfile { name, photo } => {
            let update = ProfileUpdate {
                username: name,
                profile_photo: photo,
            };
            run_mutation(
                &ctx,
                "Updating profile...",
                ctx.query.update_profile(&update),
            )
            .await
        }
        TrainerCommands::Schools => {
            show(&ctx, Query::TrainerSchools, rows::<School, SchoolDisplay>).await
        }
        TrainerCommands::Curriculum => {
            show(&ctx, Query::Curriculum, rows::<Curriculum, CurriculumDisplay>).await
        }
    }
}

async fn student(ctx: &CommandContext, cmd: StudentCommands) -> Result<()> {
    match cmd {
        StudentCommands::Add { name, fields } => {
            let form = student_form(Some(name), fields);
            run_mutation(ctx, "Adding student...", ctx.query.add_student(&form)).await
        }
        StudentCommands::Update { id, name, fields } => {
            let form = student_form(name, fields);
            run_mutation(
                ctx,
                "Updating student...",
                ctx.query.update_student(&id, &form),
            )
            .await
        }
        StudentCommands::Delete { id, yes } => {
            if !confirm(&format!("Remove student {}?", id), yes)? {
                return Ok(());
            }
            ctx.query.delete_student(&id).await?;
            print_done(
                ctx.format,
                &format!("Removed student {}", id),
                json!({ "id": id, "deleted": true }),
            )
        }
    }
}

fn student_form(name: Option<String>, fields: StudentArgs) -> StudentForm {
    StudentForm {
        name,
        age: fields.age,
        grade: fields.grade,
        parent_name: fields.parent,
        parent_phone: fields.phone,
        notes: fields.notes,
    }
}

/// Curriculum record delivered on `day`, if the server has one.
fn curriculum_for_day(curriculum: &[Curriculum], day: u8) -> Option<String> {
    curriculum
        .iter()
        .find(|c| c.day_number == day)
        .map(|c| c.id.clone())
}
