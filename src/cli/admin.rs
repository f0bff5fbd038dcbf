//! Swinfy admin commands
//!
//! Everything here lives in the `/swinfy` zone: the verification queue,
//! photo and project review, the activity log, and the controls for what
//! the sponsor sees.

use log::debug;
use serde_json::{Map, Value, json};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm, print_done, rows, run_mutation, show};
use crate::cli::{AdminCommands, CommandContext, PhotoCommands, ProjectCommands};
use crate::client::models::{
    ActivityLogEntry, AdminSummary, District, ProjectHighlight, School, SessionPhoto,
    SponsorControl, StatusBanner, Submission, SubmissionDetail, SwinfyTrainer,
};
use crate::error::{Error, Result};
use crate::models::{
    ActivityDisplay, DistrictDisplay, PhotoDisplay, ProjectDisplay, SchoolDisplay,
    SubmissionDisplay, TrainerDisplay,
};
use crate::output::print_detail;
use crate::query::Query;

/// Dashboard page backing each admin command.
fn view_path(cmd: &AdminCommands) -> &'static str {
    match cmd {
        AdminCommands::Summary | AdminCommands::Districts | AdminCommands::Schools { .. } => {
            "/swinfy/dashboard"
        }
        AdminCommands::Submissions { .. }
        | AdminCommands::Submission { .. }
        | AdminCommands::Verify { .. }
        | AdminCommands::Flag { .. }
        | AdminCommands::Reject { .. } => "/swinfy/verification",
        AdminCommands::Photos { .. } | AdminCommands::Photo(_) => "/swinfy/photos",
        AdminCommands::Projects { .. } | AdminCommands::Project(_) => "/swinfy/projects",
        AdminCommands::Activity => "/swinfy/activity",
        AdminCommands::Trainers { .. } => "/swinfy/trainers",
        AdminCommands::Control | AdminCommands::Banner { .. } | AdminCommands::Financials { .. } => {
            "/swinfy/uwh-control"
        }
    }
}

/// Run an admin command
pub async fn run(opts: &GlobalOptions, cmd: AdminCommands) -> Result<()> {
    let ctx = CommandContext::for_view(opts, view_path(&cmd))?;

    match cmd {
        AdminCommands::Summary => {
            show(&ctx, Query::AdminSummary, |summary: AdminSummary, format| {
                print_detail(&summary, format)
            })
            .await
        }
        AdminCommands::Submissions { filters } => {
            let query = Query::Submissions(filters.to_submission_filters());
            show(&ctx, query, rows::<Submission, SubmissionDisplay>).await
        }
        AdminCommands::Submission { id } => {
            show(&ctx, Query::Submission(id), |detail: SubmissionDetail, format| {
                print_detail(&detail, format)
            })
            .await
        }
        AdminCommands::Verify { id, notes } => {
            run_mutation(
                &ctx,
                "Verifying submission...",
                ctx.query.verify_submission(&id, notes.as_deref()),
            )
            .await
        }
        AdminCommands::Flag { id, reason } => {
            run_mutation(
                &ctx,
                "Flagging submission...",
                ctx.query.flag_submission(&id, &reason),
            )
            .await
        }
        AdminCommands::Reject { id, reason } => {
            run_mutation(
                &ctx,
                "Rejecting submission...",
                ctx.query.reject_submission(&id, &reason),
            )
            .await
        }
        AdminCommands::Photos { filters } => {
            let query = Query::Photos(filters.to_photo_filters());
            show(&ctx, query, rows::<SessionPhoto, PhotoDisplay>).await
        }
        AdminCommands::Photo(cmd) => photo(&ctx, cmd).await,
        AdminCommands::Projects { filters } => {
            let query = Query::Projects(filters.to_project_filters());
            show(&ctx, query, rows::<ProjectHighlight, ProjectDisplay>).await
        }
        AdminCommands::Project(cmd) => project(&ctx, cmd).await,
        AdminCommands::Activity => {
            show(&ctx, Query::ActivityLog, rows::<ActivityLogEntry, ActivityDisplay>).await
        }
        AdminCommands::Trainers { district } => {
            show(&ctx, Query::Trainers(district), rows::<SwinfyTrainer, TrainerDisplay>).await
        }
        AdminCommands::Control => {
            show(&ctx, Query::SponsorControl, |control: SponsorControl, format| {
                print_detail(&control, format)
            })
            .await
        }
        AdminCommands::Banner {
            status,
            message,
            color,
        } => {
            let banner = StatusBanner {
                status,
                message,
                color,
            };
            run_mutation(
                &ctx,
                "Updating status banner...",
                ctx.query.update_status_banner(&banner),
            )
            .await
        }
        AdminCommands::Financials { entries } => {
            let summary = parse_financials(&entries)?;
            debug!("Financial summary keys: {:?}", summary.keys().collect::<Vec<_>>());
            run_mutation(
                &ctx,
                "Updating financial summary...",
                ctx.query.update_financial_summary(&summary),
            )
            .await
        }
        AdminCommands::Districts => {
            show(&ctx, Query::Districts, rows::<District, DistrictDisplay>).await
        }
        AdminCommands::Schools { district } => {
            show(&ctx, Query::Schools(district), rows::<School, SchoolDisplay>).await
        }
    }
}

async fn photo(ctx: &CommandContext, cmd: PhotoCommands) -> Result<()> {
    match cmd {
        PhotoCommands::Approve { id } => {
            run_mutation(ctx, "Approving photo...", ctx.query.approve_photo(&id)).await
        }
        PhotoCommands::Reject { id, reason } => {
            run_mutation(
                ctx,
                "Rejecting photo...",
                ctx.query.reject_photo(&id, reason.as_deref()),
            )
            .await
        }
        PhotoCommands::Feature { id } => {
            run_mutation(ctx, "Featuring photo...", ctx.query.feature_photo(&id)).await
        }
        PhotoCommands::Delete { id, yes } => {
            if !confirm(&format!("Delete photo {}?", id), yes)? {
                return Ok(());
            }
            ctx.query.delete_photo(&id).await?;
            print_done(
                ctx.format,
                &format!("Deleted photo {}", id),
                json!({ "id": id, "deleted": true }),
            )
        }
        PhotoCommands::BulkApprove { ids } => {
            run_mutation(
                ctx,
                &format!("Approving {} photos...", ids.len()),
                ctx.query.bulk_approve_photos(&ids),
            )
            .await
        }
        PhotoCommands::BulkReject { ids, reason } => {
            run_mutation(
                ctx,
                &format!("Rejecting {} photos...", ids.len()),
                ctx.query.bulk_reject_photos(&ids, &reason),
            )
            .await
        }
    }
}

async fn project(ctx: &CommandContext, cmd: ProjectCommands) -> Result<()> {
    match cmd {
        ProjectCommands::Approve { id } => {
            run_mutation(ctx, "Approving project...", ctx.query.approve_project(&id)).await
        }
        ProjectCommands::Reject { id, reason } => {
            run_mutation(
                ctx,
                "Rejecting project...",
                ctx.query.reject_project(&id, reason.as_deref()),
            )
            .await
        }
        ProjectCommands::Feature { id } => {
            run_mutation(ctx, "Featuring project...", ctx.query.feature_project(&id)).await
        }
        ProjectCommands::Edit {
            id,
            description,
            notes,
        } => {
            run_mutation(
                ctx,
                "Saving sponsor description...",
                ctx.query
                    .edit_project_for_sponsor(&id, &description, notes.as_deref()),
            )
            .await
        }
    }
}

/// Parse `KEY=VALUE` entries into a financial summary.
///
/// Numbers and booleans become JSON values; anything else stays a string.
fn parse_financials(entries: &[String]) -> Result<Map<String, Value>> {
    let mut summary = Map::new();
    for entry in entries {
        let Some((key, raw)) = entry.split_once('=') else {
            return Err(Error::Validation(format!(
                "'{}' is not a KEY=VALUE pair",
                entry
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::Validation(format!("'{}' has an empty key", entry)));
        }

        let value = match serde_json::from_str::<Value>(raw.trim()) {
            Ok(value @ (Value::Number(_) | Value::Bool(_))) => value,
            _ => Value::String(raw.to_string()),
        };
        summary.insert(key.to_string(), value);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_financials_types_values() {
        let summary =
            parse_financials(&entries(&["budget=1200000", "on_track=true", "currency=INR"]))
                .unwrap();
        assert_eq!(summary["budget"], json!(1200000));
        assert_eq!(summary["on_track"], json!(true));
        assert_eq!(summary["currency"], json!("INR"));
    }

    #[test]
    fn test_parse_financials_keeps_equals_in_value() {
        let summary = parse_financials(&entries(&["note=a=b"])).unwrap();
        assert_eq!(summary["note"], json!("a=b"));
    }

    #[test]
    fn test_parse_financials_rejects_bad_entries() {
        assert!(matches!(
            parse_financials(&entries(&["budget"])),
            Err(Error::Validation(_))
        ));
        assert!(parse_financials(&entries(&["=5"])).is_err());
    }

    #[test]
    fn test_every_admin_command_stays_in_admin_zone() {
        let commands = [
            AdminCommands::Summary,
            AdminCommands::Activity,
            AdminCommands::Control,
            AdminCommands::Districts,
            AdminCommands::Photo(PhotoCommands::Feature { id: "p".into() }),
            AdminCommands::Project(ProjectCommands::Feature { id: "p".into() }),
        ];
        for cmd in &commands {
            assert!(view_path(cmd).starts_with("/swinfy/"), "{:?}", cmd);
        }
    }
}
