//! UWH sponsor commands
//!
//! Read-only reporting from the `/uwh` zone. The server only ever returns
//! approved media of verified sessions here, so nothing is filtered locally.

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{rows, show};
use crate::cli::{CommandContext, OutputFormat, SponsorCommands};
use crate::client::models::{
    ActivityLogEntry, Curriculum, DistrictProgress, Gallery, ProjectHighlight, SponsorSummary,
};
use crate::error::Result;
use crate::models::{
    ActivityDisplay, CurriculumDisplay, DistrictProgressDisplay, ProjectDisplay, gallery_rows,
};
use crate::output::{Formattable, json, print_detail};
use crate::query::Query;

fn view_path(cmd: &SponsorCommands) -> &'static str {
    match cmd {
        SponsorCommands::Summary { .. } => "/uwh/dashboard",
        SponsorCommands::Gallery { .. } => "/uwh/gallery",
        SponsorCommands::Projects { .. } => "/uwh/innovations",
        SponsorCommands::Activity => "/uwh/activity",
        SponsorCommands::Districts => "/uwh/districts",
        SponsorCommands::Curriculum => "/uwh/curriculum",
    }
}

/// Run a sponsor command
pub async fn run(opts: &GlobalOptions, cmd: SponsorCommands) -> Result<()> {
    let ctx = CommandContext::for_view(opts, view_path(&cmd))?;

    match cmd {
        SponsorCommands::Summary { filters } => {
            let query = Query::SponsorSummary(filters.to_filters());
            show(&ctx, query, |summary: SponsorSummary, format| {
                print_detail(&summary, format)
            })
            .await
        }
        SponsorCommands::Gallery { filters } => {
            show(&ctx, Query::Gallery(filters.to_filters()), print_gallery).await
        }
        SponsorCommands::Projects { filters } => {
            let query = Query::SponsorProjects(filters.to_filters());
            show(&ctx, query, rows::<ProjectHighlight, ProjectDisplay>).await
        }
        SponsorCommands::Activity => {
            show(&ctx, Query::ActivityFeed, rows::<ActivityLogEntry, ActivityDisplay>).await
        }
        SponsorCommands::Districts => {
            show(
                &ctx,
                Query::DistrictProgress,
                rows::<DistrictProgress, DistrictProgressDisplay>,
            )
            .await
        }
        SponsorCommands::Curriculum => {
            show(&ctx, Query::Curriculum, rows::<Curriculum, CurriculumDisplay>).await
        }
    }
}

/// JSON keeps the featured/regular split; tables list featured photos first.
fn print_gallery(gallery: Gallery, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", json::format_json(&gallery)?);
            Ok(())
        }
        OutputFormat::Pretty | OutputFormat::Table => gallery_rows(&gallery).print(format),
    }
}
