//! Dynamic shell completions for progdash
//!
//! Provides TAB completion for district IDs and submission IDs by querying
//! the dashboard API at completion time with the stored session.
//!
//! Shell support:
//! - Fish/Zsh: Full support with descriptions
//! - Bash: Values only (no description display)

use std::time::Duration;

use clap_complete::engine::{ArgValueCandidates, CompletionCandidate};

use crate::client::filters::SubmissionFilters;
use crate::client::{AdminApi, DashboardClient, SharedApi};
use crate::config::Config;
use crate::session::{Role, SessionStore};

/// Maximum number of completion candidates to return
const MAX_COMPLETIONS: usize = 25;

/// Timeout for completion API calls.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a blocking runtime for completion API calls.
///
/// Completers are called synchronously by the shell, so we need
/// a runtime to execute async API calls.
fn blocking_runtime() -> Option<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .ok()
}

/// Client over the stored session, if there is a live one.
///
/// Completions should never break the shell, so all errors are silent. The
/// session is held in memory only: a 401 here must not sign the user out.
fn completion_client() -> Option<(Role, DashboardClient)> {
    let config = Config::load_at(None).ok()?;
    if config.is_session_expired() {
        return None;
    }
    let session = config.session.clone()?;
    let role = session.role;
    let client = DashboardClient::new(&config.api_url, SessionStore::with_session(session)).ok()?;
    Some((role, client))
}

/// Complete district IDs with their names.
pub fn complete_districts() -> Vec<CompletionCandidate> {
    let Some((_, client)) = completion_client() else {
        return vec![];
    };
    let Some(rt) = blocking_runtime() else {
        return vec![];
    };

    let result = rt.block_on(async {
        tokio::time::timeout(COMPLETION_TIMEOUT, client.districts()).await
    });

    let Ok(Ok(districts)) = result else {
        return vec![];
    };

    districts
        .into_iter()
        .take(MAX_COMPLETIONS)
        .map(|d| CompletionCandidate::new(d.id).help(Some(d.name.into())))
        .collect()
}

/// Complete submission IDs awaiting review (admins only).
///
/// Format: `{id}` with help `{school} | Day {n} | {status}`
pub fn complete_submission_ids() -> Vec<CompletionCandidate> {
    let Some((Role::Admin, client)) = completion_client() else {
        return vec![];
    };
    let Some(rt) = blocking_runtime() else {
        return vec![];
    };

    let filters = SubmissionFilters::with_status("submitted");
    let result = rt.block_on(async {
        tokio::time::timeout(COMPLETION_TIMEOUT, client.list_submissions(&filters)).await
    });

    let Ok(Ok(submissions)) = result else {
        return vec![];
    };

    submissions
        .into_iter()
        .take(MAX_COMPLETIONS)
        .map(|s| {
            let help = format!(
                "{} | Day {} | {}",
                if s.school_name.is_empty() {
                    "--"
                } else {
                    &s.school_name
                },
                s.day_number,
                s.status.label()
            );
            CompletionCandidate::new(s.id).help(Some(help.into()))
        })
        .collect()
}

/// Create completion candidates for district IDs.
pub fn district_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_districts)
}

/// Create completion candidates for submission IDs.
pub fn submission_id_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_submission_ids)
}
