//! Generic view and mutation handlers
//!
//! Every read command follows the same flow:
//! 1. Route through the guard (done by `CommandContext::for_view`)
//! 2. Fetch through the query cache, or subscribe with `--watch`
//! 3. Convert to display type
//! 4. Print output
//!
//! Every write command shows a spinner while the request is pending and
//! prints the acknowledgement in the chosen format.

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use colored::Colorize;
use console::Term;
use dialoguer::{Confirm, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::{ApiError, Result};
use crate::output::json::JsonOutput;
use crate::output::{Formattable, Pretty, print_detail};
use crate::query::{Query, QuerySnapshot};

/// Convert models to display rows and print them.
pub fn rows<T, D>(items: Vec<T>, format: OutputFormat) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
{
    let display: Vec<D> = items.into_iter().map(D::from).collect();
    display.print(format)
}

/// Show a query once, or keep it on screen with `--watch`.
///
/// Queries without a poll interval are shown once even with `--watch`.
pub async fn show<T, R>(ctx: &CommandContext, query: Query, render: R) -> Result<()>
where
    T: DeserializeOwned + Serialize,
    R: Fn(T, OutputFormat) -> Result<()>,
{
    if ctx.watch {
        if let Some(interval) = query.poll_interval() {
            return watch(ctx, query, interval, render).await;
        }
        debug!("{} is not polled; showing once", query.key());
    }

    let data = ctx.query.fetch::<T>(&query).await.into_result()?;
    render(data, ctx.format)
}

async fn watch<T, R>(ctx: &CommandContext, query: Query, interval: Duration, render: R) -> Result<()>
where
    T: DeserializeOwned + Serialize,
    R: Fn(T, OutputFormat) -> Result<()>,
{
    let mut subscription = ctx.query.watch::<T>(query);
    let redraw = ctx.format != OutputFormat::Json && std::io::stdout().is_terminal();
    eprintln!(
        "{} {} every {}s (Ctrl+C to stop)",
        "Watching".cyan(),
        subscription.key(),
        interval.as_secs()
    );

    loop {
        let next = tokio::select! {
            next = subscription.next() => next,
            _ = tokio::signal::ctrl_c() => return Ok(()),
        };

        // Polling only stops on its own when the session ended
        let Some(snapshot) = next else {
            return Err(ApiError::Unauthorized.into());
        };

        render_snapshot(snapshot, ctx.format, redraw, &render)?;
    }
}

fn render_snapshot<T, R>(
    snapshot: QuerySnapshot<T>,
    format: OutputFormat,
    redraw: bool,
    render: &R,
) -> Result<()>
where
    T: Serialize,
    R: Fn(T, OutputFormat) -> Result<()>,
{
    if snapshot.error == Some(ApiError::Unauthorized) {
        return Err(ApiError::Unauthorized.into());
    }

    let warning = snapshot.error.as_ref().map(ToString::to_string);
    let Some(data) = snapshot.data else {
        if let Some(warning) = warning {
            eprintln!("{} {}", "⚠".yellow(), warning);
        }
        return Ok(());
    };

    if format == OutputFormat::Json {
        // One envelope per update, with the fetch time and any refetch error
        let output = JsonOutput::new(data)
            .fetched_at(snapshot.fetched_at)
            .warning(warning);
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if redraw {
        Term::stdout().clear_screen()?;
    }
    render(data, format)?;
    if let Some(at) = snapshot.fetched_at {
        let at = at.with_timezone(&chrono::Local).format("%H:%M:%S");
        eprintln!("{}", format!("Updated {}", at).dimmed());
    }
    if let Some(warning) = warning {
        eprintln!("{} Showing last fetched data: {}", "⚠".yellow(), warning);
    }
    Ok(())
}

/// Spinner on stderr for pretty output; hidden otherwise.
pub fn spinner(format: OutputFormat, message: &str) -> ProgressBar {
    if format != OutputFormat::Pretty || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Run a mutation behind a spinner and print its result.
pub async fn run_mutation<T, Fut>(ctx: &CommandContext, message: &str, call: Fut) -> Result<()>
where
    T: Pretty + Serialize,
    Fut: Future<Output = Result<T>>,
{
    let bar = spinner(ctx.format, message);
    let result = call.await;
    bar.finish_and_clear();
    print_detail(&result?, ctx.format)
}

/// Print the outcome of a mutation that returns no body.
pub fn print_done(format: OutputFormat, message: &str, data: serde_json::Value) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", crate::output::json::format_json(&data)?),
        OutputFormat::Pretty | OutputFormat::Table => println!("{} {}", "✓".green(), message),
    }
    Ok(())
}

/// Ask before a destructive action unless `--yes` was given.
///
/// Without a terminal there is nobody to ask, so the answer is no.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        eprintln!("{} Not a terminal; pass --yes to confirm", "✗".red());
        return Ok(false);
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubmissionDisplay;

    fn snapshot(data: Option<u32>, error: Option<ApiError>) -> QuerySnapshot<u32> {
        QuerySnapshot {
            data,
            error,
            fetched_at: None,
            from_cache: false,
        }
    }

    #[test]
    fn test_unauthorized_snapshot_ends_watch() {
        let render = |_: u32, _: OutputFormat| -> Result<()> { panic!("must not render") };
        let result = render_snapshot(
            snapshot(None, Some(ApiError::Unauthorized)),
            OutputFormat::Table,
            false,
            &render,
        );
        assert!(result.unwrap_err().is_unauthorized());
    }

    #[test]
    fn test_redraw_renders_after_clearing() {
        let rendered = std::cell::Cell::new(None);
        let render = |n: u32, _: OutputFormat| -> Result<()> {
            rendered.set(Some(n));
            Ok(())
        };
        render_snapshot(snapshot(Some(7), None), OutputFormat::Table, true, &render).unwrap();
        assert_eq!(rendered.get(), Some(7));
    }

    #[test]
    fn test_stale_snapshot_still_renders() {
        let rendered = std::cell::Cell::new(None);
        let render = |n: u32, _: OutputFormat| -> Result<()> {
            rendered.set(Some(n));
            Ok(())
        };
        render_snapshot(
            snapshot(Some(4), Some(ApiError::Network("offline".to_string()))),
            OutputFormat::Table,
            false,
            &render,
        )
        .unwrap();
        assert_eq!(rendered.get(), Some(4));
    }

    #[test]
    fn test_failed_snapshot_without_data_is_not_fatal() {
        let render = |_: u32, _: OutputFormat| -> Result<()> { panic!("nothing to render") };
        let result = render_snapshot(
            snapshot(None, Some(ApiError::ServerError("502".to_string()))),
            OutputFormat::Pretty,
            false,
            &render,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_rows_accepts_empty_list() {
        let items: Vec<crate::client::models::Submission> = vec![];
        assert!(rows::<_, SubmissionDisplay>(items, OutputFormat::Table).is_ok());
    }

    #[test]
    fn test_confirm_skips_prompt_with_yes() {
        assert!(confirm("Delete?", true).unwrap());
    }
}
