//! Route command: ask the guard where a path leads

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::guard::{GuardState, Navigation, Zone};
use crate::output::json::format_json;

pub fn run(opts: &GlobalOptions, path: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    let decision = ctx.guard.check(&path);

    if ctx.format == OutputFormat::Json {
        let data = match &decision {
            Navigation::Pass => serde_json::json!({ "path": path, "decision": "pass" }),
            Navigation::Redirect(target) => serde_json::json!({
                "path": path,
                "decision": "redirect",
                "target": target,
            }),
        };
        println!("{}", format_json(&data)?);
        return Ok(());
    }

    match decision {
        Navigation::Pass => println!("{} {} {}", "✓".green(), path, "allowed".green()),
        Navigation::Redirect(target) => {
            println!("{} {} → {}", "→".yellow(), path, target.bold());
            if let Some(reason) = redirect_reason(&ctx, &path) {
                println!("  {}", reason.dimmed());
            }
        }
    }
    Ok(())
}

/// Why a zone path was redirected; aliases carry no reason.
fn redirect_reason(ctx: &CommandContext, path: &str) -> Option<String> {
    let zone = Zone::of(path)?;
    match ctx.guard.state(zone) {
        GuardState::NoSession => Some("not signed in".to_string()),
        GuardState::WrongRole(role) => Some(format!(
            "{} is for {}; yours is {}",
            zone,
            zone.required_role().label(),
            Zone::for_role(role)
        )),
        GuardState::Authorized(_) => None,
    }
}
