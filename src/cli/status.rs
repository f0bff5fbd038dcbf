//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display session and configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "progdash status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_from(config_path.clone()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!("Run {} to sign in.", "progdash login".cyan());
            println!();
            return Ok(());
        }
    };

    let api_url = opts.api_url_ref().unwrap_or(&config.api_url);
    println!("API: {}", api_url.cyan());
    println!();

    match config.session {
        Some(ref session) if session.is_expired() => {
            println!("{} Session for {} expired", "⚠".yellow(), session.email);
            println!("  → Run 'progdash login' to sign in again");
        }
        Some(ref session) => {
            let remaining = session.expires_at.signed_duration_since(chrono::Utc::now());
            println!(
                "{} Signed in as {} ({})",
                "✓".green(),
                session.email.bold(),
                session.role.label()
            );
            println!(
                "  Session valid for {}h {}m",
                remaining.num_hours(),
                remaining.num_minutes() % 60
            );
            println!(
                "  Views: {} ({})",
                format!("progdash {}", session.role.command()).cyan(),
                session.role.landing_path()
            );
        }
        None => {
            println!("{} Not signed in", "○".dimmed());
            println!("  → Run 'progdash login' to sign in");
        }
    }

    if let Some(ref format) = config.preferences.format {
        println!();
        println!("Default format: {}", format);
    }
    println!();

    Ok(())
}
