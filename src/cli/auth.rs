//! Login and logout commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::spinner;
use crate::client::AuthApi;
use crate::error::{Error, Result};
use crate::session::Session;

/// Sign in, store the session in the config file, and point at the role's view.
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    let email = match email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let email = email.trim().to_string();
    if email.is_empty() || password.is_empty() {
        return Err(Error::Validation(
            "email and password are required".to_string(),
        ));
    }

    let bar = spinner(ctx.format, "Signing in...");
    let result = ctx.query.api().login(&email, &password).await;
    bar.finish_and_clear();

    let session = Session::from_login(result?)?;
    let role = session.role;

    ctx.session.set(session.clone());
    ctx.config.session = Some(session);
    ctx.config.save_to(ctx.config_path.clone())?;

    println!(
        "{} Signed in as {} ({})",
        "✓".green(),
        email.bold(),
        role.label()
    );
    println!(
        "  Your dashboard: {} ({})",
        format!("progdash {} summary", role.command()).cyan(),
        role.dashboard_path()
    );
    Ok(())
}

/// Forget the stored session.
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !ctx.session.is_active() && ctx.config.session.is_none() {
        println!("{} Not signed in", "○".dimmed());
        return Ok(());
    }

    ctx.session.terminate();

    // An expired session is never loaded into the store, so clear it directly
    let mut config = ctx.config;
    if config.session.is_some() {
        config.clear_session();
        config.save_to(ctx.config_path)?;
    }

    println!("{} Signed out", "✓".green());
    Ok(())
}
