//! Command execution context
//!
//! Provides a unified context for command execution: config loading, the
//! shared session store, the HTTP client and query client built over it, and
//! the route guard every role command passes through.

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::DashboardClient;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};
use crate::guard::{Navigation, RouteGuard};
use crate::query::QueryClient;
use crate::session::{Role, SessionStore};

/// Context for command execution containing config, clients, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// Where the config (and the session) is persisted
    pub config_path: PathBuf,
    /// The one session store shared by every component
    pub session: SessionStore,
    pub guard: RouteGuard,
    /// Cached, invalidating client over the dashboard API
    pub query: QueryClient<DashboardClient>,
    /// Output format preference
    pub format: OutputFormat,
    /// Keep polling and re-render
    pub watch: bool,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Precedence for the API URL and output format: CLI flag > environment
    /// variable > config file > default.
    ///
    /// # Errors
    /// Returns error if the config file cannot be parsed or the API URL is
    /// invalid. A missing config file is not an error.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let mut config = Config::load_at(opts.config_ref())?;

        if let Some(url) = opts.api_url_ref() {
            config.api_url = url.to_string();
        }
        config.validate()?;

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(|f| f.parse().ok())
            })
            .unwrap_or_default();

        let session = SessionStore::from_config(&config, config_path.clone());
        let client = DashboardClient::new(&config.api_url, session.clone())?;
        let mut query = QueryClient::new(client);
        if opts.no_cache {
            query = query.without_cache();
        }

        Ok(Self {
            guard: RouteGuard::new(session.clone()),
            config,
            config_path,
            session,
            query,
            format,
            watch: opts.watch,
        })
    }

    /// Create a context for a role view, routed through the guard first.
    pub fn for_view(opts: &GlobalOptions, path: &str) -> Result<Self> {
        let ctx = Self::new(opts)?;
        ctx.authorize(path)?;
        Ok(ctx)
    }

    /// Check that the current session may open the dashboard `path`.
    ///
    /// # Errors
    /// `NotLoggedIn` without a session, `WrongRole` when the guard sends the
    /// session to another zone.
    pub fn authorize(&self, path: &str) -> Result<Role> {
        let role = self.session.role();
        match (self.guard.check(path), role) {
            (Navigation::Pass, Some(role)) => Ok(role),
            (Navigation::Redirect(_), Some(role)) => Err(Error::WrongRole(role)),
            (_, None) => Err(ConfigError::NotLoggedIn.into()),
        }
    }
}
