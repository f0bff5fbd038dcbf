//! Global CLI options shared across all commands
//!
//! This module provides a centralized struct for global CLI options, so
//! handlers take one argument instead of every flag.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config file preference
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.progdash/config.yaml)
    pub config: Option<String>,

    /// API base URL override
    pub api_url: Option<String>,

    /// Keep polling and re-render on every update
    pub watch: bool,

    /// Bypass the query cache and always ask the server
    pub no_cache: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            watch: cli.watch,
            no_cache: cli.no_cache,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            config: Some("/custom/path".to_string()),
            api_url: Some("http://localhost:9000".to_string()),
            watch: true,
            no_cache: true,
        };

        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.api_url_ref(), Some("http://localhost:9000"));
        assert!(opts.watch);
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions::default();

        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.api_url_ref(), None);
        assert!(opts.format.is_none());
        assert!(!opts.no_cache);
    }
}
