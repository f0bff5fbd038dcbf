//! Configuration management for progdash

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::session::Session;

/// Default API base URL (local development backend)
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the dashboard REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Stored session from the last `progdash login`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".progdash").join("config.yaml"))
    }

    /// Resolve an explicit path override, falling back to the default path.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load from an optional override path; a missing file yields defaults.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match Self::load_from(Self::resolve_path(path)?) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds bearer tokens: owner-only on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Check if the stored session is missing, expired, or expiring within 5 minutes
    pub fn is_session_expired(&self) -> bool {
        self.session.as_ref().is_none_or(Session::is_expired)
    }

    /// Forget the stored session
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    /// Validate the configured API URL
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api_url)
            .map_err(|e| ConfigError::Invalid(format!("api_url '{}': {}", self.api_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api_url must be http or https, got '{}'",
                parsed.scheme()
            ))
            .into());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            session: None,
            preferences: Preferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Role, test_session};
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.session.is_none());
        assert!(config.preferences.format.is_none());
    }

    #[test]
    fn test_session_expiry() {
        let mut config = Config::default();

        // No session counts as expired
        assert!(config.is_session_expired());

        config.session = Some(test_session(Role::Admin));
        assert!(!config.is_session_expired());

        let mut expiring = test_session(Role::Admin);
        expiring.expires_at = Utc::now() + chrono::Duration::minutes(2);
        config.session = Some(expiring);
        assert!(config.is_session_expired());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config {
            api_url: "https://dashboard.example.org".to_string(),
            session: Some(test_session(Role::Trainer)),
            preferences: Preferences {
                format: Some("json".to_string()),
            },
        };
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(loaded.api_url, "https://dashboard.example.org");
        assert_eq!(loaded.session, config.session);
        assert_eq!(loaded.preferences.format.as_deref(), Some("json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        Config::default().save_to(path.clone()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_at_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");
        let config = Config::load_at(path.to_str()).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_minimal_yaml_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "preferences: {}\n").unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.session.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.api_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api_url = "ftp://example.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clear_session() {
        let mut config = Config {
            session: Some(test_session(Role::Sponsor)),
            ..Config::default()
        };
        config.clear_session();
        assert!(config.session.is_none());
    }
}
