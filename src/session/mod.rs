//! Session store
//!
//! A single [`SessionStore`] is built at startup and handed to every component
//! that needs the current credentials: the HTTP wrapper reads the bearer token
//! from it and terminates it on a 401, the route guard reads the role, and the
//! CLI reads it for status output. Clones share the same underlying session.

mod role;
mod token;

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::models::LoginResponse;
use crate::config::Config;
use crate::error::Result;

pub use role::Role;
pub use token::expiry_from_jwt;
#[cfg(test)]
pub(crate) use token::make_test_jwt;

/// An authenticated session as issued by the backend login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for API requests
    pub access_token: String,

    /// Refresh token (stored, never used by this client)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refresh_token: String,

    /// Role of the signed-in user
    pub role: Role,

    /// Email the session was opened with
    #[serde(default)]
    pub email: String,

    /// Access token expiry
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Build a session from a successful login, reading expiry from the token.
    pub fn from_login(login: LoginResponse) -> Result<Self> {
        let expires_at = expiry_from_jwt(&login.access)?;
        Ok(Self {
            access_token: login.access,
            refresh_token: login.refresh,
            role: login.user.role,
            email: login.user.email,
            expires_at,
        })
    }

    /// True if the token is expired or expires within 5 minutes.
    pub fn is_expired(&self) -> bool {
        let buffer = chrono::Duration::minutes(5);
        self.expires_at - buffer < Utc::now()
    }
}

/// Shared handle on the current session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
    /// Config file the session is persisted in, if any
    persist_to: Option<PathBuf>,
}

impl SessionStore {
    /// A store with no session and no persistence.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store holding `session` in memory only.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
            persist_to: None,
        }
    }

    /// A store seeded from the config file at `path`.
    ///
    /// Expired sessions are not loaded: the user is treated as signed out.
    pub fn from_config(config: &Config, path: PathBuf) -> Self {
        let session = config.session.clone().filter(|s| !s.is_expired());
        Self {
            inner: Arc::new(RwLock::new(session)),
            persist_to: Some(path),
        }
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    /// Bearer token of the current session.
    pub fn access_token(&self) -> Option<String> {
        self.current().map(|s| s.access_token)
    }

    /// Role of the current session.
    pub fn role(&self) -> Option<Role> {
        self.current().map(|s| s.role)
    }

    pub fn is_active(&self) -> bool {
        self.current().is_some()
    }

    /// Replace the current session.
    pub fn set(&self, session: Session) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(session);
        }
    }

    /// End the current session, locally and in the config file.
    ///
    /// Safe to call repeatedly; only the first call after a session was set
    /// has any effect.
    pub fn terminate(&self) {
        let previous = match self.inner.write() {
            Ok(mut guard) => guard.take(),
            Err(_) => return,
        };

        let Some(previous) = previous else {
            return;
        };
        log::info!("Session for {} terminated", previous.email);

        if let Some(ref path) = self.persist_to {
            if let Err(e) = Self::forget_persisted(path) {
                log::warn!("Failed to remove stored session: {}", e);
            }
        }
    }

    fn forget_persisted(path: &Path) -> Result<()> {
        let mut config = Config::load_from(path.to_path_buf())?;
        config.session = None;
        config.save_to(path.to_path_buf())
    }
}

#[cfg(test)]
pub(crate) fn test_session(role: Role) -> Session {
    Session {
        access_token: "test-token".to_string(),
        refresh_token: "test-refresh".to_string(),
        role,
        email: format!("{}@example.org", role),
        expires_at: Utc::now() + chrono::Duration::hours(1),
    }
}
