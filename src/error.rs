//! Error types for the progdash CLI

use std::time::Duration;
use thiserror::Error;

use crate::session::Role;

/// Result type alias for progdash operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input rejected locally; no request was sent.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The signed-in role cannot open this view.
    #[error(
        "Signed in as {}. Your view is `progdash {}` ({}).",
        .0.label(),
        .0.command(),
        .0.landing_path()
    )]
    WrongRole(Role),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// True when the error terminated the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api(ApiError::Unauthorized))
    }
}

/// API-related errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Session expired or invalid. Run `progdash login` to sign in again.")]
    Unauthorized,

    #[error("Access denied. Your role cannot access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Session token could not be decoded")]
    InvalidToken,

    #[error("Already in progress: {0}")]
    MutationInFlight(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<&Error> for ApiError {
    /// Collapse any error into the API taxonomy, for views that only display it.
    fn from(err: &Error) -> Self {
        match err {
            Error::Api(api) => api.clone(),
            Error::Json(e) => ApiError::InvalidResponse(e.to_string()),
            other => ApiError::InvalidResponse(other.to_string()),
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `progdash login` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Not logged in. Run `progdash login` to sign in.")]
    NotLoggedIn,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
