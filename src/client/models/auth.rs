//! Authentication models

use serde::{Deserialize, Serialize};

use crate::session::Role;

/// Account returned alongside issued tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}

/// Response of `POST /api/auth/login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: AccountUser,
    /// Access token (JWT)
    pub access: String,
    /// Refresh token
    pub refresh: String,
}
