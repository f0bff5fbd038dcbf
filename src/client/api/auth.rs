//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::LoginResponse;
use crate::error::Result;

/// Sign-in against the backend's token endpoint
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an access/refresh token pair
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;
}
