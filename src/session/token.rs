//! Access token inspection
//!
//! Tokens are issued by the backend; we only read the `exp` claim so the CLI
//! can tell an expired session apart from a live one without a round trip.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{ApiError, Result};

#[derive(Deserialize)]
struct JwtPayload {
    exp: i64,
}

/// Extract the expiry time from a JWT access token.
pub fn expiry_from_jwt(token: &str) -> Result<DateTime<Utc>> {
    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ApiError::InvalidToken.into());
    }

    // Some issuers pad anyway
    let payload_b64 = parts[1].trim_end_matches('=');
    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| ApiError::InvalidToken)?;

    let payload: JwtPayload =
        serde_json::from_slice(&payload_bytes).map_err(|_| ApiError::InvalidToken)?;

    DateTime::from_timestamp(payload.exp, 0).ok_or_else(|| ApiError::InvalidToken.into())
}

#[cfg(test)]
pub(crate) fn make_test_jwt(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{},"user_id":"u-1"}}"#, exp));
    format!("{}.{}.signature", header, payload)
}
