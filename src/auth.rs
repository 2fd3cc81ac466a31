//! Admin authentication for price-table writes.
//!
//! Two accepted schemes: `Basic` with the configured admin credentials
//! (the wire contract), and `Bearer` with a session token previously
//! issued by the login endpoint. Credential comparison is constant-time.

use crate::config::AdminCredentials;
use crate::error::AppError;
use crate::session::SessionStore;
use axum::http::{header, HeaderMap};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use subtle::ConstantTimeEq;

#[derive(Debug)]
pub struct BasicCredentials {
    pub user: String,
    pub pass: String,
}

/// Decode an `Authorization: Basic ...` header value.
pub fn parse_basic(header: &str) -> Option<BasicCredentials> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some(BasicCredentials {
        user: user.to_string(),
        pass: pass.to_string(),
    })
}

pub fn verify(expected: &AdminCredentials, presented: &BasicCredentials) -> bool {
    let user_ok = presented.user.as_bytes().ct_eq(expected.user.as_bytes());
    let pass_ok = presented.pass.as_bytes().ct_eq(expected.pass.as_bytes());
    bool::from(user_ok & pass_ok)
}

/// Require valid Basic admin credentials (login endpoint).
pub fn require_basic(
    headers: &HeaderMap,
    admin: Option<&AdminCredentials>,
) -> Result<(), AppError> {
    let header = authorization_header(headers)?;
    let presented = parse_basic(header)
        .ok_or_else(|| AppError::Unauthorized("malformed Basic credentials".to_string()))?;
    let Some(expected) = admin else {
        tracing::warn!("admin login attempted but ADMIN_USER/ADMIN_PASS are not set");
        return Err(AppError::Unauthorized("invalid credentials".to_string()));
    };
    if verify(expected, &presented) {
        Ok(())
    } else {
        Err(AppError::Unauthorized("invalid credentials".to_string()))
    }
}

/// Require admin authority for a write: a session Bearer token or Basic
/// credentials.
pub fn require_admin(
    headers: &HeaderMap,
    admin: Option<&AdminCredentials>,
    sessions: &SessionStore,
) -> Result<(), AppError> {
    let header = authorization_header(headers)?;
    if let Some(token) = header.strip_prefix("Bearer ") {
        if sessions.validate(token) {
            return Ok(());
        }
        return Err(AppError::Unauthorized(
            "invalid or expired session".to_string(),
        ));
    }
    require_basic(headers, admin)
}

fn authorization_header(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing Authorization header".to_string()))
}
