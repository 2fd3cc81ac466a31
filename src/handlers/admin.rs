use crate::auth;
use crate::error::AppError;
use crate::handlers::AppState;
use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};
use tracing::info;

/// `POST /admin/login` — exchange Basic credentials for a short-lived
/// session token, so the client does not have to hold raw credentials
/// beyond login.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    auth::require_basic(&headers, state.config.admin.as_ref())?;

    let grant = state.sessions.issue();
    info!(expires_at = %grant.expires_at, "admin session issued");

    Ok(Json(json!({
        "token": grant.token,
        "expiresAt": grant.expires_at.to_rfc3339(),
    })))
}
