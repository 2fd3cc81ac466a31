use crate::auth;
use crate::error::AppError;
use crate::handlers::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

/// `GET /prices` — current price document, or the built-in default.
/// Public, and never fails the caller.
pub async fn get_prices(State(state): State<AppState>) -> Json<Value> {
    Json(state.store.current().await)
}

/// `POST /prices` — overwrite the price document. Admin only.
///
/// The body is stored as-is under the configured key; structural
/// validation is intentionally absent so the admin document format can
/// evolve without a redeploy.
pub async fn put_prices(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(document): Json<Value>,
) -> Result<Json<Value>, AppError> {
    auth::require_admin(&headers, state.config.admin.as_ref(), &state.sessions)?;
    state.store.save(&document).await?;
    info!(key = %state.config.storage.key, "price table updated");
    Ok(Json(json!({ "ok": true })))
}

/// Fallback for every other method on the price resource.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET,POST")],
        Json(json!({
            "error": {
                "message": "Method Not Allowed",
                "type": "method_not_allowed",
            }
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_method_not_allowed_lists_supported_methods() {
        let response = method_not_allowed().await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET,POST");
    }
}
