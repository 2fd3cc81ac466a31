use crate::handlers::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

/// Health check endpoint
/// Also reports whether prices come from the blob backend or the
/// built-in defaults, so a misconfigured deployment is visible at a
/// glance.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let storage = if state.config.storage.token.is_some() {
        "remote"
    } else {
        "builtin-defaults"
    };
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "tile-quote",
        "version": env!("CARGO_PKG_VERSION"),
        "storage": storage,
    })))
}

/// Readiness check endpoint
/// Reads degrade to the default document, so readiness does not depend
/// on the blob backend being reachable.
pub async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "ready",
        "service": "tile-quote",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::SessionStore;
    use crate::store::PriceStore;
    use std::sync::Arc;

    fn state(token: Option<&str>) -> AppState {
        let mut config = Config::default();
        config.storage.token = token.map(str::to_string);
        AppState {
            store: Arc::new(PriceStore::new(&config.storage).unwrap()),
            sessions: Arc::new(SessionStore::new(config.session.ttl_minutes)),
            config: Arc::new(config),
        }
    }

    #[tokio::test]
    async fn test_health_check_reports_storage_mode() {
        let response = health_check(State(state(None))).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["storage"], "builtin-defaults");

        let response = health_check(State(state(Some("blob-token"))))
            .await
            .into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["storage"], "remote");
    }

    #[tokio::test]
    async fn test_readiness_check_returns_ok() {
        let response = readiness_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
