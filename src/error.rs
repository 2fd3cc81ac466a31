use crate::store::blob::StoreError;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Write attempted without valid admin credentials
    Unauthorized(String),
    /// A required deployment secret is absent
    Misconfigured(String),
    /// Blob backend failure
    Storage(StoreError),
    /// Any other unexpected failure
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::Misconfigured(msg) => write!(f, "Misconfigured: {}", msg),
            Self::Storage(err) => write!(f, "Storage error: {}", err),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 500-class responses stay opaque; the detail goes to the log only.
        let (status, error_message) = match &self {
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            Self::Misconfigured(msg) => {
                tracing::error!(error = %msg, "storage misconfiguration");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
            Self::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        let mut response = (status, body).into_response();
        if matches!(self, Self::Unauthorized(_)) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"admin\""),
            );
        }
        response
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::Unauthorized(_) => "unauthorized",
        AppError::Misconfigured(_) | AppError::Storage(_) | AppError::Internal(_) => "server_error",
    }
}

// Implement conversions from common error types
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingToken => {
                Self::Misconfigured("BLOB_READ_WRITE_TOKEN is not set".to_string())
            }
            other => Self::Storage(other),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::Unauthorized("invalid credentials".to_string());
        assert_eq!(error.to_string(), "Unauthorized: invalid credentials");
    }

    #[test]
    fn test_error_type_name() {
        assert_eq!(
            error_type_name(&AppError::Unauthorized("test".to_string())),
            "unauthorized"
        );
        assert_eq!(
            error_type_name(&AppError::Misconfigured("test".to_string())),
            "server_error"
        );
    }

    #[tokio::test]
    async fn test_unauthorized_response_carries_challenge() {
        let error = AppError::Unauthorized("invalid credentials".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"admin\""
        );
    }

    #[tokio::test]
    async fn test_misconfigured_response_is_opaque() {
        let error = AppError::Misconfigured("BLOB_READ_WRITE_TOKEN is not set".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["message"], "server error");
    }
}
