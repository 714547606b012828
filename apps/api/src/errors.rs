use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::tryout::TryOutError;
use crate::assessment::swipe::AssessmentError;
use crate::auth::session::SessionStoreError;
use crate::backend::BackendError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The auth backend refused the credentials; carries its message.
    #[error("Authentication failed: {0}")]
    AuthRejected(String),

    /// The career backend failed and the flow has no local fallback.
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        AppError::Backend(e.to_string())
    }
}

impl From<AssessmentError> for AppError {
    fn from(e: AssessmentError) -> Self {
        match e {
            AssessmentError::AlreadyComplete => AppError::Conflict(e.to_string()),
            AssessmentError::Incomplete { .. } => AppError::Validation(e.to_string()),
        }
    }
}

impl From<TryOutError> for AppError {
    fn from(e: TryOutError) -> Self {
        match e {
            TryOutError::UnknownTask(_) => AppError::NotFound(e.to_string()),
            _ => AppError::Validation(e.to_string()),
        }
    }
}

impl From<SessionStoreError> for AppError {
    fn from(e: SessionStoreError) -> Self {
        AppError::Internal(e.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::AuthRejected(msg) => (StatusCode::UNAUTHORIZED, "AUTH_REJECTED", msg.clone()),
            AppError::Backend(msg) => {
                tracing::error!("Backend error: {msg}");
                (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_api_error_keeps_message() {
        let err: AppError = BackendError::Api {
            status: 500,
            message: "Analysis failed".to_string(),
        }
        .into();
        assert!(matches!(&err, AppError::Backend(m) if m == "Analysis failed"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_tryout_errors_map_to_status() {
        let missing: AppError = TryOutError::UnknownTask("9".to_string()).into();
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let bad: AppError = TryOutError::ImageTooLarge { size: 1 }.into();
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_assessment_errors_map_to_status() {
        let done: AppError = AssessmentError::AlreadyComplete.into();
        assert_eq!(done.into_response().status(), StatusCode::CONFLICT);

        let partial: AppError = AssessmentError::Incomplete {
            answered: 3,
            total: 15,
        }
        .into();
        assert_eq!(partial.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_rejection_is_unauthorized() {
        let err = AppError::AuthRejected("Invalid email or password".to_string());
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
