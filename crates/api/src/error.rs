//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; every error is recovered here and translated to an
//! HTTP status plus a JSON message, so no handler failure crashes the
//! process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Credential operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Store failure surfaced on the login path.
    ///
    /// Login responses always carry the endpoint's `success` flag, even for
    /// server-side failures, so these are tagged at the route boundary.
    #[error("Login error: {0}")]
    LoginUnavailable(#[source] AuthError),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body.
///
/// The login endpoint's failures carry an explicit `success: false` flag;
/// everything else is just a message.
#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    message: String,
}

impl AppError {
    /// Whether this error is a server-side failure worth capturing.
    fn is_server_error(&self) -> bool {
        match self {
            Self::Database(_) | Self::Internal(_) | Self::LoginUnavailable(_) => true,
            Self::Auth(err) => matches!(
                err,
                AuthError::Repository(_) | AuthError::PasswordHash
            ),
            Self::Catalog(err) => matches!(err, CatalogError::Dataset(_)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let (status, body) = match &self {
            Self::Auth(err) => match err {
                AuthError::DuplicateUser => (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        success: None,
                        message: "User already exists".to_string(),
                    },
                ),
                AuthError::InvalidEmail(_) => (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        success: None,
                        message: "Invalid email address".to_string(),
                    },
                ),
                AuthError::UserNotFound => (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        success: Some(false),
                        message: "User not found".to_string(),
                    },
                ),
                AuthError::InvalidCredentials => (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        success: Some(false),
                        message: "Invalid password".to_string(),
                    },
                ),
                AuthError::PasswordHash | AuthError::Repository(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        success: None,
                        message: "Internal server error".to_string(),
                    },
                ),
            },
            Self::LoginUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    success: Some(false),
                    message: "Error during login".to_string(),
                },
            ),
            Self::Catalog(CatalogError::MissingQuery) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    success: None,
                    message: "Query parameter is required".to_string(),
                },
            ),
            // Don't expose internal error details to clients
            Self::Catalog(CatalogError::Dataset(_)) | Self::Database(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    success: None,
                    message: "Internal server error".to_string(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_duplicate_user_maps_to_400() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::DuplicateUser)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_login_failures_map_to_400() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::UserNotFound)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_query_maps_to_400() {
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::MissingQuery)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_store_failures_map_to_500() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::Repository(
                RepositoryError::NotFound
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::LoginUnavailable(AuthError::Repository(
                RepositoryError::NotFound
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_login_store_failure_body_keeps_success_flag() {
        let response = AppError::LoginUnavailable(AuthError::Repository(
            RepositoryError::NotFound,
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json: serde_json::Value = serde_json::from_slice(&bytes).expect("parse body");
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Error during login");
    }

    #[test]
    fn test_error_body_shapes() {
        let body = ErrorBody {
            success: Some(false),
            message: "User not found".to_string(),
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "User not found");

        let body = ErrorBody {
            success: None,
            message: "User already exists".to_string(),
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert!(json.get("success").is_none());
    }
}
