//! Authentication route handlers.
//!
//! Registration and login against the credential store. Login returns a
//! stateless `{success, message}` acknowledgment - no token or session.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Plain message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Login response with an explicit success flag.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle registration.
///
/// Creates a user if the email is not taken; never echoes sensitive data
/// back to the client.
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let service = AuthService::new(state.pool());
    let user = service
        .register(&body.name, &body.email, &body.password)
        .await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// Handle login.
///
/// On success returns `{success: true}` with no session artifact.
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let service = AuthService::new(state.pool());
    let user = service
        .login(&body.email, &body.password)
        .await
        .map_err(login_error)?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
    }))
}

/// Classify a login failure at the route boundary.
///
/// Server-side failures (store unreachable, hashing broke) keep the
/// endpoint's `success: false` flag in their error body; the 400-class
/// failures already carry it.
fn login_error(err: AuthError) -> AppError {
    match err {
        err @ (AuthError::Repository(_) | AuthError::PasswordHash) => {
            AppError::LoginUnavailable(err)
        }
        other => AppError::Auth(other),
    }
}
