//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health         - Liveness check
//! GET  /health/ready   - Readiness check (pings the database)
//!
//! # Auth
//! POST /register       - Register a new user
//! POST /login          - Verify credentials (returns a success flag only)
//!
//! # Catalog
//! GET  /api/search     - Substring search over the product catalog
//! ```

pub mod auth;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Create the catalog API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/search", get(search::search))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth routes live at the root, matching the public contract
        .merge(auth_routes())
        // Catalog search
        .nest("/api", api_routes())
}
