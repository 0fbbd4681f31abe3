//! Integration tests for Threadline.
//!
//! The tests in `tests/` exercise the public HTTP contract of a running
//! server; they do not start one themselves.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply the schema
//! cargo run -p threadline-cli -- migrate
//!
//! # Start the server
//! cargo run -p threadline-api
//!
//! # Run integration tests
//! cargo test -p threadline-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `auth` - Registration and login contract
//! - `search` - Catalog search contract

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("THREADLINE_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}
