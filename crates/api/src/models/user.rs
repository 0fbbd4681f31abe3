//! User domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use threadline_core::{Email, UserId};

/// A registered user (domain type).
///
/// The password hash is deliberately not part of this type; it only ever
/// travels through the credential-verification path.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name supplied at registration.
    pub name: String,
    /// User's email address (unique key).
    pub email: Email,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
