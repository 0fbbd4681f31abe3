//! Service layer for the API.

pub mod auth;
