//! Core types for Threadline.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod product;

pub use email::{Email, EmailError};
pub use id::UserId;
pub use product::Product;
