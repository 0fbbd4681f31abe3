//! Threadline Core - Shared types library.
//!
//! This crate provides the common types used by the Threadline `api`
//! backend (auth + catalog search) and its tooling.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails and IDs, plus the catalog record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
