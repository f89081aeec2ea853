//! # jobboard_core
//!
//! Core domain logic for the job board: records, stores, credentials,
//! tokens and the operations the HTTP layer composes.

pub mod applications;
pub mod auth;
pub mod error;
mod fields;
pub mod identity;
pub mod jobs;
pub mod models;
pub mod store;

pub use error::{BoardError, BoardResult};
pub use store::Stores;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
