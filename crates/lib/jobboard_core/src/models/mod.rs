//! Domain models.
//!
//! These are internal domain records, distinct from the API wire models
//! (which carry `#[serde(rename_all = "camelCase")]` and hide credentials).

pub mod application;
pub mod auth;
pub mod identity;
pub mod job;

/// Numeric identifier of an identity (user).
pub type IdentityId = u64;

/// Numeric identifier of a job posting.
pub type JobId = u64;

/// Numeric identifier of a job application.
pub type ApplicationId = u64;
