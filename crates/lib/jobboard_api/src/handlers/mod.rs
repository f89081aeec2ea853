//! Request handlers.

pub mod auth;
pub mod employer;
pub mod health;
pub mod jobs;
pub mod jobseeker;
pub mod profile;
pub mod subscription;

use crate::error::{AppError, AppResult};

/// Parse a numeric path id. Anything unparseable is reported like an unknown id.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> AppResult<u64> {
    raw.parse()
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}
