//! Domain error taxonomy.

use thiserror::Error;

/// Convenience alias for domain operation results.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors returned by every domain operation.
///
/// Each variant carries the message the caller shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// The user-facing message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            BoardError::InvalidInput(m)
            | BoardError::Unauthorized(m)
            | BoardError::Forbidden(m)
            | BoardError::NotFound(m)
            | BoardError::Conflict(m)
            | BoardError::Internal(m) => m,
        }
    }
}
