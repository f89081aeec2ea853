//! JWT token generation and verification.

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::{info, warn};

use crate::error::BoardError;
use crate::models::auth::TokenClaims;
use crate::models::identity::Identity;

/// Access token lifetime: 1 hour.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Longest accepted token lifetime: 1 year.
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// Generate a signed JWT access token (HS256) for an identity.
///
/// The token snapshots role and subscription status as they are now.
pub fn generate_access_token(
    identity: &Identity,
    secret: &[u8],
    ttl_secs: i64,
) -> Result<String, BoardError> {
    let now = Utc::now();
    let exp = Duration::try_seconds(ttl_secs)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| BoardError::Internal(format!("token ttl out of range: {ttl_secs}")))?;
    let claims = TokenClaims {
        sub: identity.id,
        email: identity.email.clone(),
        role: identity.role,
        is_subscribed: identity.is_subscribed,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| BoardError::Internal(format!("jwt encode: {e}")))
}

/// Verify a JWT access token, returning the claims on success.
///
/// Malformed, wrongly signed and expired tokens all yield the same
/// `Unauthorized` error.
pub fn verify_access_token(token: &str, secret: &[u8]) -> Result<TokenClaims, BoardError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.leeway = 0;
    decode::<TokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| BoardError::Unauthorized("Invalid or expired token".into()))
}

/// Resolve the JWT secret: env var `JWT_SECRET` → persisted file → freshly generated.
pub fn resolve_jwt_secret() -> String {
    if let Ok(secret) = std::env::var("JWT_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    resolve_jwt_secret_at(&jwt_secret_path())
}

/// Read the secret persisted at `path`, generating and writing one if absent.
pub fn resolve_jwt_secret_at(path: &Path) -> String {
    if let Ok(existing) = std::fs::read_to_string(path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!(path = %parent.display(), error = %e, "cannot create JWT secret directory");
    }
    match std::fs::write(path, &secret) {
        Ok(()) => info!(path = %path.display(), "generated new JWT secret"),
        Err(e) => warn!(
            path = %path.display(),
            error = %e,
            "cannot persist JWT secret; tokens will not survive a restart"
        ),
    }
    secret
}

/// Path to the persisted JWT secret file.
fn jwt_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jobboard")
        .join("jwt-secret")
}
