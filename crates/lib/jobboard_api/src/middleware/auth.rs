//! Authentication middleware: Bearer token extraction and JWT verification.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use axum::http::header::AUTHORIZATION;
use jobboard_core::auth::jwt::verify_access_token;
use jobboard_core::models::IdentityId;
use jobboard_core::models::auth::TokenClaims;
use jobboard_core::models::identity::Role;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// Key used to store `TokenClaims` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

impl AuthenticatedUser {
    pub fn id(&self) -> IdentityId {
        self.0.sub
    }

    /// Role gate for role-scoped routes. Uses the role captured in the token.
    pub fn require_role(&self, role: Role, message: &str) -> AppResult<()> {
        if self.0.role == role {
            Ok(())
        } else {
            Err(AppError::Forbidden(message.into()))
        }
    }
}

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the JWT,
/// and injects `AuthenticatedUser` into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers().get(AUTHORIZATION))?;
    let claims = verify_access_token(token, state.config.jwt_secret.as_bytes()).map_err(|e| {
        debug!(error = %e, "rejected bearer token");
        AppError::from(e)
    })?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}

/// The trimmed token after the literal `Bearer ` prefix.
fn bearer_token(header: Option<&HeaderValue>) -> AppResult<&str> {
    let token = header
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .unwrap_or_default();
    if token.is_empty() {
        return Err(AppError::Unauthorized(
            "Missing or invalid Authorization header".into(),
        ));
    }
    Ok(token)
}
