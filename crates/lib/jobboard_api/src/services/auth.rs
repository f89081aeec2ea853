//! Authentication service: register/login flows delegating to `jobboard_core`.
//!
//! bcrypt work runs on the blocking pool and never while the store lock is held.

use jobboard_core::auth::jwt::generate_access_token;
use jobboard_core::auth::password::hash_password;
use jobboard_core::identity::{self, Credentials, Registration};
use tokio::task::spawn_blocking;
use tracing::info;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{AuthUser, LoginRequest, LoginResponse, RegisterRequest};

/// Register a new identity. Fails with `Conflict` on a duplicate email (any case).
pub async fn register(state: &AppState, body: RegisterRequest) -> AppResult<AuthUser> {
    let registration = Registration::parse(body.email, body.password, body.role)?;

    // Cheap early rejection; the write below re-checks under the lock.
    identity::ensure_email_available(&*state.stores.read().await, &registration.email)?;

    let cost = state.config.bcrypt_cost;
    let password = registration.password;
    let pw_hash = spawn_blocking(move || hash_password(&password, cost)).await??;

    let mut stores = state.stores.write().await;
    let created = identity::register(&mut stores, &registration.email, pw_hash, registration.role)?;
    Ok(AuthUser::from(&created))
}

/// Authenticate with email + password and issue a bearer token.
pub async fn login(state: &AppState, body: LoginRequest) -> AppResult<LoginResponse> {
    let credentials = Credentials::parse(body.email, body.password)?;

    let candidate = state
        .stores
        .read()
        .await
        .identities
        .find_by_email(&credentials.email);
    let password = credentials.password;
    let identity =
        spawn_blocking(move || identity::verify_credentials(candidate, &password)).await??;

    let token = generate_access_token(
        &identity,
        state.config.jwt_secret.as_bytes(),
        state.config.token_ttl_secs,
    )?;
    info!(id = identity.id, role = %identity.role, "login succeeded");

    Ok(LoginResponse {
        token,
        user: AuthUser::from(&identity),
    })
}
