//! Jobseeker subscription flag.
//!
//! Tokens issued before a change still carry the old flag until the user
//! logs in again.

use axum::extract::State;
use axum::{Extension, Json};
use jobboard_core::identity;
use jobboard_core::models::identity::Role;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{PublicIdentity, SubscriptionResponse};

/// `GET /subscription`: current user with subscription status.
pub async fn get_subscription_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<PublicIdentity>> {
    let stores = state.stores.read().await;
    Ok(Json(identity::get_profile(&stores, user.id())?.into()))
}

/// `POST /subscription/subscribe`
pub async fn subscribe_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<SubscriptionResponse>> {
    user.require_role(Role::Jobseeker, "Only job seekers can subscribe")?;
    set_subscription(&state, &user, true, "Subscription activated").await
}

/// `POST /subscription/cancel`
pub async fn cancel_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<SubscriptionResponse>> {
    user.require_role(Role::Jobseeker, "Only job seekers can cancel subscription")?;
    set_subscription(&state, &user, false, "Subscription cancelled").await
}

async fn set_subscription(
    state: &AppState,
    user: &AuthenticatedUser,
    subscribed: bool,
    message: &str,
) -> AppResult<Json<SubscriptionResponse>> {
    let mut stores = state.stores.write().await;
    let updated = identity::set_subscription(&mut stores, user.id(), subscribed)?;
    Ok(Json(SubscriptionResponse {
        message: message.into(),
        user: updated.into(),
    }))
}
