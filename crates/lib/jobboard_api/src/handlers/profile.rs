//! Profile of the authenticated user.

use axum::extract::State;
use axum::{Extension, Json};
use jobboard_core::identity;

use crate::AppState;
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{PublicIdentity, UpdateProfileRequest};

/// `GET /profile`
pub async fn get_profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<PublicIdentity>> {
    let stores = state.stores.read().await;
    Ok(Json(identity::get_profile(&stores, user.id())?.into()))
}

/// `PUT /profile`: merge-update; omitted fields are left unchanged.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<UpdateProfileRequest>,
) -> AppResult<Json<PublicIdentity>> {
    let mut stores = state.stores.write().await;
    let updated = identity::update_profile(&mut stores, user.id(), body.into())?;
    Ok(Json(updated.into()))
}
