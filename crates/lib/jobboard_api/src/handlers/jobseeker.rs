//! Jobseeker's own applications.

use axum::extract::State;
use axum::{Extension, Json};
use jobboard_core::applications;
use jobboard_core::models::identity::Role;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{MyApplicationInfo, MyApplicationsResponse};

/// `GET /jobseeker/applications`
pub async fn list_applications_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<MyApplicationsResponse>> {
    user.require_role(
        Role::Jobseeker,
        "Only job seekers can view their applications",
    )?;
    let stores = state.stores.read().await;
    let applications = applications::list_for_applicant(&stores, user.id())
        .into_iter()
        .map(MyApplicationInfo::from)
        .collect();
    Ok(Json(MyApplicationsResponse { applications }))
}
