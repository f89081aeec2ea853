//! Public job listing and the jobseeker apply action.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use jobboard_core::models::identity::Role;
use jobboard_core::models::job::JobFilter;
use jobboard_core::{applications, jobs};

use super::parse_id;
use crate::AppState;
use crate::error::AppResult;
use crate::extract::optional_json;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{ApplyRequest, ApplyResponse, JobInfo, JobsQuery};

/// `GET /jobs`: list jobs, optionally filtered by `q`, `location`, `company`.
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<JobInfo>> {
    let filter = JobFilter::from(pairs.into_iter().collect::<JobsQuery>());
    let stores = state.stores.read().await;
    let found = jobs::list(&stores, &filter);
    Json(found.into_iter().map(JobInfo::from).collect())
}

/// `GET /jobs/{id}`: single job detail.
pub async fn get_job_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<JobInfo>> {
    let job_id = parse_id(&id, "Job not found")?;
    let stores = state.stores.read().await;
    Ok(Json(jobs::get(&stores, job_id)?.into()))
}

/// `POST /jobs/{id}/apply`: apply as a jobseeker. The body is optional.
pub async fn apply_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<ApplyResponse>)> {
    user.require_role(Role::Jobseeker, "Only job seekers can apply for jobs")?;
    let job_id = parse_id(&id, "Job not found")?;
    let request: ApplyRequest = optional_json(&body)?;

    let mut stores = state.stores.write().await;
    let application = applications::create(&mut stores, job_id, user.id(), request.cover_letter)?;
    Ok((
        StatusCode::CREATED,
        Json(ApplyResponse {
            message: "Application submitted".into(),
            application: application.into(),
        }),
    ))
}
