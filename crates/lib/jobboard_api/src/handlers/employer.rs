//! Employer job management and application review.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use jobboard_core::models::identity::Role;
use jobboard_core::{applications, jobs};

use super::parse_id;
use crate::AppState;
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{
    CreateJobRequest, JobApplicationInfo, JobApplicationsResponse, JobInfo, MessageResponse,
    UpdateStatusRequest, UpdateStatusResponse,
};

/// `GET /employer/jobs`: jobs posted by the caller.
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<JobInfo>>> {
    user.require_role(Role::Employer, "Only employers can view their jobs")?;
    let stores = state.stores.read().await;
    let own = jobs::list_for_employer(&stores, user.id());
    Ok(Json(own.into_iter().map(JobInfo::from).collect()))
}

/// `POST /employer/jobs`: create a job post.
pub async fn create_job_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateJobRequest>,
) -> AppResult<(StatusCode, Json<JobInfo>)> {
    user.require_role(Role::Employer, "Only employers can create job posts")?;
    let mut stores = state.stores.write().await;
    let job = jobs::create(&mut stores, user.id(), body.into())?;
    Ok((StatusCode::CREATED, Json(job.into())))
}

/// `DELETE /employer/jobs/{id}`: delete an owned job and its applications.
pub async fn delete_job_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    user.require_role(Role::Employer, "Only employers can delete job posts")?;
    let job_id = parse_id(&id, "Job not found")?;
    let mut stores = state.stores.write().await;
    jobs::delete(&mut stores, job_id, user.id())?;
    Ok(Json(MessageResponse {
        message: "Job deleted".into(),
    }))
}

/// `GET /employer/jobs/{id}/applications`: applications to an owned job.
pub async fn list_applications_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> AppResult<Json<JobApplicationsResponse>> {
    user.require_role(Role::Employer, "Only employers can view job applications")?;
    let job_id = parse_id(&id, "Job not found")?;
    let stores = state.stores.read().await;
    let (job, found) = applications::list_for_job(&stores, job_id, user.id())?;
    Ok(Json(JobApplicationsResponse {
        job: job.into(),
        applications: found.into_iter().map(JobApplicationInfo::from).collect(),
    }))
}

/// `PATCH /employer/applications/{id}`: set an application's status.
pub async fn update_application_status_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateStatusRequest>,
) -> AppResult<Json<UpdateStatusResponse>> {
    user.require_role(Role::Employer, "Only employers can update applications")?;
    let application_id = parse_id(&id, "Application not found")?;
    let mut stores = state.stores.write().await;
    let updated =
        applications::update_status(&mut stores, application_id, user.id(), body.status.as_deref())?;
    Ok(Json(UpdateStatusResponse {
        message: "Application status updated".into(),
        application: updated.into(),
    }))
}
