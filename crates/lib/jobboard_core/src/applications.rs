//! Job application operations.

use chrono::Utc;
use tracing::info;

use crate::error::{BoardError, BoardResult};
use crate::fields::present;
use crate::jobs;
use crate::models::application::{
    ApplicantApplication, Application, ApplicationStatus, JobApplication, NewApplication,
};
use crate::models::job::Job;
use crate::models::{ApplicationId, IdentityId, JobId};
use crate::store::Stores;

/// Apply to a job. At most one application per (job, applicant).
///
/// The caller must hold the store lock for the whole call.
pub fn create(
    stores: &mut Stores,
    job_id: JobId,
    applicant_id: IdentityId,
    cover_letter: Option<String>,
) -> BoardResult<Application> {
    jobs::get(stores, job_id)?;
    if stores.applications.find(job_id, applicant_id).is_some() {
        return Err(BoardError::Conflict(
            "You have already applied for this job".into(),
        ));
    }
    let application = stores.applications.insert(NewApplication {
        job_id,
        user_id: applicant_id,
        created_at: Utc::now(),
        cover_letter: present(cover_letter),
    });
    info!(
        application_id = application.id,
        job_id, applicant_id, "application submitted"
    );
    Ok(application)
}

/// An applicant's applications, each joined with its job if it still exists.
pub fn list_for_applicant(stores: &Stores, applicant_id: IdentityId) -> Vec<ApplicantApplication> {
    stores
        .applications
        .list()
        .into_iter()
        .filter(|a| a.user_id == applicant_id)
        .map(|application| ApplicantApplication {
            job: stores.jobs.get(application.job_id),
            application,
        })
        .collect()
}

/// Applications to an owned job, each joined with the applicant's email and name.
pub fn list_for_job(
    stores: &Stores,
    job_id: JobId,
    requester_id: IdentityId,
) -> BoardResult<(Job, Vec<JobApplication>)> {
    let job = jobs::get(stores, job_id)?;
    jobs::ensure_owner(&job, requester_id)?;
    let applications = stores
        .applications
        .list()
        .into_iter()
        .filter(|a| a.job_id == job_id)
        .map(|a| join_applicant(stores, a))
        .collect();
    Ok((job, applications))
}

/// Set an application's status. Any status may follow any other.
pub fn update_status(
    stores: &mut Stores,
    application_id: ApplicationId,
    requester_id: IdentityId,
    status: Option<&str>,
) -> BoardResult<JobApplication> {
    let status: ApplicationStatus = status.unwrap_or_default().parse()?;
    let application = stores
        .applications
        .get(application_id)
        .ok_or_else(|| BoardError::NotFound("Application not found".into()))?;
    let job = stores
        .jobs
        .get(application.job_id)
        .ok_or_else(|| BoardError::NotFound("Job for this application not found".into()))?;
    jobs::ensure_owner(&job, requester_id)?;

    let updated = stores
        .applications
        .set_status(application_id, status)
        .ok_or_else(|| BoardError::NotFound("Application not found".into()))?;
    info!(application_id, %status, "application status updated");
    Ok(join_applicant(stores, updated))
}

fn join_applicant(stores: &Stores, application: Application) -> JobApplication {
    let applicant = stores.identities.get(application.user_id);
    JobApplication::new(application, applicant.as_ref())
}
