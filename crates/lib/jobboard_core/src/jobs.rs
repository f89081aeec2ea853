//! Job posting operations.

use tracing::info;

use crate::error::{BoardError, BoardResult};
use crate::fields::present;
use crate::models::job::{Job, JobDraft, JobFilter, NewJob, derive_teaser};
use crate::models::{IdentityId, JobId};
use crate::store::Stores;

/// Jobs matching every supplied filter, in store order.
pub fn list(stores: &Stores, filter: &JobFilter) -> Vec<Job> {
    stores
        .jobs
        .list()
        .into_iter()
        .filter(|job| filter.matches(job))
        .collect()
}

/// Jobs posted by one employer, in store order.
pub fn list_for_employer(stores: &Stores, employer_id: IdentityId) -> Vec<Job> {
    stores
        .jobs
        .list()
        .into_iter()
        .filter(|job| job.is_owned_by(employer_id))
        .collect()
}

pub fn get(stores: &Stores, id: JobId) -> BoardResult<Job> {
    stores
        .jobs
        .get(id)
        .ok_or_else(|| BoardError::NotFound("Job not found".into()))
}

/// Ownership predicate shared by every employer-scoped job route.
pub fn ensure_owner(job: &Job, requester_id: IdentityId) -> BoardResult<()> {
    if job.is_owned_by(requester_id) {
        Ok(())
    } else {
        Err(BoardError::Forbidden("You do not own this job post".into()))
    }
}

/// Create a job for an employer. Teaser falls back to the description head.
pub fn create(stores: &mut Stores, employer_id: IdentityId, draft: JobDraft) -> BoardResult<Job> {
    let (Some(title), Some(company), Some(location), Some(description)) = (
        present(draft.title),
        present(draft.company),
        present(draft.location),
        present(draft.description),
    ) else {
        return Err(BoardError::InvalidInput(
            "title, company, location, and description are required".into(),
        ));
    };
    let teaser = present(draft.teaser).unwrap_or_else(|| derive_teaser(&description));

    let job = stores.jobs.insert(NewJob {
        title,
        company,
        location,
        description,
        teaser,
        employer_id,
    });
    info!(job_id = job.id, employer_id, "job created");
    Ok(job)
}

/// Delete an owned job together with every application that references it.
///
/// The caller must hold the store lock for the whole call.
pub fn delete(stores: &mut Stores, id: JobId, requester_id: IdentityId) -> BoardResult<Job> {
    let job = get(stores, id)?;
    ensure_owner(&job, requester_id)?;

    let removed_applications = stores.applications.remove_for_job(id);
    let job = stores
        .jobs
        .remove(id)
        .ok_or_else(|| BoardError::NotFound("Job not found".into()))?;
    info!(job_id = id, removed_applications, "job deleted");
    Ok(job)
}
