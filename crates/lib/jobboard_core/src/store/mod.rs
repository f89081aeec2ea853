//! Record stores.
//!
//! Each store owns its records exclusively; records reference each other by
//! id only. The traits are the seam where a persistent backend would plug
//! in; [`memory`] provides the process-local implementation.

pub mod memory;

use crate::models::application::{Application, ApplicationStatus, NewApplication};
use crate::models::identity::{Identity, NewIdentity};
use crate::models::job::{Job, NewJob};
use crate::models::{ApplicationId, IdentityId, JobId};

/// User accounts.
pub trait IdentityStore: Send + Sync {
    fn insert(&mut self, new: NewIdentity) -> Identity;

    fn get(&self, id: IdentityId) -> Option<Identity>;

    /// Case-insensitive lookup.
    fn find_by_email(&self, email: &str) -> Option<Identity>;

    /// Replace a stored identity. Returns `None` if the id is unknown.
    fn update(&mut self, identity: Identity) -> Option<Identity>;
}

/// Job postings.
pub trait JobStore: Send + Sync {
    fn insert(&mut self, new: NewJob) -> Job;

    fn get(&self, id: JobId) -> Option<Job>;

    /// All jobs in insertion order.
    fn list(&self) -> Vec<Job>;

    fn remove(&mut self, id: JobId) -> Option<Job>;
}

/// Job applications.
pub trait ApplicationStore: Send + Sync {
    fn insert(&mut self, new: NewApplication) -> Application;

    fn get(&self, id: ApplicationId) -> Option<Application>;

    /// All applications in insertion order.
    fn list(&self) -> Vec<Application>;

    fn find(&self, job_id: JobId, user_id: IdentityId) -> Option<Application>;

    fn set_status(&mut self, id: ApplicationId, status: ApplicationStatus) -> Option<Application>;

    /// Remove every application for a job; returns how many were removed.
    fn remove_for_job(&mut self, job_id: JobId) -> usize;
}

/// The full set of stores a request operates on.
///
/// Callers hold this behind a single lock so multi-store operations
/// (cascade delete, check-then-create) run as one unit.
pub struct Stores {
    pub identities: Box<dyn IdentityStore>,
    pub jobs: Box<dyn JobStore>,
    pub applications: Box<dyn ApplicationStore>,
}

impl Stores {
    pub fn new(
        identities: Box<dyn IdentityStore>,
        jobs: Box<dyn JobStore>,
        applications: Box<dyn ApplicationStore>,
    ) -> Self {
        Self {
            identities,
            jobs,
            applications,
        }
    }

    /// Empty process-local stores. Contents are lost on restart.
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(memory::MemoryIdentityStore::default()),
            Box::new(memory::MemoryJobStore::default()),
            Box::new(memory::MemoryApplicationStore::default()),
        )
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::in_memory()
    }
}
