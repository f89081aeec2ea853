//! In-memory stores keyed by auto-incrementing ids.

use std::collections::BTreeMap;

use super::{ApplicationStore, IdentityStore, JobStore};
use crate::models::application::{Application, ApplicationStatus, NewApplication};
use crate::models::identity::{Identity, NewIdentity, Profile};
use crate::models::job::{Job, NewJob};
use crate::models::{ApplicationId, IdentityId, JobId};

/// Id-ordered rows. Ids start at 1 and are never reused, so iteration
/// order equals insertion order.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T: Clone> Table<T> {
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn put(&mut self, id: u64, row: T) -> T {
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: u64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    table: Table<Identity>,
}

impl IdentityStore for MemoryIdentityStore {
    fn insert(&mut self, new: NewIdentity) -> Identity {
        let id = self.table.allocate_id();
        self.table.put(
            id,
            Identity {
                id,
                email: new.email,
                password_hash: new.password_hash,
                role: new.role,
                is_subscribed: false,
                profile: Profile::default(),
            },
        )
    }

    fn get(&self, id: IdentityId) -> Option<Identity> {
        self.table.get(id)
    }

    fn find_by_email(&self, email: &str) -> Option<Identity> {
        self.table.values().find(|i| i.has_email(email)).cloned()
    }

    fn update(&mut self, identity: Identity) -> Option<Identity> {
        if !self.table.rows.contains_key(&identity.id) {
            return None;
        }
        Some(self.table.put(identity.id, identity))
    }
}

#[derive(Debug, Default)]
pub struct MemoryJobStore {
    table: Table<Job>,
}

impl JobStore for MemoryJobStore {
    fn insert(&mut self, new: NewJob) -> Job {
        let id = self.table.allocate_id();
        self.table.put(
            id,
            Job {
                id,
                title: new.title,
                company: new.company,
                location: new.location,
                description: new.description,
                teaser: new.teaser,
                employer_id: new.employer_id,
            },
        )
    }

    fn get(&self, id: JobId) -> Option<Job> {
        self.table.get(id)
    }

    fn list(&self) -> Vec<Job> {
        self.table.values().cloned().collect()
    }

    fn remove(&mut self, id: JobId) -> Option<Job> {
        self.table.rows.remove(&id)
    }
}

#[derive(Debug, Default)]
pub struct MemoryApplicationStore {
    table: Table<Application>,
}

impl ApplicationStore for MemoryApplicationStore {
    fn insert(&mut self, new: NewApplication) -> Application {
        let id = self.table.allocate_id();
        self.table.put(
            id,
            Application {
                id,
                job_id: new.job_id,
                user_id: new.user_id,
                created_at: new.created_at,
                cover_letter: new.cover_letter,
                status: ApplicationStatus::Pending,
            },
        )
    }

    fn get(&self, id: ApplicationId) -> Option<Application> {
        self.table.get(id)
    }

    fn list(&self) -> Vec<Application> {
        self.table.values().cloned().collect()
    }

    fn find(&self, job_id: JobId, user_id: IdentityId) -> Option<Application> {
        self.table
            .values()
            .find(|a| a.job_id == job_id && a.user_id == user_id)
            .cloned()
    }

    fn set_status(&mut self, id: ApplicationId, status: ApplicationStatus) -> Option<Application> {
        let row = self.table.rows.get_mut(&id)?;
        row.status = status;
        Some(row.clone())
    }

    fn remove_for_job(&mut self, job_id: JobId) -> usize {
        let before = self.table.rows.len();
        self.table.rows.retain(|_, a| a.job_id != job_id);
        before - self.table.rows.len()
    }
}
