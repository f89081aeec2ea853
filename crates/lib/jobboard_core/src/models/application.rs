//! Job application records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::job::Job;
use super::{ApplicationId, IdentityId, JobId};
use crate::error::BoardError;

/// Application lifecycle status. Any status may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                BoardError::InvalidInput(
                    "status must be one of 'pending', 'reviewed', 'rejected', 'accepted'".into(),
                )
            })
    }
}

/// A jobseeker's application to one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub user_id: IdentityId,
    pub created_at: DateTime<Utc>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
}

/// Fields needed to create an application. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: JobId,
    pub user_id: IdentityId,
    pub created_at: DateTime<Utc>,
    pub cover_letter: Option<String>,
}

/// Application joined with its job, as seen by the applicant.
///
/// `job` is `None` when the job no longer exists.
#[derive(Debug, Clone)]
pub struct ApplicantApplication {
    pub application: Application,
    pub job: Option<Job>,
}

/// Application joined with its applicant, as seen by the job's employer.
#[derive(Debug, Clone)]
pub struct JobApplication {
    pub application: Application,
    pub applicant_email: Option<String>,
    pub applicant_name: Option<String>,
}

impl JobApplication {
    pub fn new(application: Application, applicant: Option<&Identity>) -> Self {
        Self {
            application,
            applicant_email: applicant.map(|i| i.email.clone()),
            applicant_name: applicant.and_then(|i| i.profile.full_name.clone()),
        }
    }
}
