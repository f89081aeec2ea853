//! API wire models (camelCase JSON).

use chrono::{DateTime, Utc};
use jobboard_core::models::application::{
    ApplicantApplication, Application, ApplicationStatus, JobApplication,
};
use jobboard_core::models::identity::{Identity, ProfileUpdate, Role, Visibility};
use jobboard_core::models::job::{Job, JobDraft, JobFilter};
use jobboard_core::models::{ApplicationId, IdentityId, JobId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Minimal identity returned by register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: IdentityId,
    pub email: String,
    pub role: Role,
    pub is_subscribed: bool,
}

impl From<&Identity> for AuthUser {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
            role: identity.role,
            is_subscribed: identity.is_subscribed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

// ---------------------------------------------------------------------------
// Profile & subscription
// ---------------------------------------------------------------------------

/// Identity without its credential hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicIdentity {
    pub id: IdentityId,
    pub email: String,
    pub role: Role,
    pub is_subscribed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    pub visibility: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl From<Identity> for PublicIdentity {
    fn from(identity: Identity) -> Self {
        let profile = identity.profile;
        Self {
            id: identity.id,
            email: identity.email,
            role: identity.role,
            is_subscribed: identity.is_subscribed,
            full_name: profile.full_name,
            gender: profile.gender,
            age: profile.age,
            current_position: profile.current_position,
            visibility: profile.visibility,
            summary: profile.summary,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<u32>,
    pub current_position: Option<String>,
    pub visibility: Option<String>,
    pub summary: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            full_name: req.full_name,
            gender: req.gender,
            age: req.age,
            current_position: req.current_position,
            visibility: req.visibility,
            summary: req.summary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub message: String,
    pub user: PublicIdentity,
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

/// Listing filters. Built from raw query pairs so that repeated or unknown
/// keys never reject the request; the first value of each filter wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobsQuery {
    pub q: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
}

impl FromIterator<(String, String)> for JobsQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut query.q,
                "location" => &mut query.location,
                "company" => &mut query.company,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl From<JobsQuery> for JobFilter {
    fn from(query: JobsQuery) -> Self {
        Self {
            q: query.q,
            location: query.location,
            company: query.company,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInfo {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub teaser: String,
    pub employer_id: IdentityId,
}

impl From<Job> for JobInfo {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            description: job.description,
            teaser: job.teaser,
            employer_id: job.employer_id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub teaser: Option<String>,
}

impl From<CreateJobRequest> for JobDraft {
    fn from(req: CreateJobRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            location: req.location,
            description: req.description,
            teaser: req.teaser,
        }
    }
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInfo {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub user_id: IdentityId,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
}

impl From<Application> for ApplicationInfo {
    fn from(app: Application) -> Self {
        Self {
            id: app.id,
            job_id: app.job_id,
            user_id: app.user_id,
            created_at: app.created_at,
            cover_letter: app.cover_letter,
            status: app.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyResponse {
    pub message: String,
    pub application: ApplicationInfo,
}

/// Job reference shown to an applicant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyApplicationInfo {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    /// `null` once the job is gone.
    pub job: Option<JobListing>,
}

impl From<ApplicantApplication> for MyApplicationInfo {
    fn from(entry: ApplicantApplication) -> Self {
        let app = entry.application;
        Self {
            id: app.id,
            job_id: app.job_id,
            created_at: app.created_at,
            cover_letter: app.cover_letter,
            status: app.status,
            job: entry.job.map(|job| JobListing {
                id: job.id,
                title: job.title,
                company: job.company,
                location: job.location,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyApplicationsResponse {
    pub applications: Vec<MyApplicationInfo>,
}

/// Job reference shown alongside its applications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub company: String,
}

impl From<Job> for JobSummary {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationInfo {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub user_id: IdentityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
}

impl From<JobApplication> for JobApplicationInfo {
    fn from(entry: JobApplication) -> Self {
        let app = entry.application;
        Self {
            id: app.id,
            job_id: app.job_id,
            user_id: app.user_id,
            applicant_email: entry.applicant_email,
            applicant_name: entry.applicant_name,
            created_at: app.created_at,
            cover_letter: app.cover_letter,
            status: app.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplicationsResponse {
    pub job: JobSummary,
    pub applications: Vec<JobApplicationInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub application: JobApplicationInfo,
}
