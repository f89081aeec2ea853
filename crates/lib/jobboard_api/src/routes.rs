//! Route paths, relative to [`API_PREFIX`].

pub const API_PREFIX: &str = "/api";

pub const GET_HEALTH: &str = "/health";

pub const POST_AUTH_REGISTER: &str = "/auth/register";
pub const POST_AUTH_LOGIN: &str = "/auth/login";

pub const GET_JOBS: &str = "/jobs";
pub const GET_JOBS_ID: &str = "/jobs/{id}";
pub const POST_JOBS_ID_APPLY: &str = "/jobs/{id}/apply";

/// `GET` and `PUT`.
pub const PROFILE: &str = "/profile";

/// `GET` and `POST`.
pub const EMPLOYER_JOBS: &str = "/employer/jobs";
pub const DELETE_EMPLOYER_JOBS_ID: &str = "/employer/jobs/{id}";
pub const GET_EMPLOYER_JOBS_ID_APPLICATIONS: &str = "/employer/jobs/{id}/applications";
pub const PATCH_EMPLOYER_APPLICATIONS_ID: &str = "/employer/applications/{id}";

pub const GET_JOBSEEKER_APPLICATIONS: &str = "/jobseeker/applications";

pub const GET_SUBSCRIPTION: &str = "/subscription";
pub const POST_SUBSCRIPTION_SUBSCRIBE: &str = "/subscription/subscribe";
pub const POST_SUBSCRIPTION_CANCEL: &str = "/subscription/cancel";
