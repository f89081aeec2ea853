//! Identity (user account) records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::IdentityId;
use crate::error::BoardError;

/// Account role, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Jobseeker,
    Employer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Jobseeker => "jobseeker",
            Role::Employer => "employer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jobseeker" => Ok(Role::Jobseeker),
            "employer" => Ok(Role::Employer),
            _ => Err(BoardError::InvalidInput(
                "role must be 'jobseeker' or 'employer'".into(),
            )),
        }
    }
}

/// Profile visibility. Stored, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl FromStr for Visibility {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            _ => Err(BoardError::InvalidInput(
                "visibility must be 'public' or 'private'".into(),
            )),
        }
    }
}

/// Optional self-described profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<u32>,
    pub current_position: Option<String>,
    pub visibility: Visibility,
    pub summary: Option<String>,
}

/// A registered user, including the credential hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: IdentityId,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub is_subscribed: bool,
    pub profile: Profile,
}

impl Identity {
    /// Case-insensitive email comparison used for uniqueness and login.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// Fields needed to create an identity. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Merge-update of profile fields. `None` leaves a field untouched.
///
/// `visibility` arrives unparsed so the update can reject bad values.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<u32>,
    pub current_position: Option<String>,
    pub visibility: Option<String>,
    pub summary: Option<String>,
}
