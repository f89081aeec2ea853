//! Identity operations: registration, login, profile and subscription.

use tracing::{debug, info};

use crate::auth::password::{verify_dummy, verify_password};
use crate::error::{BoardError, BoardResult};
use crate::fields::present;
use crate::models::IdentityId;
use crate::models::identity::{Identity, NewIdentity, ProfileUpdate, Role, Visibility};
use crate::store::Stores;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// A validated registration request.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Registration {
    /// Check that every field is present and the role is known.
    pub fn parse(
        email: Option<String>,
        password: Option<String>,
        role: Option<String>,
    ) -> BoardResult<Self> {
        let (Some(email), Some(password), Some(role)) =
            (present(email), present(password), present(role))
        else {
            return Err(BoardError::InvalidInput(
                "email, password and role are required".into(),
            ));
        };
        Ok(Self {
            email: email.trim().to_string(),
            password,
            role: role.parse()?,
        })
    }
}

/// Validated login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn parse(email: Option<String>, password: Option<String>) -> BoardResult<Self> {
        let (Some(email), Some(password)) = (present(email), present(password)) else {
            return Err(BoardError::InvalidInput(
                "email and password are required".into(),
            ));
        };
        Ok(Self {
            email: email.trim().to_string(),
            password,
        })
    }
}

/// Fail with `Conflict` if the email (any case) is already registered.
pub fn ensure_email_available(stores: &Stores, email: &str) -> BoardResult<()> {
    match stores.identities.find_by_email(email) {
        Some(_) => Err(BoardError::Conflict(
            "User with this email already exists".into(),
        )),
        None => Ok(()),
    }
}

/// Create an identity from an already-hashed password.
///
/// Re-checks email uniqueness, so the caller must hold the store lock for
/// the whole call.
pub fn register(
    stores: &mut Stores,
    email: &str,
    password_hash: String,
    role: Role,
) -> BoardResult<Identity> {
    ensure_email_available(stores, email)?;
    let identity = stores.identities.insert(NewIdentity {
        email: email.to_string(),
        password_hash,
        role,
    });
    info!(id = identity.id, role = %identity.role, "identity registered");
    Ok(identity)
}

/// Check a password against the looked-up identity.
///
/// Unknown email and wrong password produce the same error, and both pay
/// for a bcrypt verification.
pub fn verify_credentials(candidate: Option<Identity>, password: &str) -> BoardResult<Identity> {
    let Some(identity) = candidate else {
        verify_dummy(password);
        debug!("login for unknown email");
        return Err(BoardError::Unauthorized(INVALID_CREDENTIALS.into()));
    };
    if !verify_password(password, &identity.password_hash)? {
        debug!(id = identity.id, "login with wrong password");
        return Err(BoardError::Unauthorized(INVALID_CREDENTIALS.into()));
    }
    Ok(identity)
}

pub fn get_profile(stores: &Stores, id: IdentityId) -> BoardResult<Identity> {
    stores
        .identities
        .get(id)
        .ok_or_else(|| BoardError::NotFound("User not found".into()))
}

/// Merge the supplied profile fields into the identity.
pub fn update_profile(
    stores: &mut Stores,
    id: IdentityId,
    update: ProfileUpdate,
) -> BoardResult<Identity> {
    let mut identity = get_profile(stores, id)?;
    let visibility = update
        .visibility
        .as_deref()
        .map(str::parse::<Visibility>)
        .transpose()?;

    let profile = &mut identity.profile;
    if let Some(full_name) = update.full_name {
        profile.full_name = Some(full_name);
    }
    if let Some(gender) = update.gender {
        profile.gender = Some(gender);
    }
    if let Some(age) = update.age {
        profile.age = Some(age);
    }
    if let Some(current_position) = update.current_position {
        profile.current_position = Some(current_position);
    }
    if let Some(visibility) = visibility {
        profile.visibility = visibility;
    }
    if let Some(summary) = update.summary {
        profile.summary = Some(summary);
    }

    let updated = stores
        .identities
        .update(identity)
        .ok_or_else(|| BoardError::NotFound("User not found".into()))?;
    debug!(id, "profile updated");
    Ok(updated)
}

/// Turn a jobseeker's subscription on or off.
pub fn set_subscription(
    stores: &mut Stores,
    id: IdentityId,
    subscribed: bool,
) -> BoardResult<Identity> {
    let mut identity = get_profile(stores, id)?;
    if identity.role != Role::Jobseeker {
        return Err(BoardError::Forbidden(
            "Only job seekers can manage a subscription".into(),
        ));
    }
    identity.is_subscribed = subscribed;
    let updated = stores
        .identities
        .update(identity)
        .ok_or_else(|| BoardError::NotFound("User not found".into()))?;
    info!(id, subscribed, "subscription changed");
    Ok(updated)
}
