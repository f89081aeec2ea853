//! Authentication domain models.

use serde::{Deserialize, Serialize};

use super::IdentityId;
use super::identity::Role;

/// JWT claims embedded in access tokens.
///
/// Captured at issuance; later changes to the identity are not reflected
/// until the user logs in again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: identity ID, carried as a string per the JWT `sub` claim.
    #[serde(with = "sub_as_string")]
    pub sub: IdentityId,
    pub email: String,
    pub role: Role,
    #[serde(rename = "isSubscribed")]
    pub is_subscribed: bool,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

mod sub_as_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::IdentityId;

    pub fn serialize<S: Serializer>(id: &IdentityId, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<IdentityId, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
