//! Password hashing via bcrypt.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use rand::distr::Alphanumeric;
use rand::{Rng, rng};

use crate::error::BoardError;

/// Default bcrypt cost factor.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Cost factors bcrypt accepts.
pub const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=31;

/// Hash a password with bcrypt at the given cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, BoardError> {
    bcrypt::hash(password, cost).map_err(|e| BoardError::Internal(format!("bcrypt hash: {e}")))
}

/// Hash of a random password at the default cost, checked in place of a
/// missing account so that lookups for unknown emails cost the same.
static DUMMY_HASH: LazyLock<Option<String>> = LazyLock::new(|| {
    let password: String = rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    hash_password(&password, DEFAULT_BCRYPT_COST).ok()
});

/// Run a full bcrypt verification that never succeeds.
pub fn verify_dummy(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = bcrypt::verify(password, hash);
    }
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, BoardError> {
    bcrypt::verify(password, hash).map_err(|e| BoardError::Internal(format!("bcrypt verify: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("hunter2", 4).unwrap();
        assert_ne!(hash, "hunter2");
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same", 4).unwrap();
        let b = hash_password("same", 4).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn dummy_hash_is_usable_and_rejects_guesses() {
        let hash = DUMMY_HASH.as_deref().expect("dummy hash");
        assert!(hash.starts_with("$2"));
        assert!(!verify_password("pw", hash).unwrap());
        verify_dummy("pw");
    }

    #[test]
    fn out_of_range_cost_is_internal_error() {
        assert!(matches!(
            hash_password("pw", 1),
            Err(BoardError::Internal(_))
        ));
    }
}
