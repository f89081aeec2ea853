//! Credential hashing and bearer-token management.

pub mod jwt;
pub mod password;
