//! API server configuration.

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use jobboard_core::auth::jwt::{DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, resolve_jwt_secret};
use jobboard_core::auth::password::{BCRYPT_COST_RANGE, DEFAULT_BCRYPT_COST};
use tracing::warn;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4000";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:4000").
    pub bind_addr: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Access token lifetime in seconds.
    pub token_ttl_secs: i64,
    /// bcrypt cost factor for new password hashes.
    pub bcrypt_cost: u32,
    /// Single allowed CORS origin; `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl ApiConfig {
    /// Defaults for everything except the signing secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            jwt_secret: jwt_secret.into(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            cors_origin: None,
        }
    }

    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable         | Default                         |
    /// |------------------|---------------------------------|
    /// | `BIND_ADDR`      | `127.0.0.1:4000`                |
    /// | `JWT_SECRET`     | generated & persisted to file   |
    /// | `TOKEN_TTL_SECS` | `3600`                          |
    /// | `BCRYPT_COST`    | `12`                            |
    /// | `CORS_ORIGIN`    | unset (any origin)              |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            jwt_secret: resolve_jwt_secret(),
            token_ttl_secs: parse_or(
                "TOKEN_TTL_SECS",
                std::env::var("TOKEN_TTL_SECS").ok(),
                DEFAULT_TOKEN_TTL_SECS,
            ),
            bcrypt_cost: parse_or(
                "BCRYPT_COST",
                std::env::var("BCRYPT_COST").ok(),
                DEFAULT_BCRYPT_COST,
            ),
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|o| !o.is_empty()),
        }
        .validated()
    }

    /// Replace out-of-range numeric settings with their defaults.
    pub fn validated(mut self) -> Self {
        self.token_ttl_secs = in_range(
            "token_ttl_secs",
            self.token_ttl_secs,
            1..=MAX_TOKEN_TTL_SECS,
            DEFAULT_TOKEN_TTL_SECS,
        );
        self.bcrypt_cost = in_range(
            "bcrypt_cost",
            self.bcrypt_cost,
            BCRYPT_COST_RANGE,
            DEFAULT_BCRYPT_COST,
        );
        self
    }
}

fn in_range<T>(key: &str, value: T, range: RangeInclusive<T>, default: T) -> T
where
    T: PartialOrd + Copy + Display,
{
    if range.contains(&value) {
        value
    } else {
        warn!(key, %value, min = %range.start(), max = %range.end(), %default, "config value out of range, using default");
        default
    }
}

/// Parse `raw`, warning and falling back to `default` when it is unusable.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + Display,
    T::Err: Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            warn!(key, value = %raw, error = %e, %default, "invalid config value, using default");
            default
        }
    }
}
