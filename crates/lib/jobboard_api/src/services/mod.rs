//! Business services layered over `jobboard_core`.

pub mod auth;
