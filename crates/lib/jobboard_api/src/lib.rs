//! # jobboard_api
//!
//! HTTP API library for the job board.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, patch, post};
use jobboard_core::Stores;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ApiConfig;
use crate::handlers::{auth, employer, health, jobs, jobseeker, profile, subscription};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// All record stores behind one lock. Every mutating request holds the
    /// write guard for its whole read-check-write sequence.
    pub stores: Arc<RwLock<Stores>>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// State backed by fresh in-memory stores.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_stores(config, Stores::in_memory())
    }

    pub fn with_stores(config: ApiConfig, stores: Stores) -> Self {
        Self {
            stores: Arc::new(RwLock::new(stores)),
            config,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_origin.as_deref());

    // Public routes (no auth required)
    let public = Router::new()
        .route(routes::GET_HEALTH, get(health::health_handler))
        .route(routes::POST_AUTH_REGISTER, post(auth::register_handler))
        .route(routes::POST_AUTH_LOGIN, post(auth::login_handler))
        .route(routes::GET_JOBS, get(jobs::list_jobs_handler))
        .route(routes::GET_JOBS_ID, get(jobs::get_job_handler));

    // Protected routes (require auth)
    let protected = Router::new()
        .route(routes::POST_JOBS_ID_APPLY, post(jobs::apply_handler))
        .route(
            routes::PROFILE,
            get(profile::get_profile_handler).put(profile::update_profile_handler),
        )
        .route(
            routes::EMPLOYER_JOBS,
            get(employer::list_jobs_handler).post(employer::create_job_handler),
        )
        .route(
            routes::DELETE_EMPLOYER_JOBS_ID,
            delete(employer::delete_job_handler),
        )
        .route(
            routes::GET_EMPLOYER_JOBS_ID_APPLICATIONS,
            get(employer::list_applications_handler),
        )
        .route(
            routes::PATCH_EMPLOYER_APPLICATIONS_ID,
            patch(employer::update_application_status_handler),
        )
        .route(
            routes::GET_JOBSEEKER_APPLICATIONS,
            get(jobseeker::list_applications_handler),
        )
        .route(
            routes::GET_SUBSCRIPTION,
            get(subscription::get_subscription_handler),
        )
        .route(
            routes::POST_SUBSCRIPTION_SUBSCRIBE,
            post(subscription::subscribe_handler),
        )
        .route(
            routes::POST_SUBSCRIPTION_CANCEL,
            post(subscription::cancel_handler),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .nest(routes::API_PREFIX, public.merge(protected))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Any origin unless one is configured; a bad origin value falls back to any.
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    match origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => base.allow_origin(value).allow_credentials(true),
        Some(Err(e)) => {
            warn!(error = %e, "invalid CORS origin, allowing any origin");
            base.allow_origin(Any)
        }
        None => base.allow_origin(Any),
    }
}
