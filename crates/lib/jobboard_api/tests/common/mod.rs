//! Shared harness for router-level integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::response::Response;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use jobboard_api::AppState;
use jobboard_api::config::ApiConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";
pub const PASSWORD: &str = "pw";

/// A router over fresh in-memory stores.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(Self::config())
    }

    /// Test defaults: fixed secret and minimum bcrypt cost to keep the suite fast.
    pub fn config() -> ApiConfig {
        let mut config = ApiConfig::new(SECRET);
        config.bcrypt_cost = 4;
        config
    }

    pub fn with_config(config: ApiConfig) -> Self {
        let state = AppState::new(config);
        Self {
            router: jobboard_api::router(state.clone()),
            state,
        }
    }

    /// Send a request and return the status plus the parsed JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_raw(req).await
    }

    /// The raw response, for assertions on headers.
    pub async fn response(&self, req: Request<Body>) -> Response {
        self.router.clone().oneshot(req).await.expect("request")
    }

    pub async fn send_raw(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.response(req).await;
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse JSON")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn register(&self, email: &str, role: &str) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({"email": email, "password": PASSWORD, "role": role})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register {email}: {body}");
        body
    }

    pub async fn login(&self, email: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({"email": email, "password": PASSWORD})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login {email}: {body}");
        body["token"].as_str().expect("token").to_string()
    }

    pub async fn signup(&self, email: &str, role: &str) -> String {
        self.register(email, role).await;
        self.login(email).await
    }

    pub async fn create_job(
        &self,
        token: &str,
        title: &str,
        company: &str,
        location: &str,
        description: &str,
    ) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/employer/jobs",
                Some(token),
                Some(json!({
                    "title": title,
                    "company": company,
                    "location": location,
                    "description": description
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create job: {body}");
        body
    }

    pub async fn apply(&self, token: &str, job_id: u64) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            &format!("/api/jobs/{job_id}/apply"),
            Some(token),
            None,
        )
        .await
    }
}

pub fn id_of(value: &Value) -> u64 {
    value["id"].as_u64().expect("numeric id")
}
