use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    Router,
};
use serde_json::Value;
use shared_types::FeatureFlags;
use std::sync::Arc;
use tower::ServiceExt;

use server::db::AppState;
use server::store::MarketplaceStore;

/// Password of every seeded account.
pub const DEMO_PASSWORD: &str = "password123";

// Seeded account ids, in seed order.
pub const ADMIN: i64 = 1;
pub const EMPLOYER: i64 = 2;
pub const OTHER_EMPLOYER: i64 = 3;
pub const JOB_SEEKER: i64 = 4;
pub const FREELANCER: i64 = 6;

/// Build a test router over a freshly seeded store with every feature on.
pub fn test_app() -> Router {
    test_app_with_flags(FeatureFlags {
        signup: true,
        boosting: true,
        demo_data: true,
    })
}

/// Build a test router over a freshly seeded store with the given flags.
/// Each call gets its own store, so tests never see each other's writes.
pub fn test_app_with_flags(flags: FeatureFlags) -> Router {
    let store = Arc::new(MarketplaceStore::seeded(DEMO_PASSWORD).expect("Failed to seed store"));
    let state = AppState { store, flags };

    // Include the permissive auth middleware so the extractors see Bearer
    // tokens; unauthenticated requests still pass through.
    server::rest::api_router()
        .route("/health", axum::routing::get(server::health::health_check))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            server::auth::middleware::auth_middleware,
        ))
        .with_state(state)
}

/// Access token for a seeded account.
pub fn token_for(user_id: i64) -> String {
    let (email, role) = match user_id {
        ADMIN => ("admin@visiondrill.dev", "admin"),
        EMPLOYER => ("employer@visiondrill.dev", "employer"),
        OTHER_EMPLOYER => ("hiring@lumenlabs.dev", "employer"),
        FREELANCER => ("sam@visiondrill.dev", "freelancer"),
        _ => ("maya@visiondrill.dev", "job_seeker"),
    };
    server::auth::jwt::create_access_token(user_id, email, role)
        .expect("Failed to create test JWT")
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, request("GET", uri, None, None)).await
}

pub async fn get_authed(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    send(app, request("GET", uri, Some(token), None)).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, request("POST", uri, None, Some(body))).await
}

pub async fn post_json_authed(
    app: &Router,
    uri: &str,
    body: Value,
    token: &str,
) -> (StatusCode, Value) {
    send(app, request("POST", uri, Some(token), Some(body))).await
}

/// POST with no body, e.g. the job status actions.
pub async fn post_authed(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    send(app, request("POST", uri, Some(token), None)).await
}

pub async fn put_json_authed(
    app: &Router,
    uri: &str,
    body: Value,
    token: &str,
) -> (StatusCode, Value) {
    send(app, request("PUT", uri, Some(token), Some(body))).await
}

pub async fn patch_json_authed(
    app: &Router,
    uri: &str,
    body: Value,
    token: &str,
) -> (StatusCode, Value) {
    send(app, request("PATCH", uri, Some(token), Some(body))).await
}

pub async fn delete_authed(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    send(app, request("DELETE", uri, Some(token), None)).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}

/// Id of the employer's posting with this title.
pub async fn employer_job_id(app: &Router, title: &str) -> String {
    let (_, jobs) = get_authed(app, "/api/employer/jobs", &token_for(EMPLOYER)).await;
    jobs.as_array()
        .and_then(|jobs| jobs.iter().find(|j| j["title"] == title))
        .and_then(|j| j["job_id"].as_str())
        .map(str::to_string)
        .unwrap_or_else(|| panic!("no employer job titled {title}"))
}
