use axum::http::StatusCode;
use serde_json::json;

use crate::common::{self, DEMO_PASSWORD, EMPLOYER};

#[tokio::test]
async fn login_returns_token_and_user() {
    let app = common::test_app();
    let body = json!({"email": "employer@visiondrill.dev", "password": DEMO_PASSWORD});
    let (status, response) = common::post_json(&app, "/api/auth/login", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["user"]["id"], EMPLOYER);
    assert_eq!(response["user"]["account_type"], "employer");
    assert!(response["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn login_token_authenticates_me() {
    let app = common::test_app();
    let body = json!({"email": "Maya@VisionDrill.dev", "password": DEMO_PASSWORD});
    let (_, response) = common::post_json(&app, "/api/auth/login", body).await;
    let token = response["token"].as_str().unwrap().to_string();

    let (status, me) = common::get_authed(&app, "/api/auth/me", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["name"], "Maya Chen");
    assert_eq!(me["account_type"], "job_seeker");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = common::test_app();
    let body = json!({"email": "employer@visiondrill.dev", "password": "not-the-password"});
    let (status, response) = common::post_json(&app, "/api/auth/login", body).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["kind"], "Unauthorized");
    assert_eq!(response["message"], "Invalid email or password");
}

#[tokio::test]
async fn unknown_email_gets_the_same_answer() {
    let app = common::test_app();
    let body = json!({"email": "nobody@visiondrill.dev", "password": DEMO_PASSWORD});
    let (status, response) = common::post_json(&app, "/api/auth/login", body).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["message"], "Invalid email or password");
}

#[tokio::test]
async fn malformed_login_fails_validation() {
    let app = common::test_app();
    let body = json!({"email": "not-an-email", "password": "short"});
    let (status, response) = common::post_json(&app, "/api/auth/login", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response["field_errors"]["email"].is_string());
    assert!(response["field_errors"]["password"].is_string());
}

#[tokio::test]
async fn me_requires_a_token() {
    let app = common::test_app();
    let (status, _) = common::get(&app, "/api/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = common::get_authed(&app, "/api/auth/me", "garbage").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_reports_store_counts() {
    let app = common::test_app();
    let (status, response) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "ok");
    assert_eq!(response["users"], 7);
    assert_eq!(response["jobs"], 7);
}
