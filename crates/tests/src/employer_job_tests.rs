use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::FeatureFlags;

use crate::common::{self, token_for, ADMIN, EMPLOYER, JOB_SEEKER, OTHER_EMPLOYER};

#[tokio::test]
async fn employer_lists_own_jobs_newest_first() {
    let app = common::test_app();
    let (status, response) =
        common::get_authed(&app, "/api/employer/jobs", &token_for(EMPLOYER)).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = response
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "QA Automation Lead",
            "Data Analyst",
            "Product Designer",
            "Senior Rust Engineer",
            "Technical Writer",
            "DevOps Engineer",
        ]
    );
}

#[tokio::test]
async fn employer_search_narrows_list() {
    let app = common::test_app();
    let (status, response) =
        common::get_authed(&app, "/api/employer/jobs?q=contract", &token_for(EMPLOYER)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn employer_routes_reject_other_account_types() {
    let app = common::test_app();

    let (status, _) = common::get(&app, "/api/employer/jobs").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    for user in [ADMIN, JOB_SEEKER] {
        let (status, response) =
            common::get_authed(&app, "/api/employer/jobs", &token_for(user)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(response["message"], "Employer account required");
    }
}

#[tokio::test]
async fn create_job_defaults_to_draft() {
    let app = common::test_app();
    let token = token_for(EMPLOYER);
    let body = json!({"title": "Platform Engineer", "job_type": "Full-time", "location": "Lisbon"});
    let (status, job) = common::post_json_authed(&app, "/api/employer/jobs", body, &token).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(job["status"], "draft");
    assert_eq!(job["employer_id"], EMPLOYER);
    assert_eq!(job["is_premium"], false);

    let (_, jobs) = common::get_authed(&app, "/api/employer/jobs", &token).await;
    assert_eq!(jobs[0]["title"], "Platform Engineer");
}

#[tokio::test]
async fn create_job_validates_title() {
    let app = common::test_app();
    let body = json!({"title": "QA", "job_type": "Contract"});
    let (status, response) =
        common::post_json_authed(&app, "/api/employer/jobs", body, &token_for(EMPLOYER)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["kind"], "ValidationError");
    assert!(response["field_errors"]["title"].is_string());
}

#[tokio::test]
async fn update_job_edits_fields() {
    let app = common::test_app();
    let id = common::employer_job_id(&app, "Data Analyst").await;
    let body = json!({"title": "Senior Data Analyst", "salary_range": "$90k"});
    let (status, job) = common::put_json_authed(
        &app,
        &format!("/api/employer/jobs/{id}"),
        body,
        &token_for(EMPLOYER),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["title"], "Senior Data Analyst");
    assert_eq!(job["salary_range"], "$90k");
    assert_eq!(job["status"], "draft");
}

#[tokio::test]
async fn boost_needs_the_boosting_flag() {
    let app = common::test_app_with_flags(FeatureFlags::default());
    let id = common::employer_job_id(&app, "Product Designer").await;
    let uri = format!("/api/employer/jobs/{id}");
    let (status, response) =
        common::put_json_authed(&app, &uri, json!({"is_premium": true}), &token_for(EMPLOYER)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(response["message"], "Boosting is not enabled");

    let app = common::test_app();
    let id = common::employer_job_id(&app, "Product Designer").await;
    let uri = format!("/api/employer/jobs/{id}");
    let (status, job) =
        common::put_json_authed(&app, &uri, json!({"is_premium": true}), &token_for(EMPLOYER)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["is_premium"], true);
}

#[tokio::test]
async fn another_employers_job_is_not_found() {
    let app = common::test_app();
    let id = common::employer_job_id(&app, "Technical Writer").await;
    let token = token_for(OTHER_EMPLOYER);

    let (status, _) =
        common::delete_authed(&app, &format!("/api/employer/jobs/{id}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) =
        common::post_authed(&app, &format!("/api/employer/jobs/{id}/deactivate"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_job_removes_it() {
    let app = common::test_app();
    let token = token_for(EMPLOYER);
    let id = common::employer_job_id(&app, "DevOps Engineer").await;

    let (status, body) =
        common::delete_authed(&app, &format!("/api/employer/jobs/{id}"), &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, jobs) = common::get_authed(&app, "/api/employer/jobs", &token).await;
    assert_eq!(jobs.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn duplicate_creates_a_draft_copy() {
    let app = common::test_app();
    let token = token_for(EMPLOYER);
    let id = common::employer_job_id(&app, "Senior Rust Engineer").await;

    let (status, copy) =
        common::post_authed(&app, &format!("/api/employer/jobs/{id}/duplicate"), &token).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(copy["title"], "Senior Rust Engineer (Copy)");
    assert_eq!(copy["status"], "draft");
    assert_eq!(copy["is_premium"], false);
    assert_eq!(copy["application_count"], 0);
    assert_ne!(copy["job_id"], id.as_str());
}

#[tokio::test]
async fn activate_then_close() {
    let app = common::test_app();
    let token = token_for(EMPLOYER);
    let id = common::employer_job_id(&app, "QA Automation Lead").await;

    let (status, job) =
        common::post_authed(&app, &format!("/api/employer/jobs/{id}/activate"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["status"], "active");

    let (_, board) = common::get(&app, "/api/jobs").await;
    assert!(board.as_array().unwrap().iter().any(|j| j["job_id"] == id.as_str()));

    let (status, job) =
        common::post_authed(&app, &format!("/api/employer/jobs/{id}/deactivate"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["status"], "expired");
}
