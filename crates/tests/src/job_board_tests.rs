use axum::http::StatusCode;

use crate::common::{self, token_for, EMPLOYER, OTHER_EMPLOYER};

#[tokio::test]
async fn public_board_lists_active_jobs_boosted_first() {
    let app = common::test_app();
    let (status, response) = common::get(&app, "/api/jobs").await;

    assert_eq!(status, StatusCode::OK);
    let jobs = response.as_array().unwrap();
    assert_eq!(jobs.len(), 4);
    assert!(jobs.iter().all(|j| j["status"] == "active"));
    assert_eq!(jobs[0]["title"], "Senior Rust Engineer");
    assert_eq!(jobs[0]["is_premium"], true);
}

#[tokio::test]
async fn public_board_search_is_case_insensitive() {
    let app = common::test_app();
    let (status, response) = common::get(&app, "/api/jobs?q=AUSTIN").await;

    assert_eq!(status, StatusCode::OK);
    let jobs = response.as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["title"], "Marketing Manager");
}

#[tokio::test]
async fn draft_is_hidden_from_the_public_and_other_employers() {
    let app = common::test_app();
    let id = common::employer_job_id(&app, "Data Analyst").await;
    let uri = format!("/api/jobs/{id}");

    let (status, response) = common::get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["kind"], "NotFound");

    let (status, _) = common::get_authed(&app, &uri, &token_for(OTHER_EMPLOYER)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, response) = common::get_authed(&app, &uri, &token_for(EMPLOYER)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "draft");
}

#[tokio::test]
async fn active_job_detail_includes_application_count() {
    let app = common::test_app();
    let id = common::employer_job_id(&app, "Senior Rust Engineer").await;
    let (status, response) = common::get(&app, &format!("/api/jobs/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["application_count"], 3);
}

#[tokio::test]
async fn unknown_job_is_not_found() {
    let app = common::test_app();
    let (status, _) = common::get(&app, "/api/jobs/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
