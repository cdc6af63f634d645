use axum::http::StatusCode;
use serde_json::json;

use crate::common::{self, token_for, EMPLOYER, FREELANCER, JOB_SEEKER, OTHER_EMPLOYER};

#[tokio::test]
async fn employer_sees_applicants_for_own_jobs() {
    let app = common::test_app();
    let (status, response) =
        common::get_authed(&app, "/api/employer/applicants", &token_for(EMPLOYER)).await;

    assert_eq!(status, StatusCode::OK);
    let applicants = response.as_array().unwrap();
    assert_eq!(applicants.len(), 6);
    assert!(applicants.iter().all(|a| a["position"] != "Marketing Manager"));

    let (_, theirs) =
        common::get_authed(&app, "/api/employer/applicants", &token_for(OTHER_EMPLOYER)).await;
    assert_eq!(theirs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn applicants_filter_by_status_and_search() {
    let app = common::test_app();
    let token = token_for(EMPLOYER);

    let (_, interviews) =
        common::get_authed(&app, "/api/employer/applicants?status=Interview", &token).await;
    let interviews = interviews.as_array().unwrap();
    assert_eq!(interviews.len(), 1);
    assert_eq!(interviews[0]["name"], "Omar Haddad");

    let (_, search) =
        common::get_authed(&app, "/api/employer/applicants?q=lena&status=all", &token).await;
    assert_eq!(search.as_array().unwrap().len(), 2);

    // Unknown status values mean "all".
    let (_, unknown) =
        common::get_authed(&app, "/api/employer/applicants?status=interview", &token).await;
    assert_eq!(unknown.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn employer_moves_applicant_to_interview() {
    let app = common::test_app();
    let token = token_for(EMPLOYER);
    let (_, list) = common::get_authed(&app, "/api/employer/applicants?q=sam", &token).await;
    let id = list[0]["id"].as_str().unwrap().to_string();

    let (status, updated) = common::patch_json_authed(
        &app,
        &format!("/api/employer/applicants/{id}/status"),
        json!({"status": "Interview"}),
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Interview");

    let (_, interviews) =
        common::get_authed(&app, "/api/employer/applicants?status=Interview", &token).await;
    assert_eq!(interviews.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn other_employer_cannot_change_status() {
    let app = common::test_app();
    let (_, list) =
        common::get_authed(&app, "/api/employer/applicants", &token_for(EMPLOYER)).await;
    let id = list[0]["id"].as_str().unwrap().to_string();

    let (status, _) = common::patch_json_authed(
        &app,
        &format!("/api/employer/applicants/{id}/status"),
        json!({"status": "Hired"}),
        &token_for(OTHER_EMPLOYER),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn candidate_applies_once() {
    let app = common::test_app();
    let id = common::employer_job_id(&app, "Product Designer").await;
    let token = token_for(JOB_SEEKER);

    let (status, application) =
        common::post_json_authed(&app, "/api/applications", json!({"job_id": id}), &token).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(application["status"], "New");
    assert_eq!(application["position"], "Product Designer");

    let (status, response) =
        common::post_json_authed(&app, "/api/applications", json!({"job_id": id}), &token).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["message"], "You have already applied to this job");
}

#[tokio::test]
async fn freelancer_can_apply_but_employer_cannot() {
    let app = common::test_app();
    let id = common::employer_job_id(&app, "Technical Writer").await;

    let (status, _) = common::post_json_authed(
        &app,
        "/api/applications",
        json!({"job_id": id}),
        &token_for(FREELANCER),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = common::post_json_authed(
        &app,
        "/api/applications",
        json!({"job_id": id}),
        &token_for(OTHER_EMPLOYER),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn drafts_reject_applications() {
    let app = common::test_app();
    let id = common::employer_job_id(&app, "Data Analyst").await;
    let (status, response) = common::post_json_authed(
        &app,
        "/api/applications",
        json!({"job_id": id}),
        &token_for(JOB_SEEKER),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "This job is not accepting applications");
}

#[tokio::test]
async fn applying_requires_login() {
    let app = common::test_app();
    let id = common::employer_job_id(&app, "Technical Writer").await;
    let (status, _) = common::post_json(&app, "/api/applications", json!({"job_id": id})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
