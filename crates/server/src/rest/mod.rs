pub mod applicants;
pub mod auth;
pub mod jobs;

use axum::{routing::{get, patch, post, put}, Router};
use crate::db::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        // Public board
        .route("/api/jobs", get(jobs::list_public_jobs))
        .route("/api/jobs/{id}", get(jobs::get_job))
        // Employer postings
        .route("/api/employer/jobs", get(jobs::list_employer_jobs).post(jobs::create_job))
        .route("/api/employer/jobs/{id}", put(jobs::update_job).delete(jobs::delete_job))
        .route("/api/employer/jobs/{id}/duplicate", post(jobs::duplicate_job))
        .route("/api/employer/jobs/{id}/activate", post(jobs::activate_job))
        .route("/api/employer/jobs/{id}/deactivate", post(jobs::deactivate_job))
        // Applicants
        .route("/api/employer/applicants", get(applicants::list_applicants))
        .route("/api/employer/applicants/{id}/status", patch(applicants::update_applicant_status))
        .route("/api/applications", post(applicants::apply_to_job))
}
