use axum::Router;
use std::sync::Arc;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable};

use shared_types::{
    AccountType, AppError, AppErrorKind, Applicant, ApplicantStatus, ApplyRequest, AuthResponse,
    AuthUser, CreateJobRequest, Job, JobStatus, LoginRequest, UpdateApplicantStatusRequest,
    UpdateJobRequest,
};

use crate::db::AppState;
use crate::health::{self, HealthResponse};
use crate::rest;
use crate::store::MarketplaceStore;

/// Registers the `bearer_auth` scheme referenced by protected routes.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        rest::auth::login,
        rest::auth::me,
        // Jobs
        rest::jobs::list_public_jobs,
        rest::jobs::get_job,
        rest::jobs::list_employer_jobs,
        rest::jobs::create_job,
        rest::jobs::update_job,
        rest::jobs::delete_job,
        rest::jobs::duplicate_job,
        rest::jobs::activate_job,
        rest::jobs::deactivate_job,
        // Applicants
        rest::applicants::list_applicants,
        rest::applicants::update_applicant_status,
        rest::applicants::apply_to_job,
        // Health
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind,
        AccountType, AuthUser, LoginRequest, AuthResponse,
        Job, JobStatus, CreateJobRequest, UpdateJobRequest,
        Applicant, ApplicantStatus, UpdateApplicantStatusRequest, ApplyRequest,
        HealthResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Token login for REST clients"),
        (name = "jobs", description = "Public job board"),
        (name = "employer-jobs", description = "Employer job posting management"),
        (name = "applicants", description = "Applications and applicant tracking"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Visiondrill API",
        description = "Job and freelance marketplace API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Router serving the API docs at `/docs`, the REST API at `/api/*` and
/// `/health`, with feature flags from `config.toml`.
pub fn api_router(store: Arc<MarketplaceStore>) -> Router {
    api_router_with_state(AppState::from_config(store))
}

/// Same as [`api_router`] with explicit state.
pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_every_rest_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/login",
            "/api/jobs/{id}",
            "/api/employer/jobs/{id}/duplicate",
            "/api/employer/applicants/{id}/status",
            "/api/applications",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
