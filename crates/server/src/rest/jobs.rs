use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use shared_types::{search_jobs, AppError, CreateJobRequest, FeatureFlags, Job, UpdateJobRequest};

use crate::auth::extractors::{AccountRequired, EmployerRequired, MaybeAuth};
use crate::error_convert::ValidateRequest;
use crate::repo;
use crate::store::MarketplaceStore;

#[derive(Debug, serde::Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

// ── Public board ────────────────────────────────────────────────────

/// GET /api/jobs
#[utoipa::path(
    get,
    path = "/api/jobs",
    params(("q" = Option<String>, Query, description = "Search text")),
    responses((status = 200, description = "Active postings, boosted first", body = Vec<Job>)),
    tag = "jobs"
)]
pub async fn list_public_jobs(
    State(store): State<Arc<MarketplaceStore>>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<Job>> {
    let query = params.q.unwrap_or_default();
    Json(repo::job::list_public(&store, &query).await)
}

/// GET /api/jobs/{id}
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job found", body = Job),
        (status = 404, description = "Job not found", body = AppError)
    ),
    tag = "jobs"
)]
pub async fn get_job(
    State(store): State<Arc<MarketplaceStore>>,
    MaybeAuth(claims): MaybeAuth,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let viewer = claims.map(|c| c.sub);
    let job = repo::job::get(&store, &id, viewer).await?;
    Ok(Json(job))
}

// ── Employer postings ───────────────────────────────────────────────

/// GET /api/employer/jobs
#[utoipa::path(
    get,
    path = "/api/employer/jobs",
    params(("q" = Option<String>, Query, description = "Search text")),
    responses(
        (status = 200, description = "The employer's postings, newest first", body = Vec<Job>),
        (status = 401, description = "Not signed in", body = AppError),
        (status = 403, description = "Not an employer", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer-jobs"
)]
pub async fn list_employer_jobs(
    State(store): State<Arc<MarketplaceStore>>,
    AccountRequired(claims): EmployerRequired,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<Job>> {
    let jobs = repo::job::list_by_employer(&store, claims.sub).await;
    match params.q {
        Some(q) => Json(search_jobs(&jobs, &q)),
        None => Json(jobs),
    }
}

/// POST /api/employer/jobs
#[utoipa::path(
    post,
    path = "/api/employer/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job created", body = Job),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer-jobs"
)]
pub async fn create_job(
    State(store): State<Arc<MarketplaceStore>>,
    AccountRequired(claims): EmployerRequired,
    Json(body): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    body.validate_request()?;
    let job = repo::job::create(&store, claims.sub, body).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/employer/jobs/{id}
#[utoipa::path(
    put,
    path = "/api/employer/jobs/{id}",
    params(("id" = String, Path, description = "Job ID")),
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Job updated", body = Job),
        (status = 403, description = "Boosting is not enabled", body = AppError),
        (status = 404, description = "Job not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer-jobs"
)]
pub async fn update_job(
    State(store): State<Arc<MarketplaceStore>>,
    State(flags): State<FeatureFlags>,
    AccountRequired(claims): EmployerRequired,
    Path(id): Path<String>,
    Json(body): Json<UpdateJobRequest>,
) -> Result<Json<Job>, AppError> {
    body.validate_request()?;
    let job = repo::job::update(&store, claims.sub, &id, body, flags.boosting).await?;
    Ok(Json(job))
}

/// DELETE /api/employer/jobs/{id}
#[utoipa::path(
    delete,
    path = "/api/employer/jobs/{id}",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 404, description = "Job not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer-jobs"
)]
pub async fn delete_job(
    State(store): State<Arc<MarketplaceStore>>,
    AccountRequired(claims): EmployerRequired,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    repo::job::delete(&store, claims.sub, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/employer/jobs/{id}/duplicate
#[utoipa::path(
    post,
    path = "/api/employer/jobs/{id}/duplicate",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 201, description = "Draft copy created", body = Job),
        (status = 404, description = "Job not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer-jobs"
)]
pub async fn duplicate_job(
    State(store): State<Arc<MarketplaceStore>>,
    AccountRequired(claims): EmployerRequired,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let job = repo::job::duplicate(&store, claims.sub, &id).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// POST /api/employer/jobs/{id}/activate
#[utoipa::path(
    post,
    path = "/api/employer/jobs/{id}/activate",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job is active", body = Job),
        (status = 404, description = "Job not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer-jobs"
)]
pub async fn activate_job(
    State(store): State<Arc<MarketplaceStore>>,
    AccountRequired(claims): EmployerRequired,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let job = repo::job::activate(&store, claims.sub, &id).await?;
    Ok(Json(job))
}

/// POST /api/employer/jobs/{id}/deactivate
#[utoipa::path(
    post,
    path = "/api/employer/jobs/{id}/deactivate",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job closed", body = Job),
        (status = 404, description = "Job not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer-jobs"
)]
pub async fn deactivate_job(
    State(store): State<Arc<MarketplaceStore>>,
    AccountRequired(claims): EmployerRequired,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let job = repo::job::deactivate(&store, claims.sub, &id).await?;
    Ok(Json(job))
}
