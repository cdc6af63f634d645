use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use shared_types::{
    AppError, Applicant, ApplyRequest, StatusFilter, UpdateApplicantStatusRequest,
};

use crate::auth::extractors::{AccountRequired, AuthRequired, EmployerRequired};
use crate::error_convert::ValidateRequest;
use crate::repo;
use crate::store::MarketplaceStore;

#[derive(Debug, serde::Deserialize)]
pub struct ApplicantQuery {
    pub q: Option<String>,
    /// `all` or an exact status such as `Interview`.
    pub status: Option<String>,
}

/// GET /api/employer/applicants
#[utoipa::path(
    get,
    path = "/api/employer/applicants",
    params(
        ("q" = Option<String>, Query, description = "Name, email or position"),
        ("status" = Option<String>, Query, description = "all, New, Reviewed, Interview, Offered, Hired or Rejected")
    ),
    responses(
        (status = 200, description = "Applicants to the employer's postings", body = Vec<Applicant>),
        (status = 403, description = "Not an employer", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "applicants"
)]
pub async fn list_applicants(
    State(store): State<Arc<MarketplaceStore>>,
    AccountRequired(claims): EmployerRequired,
    Query(params): Query<ApplicantQuery>,
) -> Json<Vec<Applicant>> {
    let filter = params
        .status
        .as_deref()
        .map(StatusFilter::parse)
        .unwrap_or_default();
    let query = params.q.unwrap_or_default();
    Json(repo::applicant::list_for_employer(&store, claims.sub, &query, filter).await)
}

/// PATCH /api/employer/applicants/{id}/status
#[utoipa::path(
    patch,
    path = "/api/employer/applicants/{id}/status",
    params(("id" = String, Path, description = "Applicant ID")),
    request_body = UpdateApplicantStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = Applicant),
        (status = 404, description = "Applicant not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "applicants"
)]
pub async fn update_applicant_status(
    State(store): State<Arc<MarketplaceStore>>,
    AccountRequired(claims): EmployerRequired,
    Path(id): Path<String>,
    Json(body): Json<UpdateApplicantStatusRequest>,
) -> Result<Json<Applicant>, AppError> {
    let applicant =
        repo::applicant::update_status(&store, claims.sub, &id, body.status).await?;
    Ok(Json(applicant))
}

/// POST /api/applications
#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = ApplyRequest,
    responses(
        (status = 201, description = "Application filed", body = Applicant),
        (status = 400, description = "Job is not accepting applications", body = AppError),
        (status = 403, description = "Not a candidate account", body = AppError),
        (status = 409, description = "Already applied", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "applicants"
)]
pub async fn apply_to_job(
    State(store): State<Arc<MarketplaceStore>>,
    AuthRequired(claims): AuthRequired,
    Json(body): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<Applicant>), AppError> {
    body.validate_request()?;
    let application = repo::applicant::apply(&store, claims.sub, &body.job_id).await?;
    Ok((StatusCode::CREATED, Json(application)))
}
