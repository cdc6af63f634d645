use dioxus::prelude::*;
use shared_types::{CreateJobRequest, Job, UpdateJobRequest};

#[cfg(feature = "server")]
use crate::db::get_store;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::repo::job;

#[cfg(feature = "server")]
use super::auth::*;

// ── Employer postings ──────────────────────────────────

/// The signed-in employer's postings, newest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_employer_jobs() -> Result<Vec<Job>, ServerFnError> {
    let claims = require_employer()?;
    Ok(job::list_by_employer(get_store(), claims.sub).await)
}

#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn create_job(req: CreateJobRequest) -> Result<Job, ServerFnError> {
    let claims = require_employer()?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    job::create(get_store(), claims.sub, req)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Edit a posting. Setting `is_premium` requires the `boosting` feature.
#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn update_job(job_id: String, req: UpdateJobRequest) -> Result<Job, ServerFnError> {
    let claims = require_employer()?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let boosting = crate::config::feature_flags().boosting;
    job::update(get_store(), claims.sub, &job_id, req, boosting)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_job(job_id: String) -> Result<(), ServerFnError> {
    let claims = require_employer()?;
    job::delete(get_store(), claims.sub, &job_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Copy a posting as a new draft titled "{title} (Copy)".
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn duplicate_job(job_id: String) -> Result<Job, ServerFnError> {
    let claims = require_employer()?;
    job::duplicate(get_store(), claims.sub, &job_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn activate_job(job_id: String) -> Result<Job, ServerFnError> {
    let claims = require_employer()?;
    job::activate(get_store(), claims.sub, &job_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Close a posting; it moves to expired.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn deactivate_job(job_id: String) -> Result<Job, ServerFnError> {
    let claims = require_employer()?;
    job::deactivate(get_store(), claims.sub, &job_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

// ── Public board ───────────────────────────────────────

/// Active postings matching `query`, boosted first.
#[server]
pub async fn list_public_jobs(query: String) -> Result<Vec<Job>, ServerFnError> {
    Ok(job::list_public(get_store(), &query).await)
}

/// One posting. Drafts resolve only for their owner.
#[server]
pub async fn get_job(job_id: String) -> Result<Job, ServerFnError> {
    let viewer = current_claims().map(|c| c.sub);
    job::get(get_store(), &job_id, viewer)
        .await
        .map_err(|e| e.into_server_fn_error())
}
