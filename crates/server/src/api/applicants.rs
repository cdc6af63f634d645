use dioxus::prelude::*;
use shared_types::{Applicant, ApplicantStatus};

#[cfg(feature = "server")]
use crate::db::get_store;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::repo::applicant;

#[cfg(feature = "server")]
use super::auth::*;

/// Every applicant to the signed-in employer's postings, newest first.
/// Search and status filtering happen on the page.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_applicants() -> Result<Vec<Applicant>, ServerFnError> {
    use shared_types::StatusFilter;

    let claims = require_employer()?;
    Ok(applicant::list_for_employer(get_store(), claims.sub, "", StatusFilter::All).await)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_applicant_status(
    applicant_id: String,
    status: ApplicantStatus,
) -> Result<Applicant, ServerFnError> {
    let claims = require_employer()?;
    applicant::update_status(get_store(), claims.sub, &applicant_id, status)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Apply to an active posting as a job seeker or freelancer.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn apply_to_job(job_id: String) -> Result<Applicant, ServerFnError> {
    let claims = require_auth()?;
    applicant::apply(get_store(), claims.sub, &job_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// The caller's own applications, newest first.
#[server]
pub async fn list_my_applications() -> Result<Vec<Applicant>, ServerFnError> {
    let claims = require_auth()?;
    Ok(applicant::list_for_candidate(get_store(), claims.sub).await)
}
