use chrono::Utc;
use shared_types::{
    filter_applicants, AppError, Applicant, ApplicantStatus, JobStatus, StatusFilter,
};

use crate::store::MarketplaceStore;

/// File an application from a candidate account.
pub async fn apply(
    store: &MarketplaceStore,
    candidate_id: i64,
    job_id: &str,
) -> Result<Applicant, AppError> {
    let mut data = store.write().await;

    let candidate = data
        .user(candidate_id)
        .cloned()
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;
    if !candidate.account_type.is_candidate() {
        return Err(AppError::forbidden(
            "Only job seekers and freelancers can apply to jobs",
        ));
    }

    let job = data
        .jobs
        .iter()
        .find(|j| j.job_id == job_id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Job not found"))?;
    if job.status != JobStatus::Active {
        return Err(AppError::bad_request("This job is not accepting applications"));
    }
    if data
        .applications
        .iter()
        .any(|a| a.job_id == job_id && a.candidate_id == candidate_id)
    {
        return Err(AppError::conflict("You have already applied to this job"));
    }

    let application = Applicant {
        id: uuid::Uuid::new_v4().to_string(),
        job_id: job.job_id,
        candidate_id,
        name: candidate.name,
        email: candidate.email,
        position: job.title,
        status: ApplicantStatus::New,
        applied_at: Utc::now(),
    };
    data.applications.push(application.clone());
    tracing::info!(application_id = %application.id, job_id, candidate_id, "Application filed");
    Ok(application)
}

/// Applicants across the employer's postings, newest first, narrowed by
/// the search text and status filter.
pub async fn list_for_employer(
    store: &MarketplaceStore,
    employer_id: i64,
    query: &str,
    filter: StatusFilter,
) -> Vec<Applicant> {
    let data = store.read().await;
    let mut applicants: Vec<Applicant> = data
        .applications
        .iter()
        .filter(|a| {
            data.jobs
                .iter()
                .any(|j| j.job_id == a.job_id && j.employer_id == employer_id)
        })
        .cloned()
        .collect();
    applicants.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
    filter_applicants(&applicants, query, filter)
}

/// The caller's own applications, newest first.
pub async fn list_for_candidate(store: &MarketplaceStore, candidate_id: i64) -> Vec<Applicant> {
    let data = store.read().await;
    let mut applications: Vec<Applicant> = data
        .applications
        .iter()
        .filter(|a| a.candidate_id == candidate_id)
        .cloned()
        .collect();
    applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
    applications
}

/// Move an applicant through the pipeline. Only the employer who owns the
/// posting may do so; anyone else gets a 404.
pub async fn update_status(
    store: &MarketplaceStore,
    employer_id: i64,
    applicant_id: &str,
    status: ApplicantStatus,
) -> Result<Applicant, AppError> {
    let mut data = store.write().await;
    let owned_jobs: Vec<String> = data
        .jobs
        .iter()
        .filter(|j| j.employer_id == employer_id)
        .map(|j| j.job_id.clone())
        .collect();

    let applicant = data
        .applications
        .iter_mut()
        .find(|a| a.id == applicant_id && owned_jobs.contains(&a.job_id))
        .ok_or_else(|| AppError::not_found("Applicant not found"))?;
    applicant.status = status;
    tracing::info!(applicant_id, status = status.as_str(), "Applicant status changed");
    Ok(applicant.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPLOYER: i64 = 2;
    const OTHER_EMPLOYER: i64 = 3;
    const MAYA: i64 = 4;
    const SAM: i64 = 6;

    async fn job_id(store: &MarketplaceStore, title: &str) -> String {
        let data = store.read().await;
        data.jobs.iter().find(|j| j.title == title).unwrap().job_id.clone()
    }

    #[tokio::test]
    async fn employer_sees_applicants_for_own_jobs_only() {
        let store = MarketplaceStore::demo();
        let mine = list_for_employer(&store, EMPLOYER, "", StatusFilter::All).await;
        assert_eq!(mine.len(), 6);
        assert!(mine.iter().all(|a| a.position != "Marketing Manager"));
        assert!(mine.windows(2).all(|w| w[0].applied_at >= w[1].applied_at));

        let theirs = list_for_employer(&store, OTHER_EMPLOYER, "", StatusFilter::All).await;
        assert_eq!(theirs.len(), 1);
    }

    #[tokio::test]
    async fn employer_list_honours_search_and_status() {
        let store = MarketplaceStore::demo();
        let interviews = list_for_employer(
            &store,
            EMPLOYER,
            "",
            StatusFilter::Only(ApplicantStatus::Interview),
        )
        .await;
        assert_eq!(interviews.len(), 1);
        assert_eq!(interviews[0].name, "Omar Haddad");

        let designers = list_for_employer(&store, EMPLOYER, "DESIGNER", StatusFilter::All).await;
        assert_eq!(designers.len(), 2);
    }

    #[tokio::test]
    async fn apply_creates_new_application() {
        let store = MarketplaceStore::demo();
        let job = job_id(&store, "Product Designer").await;
        let app = apply(&store, MAYA, &job).await.unwrap();
        assert_eq!(app.status, ApplicantStatus::New);
        assert_eq!(app.position, "Product Designer");
        assert_eq!(app.name, "Maya Chen");
        assert_eq!(list_for_candidate(&store, MAYA).await[0].id, app.id);
    }

    #[tokio::test]
    async fn second_application_conflicts() {
        let store = MarketplaceStore::demo();
        let job = job_id(&store, "Product Designer").await;
        let err = apply(&store, SAM, &job).await.unwrap_err();
        assert_eq!(err.status_code_u16(), 409);
    }

    #[tokio::test]
    async fn employers_cannot_apply() {
        let store = MarketplaceStore::demo();
        let job = job_id(&store, "Marketing Manager").await;
        let err = apply(&store, EMPLOYER, &job).await.unwrap_err();
        assert_eq!(err.status_code_u16(), 403);
    }

    #[tokio::test]
    async fn drafts_do_not_take_applications() {
        let store = MarketplaceStore::demo();
        let job = job_id(&store, "Data Analyst").await;
        let err = apply(&store, MAYA, &job).await.unwrap_err();
        assert_eq!(err.status_code_u16(), 400);
        assert_eq!(err.message, "This job is not accepting applications");
    }

    #[tokio::test]
    async fn status_change_is_owner_only() {
        let store = MarketplaceStore::demo();
        let id = list_for_employer(&store, EMPLOYER, "Sam", StatusFilter::All).await[0]
            .id
            .clone();

        let err = update_status(&store, OTHER_EMPLOYER, &id, ApplicantStatus::Hired)
            .await
            .unwrap_err();
        assert_eq!(err.status_code_u16(), 404);

        let updated = update_status(&store, EMPLOYER, &id, ApplicantStatus::Interview)
            .await
            .unwrap();
        assert_eq!(updated.status, ApplicantStatus::Interview);
    }
}
