use chrono::Utc;
use shared_types::{
    duplicate_title, search_jobs, AppError, CreateJobRequest, Job, JobStatus, UpdateJobRequest,
};

use crate::store::{MarketplaceStore, StoreData};

fn not_found() -> AppError {
    AppError::not_found("Job not found")
}

/// Blank optional text becomes `None`.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Index of a job owned by `employer_id`. Someone else's job is a 404.
fn owned_index(data: &StoreData, employer_id: i64, job_id: &str) -> Result<usize, AppError> {
    data.jobs
        .iter()
        .position(|j| j.job_id == job_id && j.employer_id == employer_id)
        .ok_or_else(not_found)
}

fn newest_first(jobs: &mut [Job]) {
    jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// The employer's own postings, newest first, with live application counts.
pub async fn list_by_employer(store: &MarketplaceStore, employer_id: i64) -> Vec<Job> {
    let data = store.read().await;
    let mut jobs: Vec<Job> = data
        .jobs
        .iter()
        .filter(|j| j.employer_id == employer_id)
        .map(|j| data.job_view(j))
        .collect();
    newest_first(&mut jobs);
    jobs
}

/// Insert a new posting. Status defaults to draft.
pub async fn create(
    store: &MarketplaceStore,
    employer_id: i64,
    req: CreateJobRequest,
) -> Result<Job, AppError> {
    let job = Job {
        job_id: uuid::Uuid::new_v4().to_string(),
        employer_id,
        title: req.title.trim().to_string(),
        description: req.description.trim().to_string(),
        status: req.status.unwrap_or(JobStatus::Draft),
        job_type: req.job_type.trim().to_string(),
        location: optional(req.location),
        salary_range: optional(req.salary_range),
        experience_level: optional(req.experience_level),
        is_premium: false,
        application_count: 0,
        created_at: Utc::now(),
    };
    store.write().await.jobs.push(job.clone());
    tracing::info!(job_id = %job.job_id, employer_id, "Job created");
    Ok(job)
}

/// Apply the present fields of `req`. Changing `is_premium` requires the
/// boosting feature.
pub async fn update(
    store: &MarketplaceStore,
    employer_id: i64,
    job_id: &str,
    req: UpdateJobRequest,
    boosting_enabled: bool,
) -> Result<Job, AppError> {
    if req.is_premium.is_some() && !boosting_enabled {
        return Err(AppError::forbidden("Boosting is not enabled"));
    }

    let mut data = store.write().await;
    let idx = owned_index(&data, employer_id, job_id)?;
    let job = &mut data.jobs[idx];

    if let Some(title) = req.title {
        job.title = title.trim().to_string();
    }
    if let Some(description) = req.description {
        job.description = description.trim().to_string();
    }
    if let Some(job_type) = req.job_type {
        job.job_type = job_type.trim().to_string();
    }
    // Present-but-blank clears an optional field.
    if req.location.is_some() {
        job.location = optional(req.location);
    }
    if req.salary_range.is_some() {
        job.salary_range = optional(req.salary_range);
    }
    if req.experience_level.is_some() {
        job.experience_level = optional(req.experience_level);
    }
    if let Some(status) = req.status {
        job.status = status;
    }
    if let Some(is_premium) = req.is_premium {
        job.is_premium = is_premium;
    }

    let updated = data.jobs[idx].clone();
    Ok(data.job_view(&updated))
}

/// Remove a posting together with its applications.
pub async fn delete(store: &MarketplaceStore, employer_id: i64, job_id: &str) -> Result<(), AppError> {
    let mut data = store.write().await;
    let idx = owned_index(&data, employer_id, job_id)?;
    data.jobs.remove(idx);
    data.applications.retain(|a| a.job_id != job_id);
    tracing::info!(job_id, employer_id, "Job deleted");
    Ok(())
}

/// Copy a posting as a fresh, unboosted draft titled "{title} (Copy)".
/// Applications stay with the original.
pub async fn duplicate(
    store: &MarketplaceStore,
    employer_id: i64,
    job_id: &str,
) -> Result<Job, AppError> {
    let mut data = store.write().await;
    let idx = owned_index(&data, employer_id, job_id)?;
    let source = &data.jobs[idx];

    let copy = Job {
        job_id: uuid::Uuid::new_v4().to_string(),
        title: duplicate_title(&source.title),
        status: JobStatus::Draft,
        is_premium: false,
        application_count: 0,
        created_at: Utc::now(),
        ..source.clone()
    };
    data.jobs.push(copy.clone());
    Ok(copy)
}

async fn set_status(
    store: &MarketplaceStore,
    employer_id: i64,
    job_id: &str,
    status: JobStatus,
) -> Result<Job, AppError> {
    let mut data = store.write().await;
    let idx = owned_index(&data, employer_id, job_id)?;
    data.jobs[idx].status = status;
    let updated = data.jobs[idx].clone();
    Ok(data.job_view(&updated))
}

pub async fn activate(store: &MarketplaceStore, employer_id: i64, job_id: &str) -> Result<Job, AppError> {
    set_status(store, employer_id, job_id, JobStatus::Active).await
}

/// "Close Job": the posting expires and stops taking applications.
pub async fn deactivate(
    store: &MarketplaceStore,
    employer_id: i64,
    job_id: &str,
) -> Result<Job, AppError> {
    set_status(store, employer_id, job_id, JobStatus::Expired).await
}

/// Active postings for the public board: boosted first, then newest.
pub async fn list_public(store: &MarketplaceStore, query: &str) -> Vec<Job> {
    let data = store.read().await;
    let active: Vec<Job> = data
        .jobs
        .iter()
        .filter(|j| j.status == JobStatus::Active)
        .map(|j| data.job_view(j))
        .collect();
    let mut jobs = search_jobs(&active, query);
    jobs.sort_by(|a, b| {
        b.is_premium
            .cmp(&a.is_premium)
            .then(b.created_at.cmp(&a.created_at))
    });
    jobs
}

/// A single posting. Drafts and expired postings are only visible to
/// their owner.
pub async fn get(store: &MarketplaceStore, job_id: &str, viewer: Option<i64>) -> Result<Job, AppError> {
    let data = store.read().await;
    let job = data
        .jobs
        .iter()
        .find(|j| j.job_id == job_id)
        .ok_or_else(not_found)?;

    if job.status != JobStatus::Active && viewer != Some(job.employer_id) {
        return Err(not_found());
    }
    Ok(data.job_view(job))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPLOYER: i64 = 2;
    const OTHER_EMPLOYER: i64 = 3;

    async fn job_titled(store: &MarketplaceStore, title: &str) -> Job {
        let data = store.read().await;
        let job = data.jobs.iter().find(|j| j.title == title).unwrap();
        data.job_view(job)
    }

    #[tokio::test]
    async fn employer_sees_only_own_jobs_newest_first() {
        let store = MarketplaceStore::demo();
        let jobs = list_by_employer(&store, EMPLOYER).await;
        assert_eq!(jobs.len(), 6);
        assert!(jobs.iter().all(|j| j.employer_id == EMPLOYER));
        assert_eq!(jobs[0].title, "QA Automation Lead");
        assert!(jobs.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let rust = jobs.iter().find(|j| j.title == "Senior Rust Engineer").unwrap();
        assert_eq!(rust.application_count, 3);
    }

    #[tokio::test]
    async fn create_defaults_to_draft_and_trims() {
        let store = MarketplaceStore::new();
        let job = create(
            &store,
            EMPLOYER,
            CreateJobRequest {
                title: "  Staff Engineer ".into(),
                job_type: "Full-time".into(),
                location: Some("   ".into()),
                ..CreateJobRequest::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(job.title, "Staff Engineer");
        assert_eq!(job.status, JobStatus::Draft);
        assert_eq!(job.location, None);
        assert!(!job.is_premium);
    }

    #[tokio::test]
    async fn update_changes_only_present_fields() {
        let store = MarketplaceStore::demo();
        let job = job_titled(&store, "Data Analyst").await;
        let updated = update(
            &store,
            EMPLOYER,
            &job.job_id,
            UpdateJobRequest {
                title: Some("Senior Data Analyst".into()),
                ..UpdateJobRequest::default()
            },
            false,
        )
        .await
        .unwrap();
        assert_eq!(updated.title, "Senior Data Analyst");
        assert_eq!(updated.location, job.location);
        assert_eq!(updated.status, JobStatus::Draft);
    }

    #[tokio::test]
    async fn boosting_requires_the_feature() {
        let store = MarketplaceStore::demo();
        let job = job_titled(&store, "Product Designer").await;

        let err = update(&store, EMPLOYER, &job.job_id, UpdateJobRequest::boost(true), false)
            .await
            .unwrap_err();
        assert_eq!(err.status_code_u16(), 403);

        let boosted = update(&store, EMPLOYER, &job.job_id, UpdateJobRequest::boost(true), true)
            .await
            .unwrap();
        assert!(boosted.is_premium);
    }

    #[tokio::test]
    async fn other_employers_job_is_not_found() {
        let store = MarketplaceStore::demo();
        let job = job_titled(&store, "Marketing Manager").await;
        let err = activate(&store, EMPLOYER, &job.job_id).await.unwrap_err();
        assert_eq!(err.status_code_u16(), 404);
        let err = delete(&store, EMPLOYER, &job.job_id).await.unwrap_err();
        assert_eq!(err.status_code_u16(), 404);
        assert!(delete(&store, OTHER_EMPLOYER, &job.job_id).await.is_ok());
    }

    #[tokio::test]
    async fn delete_removes_applications() {
        let store = MarketplaceStore::demo();
        let job = job_titled(&store, "Senior Rust Engineer").await;
        delete(&store, EMPLOYER, &job.job_id).await.unwrap();
        let data = store.read().await;
        assert!(data.jobs.iter().all(|j| j.job_id != job.job_id));
        assert!(data.applications.iter().all(|a| a.job_id != job.job_id));
    }

    #[tokio::test]
    async fn duplicate_is_a_fresh_unboosted_draft() {
        let store = MarketplaceStore::demo();
        let job = job_titled(&store, "Senior Rust Engineer").await;
        let copy = duplicate(&store, EMPLOYER, &job.job_id).await.unwrap();
        assert_ne!(copy.job_id, job.job_id);
        assert_eq!(copy.title, "Senior Rust Engineer (Copy)");
        assert_eq!(copy.status, JobStatus::Draft);
        assert!(!copy.is_premium);
        assert_eq!(copy.application_count, 0);
        assert_eq!(copy.salary_range, job.salary_range);
        assert_eq!(list_by_employer(&store, EMPLOYER).await.len(), 7);
    }

    #[tokio::test]
    async fn activate_and_close() {
        let store = MarketplaceStore::demo();
        let job = job_titled(&store, "Data Analyst").await;
        assert_eq!(activate(&store, EMPLOYER, &job.job_id).await.unwrap().status, JobStatus::Active);
        assert_eq!(deactivate(&store, EMPLOYER, &job.job_id).await.unwrap().status, JobStatus::Expired);
    }

    #[tokio::test]
    async fn public_board_lists_active_with_boosted_first() {
        let store = MarketplaceStore::demo();
        let jobs = list_public(&store, "").await;
        assert!(jobs.iter().all(|j| j.status == JobStatus::Active));
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[0].title, "Senior Rust Engineer");
        assert_eq!(jobs[1].title, "Marketing Manager");

        let berlin = list_public(&store, "berlin").await;
        assert_eq!(berlin.len(), 1);
        assert_eq!(berlin[0].title, "Product Designer");
    }

    #[tokio::test]
    async fn drafts_are_hidden_from_everyone_but_the_owner() {
        let store = MarketplaceStore::demo();
        let draft = job_titled(&store, "Data Analyst").await;
        assert!(get(&store, &draft.job_id, None).await.is_err());
        assert!(get(&store, &draft.job_id, Some(OTHER_EMPLOYER)).await.is_err());
        assert!(get(&store, &draft.job_id, Some(EMPLOYER)).await.is_ok());

        let active = job_titled(&store, "Technical Writer").await;
        assert!(get(&store, &active.job_id, None).await.is_ok());
    }
}
