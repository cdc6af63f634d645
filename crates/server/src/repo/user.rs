use chrono::Utc;
use shared_types::{
    AccountType, AppError, FreelancerProfile, JobStatistics, PlatformOverview, SignupRequest,
};

use crate::store::{MarketplaceStore, UserRecord};

pub async fn find_by_email(store: &MarketplaceStore, email: &str) -> Option<UserRecord> {
    store.read().await.user_by_email(email).cloned()
}

pub async fn get(store: &MarketplaceStore, id: i64) -> Result<UserRecord, AppError> {
    store
        .read()
        .await
        .user(id)
        .cloned()
        .ok_or_else(|| AppError::not_found("User not found"))
}

/// Register an account. Admin accounts cannot be self-created.
pub async fn create(
    store: &MarketplaceStore,
    req: &SignupRequest,
    password_hash: String,
) -> Result<UserRecord, AppError> {
    if req.account_type == AccountType::Admin {
        return Err(AppError::forbidden("Admin accounts cannot be created by signup"));
    }

    let mut data = store.write().await;
    if data.user_by_email(&req.email).is_some() {
        return Err(AppError::conflict("An account with this email already exists"));
    }

    let user = data.insert_user(
        &req.name,
        &req.email,
        password_hash,
        req.account_type,
        Utc::now(),
    );
    tracing::info!(user_id = user.id, account_type = user.account_type.as_str(), "Account created");
    Ok(user)
}

/// Freelancer directory, alphabetical.
pub async fn list_freelancers(store: &MarketplaceStore) -> Vec<FreelancerProfile> {
    let data = store.read().await;
    let mut profiles: Vec<FreelancerProfile> = data
        .users
        .iter()
        .filter(|u| u.account_type == AccountType::Freelancer)
        .map(|u| FreelancerProfile {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            joined_at: u.created_at,
            applications: data
                .applications
                .iter()
                .filter(|a| a.candidate_id == u.id)
                .count(),
        })
        .collect();
    profiles.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    profiles
}

pub async fn platform_overview(store: &MarketplaceStore) -> PlatformOverview {
    let data = store.read().await;
    let count = |t: AccountType| data.users.iter().filter(|u| u.account_type == t).count();
    let jobs: Vec<_> = data.jobs.iter().map(|j| data.job_view(j)).collect();

    PlatformOverview {
        employers: count(AccountType::Employer),
        job_seekers: count(AccountType::JobSeeker),
        freelancers: count(AccountType::Freelancer),
        admins: count(AccountType::Admin),
        jobs: JobStatistics::from_jobs(&jobs),
        applications: data.applications.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str, account_type: AccountType) -> SignupRequest {
        SignupRequest {
            name: "Riley Park".into(),
            email: email.into(),
            password: "password123".into(),
            account_type,
        }
    }

    #[tokio::test]
    async fn signup_normalizes_email_and_assigns_next_id() {
        let store = MarketplaceStore::demo();
        let user = create(&store, &signup(" Riley@Example.com ", AccountType::Freelancer), "h".into())
            .await
            .unwrap();
        assert_eq!(user.email, "riley@example.com");
        assert_eq!(user.id, 8);
        assert!(find_by_email(&store, "RILEY@example.com").await.is_some());
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let store = MarketplaceStore::demo();
        let err = create(&store, &signup("maya@visiondrill.dev", AccountType::JobSeeker), "h".into())
            .await
            .unwrap_err();
        assert_eq!(err.status_code_u16(), 409);
    }

    #[tokio::test]
    async fn admin_signup_is_forbidden() {
        let store = MarketplaceStore::new();
        let err = create(&store, &signup("boss@example.com", AccountType::Admin), "h".into())
            .await
            .unwrap_err();
        assert_eq!(err.status_code_u16(), 403);
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let store = MarketplaceStore::new();
        assert_eq!(get(&store, 99).await.unwrap_err().status_code_u16(), 404);
    }

    #[tokio::test]
    async fn freelancers_are_listed_alphabetically_with_application_counts() {
        let store = MarketplaceStore::demo();
        let profiles = list_freelancers(&store).await;
        let names: Vec<_> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Lena Fischer", "Sam Okafor"]);
        assert_eq!(profiles[0].applications, 2);
        assert_eq!(profiles[1].applications, 1);
    }

    #[tokio::test]
    async fn overview_counts_accounts_and_jobs() {
        let store = MarketplaceStore::demo();
        let overview = platform_overview(&store).await;
        assert_eq!(overview.admins, 1);
        assert_eq!(overview.employers, 2);
        assert_eq!(overview.job_seekers, 2);
        assert_eq!(overview.freelancers, 2);
        assert_eq!(overview.jobs.total, 7);
        assert_eq!(overview.jobs.total_applications, overview.applications);
    }
}
