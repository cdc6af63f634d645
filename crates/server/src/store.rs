use chrono::{DateTime, Duration, Utc};
use shared_types::{AccountType, AppError, Applicant, ApplicantStatus, AuthUser, Job, JobStatus};
use std::collections::HashMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A registered account, including its password hash.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub account_type: AccountType,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn to_auth_user(&self) -> AuthUser {
        AuthUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            account_type: self.account_type,
            avatar_url: self.avatar_url.clone(),
            created_at: self.created_at,
        }
    }
}

/// A refresh token on record, keyed by its SHA-256 hash.
#[derive(Debug, Clone)]
pub struct RefreshSession {
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

/// Everything the marketplace holds. Job rows keep `application_count` at
/// zero; the repo layer fills it from `applications` on read.
#[derive(Debug)]
pub struct StoreData {
    pub users: Vec<UserRecord>,
    pub next_user_id: i64,
    pub jobs: Vec<Job>,
    pub applications: Vec<Applicant>,
    pub sessions: HashMap<String, RefreshSession>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_user_id: 1,
            jobs: Vec::new(),
            applications: Vec::new(),
            sessions: HashMap::new(),
        }
    }
}

impl StoreData {
    pub fn user(&self, id: i64) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
    }

    pub fn application_count(&self, job_id: &str) -> usize {
        self.applications.iter().filter(|a| a.job_id == job_id).count()
    }

    /// Copy of a job row with its live application count.
    pub fn job_view(&self, job: &Job) -> Job {
        Job {
            application_count: self.application_count(&job.job_id),
            ..job.clone()
        }
    }

    pub fn insert_user(
        &mut self,
        name: &str,
        email: &str,
        password_hash: String,
        account_type: AccountType,
        created_at: DateTime<Utc>,
    ) -> UserRecord {
        let user = UserRecord {
            id: self.next_user_id,
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            password_hash,
            account_type,
            avatar_url: None,
            created_at,
        };
        self.next_user_id += 1;
        self.users.push(user.clone());
        user
    }
}

/// In-memory marketplace store shared by server functions and REST handlers.
#[derive(Debug, Default)]
pub struct MarketplaceStore {
    inner: RwLock<StoreData>,
}

impl MarketplaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store filled with demo accounts, postings in every status, and
    /// applicants at several pipeline stages. Every account uses `password`.
    pub fn seeded(password: &str) -> Result<Self, AppError> {
        let hash = crate::auth::password::hash_password(password)
            .map_err(|e| AppError::internal(e.to_string()))?;
        let data = seed_data(&hash, Utc::now());
        Ok(Self {
            inner: RwLock::new(data),
        })
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.inner.write().await
    }
}

#[cfg(test)]
impl MarketplaceStore {
    /// Demo data with a placeholder password hash, for tests that never log in.
    pub(crate) fn demo() -> Self {
        Self {
            inner: RwLock::new(seed_data("unhashed", Utc::now())),
        }
    }
}

struct SeedJob {
    employer: &'static str,
    title: &'static str,
    description: &'static str,
    status: JobStatus,
    job_type: &'static str,
    location: Option<&'static str>,
    salary_range: Option<&'static str>,
    experience_level: Option<&'static str>,
    is_premium: bool,
    age: Duration,
}

const SEED_USERS: [(&str, &str, AccountType); 7] = [
    ("Avery Quinn", "admin@visiondrill.dev", AccountType::Admin),
    ("Jordan Blake", "employer@visiondrill.dev", AccountType::Employer),
    ("Casey Rivera", "hiring@lumenlabs.dev", AccountType::Employer),
    ("Maya Chen", "maya@visiondrill.dev", AccountType::JobSeeker),
    ("Omar Haddad", "omar@visiondrill.dev", AccountType::JobSeeker),
    ("Sam Okafor", "sam@visiondrill.dev", AccountType::Freelancer),
    ("Lena Fischer", "lena@visiondrill.dev", AccountType::Freelancer),
];

fn seed_jobs() -> Vec<SeedJob> {
    vec![
        SeedJob {
            employer: "employer@visiondrill.dev",
            title: "Senior Rust Engineer",
            description: "Own the matching engine behind our job feed.",
            status: JobStatus::Active,
            job_type: "Full-time",
            location: Some("Remote"),
            salary_range: Some("$140k - $170k"),
            experience_level: Some("Senior"),
            is_premium: true,
            age: Duration::days(6),
        },
        SeedJob {
            employer: "employer@visiondrill.dev",
            title: "Product Designer",
            description: "Shape the employer dashboard and hiring flows.",
            status: JobStatus::Active,
            job_type: "Contract",
            location: Some("Berlin"),
            salary_range: Some("$70/hr"),
            experience_level: Some("Mid-level"),
            is_premium: false,
            age: Duration::days(3),
        },
        SeedJob {
            employer: "employer@visiondrill.dev",
            title: "Data Analyst",
            description: "Turn hiring funnel data into weekly insights.",
            status: JobStatus::Draft,
            job_type: "Full-time",
            location: Some("New York, NY"),
            salary_range: None,
            experience_level: Some("Junior"),
            is_premium: false,
            age: Duration::days(1),
        },
        SeedJob {
            employer: "employer@visiondrill.dev",
            title: "DevOps Engineer",
            description: "Keep deploys boring across three regions.",
            status: JobStatus::Expired,
            job_type: "Full-time",
            location: Some("Remote"),
            salary_range: Some("$120k - $150k"),
            experience_level: Some("Senior"),
            is_premium: false,
            age: Duration::days(45),
        },
        SeedJob {
            employer: "employer@visiondrill.dev",
            title: "Technical Writer",
            description: "Document our public API and onboarding guides.",
            status: JobStatus::Active,
            job_type: "Part-time",
            location: Some("Remote"),
            salary_range: None,
            experience_level: Some("Mid-level"),
            is_premium: false,
            age: Duration::days(10),
        },
        SeedJob {
            employer: "employer@visiondrill.dev",
            title: "QA Automation Lead",
            description: "Build the end-to-end suite for web and mobile.",
            status: JobStatus::Draft,
            job_type: "Contract",
            location: None,
            salary_range: Some("$90/hr"),
            experience_level: Some("Lead"),
            is_premium: false,
            age: Duration::hours(2),
        },
        SeedJob {
            employer: "hiring@lumenlabs.dev",
            title: "Marketing Manager",
            description: "Lead launches for our analytics suite.",
            status: JobStatus::Active,
            job_type: "Full-time",
            location: Some("Austin, TX"),
            salary_range: Some("$95k - $115k"),
            experience_level: Some("Mid-level"),
            is_premium: false,
            age: Duration::days(2),
        },
    ]
}

/// (candidate email, job title, status, hours ago)
const SEED_APPLICATIONS: [(&str, &str, ApplicantStatus, i64); 7] = [
    ("maya@visiondrill.dev", "Senior Rust Engineer", ApplicantStatus::New, 20),
    ("omar@visiondrill.dev", "Senior Rust Engineer", ApplicantStatus::Interview, 90),
    ("sam@visiondrill.dev", "Product Designer", ApplicantStatus::Reviewed, 30),
    ("lena@visiondrill.dev", "Product Designer", ApplicantStatus::Offered, 60),
    ("maya@visiondrill.dev", "Technical Writer", ApplicantStatus::Rejected, 200),
    ("lena@visiondrill.dev", "Senior Rust Engineer", ApplicantStatus::Hired, 120),
    ("omar@visiondrill.dev", "Marketing Manager", ApplicantStatus::New, 5),
];

fn seed_data(password_hash: &str, now: DateTime<Utc>) -> StoreData {
    let mut data = StoreData::default();

    for (i, (name, email, account_type)) in SEED_USERS.iter().enumerate() {
        let joined = now - Duration::days(90 - i as i64 * 7);
        data.insert_user(name, email, password_hash.to_string(), *account_type, joined);
    }

    for seed in seed_jobs() {
        let Some(employer_id) = data.user_by_email(seed.employer).map(|u| u.id) else {
            continue;
        };
        data.jobs.push(Job {
            job_id: uuid::Uuid::new_v4().to_string(),
            employer_id,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            status: seed.status,
            job_type: seed.job_type.to_string(),
            location: seed.location.map(str::to_string),
            salary_range: seed.salary_range.map(str::to_string),
            experience_level: seed.experience_level.map(str::to_string),
            is_premium: seed.is_premium,
            application_count: 0,
            created_at: now - seed.age,
        });
    }

    for (email, title, status, hours) in SEED_APPLICATIONS {
        let candidate = data.user_by_email(email).cloned();
        let job = data.jobs.iter().find(|j| j.title == title).cloned();
        if let (Some(candidate), Some(job)) = (candidate, job) {
            data.applications.push(Applicant {
                id: uuid::Uuid::new_v4().to_string(),
                job_id: job.job_id,
                candidate_id: candidate.id,
                name: candidate.name,
                email: candidate.email,
                position: job.title,
                status,
                applied_at: now - Duration::hours(hours),
            });
        }
    }

    data
}
