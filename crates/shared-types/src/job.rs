use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many postings the "Recent job listings" table shows.
pub const RECENT_JOBS_LIMIT: usize = 5;

/// Lifecycle state of a job posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    #[default]
    Draft,
    Expired,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Draft => "draft",
            JobStatus::Expired => "expired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Active => "Active",
            JobStatus::Draft => "Draft",
            JobStatus::Expired => "Expired",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(JobStatus::Active),
            "draft" => Some(JobStatus::Draft),
            "expired" => Some(JobStatus::Expired),
            _ => None,
        }
    }
}

/// An employer-owned job posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Job {
    pub job_id: String,
    pub employer_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: JobStatus,
    pub job_type: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub application_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Tabs on the employer jobs page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobTab {
    #[default]
    All,
    Active,
    Draft,
    Expired,
}

impl JobTab {
    pub const ALL: [JobTab; 4] = [JobTab::All, JobTab::Active, JobTab::Draft, JobTab::Expired];

    pub fn id(&self) -> &'static str {
        match self {
            JobTab::All => "all",
            JobTab::Active => "active",
            JobTab::Draft => "draft",
            JobTab::Expired => "expired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobTab::All => "All Jobs",
            JobTab::Active => "Active",
            JobTab::Draft => "Draft",
            JobTab::Expired => "Expired",
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        match self {
            JobTab::All => true,
            JobTab::Active => job.status == JobStatus::Active,
            JobTab::Draft => job.status == JobStatus::Draft,
            JobTab::Expired => job.status == JobStatus::Expired,
        }
    }
}

/// Tab counts in display order. Pass the search-filtered list so the counts
/// agree with what each tab would show.
pub fn job_tab_counts(jobs: &[Job]) -> Vec<(JobTab, usize)> {
    JobTab::ALL
        .iter()
        .map(|tab| (*tab, jobs.iter().filter(|j| tab.matches(j)).count()))
        .collect()
}

pub fn filter_jobs_by_tab(jobs: &[Job], tab: JobTab) -> Vec<Job> {
    jobs.iter().filter(|j| tab.matches(j)).cloned().collect()
}

/// Case-insensitive substring search over the fields shown on a job card.
pub fn search_jobs(jobs: &[Job], query: &str) -> Vec<Job> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return jobs.to_vec();
    }
    jobs.iter()
        .filter(|job| {
            let optional = [&job.location, &job.salary_range, &job.experience_level];
            job.title.to_lowercase().contains(&needle)
                || job.job_type.to_lowercase().contains(&needle)
                || optional
                    .iter()
                    .filter_map(|f| f.as_deref())
                    .any(|f| f.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Newest postings first, at most `limit`.
pub fn recent_jobs(jobs: &[Job], limit: usize) -> Vec<Job> {
    let mut sorted = jobs.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// Title given to a duplicated posting.
pub fn duplicate_title(title: &str) -> String {
    format!("{title} (Copy)")
}

/// Headline numbers for the employer dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JobStatistics {
    pub total: usize,
    pub active: usize,
    pub draft: usize,
    pub expired: usize,
    pub premium: usize,
    pub total_applications: usize,
}

impl JobStatistics {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        jobs.iter().fold(Self::default(), |mut acc, job| {
            acc.total += 1;
            match job.status {
                JobStatus::Active => acc.active += 1,
                JobStatus::Draft => acc.draft += 1,
                JobStatus::Expired => acc.expired += 1,
            }
            if job.is_premium {
                acc.premium += 1;
            }
            acc.total_applications += job.application_count;
            acc
        })
    }
}
