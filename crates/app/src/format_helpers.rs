//! Formatting utilities for the UI layer.

use chrono::{DateTime, Utc};
use shared_types::{posted_ago, ApplicantStatus, JobStatus};
use shared_ui::BadgeVariant;

/// Format a timestamp as "Jan 20, 2026".
pub fn format_date_human(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// "Posted 3 days ago" line on job cards.
pub fn posted_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("Posted {} ago", posted_ago(created_at, now))
}

pub fn applicants_label(count: usize) -> String {
    format!("{count} applicants")
}

pub fn job_status_variant(status: JobStatus) -> BadgeVariant {
    match status {
        JobStatus::Active => BadgeVariant::Success,
        JobStatus::Draft => BadgeVariant::Secondary,
        JobStatus::Expired => BadgeVariant::Outline,
    }
}

pub fn applicant_status_variant(status: ApplicantStatus) -> BadgeVariant {
    match status {
        ApplicantStatus::New => BadgeVariant::Primary,
        ApplicantStatus::Reviewed => BadgeVariant::Secondary,
        ApplicantStatus::Interview => BadgeVariant::Warning,
        ApplicantStatus::Offered => BadgeVariant::Premium,
        ApplicantStatus::Hired => BadgeVariant::Success,
        ApplicantStatus::Rejected => BadgeVariant::Destructive,
    }
}

/// Public link to a posting, as copied by the Share action.
pub fn share_url(origin: &str, job_id: &str) -> String {
    format!("{}/jobs/{job_id}", origin.trim_end_matches('/'))
}

/// `None` for blank strings, trimmed text otherwise.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
