use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdSparkles, LdZap};
use dioxus_free_icons::Icon;
use shared_types::{AccountType, FeatureFlags, Job, JobStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, EmptyState, Skeleton, StatCard,
};

use crate::format_helpers::{applicants_label, job_status_variant};
use crate::hooks::{provide_employer_jobs, use_employer_jobs};
use crate::routes::dashboard_layout::DashboardLayout;
use crate::routes::guard::RoleGuard;

/// Postings that can take a boost: anything not expired, boosted ones first.
fn boostable(jobs: &[Job]) -> Vec<Job> {
    let mut list: Vec<Job> = jobs
        .iter()
        .filter(|j| j.status != JobStatus::Expired)
        .cloned()
        .collect();
    list.sort_by_key(|j| !j.is_premium);
    list
}

#[component]
pub fn BoostingServices() -> Element {
    let flags: FeatureFlags = use_context();

    rsx! {
        RoleGuard { role: AccountType::Employer, area: "boosting services",
            DashboardLayout { title: "Boosting Services", role: AccountType::Employer,
                if flags.boosting {
                    BoostList {}
                } else {
                    EmptyState {
                        title: "Boosting is unavailable",
                        description: "Premium placement is turned off for this marketplace.",
                        icon: rsx! { Icon { icon: LdZap, width: 32, height: 32 } },
                    }
                }
            }
        }
    }
}

#[component]
fn BoostList() -> Element {
    let jobs = provide_employer_jobs();
    let all = jobs.jobs();
    let list = boostable(&all);
    let boosted = all.iter().filter(|j| j.is_premium).count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./employer.css") }

        div { class: "stat-grid",
            StatCard {
                label: "Boosted Jobs",
                value: boosted.to_string(),
                hint: "Shown first on the job board",
                tone: "violet",
                icon: rsx! { Icon { icon: LdSparkles, width: 18, height: 18 } },
            }
        }

        Card {
            CardHeader {
                CardTitle { "Premium Boost" }
                CardDescription { "Boosted postings are featured at the top of the public job board." }
            }
            CardContent {
                if jobs.is_loading() {
                    Skeleton {}
                } else {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Job" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Applicants" }
                            DataTableColumn { "" }
                        }
                        DataTableBody {
                            for job in list.iter() {
                                BoostRow { key: "{job.job_id}", job: job.clone() }
                            }
                            if list.is_empty() {
                                DataTableEmpty { colspan: 4, "No postings to boost" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BoostRow(job: Job) -> Element {
    let jobs = use_employer_jobs();
    let mut busy = use_signal(|| false);
    let toggle_job = job.clone();

    rsx! {
        DataTableRow {
            DataTableCell {
                "{job.title}"
                if job.is_premium {
                    Badge { variant: BadgeVariant::Premium, "Premium Boost" }
                }
            }
            DataTableCell {
                Badge { variant: job_status_variant(job.status), "{job.status.label()}" }
            }
            DataTableCell { "{applicants_label(job.application_count)}" }
            DataTableCell {
                Button {
                    variant: if job.is_premium { ButtonVariant::Outline } else { ButtonVariant::Primary },
                    size: ButtonSize::Small,
                    disabled: busy(),
                    onclick: move |_| {
                        let job = toggle_job.clone();
                        spawn(async move {
                            busy.set(true);
                            jobs.toggle_boost(job).await;
                            busy.set(false);
                        });
                    },
                    Icon { icon: LdZap, width: 14, height: 14 }
                    if job.is_premium { "Remove Boost" } else { "Boost Job" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn job(id: &str, status: JobStatus, premium: bool) -> Job {
        Job {
            job_id: id.into(),
            employer_id: 1,
            title: id.into(),
            description: String::new(),
            status,
            job_type: "Full-time".into(),
            location: None,
            salary_range: None,
            experience_level: None,
            is_premium: premium,
            application_count: 0,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn expired_jobs_cannot_be_boosted_and_boosted_lead() {
        let list = boostable(&[
            job("a", JobStatus::Active, false),
            job("b", JobStatus::Expired, true),
            job("c", JobStatus::Draft, true),
        ]);
        let ids: Vec<&str> = list.iter().map(|j| j.job_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }
}
