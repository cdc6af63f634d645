use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdCalendar, LdTrendingUp, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{initials, AccountType, ApplicantStats, ApplicantStatus, JobStatistics};
use shared_ui::{
    Avatar, AvatarFallback, Card, CardContent, CardDescription, CardHeader, CardTitle,
    EmptyState, ProgressBar, SearchBar, SearchInput, Skeleton, StatCard,
};

use crate::format_helpers::format_date_human;
use crate::hooks::{provide_applicants, provide_employer_jobs};
use crate::routes::dashboard_layout::DashboardLayout;
use crate::routes::guard::RoleGuard;

/// Share of `part` in `whole` as a percentage, 0 when `whole` is 0.
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// `/freelancers`: every freelancer account with a search box.
#[component]
pub fn Freelancers() -> Element {
    rsx! {
        RoleGuard { role: AccountType::Employer, area: "freelancer directory",
            DashboardLayout { title: "Freelancers", role: AccountType::Employer,
                FreelancerList {}
            }
        }
    }
}

#[component]
fn FreelancerList() -> Element {
    let mut search = use_signal(String::new);
    let freelancers =
        use_resource(|| async move { server::api::list_freelancers().await });

    let needle = search.read().trim().to_lowercase();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./directory.css") }

        SearchBar {
            SearchInput {
                value: search(),
                placeholder: "Search freelancers by name or email...",
                on_input: move |q: String| search.set(q),
            }
        }

        match &*freelancers.read() {
            Some(Ok(list)) => {
                let shown: Vec<_> = list
                    .iter()
                    .filter(|f| {
                        f.name.to_lowercase().contains(&needle)
                            || f.email.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect();
                if shown.is_empty() {
                    rsx! {
                        EmptyState {
                            title: "No freelancers found",
                            icon: rsx! { Icon { icon: LdUsers, width: 32, height: 32 } },
                        }
                    }
                } else {
                    rsx! {
                        div { class: "directory-grid",
                            for f in shown.iter() {
                                Card { key: "{f.id}", class: "directory-card",
                                    CardHeader {
                                        Avatar {
                                            AvatarFallback { "{initials(&f.name)}" }
                                        }
                                        CardTitle { "{f.name}" }
                                        CardDescription { "{f.email}" }
                                    }
                                    CardContent {
                                        p { class: "directory-meta",
                                            "Joined {format_date_human(f.joined_at)} · {f.applications} applications"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => rsx! {
                Card {
                    CardContent { p { class: "error-text", "Could not load freelancers: {e}" } }
                }
            },
            None => rsx! {
                div { class: "loading",
                    Skeleton {}
                    Skeleton {}
                }
            },
        }
    }
}

/// `/insights`: hiring funnel numbers for the signed-in employer.
#[component]
pub fn Insights() -> Element {
    rsx! {
        RoleGuard { role: AccountType::Employer, area: "insights page",
            DashboardLayout { title: "Insights", role: AccountType::Employer,
                InsightsBody {}
            }
        }
    }
}

#[component]
fn InsightsBody() -> Element {
    let jobs = provide_employer_jobs();
    let applicants = provide_applicants();

    let job_stats = JobStatistics::from_jobs(&jobs.jobs());
    let stats = ApplicantStats::from_applicants(&applicants.get_all_applicants());
    let per_job = if job_stats.total == 0 {
        0.0
    } else {
        job_stats.total_applications as f64 / job_stats.total as f64
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./directory.css") }

        div { class: "stat-grid",
            StatCard {
                label: "Applications per Job",
                value: format!("{per_job:.1}"),
                tone: "blue",
                icon: rsx! { Icon { icon: LdBriefcase, width: 18, height: 18 } },
            }
            StatCard {
                label: "Interview Rate",
                value: format!("{:.0}%", percent(stats.interview + stats.offered + stats.hired, stats.total)),
                tone: "amber",
                icon: rsx! { Icon { icon: LdCalendar, width: 18, height: 18 } },
            }
            StatCard {
                label: "Hire Rate",
                value: format!("{:.0}%", percent(stats.hired, stats.total)),
                tone: "emerald",
                icon: rsx! { Icon { icon: LdTrendingUp, width: 18, height: 18 } },
            }
        }

        Card {
            CardHeader {
                CardTitle { "Pipeline breakdown" }
                CardDescription { "{stats.total} applications across {job_stats.total} postings" }
            }
            CardContent {
                div { class: "funnel",
                    for status in ApplicantStatus::ALL {
                        div { key: "{status.as_str()}", class: "funnel-row",
                            span { class: "funnel-label", "{status.as_str()}" }
                            ProgressBar { value: percent(stats.count(status), stats.total) }
                            span { class: "funnel-count", "{stats.count(status)}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_empty_totals() {
        assert_eq!(percent(3, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }
}
