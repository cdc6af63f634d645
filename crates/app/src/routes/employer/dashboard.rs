use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdCalendar, LdFileText, LdPlus, LdSparkles, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{AccountType, ApplicantStats, ApplicantStatus, JobStatistics};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageActions,
    PageHeader, PageTitle, StatCard,
};

use super::job_form::NewJobPostDialog;
use crate::auth::use_auth;
use crate::hooks::{provide_applicants, provide_employer_jobs};
use crate::routes::dashboard_layout::DashboardLayout;
use crate::routes::guard::RoleGuard;
use crate::routes::Route;

#[component]
pub fn EmployerDashboard() -> Element {
    rsx! {
        RoleGuard { role: AccountType::Employer, area: "employer dashboard",
            DashboardLayout { title: "Dashboard", role: AccountType::Employer,
                DashboardBody {}
            }
        }
    }
}

#[component]
fn DashboardBody() -> Element {
    let auth = use_auth();
    let jobs = provide_employer_jobs();
    let applicants = provide_applicants();
    let mut show_new = use_signal(|| false);

    let name = auth.user().map(|u| u.name).unwrap_or_default();
    let job_stats = JobStatistics::from_jobs(&jobs.jobs());
    let applicant_stats = ApplicantStats::from_applicants(&applicants.get_all_applicants());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./employer.css") }

        Card { class: "welcome-card",
            CardHeader {
                span { class: "welcome-eyebrow", "Employer Portal" }
                CardTitle { "Welcome Back!" }
                CardDescription {
                    if name.is_empty() {
                        "Here is what is happening with your hiring today."
                    } else {
                        "Good to see you, {name}. Here is what is happening with your hiring today."
                    }
                }
            }
        }

        PageHeader {
            PageTitle { subtitle: "Post a role or jump into your pipeline", "Job Posting" }
            PageActions {
                Button { variant: ButtonVariant::Primary, onclick: move |_| show_new.set(true),
                    Icon { icon: LdPlus, width: 16, height: 16 }
                    "Post a Job"
                }
                Link { to: Route::EmployerJobs {}, class: "vd-button", "data-style": "outline",
                    Icon { icon: LdBriefcase, width: 16, height: 16 }
                    "Manage Jobs"
                }
                Link { to: Route::AllApplicants {}, class: "vd-button", "data-style": "outline",
                    Icon { icon: LdUsers, width: 16, height: 16 }
                    "View Applicants"
                }
            }
        }

        section { class: "overview",
            h2 { class: "section-title", "Quick Overview & Statistics" }
            div { class: "stat-grid",
                StatCard {
                    label: "Active Jobs",
                    value: job_stats.active.to_string(),
                    hint: format!("{} total postings", job_stats.total),
                    tone: "blue",
                    icon: rsx! { Icon { icon: LdBriefcase, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Total Applicants",
                    value: applicant_stats.total.to_string(),
                    hint: format!("{} in progress", applicant_stats.in_progress()),
                    tone: "emerald",
                    icon: rsx! { Icon { icon: LdUsers, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Interviews",
                    value: applicant_stats.interview.to_string(),
                    hint: format!("{} offers out", applicant_stats.offered),
                    tone: "amber",
                    icon: rsx! { Icon { icon: LdCalendar, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Hired",
                    value: applicant_stats.hired.to_string(),
                    hint: format!("{} new this round", applicant_stats.new),
                    tone: "violet",
                    icon: rsx! { Icon { icon: LdTrendingUp, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Draft Jobs",
                    value: job_stats.draft.to_string(),
                    hint: format!("{} expired", job_stats.expired),
                    tone: "blue",
                    icon: rsx! { Icon { icon: LdFileText, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Premium Boosts",
                    value: job_stats.premium.to_string(),
                    hint: format!("{} applications received", job_stats.total_applications),
                    tone: "violet",
                    icon: rsx! { Icon { icon: LdSparkles, width: 18, height: 18 } },
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Pipeline" }
                CardDescription { "Where your applicants are right now" }
            }
            CardContent {
                ul { class: "pipeline-list",
                    for status in ApplicantStatus::ALL {
                        li { key: "{status.as_str()}",
                            span { "{status.as_str()}" }
                            strong { "{applicant_stats.count(status)}" }
                        }
                    }
                }
            }
        }

        NewJobPostDialog { open: show_new(), on_close: move |_| show_new.set(false) }
    }
}
