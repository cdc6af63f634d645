use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdSearch};
use dioxus_free_icons::Icon;
use shared_types::{AccountType, Applicant, ApplicantStats};
use shared_ui::{
    Badge, Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, EmptyState, Skeleton, StatCard,
};

use crate::format_helpers::{applicant_status_variant, format_date_human};
use crate::routes::dashboard_layout::DashboardLayout;
use crate::routes::guard::RoleGuard;
use crate::routes::Route;

#[component]
pub fn JobSeekerDashboard() -> Element {
    rsx! {
        RoleGuard { role: AccountType::JobSeeker, area: "job seeker dashboard",
            DashboardLayout { title: "My Applications", role: AccountType::JobSeeker,
                MyApplications {}
            }
        }
    }
}

#[component]
pub fn FreelancerDashboard() -> Element {
    rsx! {
        RoleGuard { role: AccountType::Freelancer, area: "freelancer dashboard",
            DashboardLayout { title: "My Applications", role: AccountType::Freelancer,
                MyApplications {}
            }
        }
    }
}

/// The caller's own applications, shared by both candidate dashboards.
#[component]
fn MyApplications() -> Element {
    let applications =
        use_resource(|| async move { server::api::list_my_applications().await });

    rsx! {
        match &*applications.read() {
            Some(Ok(list)) if list.is_empty() => rsx! {
                EmptyState {
                    title: "No applications yet",
                    description: "Find a role you like and apply in one click.",
                    icon: rsx! { Icon { icon: LdFileText, width: 32, height: 32 } },
                    Link { to: Route::JobBoard {}, class: "vd-button", "data-style": "primary",
                        Icon { icon: LdSearch, width: 16, height: 16 }
                        "Browse jobs"
                    }
                }
            },
            Some(Ok(list)) => rsx! { ApplicationTable { applications: list.clone() } },
            Some(Err(e)) => rsx! {
                Card {
                    CardContent { p { class: "error-text", "Could not load your applications: {e}" } }
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

#[component]
fn ApplicationTable(applications: Vec<Applicant>) -> Element {
    let stats = ApplicantStats::from_applicants(&applications);

    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Applications", value: stats.total.to_string(), tone: "blue" }
            StatCard { label: "In Progress", value: stats.in_progress().to_string(), tone: "amber" }
            StatCard { label: "Offers", value: (stats.offered + stats.hired).to_string(), tone: "emerald" }
        }

        Card {
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Position" }
                        DataTableColumn { "Applied" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        for a in applications.iter() {
                            DataTableRow {
                                key: "{a.id}",
                                onclick: {
                                    let id = a.job_id.clone();
                                    move |_| {
                                        navigator().push(Route::JobDetail { id: id.clone() });
                                    }
                                },
                                DataTableCell { "{a.position}" }
                                DataTableCell { "{format_date_human(a.applied_at)}" }
                                DataTableCell {
                                    Badge { variant: applicant_status_variant(a.status), "{a.status.as_str()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
