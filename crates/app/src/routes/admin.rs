use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdFileText, LdSparkles, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{AccountType, PlatformOverview};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Skeleton, StatCard};

use crate::routes::dashboard_layout::DashboardLayout;
use crate::routes::guard::RoleGuard;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RoleGuard { role: AccountType::Admin, area: "admin dashboard",
            DashboardLayout { title: "Platform Overview", role: AccountType::Admin,
                OverviewBody {}
            }
        }
    }
}

#[component]
fn OverviewBody() -> Element {
    let overview = use_resource(|| async move { server::api::platform_overview().await });

    rsx! {
        match &*overview.read() {
            Some(Ok(o)) => rsx! { OverviewCards { overview: o.clone() } },
            Some(Err(e)) => rsx! {
                Card {
                    CardContent { p { class: "error-text", "Could not load the overview: {e}" } }
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
fn OverviewCards(overview: PlatformOverview) -> Element {
    let members = overview.employers + overview.job_seekers + overview.freelancers + overview.admins;

    rsx! {
        div { class: "stat-grid",
            StatCard {
                label: "Members",
                value: members.to_string(),
                hint: format!(
                    "{} employers · {} job seekers · {} freelancers",
                    overview.employers, overview.job_seekers, overview.freelancers,
                ),
                tone: "blue",
                icon: rsx! { Icon { icon: LdUsers, width: 18, height: 18 } },
            }
            StatCard {
                label: "Jobs",
                value: overview.jobs.total.to_string(),
                hint: format!("{} active · {} draft · {} expired", overview.jobs.active, overview.jobs.draft, overview.jobs.expired),
                tone: "emerald",
                icon: rsx! { Icon { icon: LdBriefcase, width: 18, height: 18 } },
            }
            StatCard {
                label: "Applications",
                value: overview.applications.to_string(),
                tone: "amber",
                icon: rsx! { Icon { icon: LdFileText, width: 18, height: 18 } },
            }
            StatCard {
                label: "Boosted Jobs",
                value: overview.jobs.premium.to_string(),
                tone: "violet",
                icon: rsx! { Icon { icon: LdSparkles, width: 18, height: 18 } },
            }
        }

        Card {
            CardHeader { CardTitle { "Administrators" } }
            CardContent { p { "{overview.admins} admin accounts" } }
        }
    }
}
