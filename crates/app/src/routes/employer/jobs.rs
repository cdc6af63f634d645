use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdPlus};
use dioxus_free_icons::Icon;
use shared_types::{
    filter_jobs_by_tab, job_tab_counts, recent_jobs, AccountType, JobTab, RECENT_JOBS_LIMIT,
};
use shared_ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardAction, CardContent, CardDescription,
    CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, EmptyState, PageActions, PageHeader, PageTitle,
    SearchBar, SearchInput, Skeleton, TabBar, TabItem,
};

use super::job_card::JobCard;
use super::job_form::NewJobPostDialog;
use crate::format_helpers::{format_date_human, job_status_variant};
use crate::hooks::{provide_employer_jobs, use_employer_jobs};
use crate::routes::dashboard_layout::DashboardLayout;
use crate::routes::guard::RoleGuard;
use crate::routes::Route;

/// Tab id back to the tab; unknown ids mean "all".
fn tab_from_id(id: &str) -> JobTab {
    JobTab::ALL
        .into_iter()
        .find(|t| t.id() == id)
        .unwrap_or_default()
}

/// Copy shown when the filtered list is empty.
fn empty_copy(searching: bool) -> &'static str {
    if searching {
        "Try adjusting your search terms"
    } else {
        "Start by creating your first job posting"
    }
}

#[component]
pub fn EmployerJobs() -> Element {
    rsx! {
        RoleGuard { role: AccountType::Employer, area: "employer jobs",
            DashboardLayout { title: "Jobs", role: AccountType::Employer,
                JobsPage {}
            }
        }
    }
}

#[component]
fn JobsPage() -> Element {
    let mut jobs = provide_employer_jobs();
    let mut active_tab = use_signal(JobTab::default);
    let mut show_new = use_signal(|| false);

    let all = jobs.jobs();
    let filtered = jobs.filtered_jobs();
    let counts = job_tab_counts(&filtered);
    let visible = filter_jobs_by_tab(&filtered, active_tab());
    let recent = recent_jobs(&all, RECENT_JOBS_LIMIT);
    let searching = !jobs.search_query().trim().is_empty();

    let tabs: Vec<TabItem> = counts
        .iter()
        .map(|(tab, n)| TabItem::new(tab.id(), tab.label()).with_count(*n))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./employer.css") }

        PageHeader {
            PageTitle { subtitle: "Create, publish and manage your job postings", "Recruitment Hub" }
            PageActions {
                Button { variant: ButtonVariant::Primary, onclick: move |_| show_new.set(true),
                    Icon { icon: LdPlus, width: 16, height: 16 }
                    "New Job"
                }
            }
        }

        Card { class: "recent-jobs",
            CardHeader {
                CardTitle { "Recent Job Listings" }
                CardDescription { "Last 5 postings" }
                CardAction {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| show_new.set(true),
                        Icon { icon: LdPlus, width: 14, height: 14 }
                        "Add New"
                    }
                }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Title" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Applicants" }
                        DataTableColumn { "Posted" }
                    }
                    DataTableBody {
                        for job in recent.iter() {
                            DataTableRow {
                                key: "{job.job_id}",
                                onclick: {
                                    let id = job.job_id.clone();
                                    move |_| {
                                        navigator().push(Route::JobDetail { id: id.clone() });
                                    }
                                },
                                DataTableCell { "{job.title}" }
                                DataTableCell {
                                    Badge { variant: job_status_variant(job.status), "{job.status.label()}" }
                                }
                                DataTableCell { "{job.application_count}" }
                                DataTableCell { "{format_date_human(job.created_at)}" }
                            }
                        }
                        if recent.is_empty() && !jobs.is_loading() {
                            DataTableEmpty { colspan: 4, "No postings yet" }
                        }
                    }
                }
            }
        }

        div { class: "jobs-toolbar",
            TabBar {
                tabs,
                active: active_tab().id().to_string(),
                on_change: move |id: String| active_tab.set(tab_from_id(&id)),
            }
            SearchBar {
                SearchInput {
                    value: jobs.search_query(),
                    placeholder: "Search jobs, skills, locations...",
                    on_input: move |q: String| jobs.set_search_query(q),
                }
            }
        }

        if jobs.is_loading() {
            div { class: "loading",
                Skeleton {}
                Skeleton {}
                Skeleton {}
            }
        } else if let Some(err) = jobs.error() {
            Card {
                CardContent {
                    p { class: "error-text", "Could not load your jobs: {err}" }
                    Button { variant: ButtonVariant::Outline, onclick: move |_| jobs.fetch_jobs(), "Try again" }
                }
            }
        } else if visible.is_empty() {
            EmptyState {
                title: "No jobs found",
                description: empty_copy(searching),
                icon: rsx! { Icon { icon: LdBriefcase, width: 32, height: 32 } },
                if !searching {
                    Button { variant: ButtonVariant::Primary, onclick: move |_| show_new.set(true),
                        Icon { icon: LdPlus, width: 16, height: 16 }
                        "Create Job"
                    }
                }
            }
        } else {
            div { class: "job-grid",
                for job in visible.iter() {
                    JobCard { key: "{job.job_id}", job: job.clone() }
                }
            }
        }

        NewJobPostDialog { open: show_new(), on_close: move |_| show_new.set(false) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_ids_round_trip_and_default_to_all() {
        for tab in JobTab::ALL {
            assert_eq!(tab_from_id(tab.id()), tab);
        }
        assert_eq!(tab_from_id("archived"), JobTab::All);
    }

    #[test]
    fn empty_state_copy_depends_on_search() {
        assert_eq!(empty_copy(true), "Try adjusting your search terms");
        assert_eq!(empty_copy(false), "Start by creating your first job posting");
    }
}
