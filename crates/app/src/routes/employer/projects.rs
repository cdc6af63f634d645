use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowLeft, LdCalendar, LdClock, LdDollarSign, LdFileText, LdFolder, LdMessageSquare, LdPlus,
    LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    deadline_label, format_budget, project_tab_counts, AccountType, DeadlineUrgency, ProgressTone,
    Project, ProjectSummary, ProjectTab,
};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, EmptyState, PageActions, PageHeader, PageTitle,
    ProgressBar, StatCard, TabBar, TabItem, ToneBadge,
};

use crate::routes::dashboard_layout::DashboardLayout;
use crate::routes::guard::RoleGuard;
use crate::routes::Route;

/// Freelance projects. Nothing feeds this list yet.
fn load_projects() -> Vec<Project> {
    Vec::new()
}

fn tab_from_id(id: &str) -> ProjectTab {
    ProjectTab::ALL
        .into_iter()
        .find(|t| t.id() == id)
        .unwrap_or_default()
}

#[component]
pub fn ProjectsPage() -> Element {
    rsx! {
        RoleGuard { role: AccountType::Employer, area: "projects page",
            DashboardLayout { title: "Projects", role: AccountType::Employer,
                ProjectsBody {}
            }
        }
    }
}

#[component]
fn ProjectsBody() -> Element {
    let projects = use_hook(load_projects);
    let mut active_tab = use_signal(ProjectTab::default);

    let summary = ProjectSummary::from_projects(&projects);
    let tabs: Vec<TabItem> = project_tab_counts(&projects)
        .iter()
        .map(|(tab, n)| TabItem::new(tab.id(), tab.label()).with_count(*n))
        .collect();
    let visible: Vec<Project> = projects
        .iter()
        .filter(|p| active_tab().matches(p))
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./employer.css") }

        Link { to: Route::EmployerDashboard {}, class: "back-link",
            Icon { icon: LdArrowLeft, width: 16, height: 16 }
            "Back to Dashboard"
        }

        PageHeader {
            PageTitle { subtitle: "Track freelance work from kickoff to delivery", "Project Management" }
            PageActions {
                Link { to: Route::EmployerJobs {}, class: "vd-button", "data-style": "primary",
                    Icon { icon: LdPlus, width: 16, height: 16 }
                    "New Project"
                }
            }
        }

        div { class: "stat-grid",
            StatCard {
                label: "Active Projects",
                value: summary.active.to_string(),
                tone: "blue",
                icon: rsx! { Icon { icon: LdFolder, width: 18, height: 18 } },
            }
            StatCard {
                label: "Avg. Progress",
                value: format!("{}%", summary.average_progress),
                tone: "emerald",
                icon: rsx! { Icon { icon: LdTrendingUp, width: 18, height: 18 } },
            }
            StatCard {
                label: "Total Budget",
                value: format_budget(summary.total_budget_cents),
                tone: "violet",
                icon: rsx! { Icon { icon: LdDollarSign, width: 18, height: 18 } },
            }
            StatCard {
                label: "Due This Week",
                value: summary.due_this_week.to_string(),
                tone: "amber",
                icon: rsx! { Icon { icon: LdCalendar, width: 18, height: 18 } },
            }
        }

        TabBar {
            tabs,
            active: active_tab().id().to_string(),
            on_change: move |id: String| active_tab.set(tab_from_id(&id)),
        }

        if visible.is_empty() {
            EmptyState {
                title: "No projects yet",
                description: "Start your first project by hiring a freelancer from your job postings",
                icon: rsx! { Icon { icon: LdFolder, width: 32, height: 32 } },
                Link { to: Route::EmployerJobs {}, class: "vd-button", "data-style": "primary",
                    Icon { icon: LdPlus, width: 16, height: 16 }
                    "Create Project"
                }
            }
        } else {
            div { class: "project-grid",
                for project in visible.iter() {
                    ProjectCard { key: "{project.id}", project: project.clone() }
                }
            }
        }

        Card { class: "quick-actions",
            CardHeader { CardTitle { "Quick Actions" } }
            CardContent {
                div { class: "quick-action-grid",
                    QuickAction { tone: "blue", title: "Team Chat", blurb: "Communicate with freelancers",
                        Icon { icon: LdMessageSquare, width: 18, height: 18 }
                    }
                    QuickAction { tone: "emerald", title: "Progress Reports", blurb: "Generate detailed reports",
                        Icon { icon: LdTrendingUp, width: 18, height: 18 }
                    }
                    QuickAction { tone: "violet", title: "Schedule Review", blurb: "Plan milestone meetings",
                        Icon { icon: LdCalendar, width: 18, height: 18 }
                    }
                }
            }
        }
    }
}

#[component]
fn QuickAction(
    tone: &'static str,
    title: &'static str,
    blurb: &'static str,
    children: Element,
) -> Element {
    rsx! {
        button { class: "quick-action", r#type: "button", "data-tone": tone,
            div { class: "quick-action-head",
                span { class: "quick-action-icon", {children} }
                h4 { "{title}" }
            }
            p { "{blurb}" }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let progress_tone = ProgressTone::for_progress(project.progress);
    let urgency = DeadlineUrgency::for_days_left(project.days_left);

    rsx! {
        Card { class: "project-card",
            CardHeader {
                div { class: "project-card-head",
                    div {
                        CardTitle { "{project.title}" }
                        p { class: "project-client", "Client: {project.client}" }
                    }
                    ToneBadge { tone: project.status.tone(), "{project.status.label()}" }
                }
            }
            CardContent {
                div { class: "project-freelancer",
                    Icon { icon: LdUsers, width: 16, height: 16 }
                    div {
                        p { class: "project-freelancer-name", "{project.freelancer}" }
                        p { class: "project-freelancer-role", "Freelancer" }
                    }
                }
                div { class: "project-progress",
                    div { class: "project-progress-head",
                        span { "Progress" }
                        strong { "{project.progress}%" }
                    }
                    ProgressBar { value: f64::from(project.progress), tone: progress_tone.class() }
                }
                dl { class: "project-details",
                    div {
                        dt { "Budget" }
                        dd { "{format_budget(project.budget_cents)}" }
                    }
                    div {
                        dt { "Deadline" }
                        dd { class: "deadline {urgency.class()}", "{deadline_label(project.days_left)}" }
                    }
                    div {
                        dt { "Tasks" }
                        dd { "{project.tasks.completed}/{project.tasks.total}" }
                    }
                }
                div { class: "project-footer",
                    span { class: "project-activity",
                        Icon { icon: LdClock, width: 14, height: 14 }
                        "{project.last_activity}"
                    }
                    Icon { icon: LdFileText, width: 16, height: 16 }
                }
            }
        }
    }
}
