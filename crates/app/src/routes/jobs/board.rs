use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdDollarSign, LdMapPin};
use dioxus_free_icons::Icon;
use shared_types::Job;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, EmptyState, PageHeader, PageTitle, SearchBar,
    SearchInput, Skeleton,
};

use crate::format_helpers::posted_label;
use crate::routes::Route;

/// Public board of active postings, boosted ones first.
#[component]
pub fn JobBoard() -> Element {
    let mut search_input = use_signal(String::new);

    let jobs = use_resource(move || {
        let q = search_input.read().clone();
        async move { server::api::list_public_jobs(q).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./jobs.css") }

        div { class: "container",
            PageHeader {
                PageTitle { subtitle: "Open roles from teams hiring right now", "Find Jobs" }
            }

            SearchBar {
                SearchInput {
                    value: search_input(),
                    placeholder: "Search by title, type or location...",
                    on_input: move |q: String| search_input.set(q),
                }
            }

            match &*jobs.read() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    div { class: "job-board-list",
                        for job in list.iter() {
                            PublicJobCard { key: "{job.job_id}", job: job.clone() }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    EmptyState {
                        title: "No open jobs",
                        description: "Nothing matches your search yet. Check back soon.",
                    }
                },
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent { p { class: "error-text", "{e}" } }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}

/// Compact posting card linking to the detail page.
#[component]
pub fn PublicJobCard(job: Job) -> Element {
    let posted = posted_label(job.created_at, Utc::now());

    rsx! {
        Link { to: Route::JobDetail { id: job.job_id.clone() }, class: "public-job-card",
            div { class: "public-job-head",
                h3 { "{job.title}" }
                if job.is_premium {
                    Badge { variant: BadgeVariant::Premium, "Featured" }
                }
            }
            div { class: "public-job-meta",
                span {
                    Icon { icon: LdBriefcase, width: 14, height: 14 }
                    "{job.job_type}"
                }
                if let Some(location) = &job.location {
                    span {
                        Icon { icon: LdMapPin, width: 14, height: 14 }
                        "{location}"
                    }
                }
                if let Some(salary) = &job.salary_range {
                    span {
                        Icon { icon: LdDollarSign, width: 14, height: 14 }
                        "{salary}"
                    }
                }
            }
            p { class: "public-job-posted", "{posted}" }
        }
    }
}
