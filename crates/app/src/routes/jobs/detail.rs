use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdBriefcase, LdDollarSign, LdMapPin, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{AppError, Job, ReturnTo};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader, CardTitle, Skeleton, ToastOptions,
};

use crate::auth::use_auth;
use crate::format_helpers::{applicants_label, job_status_variant, posted_label};
use crate::routes::Route;

#[component]
pub fn JobDetail(id: String) -> Element {
    let job_id = id.clone();
    let job = use_resource(move || {
        let job_id = job_id.clone();
        async move { server::api::get_job(job_id).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./jobs.css") }

        div { class: "container job-detail",
            Link { to: Route::JobBoard {}, class: "back-link",
                Icon { icon: LdArrowLeft, width: 16, height: 16 }
                "All jobs"
            }

            match &*job.read() {
                Some(Ok(job)) => rsx! {
                    JobDetailView { job: job.clone() }
                },
                Some(Err(e)) => {
                    tracing::warn!(job_id = %id, error = %e, "Job lookup failed");
                    rsx! {
                        Card {
                            CardHeader { CardTitle { "Job Not Found" } }
                            CardContent {
                                p { "This posting may have been closed or removed." }
                            }
                        }
                    }
                }
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}

#[component]
fn JobDetailView(job: Job) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut applied = use_signal(|| false);
    let mut applying = use_signal(|| false);

    let user = auth.user();
    let can_apply = user.as_ref().is_some_and(|u| u.account_type.is_candidate());
    let here = Route::JobDetail { id: job.job_id.clone() }.to_string();
    let posted = posted_label(job.created_at, Utc::now());

    let apply_id = job.job_id.clone();
    let handle_apply = move |_: MouseEvent| {
        let job_id = apply_id.clone();
        spawn(async move {
            applying.set(true);
            match server::api::apply_to_job(job_id).await {
                Ok(_) => {
                    applied.set(true);
                    toast.success("Application sent".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    let message = e.to_string();
                    tracing::warn!(error = %message, "Apply failed");
                    toast.error(AppError::friendly_message(&message), ToastOptions::new());
                }
            }
            applying.set(false);
        });
    };

    rsx! {
        Card {
            CardHeader {
                div { class: "job-detail-badges",
                    Badge { variant: job_status_variant(job.status), "{job.status.label()}" }
                    if job.is_premium {
                        Badge { variant: BadgeVariant::Premium, "Featured" }
                    }
                }
                CardTitle { "{job.title}" }
                p { class: "public-job-posted", "{posted}" }
            }

            CardContent {
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
                    span {
                        Icon { icon: LdUsers, width: 14, height: 14 }
                        "{applicants_label(job.application_count)}"
                    }
                }
                if let Some(level) = &job.experience_level {
                    p { class: "job-detail-level", "Experience: {level}" }
                }
                div { class: "job-detail-description",
                    for (i, paragraph) in job.description.split("\n\n").enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                }
            }

            CardFooter {
                if user.is_none() {
                    Link {
                        to: Route::Login { query: ReturnTo::new(&here) },
                        class: "vd-button",
                        "data-style": "primary",
                        "Sign in to apply"
                    }
                } else if can_apply {
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: applied() || applying(),
                        onclick: handle_apply,
                        if applied() { "Applied" } else if applying() { "Sending..." } else { "Apply Now" }
                    }
                }
            }
        }
    }
}
