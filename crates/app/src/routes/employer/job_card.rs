use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdClock, LdCopy, LdDollarSign, LdEllipsis, LdEye, LdMapPin, LdShare2, LdUsers,
    LdZap,
};
use dioxus_free_icons::Icon;
use shared_types::{FeatureFlags, Job, JobStatus};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, DropdownMenu,
    DropdownMenuContent, DropdownMenuItem, DropdownMenuSeparator, DropdownMenuTrigger,
    ToastOptions,
};

use super::job_form::EditJobDialog;
use crate::format_helpers::{applicants_label, job_status_variant, posted_label, share_url};
use crate::hooks::use_employer_jobs;
use crate::routes::Route;

fn clipboard_script(text: &str) -> String {
    format!(
        "navigator.clipboard.writeText({});",
        serde_json::Value::String(text.to_string())
    )
}

/// Copy the public link of a posting to the clipboard.
async fn copy_share_link(job_id: &str) -> Result<(), document::EvalError> {
    let origin: String = document::eval("return window.location.origin;").join().await?;
    document::eval(&clipboard_script(&share_url(&origin, job_id))).await?;
    Ok(())
}

/// One posting on the employer's jobs page with its quick actions and menu.
#[component]
pub fn JobCard(job: Job) -> Element {
    let jobs = use_employer_jobs();
    let flags: FeatureFlags = use_context();
    let toast = use_toast();
    let mut show_edit = use_signal(|| false);
    let mut show_delete = use_signal(|| false);

    let posted = posted_label(job.created_at, Utc::now());
    let view_route = Route::JobDetail { id: job.job_id.clone() };

    let share_id = job.job_id.clone();
    let handle_share = move |_: MouseEvent| {
        let job_id = share_id.clone();
        spawn(async move {
            match copy_share_link(&job_id).await {
                Ok(_) => toast.success("Job link copied to clipboard!".to_string(), ToastOptions::new()),
                Err(e) => {
                    tracing::warn!(error = ?e, "Clipboard write failed");
                    toast.error("Could not copy the link".to_string(), ToastOptions::new());
                }
            }
        });
    };

    let dup_job = job.clone();
    let handle_duplicate = move |_: MouseEvent| {
        let job = dup_job.clone();
        spawn(async move {
            jobs.duplicate_job(job).await;
        });
    };

    let boost_job = job.clone();
    let handle_boost = move |_: MouseEvent| {
        let job = boost_job.clone();
        spawn(async move {
            jobs.toggle_boost(job).await;
        });
    };

    let menu_job = job.clone();
    let on_menu = move |action: String| {
        let job = menu_job.clone();
        match action.as_str() {
            "view" => {
                navigator().push(Route::JobDetail { id: job.job_id });
            }
            "edit" => show_edit.set(true),
            "duplicate" => {
                spawn(async move {
                    jobs.duplicate_job(job).await;
                });
            }
            "boost" => {
                spawn(async move {
                    jobs.toggle_boost(job).await;
                });
            }
            "close" => {
                spawn(async move {
                    jobs.deactivate_job(job.job_id).await;
                });
            }
            "activate" => {
                spawn(async move {
                    jobs.activate_job(job.job_id).await;
                });
            }
            "delete" => show_delete.set(true),
            _ => {}
        }
    };

    let delete_id = job.job_id.clone();
    let handle_delete = move |_: MouseEvent| {
        let job_id = delete_id.clone();
        spawn(async move {
            if jobs.delete_job(job_id).await {
                show_delete.set(false);
            }
        });
    };

    let is_active = job.status == JobStatus::Active;
    let boost_label = if job.is_premium { "Manage Boost" } else { "Boost Job" };

    rsx! {
        Card { class: "job-card",
            CardHeader {
                div { class: "job-card-head",
                    div { class: "job-card-badges",
                        Badge { variant: job_status_variant(job.status), "{job.status.label()}" }
                        if job.is_premium {
                            Badge { variant: BadgeVariant::Premium,
                                Icon { icon: LdZap, width: 12, height: 12 }
                                "Premium Boost"
                            }
                        }
                    }
                    DropdownMenu {
                        DropdownMenuTrigger {
                            span { class: "job-card-menu", "aria-label": "Job actions",
                                Icon { icon: LdEllipsis, width: 18, height: 18 }
                            }
                        }
                        DropdownMenuContent {
                            DropdownMenuItem::<String> {
                                value: "view".to_string(),
                                index: 0usize,
                                on_select: on_menu.clone(),
                                "View Details"
                            }
                            DropdownMenuItem::<String> {
                                value: "edit".to_string(),
                                index: 1usize,
                                on_select: on_menu.clone(),
                                "Edit Job"
                            }
                            DropdownMenuItem::<String> {
                                value: "duplicate".to_string(),
                                index: 2usize,
                                on_select: on_menu.clone(),
                                "Duplicate"
                            }
                            if flags.boosting {
                                DropdownMenuItem::<String> {
                                    value: "boost".to_string(),
                                    index: 3usize,
                                    on_select: on_menu.clone(),
                                    "{boost_label}"
                                }
                            }
                            DropdownMenuSeparator {}
                            if is_active {
                                DropdownMenuItem::<String> {
                                    value: "close".to_string(),
                                    index: 4usize,
                                    on_select: on_menu.clone(),
                                    "Close Job"
                                }
                            } else {
                                DropdownMenuItem::<String> {
                                    value: "activate".to_string(),
                                    index: 4usize,
                                    on_select: on_menu.clone(),
                                    "Activate Job"
                                }
                            }
                            DropdownMenuItem::<String> {
                                value: "delete".to_string(),
                                index: 5usize,
                                on_select: on_menu.clone(),
                                span { class: "danger-text", "Delete" }
                            }
                        }
                    }
                }
                CardTitle { "{job.title}" }
            }

            CardContent {
                div { class: "job-card-cells",
                    JobCell { label: "Type",
                        Icon { icon: LdBriefcase, width: 14, height: 14 }
                        "{job.job_type}"
                    }
                    if let Some(location) = &job.location {
                        JobCell { label: "Location",
                            Icon { icon: LdMapPin, width: 14, height: 14 }
                            "{location}"
                        }
                    }
                    if let Some(salary) = &job.salary_range {
                        JobCell { label: "Salary",
                            Icon { icon: LdDollarSign, width: 14, height: 14 }
                            "{salary}"
                        }
                    }
                    if let Some(level) = &job.experience_level {
                        JobCell { label: "Experience", "{level}" }
                    }
                }
                div { class: "job-card-stats",
                    span {
                        Icon { icon: LdUsers, width: 14, height: 14 }
                        "{applicants_label(job.application_count)}"
                    }
                    span {
                        Icon { icon: LdClock, width: 14, height: 14 }
                        "{posted}"
                    }
                }
            }

            CardFooter {
                div { class: "job-card-actions",
                    Link { to: view_route, class: "vd-button", "data-style": "ghost", "data-size": "sm",
                        Icon { icon: LdEye, width: 14, height: 14 }
                        "View"
                    }
                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, onclick: handle_share,
                        Icon { icon: LdShare2, width: 14, height: 14 }
                        "Share"
                    }
                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, onclick: handle_duplicate,
                        Icon { icon: LdCopy, width: 14, height: 14 }
                        "Duplicate"
                    }
                    if flags.boosting {
                        Button {
                            variant: if job.is_premium { ButtonVariant::Secondary } else { ButtonVariant::Outline },
                            size: ButtonSize::Small,
                            onclick: handle_boost,
                            Icon { icon: LdZap, width: 14, height: 14 }
                            if job.is_premium { "Boosted" } else { "Boost" }
                        }
                    }
                }
            }
        }

        EditJobDialog {
            job: job.clone(),
            open: show_edit(),
            on_close: move |_| show_edit.set(false),
        }

        AlertDialogRoot {
            open: show_delete(),
            on_open_change: move |v| show_delete.set(v),
            AlertDialogContent {
                AlertDialogTitle { "Delete {job.title}?" }
                AlertDialogDescription { "This will permanently delete the job." }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: handle_delete, "Delete" }
                }
            }
        }
    }
}

#[component]
fn JobCell(label: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "job-cell",
            span { class: "job-cell-label", "{label}" }
            span { class: "job-cell-value", {children} }
        }
    }
}
