use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdSearch, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{dashboard_link, FeatureFlags};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton};

use crate::auth::use_auth;
use crate::routes::jobs::PublicJobCard;
use crate::routes::Route;

/// How many postings the landing page previews.
const FEATURED_COUNT: usize = 6;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let user = auth.user();
    let dashboard = dashboard_link(user.as_ref());

    let latest = use_resource(|| async move { server::api::list_public_jobs(String::new()).await });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        document::Link { rel: "stylesheet", href: asset!("./jobs/jobs.css") }

        section { class: "hero",
            h1 { class: "hero-title", "Hire faster. Work on what matters." }
            p { class: "hero-subtitle",
                "Visiondrill connects employers with job seekers and freelancers in one place."
            }
            div { class: "hero-actions",
                Link { to: Route::JobBoard {}, class: "vd-button", "data-style": "primary",
                    Icon { icon: LdSearch, width: 16, height: 16 }
                    "Browse jobs"
                }
                match (dashboard, flags.signup) {
                    (Some(link), _) => rsx! {
                        Link { to: link.href, class: "vd-button", "data-style": "outline", "{link.label}" }
                    },
                    (None, true) => rsx! {
                        Link { to: Route::Signup {}, class: "vd-button", "data-style": "outline", "Post a job" }
                    },
                    (None, false) => rsx! {},
                }
            }
        }

        section { class: "home-pillars",
            Card {
                CardHeader {
                    Icon { icon: LdBriefcase, width: 20, height: 20 }
                    CardTitle { "For employers" }
                    CardDescription { "Post roles, track applicants and run freelance projects." }
                }
            }
            Card {
                CardHeader {
                    Icon { icon: LdUsers, width: 20, height: 20 }
                    CardTitle { "For talent" }
                    CardDescription { "Apply in one click and follow every application." }
                }
            }
        }

        section { class: "home-latest",
            h2 { "Latest openings" }
            match &*latest.read() {
                Some(Ok(jobs)) if !jobs.is_empty() => rsx! {
                    div { class: "job-board-list",
                        for job in jobs.iter().take(FEATURED_COUNT) {
                            PublicJobCard { key: "{job.job_id}", job: job.clone() }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    Card {
                        CardContent { p { "No openings right now." } }
                    }
                },
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "Could not load latest jobs");
                    rsx! {}
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
