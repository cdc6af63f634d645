use dioxus::prelude::*;
use shared_types::dashboard_link;

use crate::auth::use_auth;
use crate::routes::Route;

/// Catch-all for paths no route matches.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let path = format!("/{}", route.join("/"));
    let dashboard = dashboard_link(auth.user().as_ref());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                    "."
                }
                div { class: "not-found-links",
                    Link { to: Route::Home {}, class: "not-found-link", "Back to Home" }
                    if let Some(link) = dashboard {
                        Link { to: link.href, class: "not-found-link", "{link.label}" }
                    }
                }
            }
        }
    }
}
