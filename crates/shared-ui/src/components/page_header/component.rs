use dioxus::prelude::*;

/// Title row at the top of a page, with actions pushed to the right.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "vd-page-header",
            {children}
        }
    }
}

/// Title plus an optional subtitle line.
#[component]
pub fn PageTitle(#[props(into, default)] subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "vd-page-heading",
            h1 { class: "vd-page-title", {children} }
            if !subtitle.is_empty() {
                p { class: "vd-page-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "vd-page-actions", {children} }
    }
}
