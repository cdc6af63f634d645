use dioxus::prelude::*;

/// Pulsing placeholder block while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "vd-skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Centered spinning ring with an optional caption.
#[component]
pub fn Spinner(#[props(into, default)] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "vd-spinner-wrap", role: "status",
            div { class: "vd-spinner" }
            if !label.is_empty() {
                span { class: "vd-spinner-label", "{label}" }
            }
        }
    }
}
