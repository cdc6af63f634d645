use dioxus::prelude::*;

/// Centered placeholder for lists with nothing to show.
#[component]
pub fn EmptyState(
    #[props(into)] title: String,
    #[props(into, default)] description: String,
    icon: Option<Element>,
    /// Call-to-action rendered under the description.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "vd-empty-state",
            if let Some(icon) = icon {
                div { class: "vd-empty-icon", {icon} }
            }
            h3 { class: "vd-empty-title", "{title}" }
            if !description.is_empty() {
                p { class: "vd-empty-description", "{description}" }
            }
            div { class: "vd-empty-actions", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_description_and_action() {
        let html = dioxus_ssr::render_element(rsx! {
            EmptyState {
                title: "No jobs found",
                description: "Try adjusting your search terms",
                button { "Create Job" }
            }
        });
        assert!(html.contains("No jobs found"));
        assert!(html.contains("Try adjusting your search terms"));
        assert!(html.contains("Create Job"));
    }
}
