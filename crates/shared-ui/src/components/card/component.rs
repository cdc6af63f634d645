use dioxus::prelude::*;

/// Bordered surface for grouping page content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "vd-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "vd-card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "vd-card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "vd-card-description", {children} }
    }
}

/// Right-aligned slot in a CardHeader for buttons.
#[component]
pub fn CardAction(children: Element) -> Element {
    rsx! {
        div { class: "vd-card-action", {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "vd-card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "vd-card-footer", {children} }
    }
}

/// Compact metric card: a label, a big value, and an optional hint line.
///
/// `icon` renders in a tinted square on the right; `tone` picks the tint
/// (`blue`, `emerald`, `amber`, `violet`, `red`).
#[component]
pub fn StatCard(
    #[props(into)] label: String,
    #[props(into)] value: String,
    #[props(into, default)] hint: String,
    #[props(into, default = "blue".to_string())] tone: String,
    icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "vd-card vd-stat-card",
            div { class: "vd-stat-body",
                p { class: "vd-stat-label", "{label}" }
                p { class: "vd-stat-value", "{value}" }
                if !hint.is_empty() {
                    p { class: "vd-stat-hint", "{hint}" }
                }
            }
            if let Some(icon) = icon {
                div { class: "vd-stat-icon", "data-tone": tone, {icon} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_card_shows_label_value_and_hint() {
        let html = dioxus_ssr::render_element(rsx! {
            StatCard { label: "Total Budget", value: "$0", hint: "Across all projects" }
        });
        assert!(html.contains("Total Budget"));
        assert!(html.contains("$0"));
        assert!(html.contains("Across all projects"));
    }

    #[test]
    fn stat_card_omits_empty_hint() {
        let html = dioxus_ssr::render_element(rsx! {
            StatCard { label: "Active Projects", value: "0" }
        });
        assert!(!html.contains("vd-stat-hint"));
    }
}
