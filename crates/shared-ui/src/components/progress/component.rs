use dioxus::prelude::*;

/// Horizontal progress bar. `value` is a percentage and is clamped to 0..=100.
///
/// `tone` sets the fill color (`emerald`, `blue`, `amber`).
#[component]
pub fn ProgressBar(
    value: f64,
    #[props(into, default = "blue".to_string())] tone: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let value = value.clamp(0.0, 100.0);
    let base = vec![
        Attribute::new("class", "vd-progress", None, false),
        Attribute::new("data-tone", tone, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{value}",
            ..merged,
            div { class: "vd-progress-indicator", style: "width: {value}%" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_clamped_into_range() {
        let html = dioxus_ssr::render_element(rsx! {
            ProgressBar { value: 140.0, tone: "emerald" }
        });
        assert!(html.contains("width: 100%"));
        assert!(html.contains("data-tone=\"emerald\""));
    }
}
