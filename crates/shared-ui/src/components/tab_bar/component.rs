use dioxus::prelude::*;

/// One tab in a [`TabBar`].
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    /// Rendered as a pill after the label when present.
    pub count: Option<usize>,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Controlled tab strip. The caller owns the active id and filters its own
/// content; the bar only reports clicks.
#[component]
pub fn TabBar(tabs: Vec<TabItem>, active: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "vd-tab-bar", role: "tablist",
            for tab in tabs {
                button {
                    key: "{tab.id}",
                    r#type: "button",
                    role: "tab",
                    class: "vd-tab",
                    "aria-selected": tab.id == active,
                    "data-state": if tab.id == active { "active" } else { "inactive" },
                    onclick: {
                        let id = tab.id.clone();
                        move |_| on_change.call(id.clone())
                    },
                    "{tab.label}"
                    if let Some(count) = tab.count {
                        span { class: "vd-tab-count", "{count}" }
                    }
                }
            }
        }
    }
}
