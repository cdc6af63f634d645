use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;

/// Flex row holding a search input, filters and action buttons.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "vd-search-bar",
            {children}
        }
    }
}

/// Text input with a leading magnifier icon.
#[component]
pub fn SearchInput(
    #[props(default)] value: String,
    #[props(into, default)] placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "vd-search-input",
            span { class: "vd-search-icon",
                Icon { icon: LdSearch, width: 16, height: 16 }
            }
            input {
                r#type: "search",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
