use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdRefreshCw;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Catches errors thrown while rendering a page (failed server calls
/// propagated with `?`) and shows a recoverable error card.
#[component]
pub fn ApiErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_| rsx! {
                div { class: "error-boundary",
                    Card {
                        CardHeader {
                            CardTitle { "Something went wrong" }
                            CardDescription {
                                "We couldn't load this page. Check your connection and try again."
                            }
                        }
                        CardContent {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    document::eval("window.location.reload()");
                                },
                                Icon { icon: LdRefreshCw, width: 16, height: 16 }
                                "Reload page"
                            }
                        }
                    }
                }
            },
            {children}
        }
    }
}
