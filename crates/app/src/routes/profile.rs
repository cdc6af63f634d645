use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_types::{dashboard_link, initials, ReturnTo};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Button, ButtonVariant, Card,
    CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Spinner,
};

use crate::auth::use_auth;
use crate::format_helpers::format_date_human;
use crate::routes::Route;

/// Account details for whoever is signed in.
#[component]
pub fn Profile() -> Element {
    let mut auth = use_auth();

    if *auth.loading.read() {
        return rsx! {
            div { class: "guard-pending", Spinner { label: "Loading profile..." } }
        };
    }

    let Some(user) = auth.user() else {
        return rsx! {
            div { class: "container",
                Card {
                    CardHeader {
                        CardTitle { "Sign in" }
                        CardDescription { "Sign in to see your account details." }
                    }
                    CardFooter {
                        Link {
                            to: Route::Login { query: ReturnTo::new("/profile") },
                            class: "vd-button",
                            "data-style": "primary",
                            "Sign in"
                        }
                    }
                }
            }
        };
    };

    let dashboard = dashboard_link(Some(&user));

    rsx! {
        div { class: "container profile-page",
            Card {
                CardHeader {
                    Avatar {
                        if let Some(url) = user.avatar_url.clone() {
                            AvatarImage { src: url }
                        }
                        AvatarFallback { "{initials(&user.name)}" }
                    }
                    CardTitle { "{user.name}" }
                    CardDescription { "{user.email}" }
                }
                CardContent {
                    dl { class: "profile-details",
                        div {
                            dt { "Account type" }
                            dd {
                                Badge { variant: BadgeVariant::Secondary, "{user.account_type.label()}" }
                            }
                        }
                        div {
                            dt { "Member since" }
                            dd { "{format_date_human(user.created_at)}" }
                        }
                    }
                }
                CardFooter {
                    if let Some(link) = dashboard {
                        Link { to: link.href, class: "vd-button", "data-style": "outline", "{link.label}" }
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| {
                            auth.logout();
                            navigator().push(Route::Home {});
                        },
                        Icon { icon: LdLogOut, width: 16, height: 16 }
                        "Log out"
                    }
                }
            }
        }
    }
}
