use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdCompass, LdLogOut, LdMenu, LdMoon, LdSearch, LdSun, LdUser, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{
    dashboard_link, initials, FeatureFlags, NavLink, NavbarVariant, ReturnTo, EMPLOYER_NAV,
    JOB_SEEKER_NAV,
};
use shared_ui::theme::{Theme, ThemeState};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Button, ButtonSize, ButtonVariant, DropdownMenu,
    DropdownMenuContent, DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator,
    DropdownMenuTrigger,
};

use crate::auth::use_auth;
use crate::routes::Route;

/// Employer center links, minus the boosting page when boosting is off.
fn employer_links(flags: &FeatureFlags) -> Vec<NavLink> {
    EMPLOYER_NAV
        .iter()
        .copied()
        .filter(|l| flags.boosting || l.href != "/employer/boosting-services")
        .collect()
}

#[component]
fn NavIcon(href: &'static str) -> Element {
    match href {
        "/" => rsx! { Icon { icon: LdCompass, width: 18, height: 18 } },
        "/jobs" => rsx! { Icon { icon: LdSearch, width: 18, height: 18 } },
        _ => rsx! { Icon { icon: LdUser, width: 18, height: 18 } },
    }
}

/// Top navigation bar. The layout depends on who is signed in.
#[component]
pub fn Navbar() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut theme: ThemeState = use_context();
    let route: Route = use_route();
    let here = route.to_string();
    let mut menu_open = use_signal(|| false);

    let user = auth.user();
    let variant = NavbarVariant::for_user(user.as_ref());
    let dashboard = dashboard_link(user.as_ref());
    let center_links: Vec<NavLink> = match variant {
        NavbarVariant::Employer => employer_links(&flags),
        _ => Vec::new(),
    };

    let link_class = move |href: &str| {
        if here == href {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let mut sign_out = move || {
        auth.logout();
        menu_open.set(false);
        navigator().push(Route::Home {});
    };

    rsx! {
        header { class: "navbar",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "navbar-brand",
                    Icon { icon: LdBriefcase, width: 22, height: 22 }
                    span { "Visiondrill" }
                }

                nav { class: "navbar-center",
                    for link in center_links.iter() {
                        Link { key: "{link.href}", to: link.href, class: link_class(link.href), "{link.label}" }
                    }
                    if variant == NavbarVariant::JobSeeker {
                        for link in JOB_SEEKER_NAV.iter() {
                            Link { key: "{link.href}", to: link.href, class: link_class(link.href),
                                NavIcon { href: link.href }
                                span { class: "sr-only", "{link.label}" }
                            }
                        }
                    }
                }

                div { class: "navbar-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        onclick: move |_| theme.toggle(),
                        if *theme.theme.read() == Theme::Dark {
                            Icon { icon: LdSun, width: 18, height: 18 }
                        } else {
                            Icon { icon: LdMoon, width: 18, height: 18 }
                        }
                    }

                    match variant {
                        NavbarVariant::Anonymous => rsx! {
                            Link { to: Route::Login { query: ReturnTo::default() }, class: "nav-button ghost", "Log in" }
                            if flags.signup {
                                Link { to: Route::Signup {}, class: "nav-button primary", "Sign up" }
                            }
                        },
                        NavbarVariant::JobSeeker => rsx! {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| sign_out(),
                                Icon { icon: LdLogOut, width: 16, height: 16 }
                                "Logout"
                            }
                        },
                        NavbarVariant::Employer | NavbarVariant::Member => rsx! {
                            if let Some(link) = dashboard {
                                Link { to: link.href, class: link_class(link.href), "{link.label}" }
                            }
                            AccountMenu { on_sign_out: move |_| sign_out() }
                        },
                    }

                    button {
                        class: "navbar-toggle",
                        r#type: "button",
                        "aria-label": "Toggle menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() {
                            Icon { icon: LdX, width: 20, height: 20 }
                        } else {
                            Icon { icon: LdMenu, width: 20, height: 20 }
                        }
                    }
                }
            }

            if menu_open() {
                MobileMenu {
                    variant,
                    links: center_links.clone(),
                    dashboard,
                    signup_enabled: flags.signup,
                    on_navigate: move |_| menu_open.set(false),
                    on_sign_out: move |_| sign_out(),
                }
            }
        }
    }
}

/// Avatar dropdown: "My Account", Profile and Log out.
#[component]
fn AccountMenu(on_sign_out: EventHandler<()>) -> Element {
    let auth = use_auth();
    let user = auth.user();
    let name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let avatar_url = user.as_ref().and_then(|u| u.avatar_url.clone());

    rsx! {
        DropdownMenu {
            DropdownMenuTrigger {
                span { class: "account-trigger",
                    Avatar {
                        if let Some(url) = avatar_url {
                            AvatarImage { src: url }
                        }
                        AvatarFallback { "{initials(&name)}" }
                    }
                    span { class: "account-name", "{name}" }
                }
            }
            DropdownMenuContent {
                DropdownMenuLabel { "My Account" }
                DropdownMenuSeparator {}
                DropdownMenuItem::<String> {
                    value: "profile".to_string(),
                    index: 0usize,
                    on_select: move |_: String| {
                        navigator().push(Route::Profile {});
                    },
                    Icon { icon: LdUser, width: 16, height: 16 }
                    "Profile"
                }
                DropdownMenuSeparator {}
                DropdownMenuItem::<String> {
                    value: "logout".to_string(),
                    index: 1usize,
                    on_select: move |_: String| on_sign_out.call(()),
                    Icon { icon: LdLogOut, width: 16, height: 16 }
                    "Log out"
                }
            }
        }
    }
}

/// The same links stacked for narrow screens.
#[component]
fn MobileMenu(
    variant: NavbarVariant,
    links: Vec<NavLink>,
    dashboard: Option<NavLink>,
    signup_enabled: bool,
    on_navigate: EventHandler<()>,
    on_sign_out: EventHandler<()>,
) -> Element {
    let candidate_links: &[NavLink] = if variant == NavbarVariant::JobSeeker {
        &JOB_SEEKER_NAV
    } else {
        &[]
    };

    rsx! {
        nav { class: "mobile-menu",
            for link in links.iter().chain(candidate_links.iter()).chain(dashboard.iter()) {
                Link {
                    key: "{link.href}",
                    to: link.href,
                    class: "mobile-link",
                    onclick: move |_| on_navigate.call(()),
                    "{link.label}"
                }
            }
            match variant {
                NavbarVariant::Anonymous => rsx! {
                    Link {
                        to: Route::Login { query: ReturnTo::default() },
                        class: "mobile-link",
                        onclick: move |_| on_navigate.call(()),
                        "Log in"
                    }
                    if signup_enabled {
                        Link {
                            to: Route::Signup {},
                            class: "mobile-link",
                            onclick: move |_| on_navigate.call(()),
                            "Sign up"
                        }
                    }
                },
                _ => rsx! {
                    Link {
                        to: Route::Profile {},
                        class: "mobile-link",
                        onclick: move |_| on_navigate.call(()),
                        "Profile"
                    }
                    button {
                        class: "mobile-link",
                        r#type: "button",
                        onclick: move |_| on_sign_out.call(()),
                        "Log out"
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boosting_link_follows_the_flag() {
        let off = FeatureFlags::default();
        let on = FeatureFlags {
            boosting: true,
            ..FeatureFlags::default()
        };
        assert_eq!(employer_links(&off).len(), EMPLOYER_NAV.len() - 1);
        assert!(employer_links(&on)
            .iter()
            .any(|l| l.label == "Boosting Services"));
    }
}
