use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdCalendar, LdFolder, LdLayoutDashboard, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{AccountType, NavLink, EMPLOYER_RAIL};

use crate::routes::Route;

fn rail_for(role: AccountType) -> &'static [NavLink] {
    match role {
        AccountType::Employer => &EMPLOYER_RAIL,
        _ => &[],
    }
}

#[component]
fn RailIcon(href: &'static str) -> Element {
    match href {
        "/employer/dashboard" => rsx! { Icon { icon: LdLayoutDashboard, width: 18, height: 18 } },
        "/employer/jobs" => rsx! { Icon { icon: LdBriefcase, width: 18, height: 18 } },
        "/employer/applicants" => rsx! { Icon { icon: LdUsers, width: 18, height: 18 } },
        "/employer/interviews/schedule" => rsx! { Icon { icon: LdCalendar, width: 18, height: 18 } },
        "/employer/projects" => rsx! { Icon { icon: LdFolder, width: 18, height: 18 } },
        _ => rsx! { Icon { icon: LdTrendingUp, width: 18, height: 18 } },
    }
}

/// Role dashboard shell: a left rail of role links, a title header and the
/// page content.
#[component]
pub fn DashboardLayout(
    #[props(into)] title: String,
    role: AccountType,
    children: Element,
) -> Element {
    let route: Route = use_route();
    let here = route.to_string();

    rsx! {
        div { class: "dashboard-shell",
            aside { class: "dashboard-rail",
                p { class: "dashboard-rail-heading", "{role.label()} Portal" }
                nav {
                    for link in rail_for(role).iter() {
                        Link {
                            key: "{link.href}",
                            to: link.href,
                            class: if here == link.href { "rail-link active" } else { "rail-link" },
                            RailIcon { href: link.href }
                            span { "{link.label}" }
                        }
                    }
                }
            }
            section { class: "dashboard-main",
                header { class: "dashboard-header",
                    h1 { class: "dashboard-title", "{title}" }
                }
                div { class: "dashboard-body", {children} }
            }
        }
    }
}
