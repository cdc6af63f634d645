use dioxus::prelude::*;
use shared_types::{guard_decision, AccountType, GuardDecision};
use shared_ui::{use_toast, Spinner, ToastOptions};

use crate::auth::use_auth;
use crate::routes::{push_path, Route};

/// Renders `children` only for a signed-in user of `role`.
///
/// Anonymous visitors are sent to the admin login with a `returnUrl` back
/// here; signed-in users of another role go home. Both get a toast.
#[component]
pub fn RoleGuard(role: AccountType, #[props(into)] area: String, children: Element) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let route: Route = use_route();
    let here = route.to_string();

    let decision = use_memo(move || {
        guard_decision(
            *auth.loading.read(),
            auth.current_user.read().as_ref(),
            role,
            &here,
        )
    });

    let area_for_effect = area.clone();
    use_effect(move || match decision() {
        GuardDecision::RequireLogin { redirect } => {
            toast.error(
                format!("Authentication Required: Please log in to access the {area_for_effect}"),
                ToastOptions::new(),
            );
            push_path(&redirect);
        }
        GuardDecision::Deny { redirect } => {
            toast.error(
                format!(
                    "Access Denied: You need {} permissions to access this page",
                    role.as_str()
                ),
                ToastOptions::new(),
            );
            push_path(&redirect);
        }
        GuardDecision::Pending | GuardDecision::Allow => {}
    });

    match decision() {
        GuardDecision::Allow => rsx! { {children} },
        GuardDecision::Pending => rsx! {
            div { class: "guard-pending",
                Spinner { label: "Checking access..." }
            }
        },
        _ => rsx! {},
    }
}
