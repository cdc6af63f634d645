use crate::auth::use_auth;
use crate::routes::{push_path, Route};
use dioxus::prelude::*;
use shared_types::{AppError, FeatureFlags, ReturnTo};
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};
use std::collections::HashMap;

/// `/login`: sign-in for every account type.
#[component]
pub fn Login(query: ReturnTo) -> Element {
    rsx! {
        LoginForm {
            query,
            title: "Sign In",
            description: "Enter your credentials to access your account",
        }
    }
}

/// `/admin/login`: same form under the portal heading. Guards send
/// anonymous visitors here.
#[component]
pub fn AdminLogin(query: ReturnTo) -> Element {
    rsx! {
        LoginForm {
            query,
            title: "Portal Sign In",
            description: "Sign in to continue to your dashboard",
        }
    }
}

/// Email/password form. After a successful login, navigates to the
/// `returnUrl` when it is a local path, otherwise to the user's dashboard.
#[component]
fn LoginForm(query: ReturnTo, title: &'static str, description: &'static str) -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Store the target in a signal so closures can read it without moving ownership
    let return_to = use_signal(move || query);

    // Signed in (now or already): go on to the target.
    use_effect(move || {
        if let Some(user) = auth.current_user.read().as_ref() {
            push_path(return_to.read().target(Some(user)));
        }
    });

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                // The effect above navigates once the user is set.
                tracing::info!(user_id = user.id, "Signed in");
                auth.set_user(user);
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{description}" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                label: "Email",
                                input_type: "email",
                                id: "email",
                                placeholder: "you@company.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Password",
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "vd-button auth-submit",
                            "data-style": "primary",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                if flags.signup {
                    CardFooter {
                        p { class: "auth-link",
                            "Don't have an account? "
                            Link { to: Route::Signup {}, "Create one" }
                        }
                    }
                }
            }
        }
    }
}
