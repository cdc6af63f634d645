use crate::auth::use_auth;
use crate::routes::{push_path, Route};
use dioxus::prelude::*;
use shared_types::{dashboard_path, AccountType, AppError, FeatureFlags, ReturnTo};
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormSelect, Input,
};
use std::collections::HashMap;

/// Account types offered on the signup form. Admins are provisioned, not
/// self-registered.
const SIGNUP_TYPES: [AccountType; 3] = [
    AccountType::Employer,
    AccountType::JobSeeker,
    AccountType::Freelancer,
];

fn parse_signup_type(value: &str) -> AccountType {
    SIGNUP_TYPES
        .into_iter()
        .find(|t| t.as_str() == value)
        .unwrap_or(AccountType::JobSeeker)
}

/// Signup page. Only reachable while the `signup` feature is on.
#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut account_type = use_signal(|| AccountType::JobSeeker);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if let Some(user) = auth.current_user.read().as_ref() {
            push_path(dashboard_path(Some(user)));
        }
    });

    let handle_signup = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::signup(name(), email(), password(), account_type()).await {
            Ok(user) => auth.set_user(user),
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

    if !flags.signup {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./login.css") }
            div { class: "auth-page",
                Card { class: "auth-card",
                    CardHeader {
                        CardTitle { "Signup is closed" }
                        CardDescription { "New accounts are not being accepted right now." }
                    }
                    CardFooter {
                        Link { to: Route::Login { query: ReturnTo::default() }, "Back to sign in" }
                    }
                }
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Hire talent or find your next role" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_signup,
                        div { class: "auth-field",
                            Input {
                                label: "Full name",
                                id: "name",
                                placeholder: "Jordan Blake",
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("name") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
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
                                placeholder: "At least 8 characters",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            FormSelect {
                                label: "I want to",
                                value: account_type().as_str().to_string(),
                                onchange: move |e: FormEvent| account_type.set(parse_signup_type(&e.value())),
                                option { value: "employer", "Hire (Employer)" }
                                option { value: "job_seeker", "Find a job (Job Seeker)" }
                                option { value: "freelancer", "Take on projects (Freelancer)" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "vd-button auth-submit",
                            "data-style": "primary",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login { query: ReturnTo::default() }, "Sign in" }
                    }
                }
            }
        }
    }
}
