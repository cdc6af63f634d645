use dioxus::prelude::*;
use shared_types::{AccountType, AuthUser};

/// Global authentication state.
///
/// `loading` stays `true` until the session check in the root layout has
/// resolved, so guards can tell "not signed in" apart from "not known yet".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
    pub loading: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.current_user.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn has_role(&self, account_type: AccountType) -> bool {
        self.current_user
            .read()
            .as_ref()
            .is_some_and(|u| u.has_role(account_type))
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
        self.loading.set(false);
    }

    /// Record the outcome of the initial session check.
    pub fn resolve(&mut self, user: Option<AuthUser>) {
        self.current_user.set(user);
        self.loading.set(false);
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    /// Sign out: revoke the session server-side and forget the user.
    /// Callers navigate away afterwards.
    pub fn logout(&mut self) {
        spawn(async move {
            if let Err(e) = server::api::logout().await {
                tracing::warn!(error = %e, "Logout request failed");
            }
        });
        self.clear_auth();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
