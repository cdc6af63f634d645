// Server-only auth helpers for server functions.
// These are shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::{AccountType, AppError};

use crate::auth::{cookies, jwt};
use crate::error_convert::AppErrorExt;

/// Claims of the caller, if signed in. Reads what the auth middleware
/// validated, falling back to parsing the token from the request.
pub(crate) fn current_claims() -> Option<jwt::Claims> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Some(claims.clone());
    }

    let token = cookies::extract_access_token(&parts.headers)?;
    jwt::validate_access_token(&token).ok()
}

/// Extract and validate the caller's identity from the current request.
pub(crate) fn require_auth() -> Result<jwt::Claims, ServerFnError> {
    current_claims()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}

/// Require the caller to hold exactly `account_type`.
pub(crate) fn require_account(account_type: AccountType) -> Result<jwt::Claims, ServerFnError> {
    let claims = require_auth()?;
    if claims.account_type() != account_type {
        return Err(AppError::forbidden(format!("{} account required", account_type.label()))
            .into_server_fn_error());
    }
    Ok(claims)
}

pub(crate) fn require_employer() -> Result<jwt::Claims, ServerFnError> {
    require_account(AccountType::Employer)
}
