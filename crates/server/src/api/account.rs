use dioxus::prelude::*;
use shared_types::{AccountType, AuthUser, FeatureFlags};

#[cfg(feature = "server")]
use crate::db::get_store;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Sign in with email and password. Sets HTTP-only auth cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, issue_tokens, password as pw};
    use crate::repo;
    use shared_types::{AppError, LoginRequest};

    let req = LoginRequest {
        email: email.trim().to_string(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let store = get_store();
    let user = repo::user::find_by_email(store, &req.email)
        .await
        .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let valid = pw::verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    if !valid {
        tracing::info!("Failed login attempt");
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    let tokens = issue_tokens(store, &user)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    cookies::schedule_auth_cookies(&tokens.access_token, &tokens.refresh_token);

    tracing::info!(user_id = user.id, "User logged in");
    Ok(user.to_auth_user())
}

/// Create an account and sign it in. Requires the `signup` feature.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn signup(
    name: String,
    email: String,
    password: String,
    account_type: AccountType,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, issue_tokens, password as pw};
    use crate::repo;
    use shared_types::{AppError, SignupRequest};

    if !crate::config::feature_flags().signup {
        return Err(AppError::forbidden("Signup is disabled").into_server_fn_error());
    }

    let req = SignupRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password,
        account_type,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let hash = pw::hash_password(&req.password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let store = get_store();
    let user = repo::user::create(store, &req, hash)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    let tokens = issue_tokens(store, &user)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    cookies::schedule_auth_cookies(&tokens.access_token, &tokens.refresh_token);

    Ok(user.to_auth_user())
}

/// Revoke the caller's refresh sessions and clear the auth cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;
    use crate::repo;

    if let Some(claims) = current_claims() {
        let revoked = repo::session::revoke_all(get_store(), claims.sub).await;
        tracing::info!(user_id = claims.sub, revoked, "User logged out");
    }

    cookies::schedule_clear_cookies();
    Ok(())
}

/// The signed-in user, or `None`. Clears stale cookies when the account
/// behind a valid token no longer exists.
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::cookies;
    use crate::repo;

    let Some(claims) = current_claims() else {
        return Ok(None);
    };

    match repo::user::get(get_store(), claims.sub).await {
        Ok(user) => Ok(Some(user.to_auth_user())),
        Err(_) => {
            tracing::warn!(user_id = claims.sub, "Token for unknown user, clearing cookies");
            cookies::schedule_clear_cookies();
            Ok(None)
        }
    }
}

/// Get the current feature flags. No auth required; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(*crate::config::feature_flags())
}
