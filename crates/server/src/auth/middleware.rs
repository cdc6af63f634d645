use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::{self, hash_token, validate_access_token, validate_refresh_token};
use crate::repo;
use crate::store::MarketplaceStore;

/// Permissive auth middleware.
///
/// Puts valid access-token `Claims` into request extensions, silently
/// rotates an expired session when a live refresh cookie is present, and
/// applies whatever cookie change a server function scheduled. It never
/// rejects a request; handlers decide authorization.
pub async fn auth_middleware(
    State(store): State<Arc<MarketplaceStore>>,
    mut req: Request,
    next: Next,
) -> Response {
    let headers = req.headers().clone();
    let mut refreshed: Option<(String, String)> = None;

    let claims = cookies::extract_access_token(&headers)
        .and_then(|token| validate_access_token(&token).ok());

    match claims {
        Some(claims) => {
            req.extensions_mut().insert(claims);
        }
        None => {
            if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
                refreshed = try_transparent_refresh(&store, &refresh_token, &mut req).await;
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some((access, refresh)) = refreshed {
        cookies::set_auth_cookies(response.headers_mut(), &access, &refresh);
    }

    match cookie_slot.take() {
        Some(PendingCookieAction::Set {
            access_token,
            refresh_token,
        }) => cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token),
        Some(PendingCookieAction::Clear) => cookies::clear_auth_cookies(response.headers_mut()),
        None => {}
    }

    response
}

/// Rotate the refresh token and attach fresh claims to the request.
async fn try_transparent_refresh(
    store: &MarketplaceStore,
    refresh_token: &str,
    req: &mut Request,
) -> Option<(String, String)> {
    let claims = validate_refresh_token(refresh_token).ok()?;

    if !repo::session::consume_refresh(store, claims.sub, &hash_token(refresh_token)).await {
        tracing::debug!(user_id = claims.sub, "Refresh token unknown or revoked");
        return None;
    }

    // Role comes from the store so an account change takes effect on rotation.
    let user = repo::user::get(store, claims.sub).await.ok()?;
    let role = user.account_type.as_str();
    let new_access = jwt::create_access_token(user.id, &user.email, role).ok()?;
    let (new_refresh, expires_at) = jwt::create_refresh_token(user.id, &user.email, role).ok()?;
    repo::session::store_refresh(store, user.id, &hash_token(&new_refresh), expires_at).await;

    let new_claims = validate_access_token(&new_access).ok()?;
    req.extensions_mut().insert(new_claims);
    tracing::debug!(user_id = user.id, "Session refreshed");

    Some((new_access, new_refresh))
}
