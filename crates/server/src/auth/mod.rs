pub mod cookies;
pub mod extractors;
pub mod jwt;
pub mod middleware;
pub mod password;

use shared_types::AppError;

use crate::store::{MarketplaceStore, UserRecord};

/// A freshly minted access/refresh pair.
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Mint tokens for `user` and record the refresh token's hash in the store.
pub async fn issue_tokens(
    store: &MarketplaceStore,
    user: &UserRecord,
) -> Result<IssuedTokens, AppError> {
    let role = user.account_type.as_str();
    let access_token = jwt::create_access_token(user.id, &user.email, role)
        .map_err(|e| AppError::internal(format!("Token error: {e}")))?;
    let (refresh_token, expires_at) = jwt::create_refresh_token(user.id, &user.email, role)
        .map_err(|e| AppError::internal(format!("Token error: {e}")))?;

    crate::repo::session::store_refresh(store, user.id, &jwt::hash_token(&refresh_token), expires_at)
        .await;

    Ok(IssuedTokens {
        access_token,
        refresh_token,
    })
}

