use axum::{extract::State, Json};
use std::sync::Arc;

use shared_types::{AppError, AuthResponse, AuthUser, LoginRequest};

use crate::auth::{extractors::AuthRequired, jwt, password};
use crate::error_convert::ValidateRequest;
use crate::repo;
use crate::store::MarketplaceStore;

/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "auth"
)]
pub async fn login(
    State(store): State<Arc<MarketplaceStore>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    body.validate_request()?;

    let user = repo::user::find_by_email(&store, &body.email)
        .await
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

    let valid = password::verify_password(&body.password, &user.password_hash)
        .map_err(|e| AppError::internal(e.to_string()))?;
    if !valid {
        tracing::info!(email = %body.email, "Failed REST login");
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    let token = jwt::create_access_token(user.id, &user.email, user.account_type.as_str())
        .map_err(|e| AppError::internal(format!("Token error: {e}")))?;

    Ok(Json(AuthResponse {
        token,
        user: user.to_auth_user(),
    }))
}

/// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = AuthUser),
        (status = 401, description = "Not signed in", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn me(
    State(store): State<Arc<MarketplaceStore>>,
    AuthRequired(claims): AuthRequired,
) -> Result<Json<AuthUser>, AppError> {
    let user = repo::user::get(&store, claims.sub).await?;
    Ok(Json(user.to_auth_user()))
}
