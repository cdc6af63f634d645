use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AccountType, AppError};

use super::jwt::Claims;

/// Requires a valid access token. 401 otherwise.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Optional claims. Never fails.
pub struct MaybeAuth(pub Option<Claims>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuth(parts.extensions.get::<Claims>().cloned()))
    }
}

pub const ADMIN: u8 = 0;
pub const EMPLOYER: u8 = 1;
pub const JOB_SEEKER: u8 = 2;
pub const FREELANCER: u8 = 3;

/// Account type for an `AccountRequired` const parameter.
pub fn required_account_type(role: u8) -> AccountType {
    match role {
        ADMIN => AccountType::Admin,
        EMPLOYER => AccountType::Employer,
        FREELANCER => AccountType::Freelancer,
        _ => AccountType::JobSeeker,
    }
}

/// Requires authentication AND exactly one account type.
///
/// 401 without a token, 403 for any other account type. Account types do
/// not form a hierarchy, so an admin does not pass an employer check.
pub struct AccountRequired<const ROLE: u8>(pub Claims);

impl<const ROLE: u8, S: Send + Sync> FromRequestParts<S> for AccountRequired<ROLE> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let required = required_account_type(ROLE);
        if claims.account_type() != required {
            return Err(AppError::forbidden(format!(
                "{} account required",
                required.label()
            )));
        }

        Ok(AccountRequired(claims))
    }
}

pub type EmployerRequired = AccountRequired<EMPLOYER>;
pub type AdminRequired = AccountRequired<ADMIN>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(role: Option<&str>) -> Parts {
        let (mut parts, _) = Request::new(()).into_parts();
        if let Some(role) = role {
            parts.extensions.insert(Claims {
                sub: 1,
                email: "t@visiondrill.dev".into(),
                role: role.into(),
                exp: i64::MAX,
                iat: 0,
                jti: None,
                typ: "access".into(),
            });
        }
        parts
    }

    #[tokio::test]
    async fn missing_claims_is_unauthorized() {
        let mut parts = parts_with(None);
        let err = EmployerRequired::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.status_code_u16(), 401);
    }

    #[tokio::test]
    async fn wrong_account_type_is_forbidden() {
        let mut parts = parts_with(Some("admin"));
        let err = EmployerRequired::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.status_code_u16(), 403);
        assert_eq!(err.message, "Employer account required");
    }

    #[tokio::test]
    async fn matching_account_type_passes() {
        let mut parts = parts_with(Some("employer"));
        let AccountRequired(claims) = EmployerRequired::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(claims.sub, 1);
    }

    #[tokio::test]
    async fn maybe_auth_never_fails() {
        let mut parts = parts_with(None);
        let MaybeAuth(claims) = MaybeAuth::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(claims.is_none());
    }
}
