use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::AccountType;
use std::sync::OnceLock;

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

const DEV_SECRET: &str = "visiondrill-dev-secret-change-me";

/// JWT claims stored in access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    /// Account type in its snake_case wire form.
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// "access" or "refresh".
    #[serde(default)]
    pub typ: String,
}

impl Claims {
    pub fn account_type(&self) -> AccountType {
        AccountType::from_str_or_default(&self.role)
    }
}

/// Hex SHA-256 of a raw token. Only this hash is kept server-side.
pub fn hash_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn jwt_secret() -> &'static str {
    static SECRET: OnceLock<String> = OnceLock::new();
    SECRET.get_or_init(|| match std::env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            tracing::warn!("JWT_SECRET not set, using the development secret");
            DEV_SECRET.to_string()
        }
    })
}

pub fn access_token_expiry_minutes() -> i64 {
    std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60)
}

pub fn refresh_token_expiry_days() -> i64 {
    std::env::var("JWT_REFRESH_TOKEN_EXPIRY_DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(7)
}

fn sign(
    user_id: i64,
    email: &str,
    role: &str,
    typ: &str,
    expires_at: DateTime<Utc>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        iat: Utc::now().timestamp(),
        exp: expires_at.timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
        typ: typ.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
}

pub fn create_access_token(
    user_id: i64,
    email: &str,
    role: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + Duration::minutes(access_token_expiry_minutes());
    sign(user_id, email, role, TOKEN_TYPE_ACCESS, expires_at)
}

pub fn create_refresh_token(
    user_id: i64,
    email: &str,
    role: &str,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + Duration::days(refresh_token_expiry_days());
    let token = sign(user_id, email, role, TOKEN_TYPE_REFRESH, expires_at)?;
    Ok((token, expires_at))
}

fn decode_claims(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// Rejects refresh tokens.
pub fn validate_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let claims = decode_claims(token)?;
    if claims.typ != TOKEN_TYPE_ACCESS {
        return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
    }
    Ok(claims)
}

/// Rejects access tokens.
pub fn validate_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let claims = decode_claims(token)?;
    if claims.typ != TOKEN_TYPE_REFRESH {
        return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trips_claims() {
        let token = create_access_token(42, "employer@visiondrill.dev", "employer").unwrap();
        let claims = validate_access_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "employer@visiondrill.dev");
        assert_eq!(claims.account_type(), AccountType::Employer);
        assert_eq!(claims.typ, TOKEN_TYPE_ACCESS);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn unknown_role_claim_reads_as_job_seeker() {
        let token = create_access_token(7, "x@y.dev", "wizard").unwrap();
        let claims = validate_access_token(&token).unwrap();
        assert_eq!(claims.account_type(), AccountType::JobSeeker);
    }

    #[test]
    fn expired_token_rejected() {
        let past = Utc::now() - Duration::hours(1);
        let token = sign(1, "old@visiondrill.dev", "employer", TOKEN_TYPE_ACCESS, past).unwrap();
        assert!(validate_access_token(&token).is_err());
    }

    #[test]
    fn garbage_rejected() {
        assert!(validate_access_token("not.a.jwt").is_err());
        assert!(validate_access_token("").is_err());
    }

    #[test]
    fn token_types_are_not_interchangeable() {
        let access = create_access_token(1, "a@b.dev", "freelancer").unwrap();
        let (refresh, _) = create_refresh_token(1, "a@b.dev", "freelancer").unwrap();
        assert!(validate_access_token(&refresh).is_err());
        assert!(validate_refresh_token(&access).is_err());
        assert!(validate_refresh_token(&refresh).is_ok());
    }

    #[test]
    fn refresh_outlives_access() {
        let access = create_access_token(1, "a@b.dev", "admin").unwrap();
        let (refresh, expires_at) = create_refresh_token(1, "a@b.dev", "admin").unwrap();
        let access_claims = validate_access_token(&access).unwrap();
        let refresh_claims = validate_refresh_token(&refresh).unwrap();
        assert!(refresh_claims.exp > access_claims.exp);
        assert_eq!(refresh_claims.exp, expires_at.timestamp());
    }

    #[test]
    fn hash_token_is_stable_hex() {
        let a = hash_token("token-aaa");
        assert_eq!(a, hash_token("token-aaa"));
        assert_ne!(a, hash_token("token-bbb"));
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
