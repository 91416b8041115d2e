use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{AdminConfig, SecurityConfig};

/// Session claim carried inside every admin token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn admin(email: impl Into<String>, security: &SecurityConfig) -> Result<Self, JwtError> {
        let hours = security.jwt_expiry_hours;
        let now = Utc::now();
        let exp = i64::try_from(hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(JwtError::InvalidExpiry(hours))?;

        Ok(Self {
            email: email.into(),
            is_admin: true,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        })
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Token lifetime of {0} hours is out of range")]
    InvalidExpiry(u64),
}

/// Plain equality against the configured admin pair. There is no lockout or
/// attempt counting here.
pub fn validate_admin_credentials(admin: &AdminConfig, email: &str, password: &str) -> bool {
    !admin.email.is_empty() && email == admin.email && password == admin.password
}

/// Sign a fresh admin token for `email`.
pub fn issue_token(email: &str, security: &SecurityConfig) -> Result<String, JwtError> {
    sign_claims(&Claims::admin(email, security)?, security)
}

pub fn sign_claims(claims: &Claims, security: &SecurityConfig) -> Result<String, JwtError> {
    if security.jwt_secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(security.jwt_secret.as_bytes());
    Ok(encode(&Header::new(Algorithm::HS256), claims, &encoding_key)?)
}

/// Decode and check a token. Every failure collapses to `None`; the reason is
/// only logged.
pub fn verify_token(token: &str, security: &SecurityConfig) -> Option<Claims> {
    if security.jwt_secret.is_empty() {
        return None;
    }

    let decoding_key = DecodingKey::from_secret(security.jwt_secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    match decode::<Claims>(token, &decoding_key, &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            tracing::debug!("Rejected session token: {}", e);
            None
        }
    }
}
