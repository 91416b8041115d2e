use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{verify_token, Claims};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Verified admin claims, injected into request extensions by `admin_gate`
#[derive(Clone, Debug)]
pub struct AdminSession(pub Claims);

/// Outcome of a gate check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Authorization {
    pub valid: bool,
    pub claims: Option<Claims>,
}

impl Authorization {
    fn granted(claims: Claims) -> Self {
        Self {
            valid: true,
            claims: Some(claims),
        }
    }

    fn denied() -> Self {
        Self {
            valid: false,
            claims: None,
        }
    }
}

/// Decide whether a request carries the configured admin's session.
///
/// The token must verify, carry `isAdmin: true`, and name exactly the
/// configured admin email.
pub fn authorize(headers: &HeaderMap, config: &AppConfig) -> Authorization {
    let Some(token) = extract_bearer_token(headers) else {
        return Authorization::denied();
    };

    match verify_token(token, &config.security) {
        Some(claims) if claims.is_admin && claims.email == config.admin.email => {
            Authorization::granted(claims)
        }
        _ => Authorization::denied(),
    }
}

/// Middleware placed in front of every admin-only route
pub async fn admin_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = authorize(request.headers(), &state.config);

    match authorization.claims {
        Some(claims) if authorization.valid => {
            request.extensions_mut().insert(AdminSession(claims));
            Ok(next.run(request).await)
        }
        _ => {
            tracing::debug!("Admin gate denied {} {}", request.method(), request.uri().path());
            Err(ApiError::unauthorized("Unauthorized"))
        }
    }
}

/// Extract the token from `Authorization: Bearer <token>`
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{issue_token, sign_claims};
    use axum::http::HeaderValue;
    use chrono::Utc;

    fn config() -> AppConfig {
        let mut config = AppConfig::development();
        config.admin.email = "owner@studio.io".to_string();
        config.security.jwt_secret = "gate-secret".to_string();
        config
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn signed(claims: &Claims, config: &AppConfig) -> String {
        sign_claims(claims, &config.security).unwrap()
    }

    #[test]
    fn valid_admin_token_is_granted() {
        let config = config();
        let token = issue_token("owner@studio.io", &config.security).unwrap();

        let result = authorize(&headers(&format!("Bearer {token}")), &config);
        assert!(result.valid);
        assert_eq!(result.claims.unwrap().email, "owner@studio.io");
    }

    #[test]
    fn missing_header_is_denied() {
        assert_eq!(authorize(&HeaderMap::new(), &config()), Authorization::denied());
    }

    #[test]
    fn non_bearer_scheme_is_denied() {
        let config = config();
        let token = issue_token("owner@studio.io", &config.security).unwrap();
        assert!(!authorize(&headers(&format!("Token {token}")), &config).valid);
        assert!(!authorize(&headers(&format!("bearer {token}")), &config).valid);
        assert!(!authorize(&headers("Bearer "), &config).valid);
    }

    #[test]
    fn foreign_secret_is_denied() {
        let config = config();
        let mut other = config.clone();
        other.security.jwt_secret = "someone-else".to_string();
        let token = issue_token("owner@studio.io", &other.security).unwrap();

        assert!(!authorize(&headers(&format!("Bearer {token}")), &config).valid);
    }

    #[test]
    fn non_admin_claim_is_denied() {
        let config = config();
        let mut claims = Claims::admin("owner@studio.io", &config.security).unwrap();
        claims.is_admin = false;
        let token = signed(&claims, &config);

        assert!(!authorize(&headers(&format!("Bearer {token}")), &config).valid);
    }

    #[test]
    fn other_identity_is_denied() {
        let config = config();
        let token = issue_token("intruder@studio.io", &config.security).unwrap();
        assert!(!authorize(&headers(&format!("Bearer {token}")), &config).valid);
    }

    #[test]
    fn expired_token_is_denied() {
        let config = config();
        let now = Utc::now().timestamp();
        let claims = Claims {
            email: "owner@studio.io".to_string(),
            is_admin: true,
            exp: now - 10,
            iat: now - 7 * 24 * 3600,
        };
        let token = signed(&claims, &config);

        assert!(!authorize(&headers(&format!("Bearer {token}")), &config).valid);
    }
}
