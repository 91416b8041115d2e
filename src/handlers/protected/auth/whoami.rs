// handlers/protected/auth/whoami.rs - GET /auth/whoami handler

use axum::Extension;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::middleware::{AdminSession, ApiResponse, ApiResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub email: String,
    pub is_admin: bool,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// GET /auth/whoami - echo the claims of the current admin session
pub async fn whoami_get(Extension(AdminSession(claims)): Extension<AdminSession>) -> ApiResult<SessionInfo> {
    Ok(ApiResponse::success(SessionInfo {
        email: claims.email,
        is_admin: claims.is_admin,
        issued_at: DateTime::from_timestamp(claims.iat, 0),
        expires_at: DateTime::from_timestamp(claims.exp, 0),
    }))
}
