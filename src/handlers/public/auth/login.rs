// handlers/public/auth/login.rs - POST /auth/login handler

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::JsonBody;
use crate::auth::{issue_token, validate_admin_credentials};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    /// Seconds until the token expires
    pub expires_in: u64,
}

/**
 * POST /auth/login - Exchange the admin credential for a session token
 *
 * Expected Input:
 * ```json
 * { "email": "string", "password": "string" }
 * ```
 *
 * Expected Output (Success):
 * ```json
 * {
 *   "success": true,
 *   "data": { "token": "eyJhbGciOiJIUzI1NiI...", "email": "admin@...", "expiresIn": 604800 }
 * }
 * ```
 *
 * Wrong credentials answer 401. Attempts are not counted or throttled.
 */
pub async fn login_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let (email, password) = match (payload.email, payload.password) {
        (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
            (email.trim().to_string(), password)
        }
        _ => return Err(ApiError::bad_request("Email and password are required")),
    };

    if !validate_admin_credentials(&state.config.admin, &email, &password) {
        tracing::warn!("Failed admin login attempt for '{}'", email);
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = issue_token(&email, &state.config.security).map_err(|e| {
        tracing::error!("Failed to issue session token: {}", e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    tracing::info!("Admin '{}' logged in", email);

    Ok(ApiResponse::success(LoginResponse {
        token,
        email,
        expires_in: state.config.security.jwt_expiry_hours.saturating_mul(3600),
    }))
}
