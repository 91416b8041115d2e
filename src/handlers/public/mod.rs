// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Service information, health, and token acquisition.

pub mod auth;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Showcase API",
            "version": version,
            "endpoints": {
                "auth": "/auth/login (public), /auth/whoami (admin)",
                "projects": "/projects[/:id] (GET public, writes admin)",
                "clients": "/clients[/:id] (GET public, writes admin)",
                "contact": "/contact (POST public, GET admin)",
                "newsletter": "/newsletter (POST public, GET admin)",
                "health": "/health (public)",
            }
        }
    }))
}

/// GET /health - pings the document store
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let backend = state.store.backend_name();

    match state.store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "store": backend
                }
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": "store unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now,
                        "store": backend
                    }
                })),
            )
        }
    }
}
