pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::database::models::{Client, Contact, Newsletter, Project};
use crate::handlers::collection::{create, delete, list, update};
use crate::handlers::{protected, public};
use crate::middleware::admin_gate;
use crate::state::AppState;

/// Build the full HTTP application around a ready `AppState`.
pub fn app(state: AppState) -> Router {
    let api = &state.config.api;

    let mut router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .merge(auth_routes(&state))
        .merge(content_routes(&state))
        .merge(inbox_routes(&state))
        .layer(DefaultBodyLimit::max(api.max_request_size_bytes));

    if state.config.security.enable_cors {
        router = router.layer(cors_layer(&state.config.security));
    }
    if api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

/// Put the admin gate in front of a set of method handlers.
fn admin_only(state: &AppState, methods: MethodRouter<AppState>) -> MethodRouter<AppState> {
    methods.route_layer(from_fn_with_state(state.clone(), admin_gate))
}

fn auth_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(public::auth::login_post))
        .route(
            "/auth/whoami",
            admin_only(state, get(protected::auth::whoami_get)),
        )
}

/// Projects and clients: anyone reads, only the admin writes.
fn content_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(list::<Project>).merge(admin_only(state, post(create::<Project>))),
        )
        .route(
            "/projects/:id",
            admin_only(state, axum::routing::put(update::<Project>).delete(delete::<Project>)),
        )
        .route(
            "/clients",
            get(list::<Client>).merge(admin_only(state, post(create::<Client>))),
        )
        .route(
            "/clients/:id",
            admin_only(state, axum::routing::put(update::<Client>).delete(delete::<Client>)),
        )
}

/// Contact submissions and newsletter signups: anyone writes, only the admin reads.
fn inbox_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/contact",
            post(create::<Contact>).merge(admin_only(state, get(list::<Contact>))),
        )
        .route(
            "/newsletter",
            post(create::<Newsletter>).merge(admin_only(state, get(list::<Newsletter>))),
        )
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if security.cors_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::auth::issue_token;
    use crate::config::AppConfig;
    use crate::database::MemoryDocumentStore;

    fn test_app() -> (Router, AppConfig) {
        let mut config = AppConfig::development();
        config.api.enable_request_logging = false;
        let state = AppState::new(config.clone(), Arc::new(MemoryDocumentStore::new()));
        (app(state), config)
    }

    async fn call(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn public_reads_need_no_token() {
        let (router, _) = test_app();
        let request = Request::get("/clients").body(Body::empty()).unwrap();

        let (status, body) = call(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn admin_routes_reject_anonymous_requests() {
        for (method, path) in [
            (Method::POST, "/projects"),
            (Method::GET, "/contact"),
            (Method::GET, "/newsletter"),
            (Method::GET, "/auth/whoami"),
        ] {
            let (router, _) = test_app();
            let request = Request::builder()
                .method(method.clone())
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap();

            let (status, body) = call(router, request).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, path);
            assert_eq!(body["error"], "Unauthorized");
        }
    }

    #[tokio::test]
    async fn gate_runs_before_id_validation() {
        let (router, _) = test_app();
        let request = Request::delete("/projects/not-a-uuid").body(Body::empty()).unwrap();

        let (status, _) = call(router, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_token_opens_the_gate() {
        let (router, config) = test_app();
        let token = issue_token(&config.admin.email, &config.security).unwrap();
        let request = Request::get("/newsletter")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let (status, body) = call(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn unsupported_verbs_are_405() {
        let (router, _) = test_app();
        let request = Request::delete("/newsletter").body(Body::empty()).unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
