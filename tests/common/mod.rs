#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use showcase_api::config::AppConfig;
use showcase_api::database::{CollectionSpec, DocumentStore, Fields, MemoryDocumentStore, RawDocument, StoreError};
use showcase_api::state::AppState;

pub const ADMIN_EMAIL: &str = "owner@studio.test";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const JWT_SECRET: &str = "integration-test-secret";

/// A server bound to its own port with its own store. Each test gets a fresh one,
/// so nothing leaks between tests and they can run in parallel.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_store(Arc::new(MemoryDocumentStore::new())).await
    }

    pub async fn spawn_with_store(store: Arc<dyn DocumentStore>) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;

        let app = showcase_api::app(AppState::new(test_config(), store));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            port,
            base_url,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in as the configured admin and return the bearer token
    pub async fn admin_token(&self) -> Result<String> {
        let res = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "admin login failed: {}", res.status());

        let body: Value = res.json().await?;
        body["data"]["token"]
            .as_str()
            .map(str::to_string)
            .context("login response had no token")
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        let mut req = self.client.get(self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        read(req.send().await?).await
    }

    pub async fn post(&self, path: &str, body: &Value, token: Option<&str>) -> Result<(StatusCode, Value)> {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        read(req.send().await?).await
    }

    pub async fn put(&self, path: &str, body: &Value, token: Option<&str>) -> Result<(StatusCode, Value)> {
        let mut req = self.client.put(self.url(path)).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        read(req.send().await?).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        let mut req = self.client.delete(self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        read(req.send().await?).await
    }
}

async fn read(res: reqwest::Response) -> Result<(StatusCode, Value)> {
    let status = res.status();
    let text = res.text().await?;
    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).with_context(|| format!("response was not JSON: {}", text))?
    };
    Ok((status, body))
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.admin.email = ADMIN_EMAIL.to_string();
    config.admin.password = ADMIN_PASSWORD.to_string();
    config.security.jwt_secret = JWT_SECRET.to_string();
    config.api.enable_request_logging = false;
    config
}

pub fn project_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{} description", title),
        "image": "https://cdn.studio.test/projects/cover.png"
    })
}

pub fn client_body(name: &str) -> Value {
    json!({
        "name": name,
        "designation": "CEO, Northwind",
        "description": "They shipped on time.",
        "image": "https://cdn.studio.test/clients/portrait.jpg"
    })
}

/// Store whose every operation fails, for exercising the 500 path
pub struct FailingStore;

impl FailingStore {
    fn error() -> StoreError {
        StoreError::Unavailable("connection refused".to_string())
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn find_all(&self, _collection: &CollectionSpec) -> Result<Vec<RawDocument>, StoreError> {
        Err(Self::error())
    }

    async fn insert(&self, _collection: &CollectionSpec, _fields: Fields) -> Result<RawDocument, StoreError> {
        Err(Self::error())
    }

    async fn update(
        &self,
        _collection: &CollectionSpec,
        _id: Uuid,
        _patch: Fields,
    ) -> Result<Option<RawDocument>, StoreError> {
        Err(Self::error())
    }

    async fn delete(&self, _collection: &CollectionSpec, _id: Uuid) -> Result<Option<RawDocument>, StoreError> {
        Err(Self::error())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(Self::error())
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
