use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Thin HTTP client for the Showcase API. Every call returns the parsed JSON
/// envelope, or an error carrying the server's `{ "error": ... }` message.
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            token,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> anyhow::Result<Value> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> anyhow::Result<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> anyhow::Result<Value> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<Value> {
        self.send(Method::DELETE, path, None).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> anyhow::Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!("{} {}", method, url);
        let response = request
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Request to {} failed: {}", url, e))?;

        let status = response.status();
        let payload: Value = response.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            Ok(payload)
        } else {
            Err(anyhow::anyhow!(describe_failure(status, &payload)))
        }
    }
}

fn describe_failure(status: StatusCode, payload: &Value) -> String {
    let reason = payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"));

    match status {
        StatusCode::UNAUTHORIZED => format!("{} (run `showcase auth login` first?)", reason),
        _ => format!("HTTP {}: {}", status.as_u16(), reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_uses_server_error_message() {
        let message = describe_failure(StatusCode::NOT_FOUND, &json!({ "error": "Project not found" }));
        assert_eq!(message, "HTTP 404: Project not found");
    }

    #[test]
    fn failure_without_body_falls_back_to_reason() {
        let message = describe_failure(StatusCode::METHOD_NOT_ALLOWED, &Value::Null);
        assert_eq!(message, "HTTP 405: Method Not Allowed");
    }

    #[test]
    fn unauthorized_hints_at_login() {
        let message = describe_failure(StatusCode::UNAUTHORIZED, &json!({ "error": "Unauthorized" }));
        assert!(message.starts_with("Unauthorized"));
        assert!(message.contains("auth login"));
    }

    #[test]
    fn client_keeps_the_resolved_server() {
        let client = ApiClient::new("http://api.test", None).unwrap();
        assert_eq!(client.base_url(), "http://api.test");
    }
}
