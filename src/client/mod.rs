//! HTTP client for interacting with the Follow Up Boss API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication, JSON content
//! negotiation and error mapping; it knows nothing about individual tools.

mod async_wrapper;
pub use async_wrapper::{AsyncFubClient, AsyncFubClientImpl};

use crate::config::Config;
use crate::error::{FubApiError, FubApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::ApiRequest;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the Follow Up Boss API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct FubClient {
    /// Base URL for the API
    base_url: String,

    /// Precomputed `Authorization` header value (API key as Basic username)
    auth_header: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl FubClient {
    /// Create a new FubClient from configuration.
    pub fn new(config: &Config) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Self {
            base_url: config.fub_base_url.clone(),
            auth_header: basic_auth_header(&config.fub_api_key),
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Create a FubClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            auth_header: basic_auth_header(&api_key),
            agent: Arc::new(ureq::AgentBuilder::new().build()),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Issue one request and return the decoded response body.
    ///
    /// An empty body decodes to `null`; a body that is not JSON is returned
    /// as a JSON string.
    pub fn execute(&self, request: &ApiRequest) -> FubApiResult<Value> {
        let url = self.build_url(&request.path);
        tracing::debug!("{} {}", request.method, url);

        let mut call = self
            .agent
            .request(request.method.as_str(), &url)
            .set("Authorization", &self.auth_header)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json");

        for (key, value) in &request.query {
            call = call.query(key, value);
        }

        let timer = HttpTimer::new(self.metrics.clone());
        let result = match &request.body {
            Some(body) => call.send_json(body),
            None => call.call(),
        };

        match result {
            Ok(response) => {
                timer.complete();
                tracing::debug!(
                    "{} {} - Success (status: {})",
                    request.method,
                    url,
                    response.status()
                );
                let raw = read_body(response)?;
                Ok(decode_body(&raw))
            }
            Err(e) => {
                timer.complete_with_error();
                let error = map_error(e);
                tracing::error!("{} {} - Error: {}", request.method, url, error);
                Err(error)
            }
        }
    }
}

/// Encode the API key as an HTTP Basic credential with an empty password.
fn basic_auth_header(api_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:", api_key)))
}

/// Read the whole response body, without `into_string`'s 10 MB cap.
fn read_body(response: ureq::Response) -> FubApiResult<String> {
    let mut raw = String::new();
    response
        .into_reader()
        .read_to_string(&mut raw)
        .map_err(|e| FubApiError::Body(e.to_string()))?;
    Ok(raw)
}

/// Decode a response body: JSON when possible, otherwise the raw text.
fn decode_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Pull a human-readable message out of a Follow Up Boss error payload.
///
/// Checks `errorMessage`, then `error.errorMessage`.
fn remote_error_message(details: &Value) -> Option<String> {
    let direct = details.get("errorMessage").and_then(Value::as_str);
    let nested = details
        .get("error")
        .and_then(|e| e.get("errorMessage"))
        .and_then(Value::as_str);

    direct
        .filter(|m| !m.is_empty())
        .or(nested.filter(|m| !m.is_empty()))
        .map(str::to_string)
}

/// Map a ureq error to a FubApiError.
fn map_error(error: ureq::Error) -> FubApiError {
    match error {
        ureq::Error::Status(status, response) => {
            let raw = read_body(response).unwrap_or_default();
            let details = decode_body(&raw);
            let message = remote_error_message(&details)
                .unwrap_or_else(|| format!("Request failed with status code {}", status));

            FubApiError::Status {
                status,
                message,
                details,
            }
        }
        ureq::Error::Transport(transport) => FubApiError::Transport(transport.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_url() {
        let client = FubClient::with_base_url(
            "https://api.followupboss.com/v1".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(
            client.build_url("/people"),
            "https://api.followupboss.com/v1/people"
        );
        assert_eq!(
            client.build_url("people/7"),
            "https://api.followupboss.com/v1/people/7"
        );

        let client_with_slash = FubClient::with_base_url(
            "https://api.followupboss.com/v1/".to_string(),
            "test-key".to_string(),
        );
        assert_eq!(
            client_with_slash.build_url("/people"),
            "https://api.followupboss.com/v1/people"
        );
    }

    #[test]
    fn test_basic_auth_uses_blank_password() {
        // base64("fka_key:")
        assert_eq!(basic_auth_header("fka_key"), "Basic ZmthX2tleTo=");
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            fub_api_key: "test-key-123".to_string(),
            request_timeout: Some(5),
            ..Config::default()
        };

        let client = FubClient::new(&config);
        assert_eq!(client.base_url, "https://api.followupboss.com/v1");
        assert_eq!(client.auth_header, basic_auth_header("test-key-123"));
        assert_eq!(client.metrics().http_requests_total(), 0);
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(""), Value::Null);
        assert_eq!(decode_body("  \n"), Value::Null);
        assert_eq!(decode_body(r#"{"id": 1}"#), json!({"id": 1}));
        assert_eq!(decode_body("Bad Gateway"), json!("Bad Gateway"));
    }

    #[test]
    fn test_remote_error_message_precedence() {
        assert_eq!(
            remote_error_message(&json!({"errorMessage": "Not found"})),
            Some("Not found".to_string())
        );
        assert_eq!(
            remote_error_message(&json!({"error": {"errorMessage": "Invalid stage"}})),
            Some("Invalid stage".to_string())
        );
        assert_eq!(
            remote_error_message(&json!({
                "errorMessage": "",
                "error": {"errorMessage": "Nested wins over empty"}
            })),
            Some("Nested wins over empty".to_string())
        );
        assert_eq!(remote_error_message(&json!("Bad Gateway")), None);
        assert_eq!(remote_error_message(&Value::Null), None);
    }
}
