use async_trait::async_trait;
use followupboss_mcp_server::client::AsyncFubClient;
use followupboss_mcp_server::error::{FubApiError, FubApiResult};
use followupboss_mcp_server::models::{ApiRequest, HttpMethod};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock transport that records every request and answers from canned replies.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockFubClient {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    replies: Arc<Mutex<HashMap<(HttpMethod, String), Value>>>,
    failure: Arc<Mutex<Option<(u16, Value)>>>,
}

#[allow(dead_code)]
impl MockFubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `body`. Unmatched requests get `null`.
    pub fn reply(&self, method: HttpMethod, path: &str, body: Value) {
        let mut replies = self.replies.lock().unwrap();
        replies.insert((method, path.to_string()), body);
    }

    /// Fail every request with an HTTP status and error payload.
    pub fn fail_with_status(&self, status: u16, details: Value) {
        *self.failure.lock().unwrap() = Some((status, details));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn reset(&self) {
        self.requests.lock().unwrap().clear();
    }
}

#[async_trait]
impl AsyncFubClient for MockFubClient {
    async fn execute(&self, request: ApiRequest) -> FubApiResult<Value> {
        let key = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);

        if let Some((status, details)) = self.failure.lock().unwrap().clone() {
            let message = details
                .get("errorMessage")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status code {}", status));
            return Err(FubApiError::Status {
                status,
                message,
                details,
            });
        }

        let replies = self.replies.lock().unwrap();
        Ok(replies.get(&key).cloned().unwrap_or(Value::Null))
    }
}
