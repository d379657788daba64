//! Tool dispatcher.
//!
//! Turns a `(tool name, arguments)` pair into exactly one HTTP request
//! against the Follow Up Boss API and normalizes the outcome into a
//! [`CallResult`]. Application failures (unknown tool, remote errors,
//! transport errors) are ordinary results, never panics.

mod partition;
mod policy;
mod response;

pub use partition::{partition, Partitioned};
pub use policy::ToolPolicy;
pub use response::shape_response;

use crate::client::AsyncFubClient;
use crate::error::{DispatchError, DispatchResult};
use crate::metrics::Metrics;
use crate::models::{ApiRequest, CallResult, JsonObject};
use crate::registry::{ToolDescriptor, ToolEntry, ToolRegistry};
use serde_json::Value;
use std::sync::Arc;

/// Immutable dispatch context shared by all concurrent calls.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    client: Arc<dyn AsyncFubClient>,
    policy: ToolPolicy,
    metrics: Metrics,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry, client: Arc<dyn AsyncFubClient>, policy: ToolPolicy) -> Self {
        Self {
            registry: Arc::new(registry),
            client,
            policy,
            metrics: Metrics::new(),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn policy(&self) -> ToolPolicy {
        self.policy
    }

    /// Tool-call counters.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Descriptors visible under the current policy, in catalog order.
    pub fn list_tools(&self) -> Vec<&ToolDescriptor> {
        self.registry
            .entries()
            .iter()
            .filter(|entry| self.policy.permits(entry))
            .map(|entry| &entry.descriptor)
            .collect()
    }

    /// Resolve a call into the request it would issue, without issuing it.
    pub fn plan(&self, name: &str, args: JsonObject) -> DispatchResult<ApiRequest> {
        let (entry, parts) = self.prepare(name, args)?;
        Ok(parts.into_request(entry.route.method))
    }

    fn prepare(&self, name: &str, args: JsonObject) -> DispatchResult<(&ToolEntry, Partitioned)> {
        let entry = self
            .registry
            .get(name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;
        self.policy.check(entry, &args)?;
        let parts = partition(name, &entry.route, args)?;
        Ok((entry, parts))
    }

    /// Execute one tool call.
    pub async fn dispatch(&self, name: &str, args: JsonObject) -> CallResult {
        let result = CallResult::from(self.try_dispatch(name, args).await);
        self.metrics.record_tool_call(result.is_failure());

        if let Some(failure) = result.failure() {
            tracing::warn!("Tool {} failed: {}", name, failure.error);
        }
        result
    }

    async fn try_dispatch(&self, name: &str, args: JsonObject) -> DispatchResult<Value> {
        let (entry, parts) = self.prepare(name, args)?;
        let Partitioned {
            path,
            path_params,
            query,
            body,
        } = parts;

        let request = ApiRequest {
            method: entry.route.method,
            path,
            query,
            body,
        };
        tracing::debug!("Dispatching {} -> {}", name, request);

        let data = self.client.execute(request).await?;
        Ok(shape_response(entry.route.response, data, &path_params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FubApiError, FubApiResult};
    use crate::models::HttpMethod;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Answers every request with a fixed payload and records what it saw.
    struct FixedClient {
        reply: FubApiResult<Value>,
        seen: Mutex<Vec<ApiRequest>>,
    }

    impl FixedClient {
        fn new(reply: FubApiResult<Value>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl AsyncFubClient for FixedClient {
        async fn execute(&self, request: ApiRequest) -> FubApiResult<Value> {
            self.seen.lock().unwrap().push(request);
            match &self.reply {
                Ok(value) => Ok(value.clone()),
                Err(FubApiError::Status {
                    status,
                    message,
                    details,
                }) => Err(FubApiError::Status {
                    status: *status,
                    message: message.clone(),
                    details: details.clone(),
                }),
                Err(other) => Err(FubApiError::Transport(other.to_string())),
            }
        }
    }

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("arguments must be an object"),
        }
    }

    fn dispatcher(client: Arc<FixedClient>, policy: ToolPolicy) -> Dispatcher {
        Dispatcher::new(ToolRegistry::builtin(), client, policy)
    }

    #[tokio::test]
    async fn test_unknown_tool_issues_no_request() {
        let client = FixedClient::new(Ok(Value::Null));
        let dispatcher = dispatcher(client.clone(), ToolPolicy::default());

        let result = dispatcher.dispatch("nope", JsonObject::new()).await;
        assert_eq!(result.to_value(), json!({"error": "Unknown tool: nope"}));
        assert!(client.seen.lock().unwrap().is_empty());
        assert_eq!(dispatcher.metrics().tool_failures_total(), 1);
    }

    #[tokio::test]
    async fn test_delete_acknowledgement() {
        let client = FixedClient::new(Ok(Value::Null));
        let dispatcher = dispatcher(client.clone(), ToolPolicy::default());

        let result = dispatcher.dispatch("deletePerson", args(json!({"id": 42}))).await;
        assert_eq!(
            result.to_value(),
            json!({"success": true, "message": "Person 42 deleted"})
        );

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, HttpMethod::Delete);
        assert_eq!(seen[0].path, "/people/42");
    }

    #[tokio::test]
    async fn test_remote_status_error_becomes_failure() {
        let client = FixedClient::new(Err(FubApiError::Status {
            status: 404,
            message: "Not found".to_string(),
            details: json!({"errorMessage": "Not found"}),
        }));
        let dispatcher = dispatcher(client, ToolPolicy::default());

        let result = dispatcher.dispatch("getPerson", args(json!({"id": 999}))).await;
        let failure = result.failure().unwrap();
        assert_eq!(failure.error, "Not found");
        assert_eq!(failure.status, Some(404));
    }

    #[tokio::test]
    async fn test_safe_mode_hides_and_blocks_deletes() {
        let client = FixedClient::new(Ok(Value::Null));
        let policy = ToolPolicy {
            safe_mode: true,
            ..ToolPolicy::default()
        };
        let dispatcher = dispatcher(client.clone(), policy);

        assert!(dispatcher
            .list_tools()
            .iter()
            .all(|d| !d.name.starts_with("delete") && d.name != "inboxAppDeactivate"));

        let result = dispatcher.dispatch("deleteNote", args(json!({"id": 1}))).await;
        assert_eq!(
            result.failure().map(|f| f.error.as_str()),
            Some("Tool deleteNote is disabled in safe mode")
        );
        assert!(client.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_plan_without_network() {
        let dispatcher = dispatcher(FixedClient::new(Ok(Value::Null)), ToolPolicy::default());
        let request = dispatcher
            .plan("getPerson", args(json!({"id": 7, "fields": "allFields"})))
            .unwrap();
        assert_eq!(request.to_string(), "GET /people/7?fields=allFields");
    }
}
