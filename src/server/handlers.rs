//! MCP request handlers for the Follow Up Boss server.
//!
//! The tool list is data-driven, so `ServerHandler` is implemented by hand
//! instead of through the `tool_router` macros: `tools/list` reads the
//! registry and `tools/call` forwards to the dispatcher.

use crate::dispatch::Dispatcher;
use crate::models::JsonObject;
use crate::registry::ToolDescriptor;
use futures::FutureExt;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::json;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// The Follow Up Boss MCP server.
#[derive(Clone)]
pub struct FubMcpServer {
    dispatcher: Dispatcher,
}

impl FubMcpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Tools advertised by `tools/list`, in catalog order.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher
            .list_tools()
            .into_iter()
            .map(to_mcp_tool)
            .collect()
    }

    /// Handle one `tools/call`.
    ///
    /// Dispatch failures come back as ordinary results; only a panic inside
    /// dispatch produces `isError`.
    pub async fn call(&self, name: &str, args: JsonObject) -> CallToolResult {
        let outcome = AssertUnwindSafe(self.dispatcher.dispatch(name, args))
            .catch_unwind()
            .await;

        match outcome {
            Ok(result) => CallToolResult::success(vec![Content::text(result.to_pretty_json())]),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!("Tool {} panicked: {}", name, message);
                let text = serde_json::to_string_pretty(&json!({ "error": message }))
                    .unwrap_or_else(|_| r#"{"error": "internal error"}"#.to_string());
                CallToolResult::error(vec![Content::text(text)])
            }
        }
    }
}

impl ServerHandler for FubMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "followupboss-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for Follow Up Boss CRM - exposes people, deals, tasks, appointments, communications and account configuration as tools.".into()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request.arguments.unwrap_or_default();
        Ok(self.call(&request.name, args).await)
    }
}

/// Convert a descriptor into the protocol's tool definition.
pub fn to_mcp_tool(descriptor: &ToolDescriptor) -> Tool {
    Tool::new(
        descriptor.name,
        descriptor.description,
        Arc::new(descriptor.input_schema()),
    )
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Tool execution panicked".to_string()
    }
}
