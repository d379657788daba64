//! Data models shared by the client, dispatcher and protocol layer.
//!
//! This module contains the outbound request description handed to the HTTP
//! client and the normalized result of a tool call.

pub mod request;
pub mod result;

pub use request::{ApiRequest, HttpMethod};
pub use result::{CallResult, ToolFailure};

/// JSON object carrying a tool call's arguments.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
