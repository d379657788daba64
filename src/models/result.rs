//! Normalized tool call results.

use crate::error::{DispatchError, FubApiError};
use serde::Serialize;
use serde_json::Value;

/// The uniform failure shape returned to the calling agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolFailure {
    /// Human-readable message
    pub error: String,

    /// Remote HTTP status code, when the API answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Raw remote error payload, for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ToolFailure {
    /// A failure carrying only a message.
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            details: None,
        }
    }
}

impl From<DispatchError> for ToolFailure {
    fn from(error: DispatchError) -> Self {
        match error {
            DispatchError::Api(FubApiError::Status {
                status,
                message,
                details,
            }) => Self {
                error: message,
                status: Some(status),
                details: Some(details),
            },
            other => Self::message(other.to_string()),
        }
    }
}

/// Outcome of a single dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CallResult {
    /// Remote payload, possibly re-keyed
    Success(Value),
    /// Uniform error object
    Failure(ToolFailure),
}

impl CallResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, CallResult::Failure(_))
    }

    /// The failure, if this result is one.
    pub fn failure(&self) -> Option<&ToolFailure> {
        match self {
            CallResult::Failure(failure) => Some(failure),
            CallResult::Success(_) => None,
        }
    }

    /// Serialize to a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            CallResult::Success(value) => value.clone(),
            CallResult::Failure(failure) => {
                serde_json::to_value(failure).unwrap_or_else(|_| Value::Null)
            }
        }
    }

    /// Serialize to the pretty-printed text embedded in a tool response.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!(r#"{{"error": "Failed to serialize result: {}"}}"#, e)
        })
    }
}

impl From<Result<Value, DispatchError>> for CallResult {
    fn from(result: Result<Value, DispatchError>) -> Self {
        match result {
            Ok(value) => CallResult::Success(value),
            Err(error) => CallResult::Failure(error.into()),
        }
    }
}
