//! Error types for the Follow Up Boss MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every dispatch-time error is eventually flattened into a
//! [`ToolFailure`](crate::models::ToolFailure) at the dispatcher boundary.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the Follow Up Boss API.
#[derive(Error, Debug)]
pub enum FubApiError {
    /// The API answered with a non-2xx status code.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        /// Raw error payload returned by the API (JSON, or the body text).
        details: Value,
    },

    /// DNS, connection, TLS or timeout failure before a response arrived.
    #[error("{0}")]
    Transport(String),

    /// The response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The blocking HTTP task could not be joined.
    #[error("Task join error: {0}")]
    Join(String),
}

impl FubApiError {
    /// HTTP status code, when the failure came from an API response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FubApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while resolving a tool call into an HTTP request.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No tool with this name is registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The tool deletes data and safe mode is active.
    #[error("Tool {0} is disabled in safe mode")]
    SafeModeBlocked(String),

    /// A path placeholder had no usable argument value.
    #[error("Missing required path parameter '{param}' for tool {tool}")]
    MissingPathParam { tool: String, param: String },

    /// Local argument validation is enabled and required arguments are absent.
    #[error("Missing required argument(s) for {tool}: {}", missing.join(", "))]
    MissingArguments { tool: String, missing: Vec<String> },

    /// The remote call itself failed.
    #[error(transparent)]
    Api(#[from] FubApiError),
}

/// Defects in a tool catalog, detected by `ToolRegistry::validate`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Two entries share a tool name.
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    /// A route consumes an argument the schema does not declare.
    #[error("Tool {tool} routes undeclared parameter '{param}'")]
    UndeclaredRouteParam { tool: String, param: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with FubApiError
pub type FubApiResult<T> = Result<T, FubApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = DispatchError::UnknownTool("doesNotExist".to_string());
        assert_eq!(err.to_string(), "Unknown tool: doesNotExist");

        let err = ConfigError::MissingVar("FUB_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: FUB_API_KEY"
        );

        let err = DispatchError::SafeModeBlocked("deletePerson".to_string());
        assert_eq!(err.to_string(), "Tool deletePerson is disabled in safe mode");
    }

    #[test]
    fn test_status_error_displays_remote_message() {
        let err = FubApiError::Status {
            status: 404,
            message: "Not found".to_string(),
            details: json!({"errorMessage": "Not found"}),
        };
        assert_eq!(err.to_string(), "Not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(FubApiError::Transport("boom".into()).status(), None);
    }

    #[test]
    fn test_missing_arguments_lists_names() {
        let err = DispatchError::MissingArguments {
            tool: "createNote".to_string(),
            missing: vec!["personId".to_string(), "body".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required argument(s) for createNote: personId, body"
        );
    }

    #[test]
    fn test_api_error_is_transparent() {
        let err: DispatchError = FubApiError::Transport("connection refused".into()).into();
        assert_eq!(err.to_string(), "connection refused");
    }
}
