//! Call policy: safe mode and optional argument validation.

use crate::config::Config;
use crate::error::{DispatchError, DispatchResult};
use crate::models::JsonObject;
use crate::registry::ToolEntry;

/// Which calls the dispatcher accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolPolicy {
    /// Hide and refuse every tool that issues a DELETE
    pub safe_mode: bool,
    /// Refuse calls missing schema-required arguments
    pub validate_arguments: bool,
}

impl ToolPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            safe_mode: config.safe_mode,
            validate_arguments: config.validate_arguments,
        }
    }

    /// Whether the tool is advertised and callable under this policy.
    pub fn permits(&self, entry: &ToolEntry) -> bool {
        !(self.safe_mode && entry.route.is_destructive())
    }

    /// Gate a call before any request is built.
    pub fn check(&self, entry: &ToolEntry, args: &JsonObject) -> DispatchResult<()> {
        if !self.permits(entry) {
            return Err(DispatchError::SafeModeBlocked(entry.name().to_string()));
        }

        if self.validate_arguments {
            let missing: Vec<String> = entry
                .descriptor
                .required_params()
                .filter(|name| args.get(*name).map_or(true, |v| v.is_null()))
                .map(str::to_string)
                .collect();
            if !missing.is_empty() {
                return Err(DispatchError::MissingArguments {
                    tool: entry.name().to_string(),
                    missing,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RouteBinding;
    use serde_json::json;

    fn create_note() -> ToolEntry {
        ToolEntry::new("createNote", "Create a note", RouteBinding::create("/notes"))
            .number("personId", "Person ID")
            .required()
            .string("body", "Body")
            .required()
    }

    fn delete_note() -> ToolEntry {
        ToolEntry::new(
            "deleteNote",
            "Delete a note",
            RouteBinding::delete("/notes/{id}", "Note {id} deleted"),
        )
        .number("id", "Note ID")
        .required()
    }

    #[test]
    fn test_default_policy_passes_everything_through() {
        let policy = ToolPolicy::default();
        assert!(policy.permits(&delete_note()));
        assert!(policy.check(&create_note(), &JsonObject::new()).is_ok());
    }

    #[test]
    fn test_safe_mode_blocks_deletes_only() {
        let policy = ToolPolicy {
            safe_mode: true,
            ..ToolPolicy::default()
        };
        assert!(!policy.permits(&delete_note()));
        assert!(policy.permits(&create_note()));

        let err = policy.check(&delete_note(), &JsonObject::new()).unwrap_err();
        assert_eq!(err.to_string(), "Tool deleteNote is disabled in safe mode");
    }

    #[test]
    fn test_validation_lists_missing_and_null_arguments() {
        let policy = ToolPolicy {
            validate_arguments: true,
            ..ToolPolicy::default()
        };
        let args = match json!({"body": null}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let err = policy.check(&create_note(), &args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required argument(s) for createNote: personId, body"
        );
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            safe_mode: true,
            ..Config::default()
        };
        let policy = ToolPolicy::from_config(&config);
        assert!(policy.safe_mode);
        assert!(!policy.validate_arguments);
    }
}
