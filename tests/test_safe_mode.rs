//! Safe mode: destructive tools are hidden from the listing and refused.

mod mocks;

use followupboss_mcp_server::models::JsonObject;
use followupboss_mcp_server::{Config, Dispatcher, ToolPolicy, ToolRegistry};
use mocks::MockFubClient;
use serde_json::{json, Value};
use std::sync::Arc;

fn safe_dispatcher(client: &MockFubClient) -> Dispatcher {
    let config = Config {
        safe_mode: true,
        ..Config::default()
    };
    Dispatcher::new(
        ToolRegistry::builtin(),
        Arc::new(client.clone()),
        ToolPolicy::from_config(&config),
    )
}

fn args(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        _ => panic!("arguments must be an object"),
    }
}

#[test]
fn test_listing_hides_every_delete_method_tool() {
    let client = MockFubClient::new();
    let dispatcher = safe_dispatcher(&client);

    let listed: Vec<_> = dispatcher.list_tools().iter().map(|d| d.name).collect();
    assert_eq!(listed.len(), 152 - 24);
    assert!(listed.iter().all(|n| !n.starts_with("delete")));
    assert!(!listed.contains(&"inboxAppDeleteParticipant"));
    assert!(!listed.contains(&"inboxAppDeactivate"));

    // Order of what remains is unchanged.
    let expected: Vec<_> = dispatcher
        .registry()
        .entries()
        .iter()
        .filter(|e| !e.route.is_destructive())
        .map(|e| e.name())
        .collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_direct_delete_call_is_refused_without_request() {
    let client = MockFubClient::new();
    let dispatcher = safe_dispatcher(&client);

    for (name, arguments) in [
        ("deletePerson", json!({"id": 42})),
        ("deleteReaction", json!({"refType": "note", "refId": 1})),
        ("inboxAppDeactivate", json!({})),
    ] {
        let result = dispatcher.dispatch(name, args(arguments)).await;
        assert_eq!(
            result.to_value(),
            json!({ "error": format!("Tool {} is disabled in safe mode", name) })
        );
    }
    assert_eq!(client.request_count(), 0);
}

#[tokio::test]
async fn test_non_destructive_tools_still_work() {
    let client = MockFubClient::new();
    let dispatcher = safe_dispatcher(&client);

    let result = dispatcher
        .dispatch("updateNote", args(json!({"id": 1, "body": "edited"})))
        .await;
    assert!(!result.is_failure());
    assert_eq!(client.request_count(), 1);
}

#[test]
fn test_default_policy_lists_everything() {
    let client = MockFubClient::new();
    let dispatcher = Dispatcher::new(
        ToolRegistry::builtin(),
        Arc::new(client),
        ToolPolicy::default(),
    );
    assert_eq!(dispatcher.list_tools().len(), 152);
}
