//! Splitting a tool's arguments into path, query and body.

use crate::error::{DispatchError, DispatchResult};
use crate::models::{ApiRequest, HttpMethod, JsonObject};
use crate::registry::{Remainder, RouteBinding};
use serde_json::Value;
use std::collections::HashMap;

/// A call's arguments after routing.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitioned {
    /// Rendered path with encoded placeholder values
    pub path: String,
    /// Raw values consumed by the path, for acknowledgement messages
    pub path_params: JsonObject,
    /// Query pairs, sorted by key
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Partitioned {
    pub fn into_request(self, method: HttpMethod) -> ApiRequest {
        ApiRequest {
            method,
            path: self.path,
            query: self.query,
            body: self.body,
        }
    }
}

/// Text of a scalar as it appears in a path segment or message.
///
/// Whole floats print without a fraction, so `42.0` renders as `42`.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if is_whole(f) => (f as i64).to_string(),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

fn is_whole(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Text of a value as it appears in a query string.
///
/// Arrays become comma-joined scalars; objects become compact JSON.
pub(crate) fn query_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(","),
        other => scalar_text(other),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Apply `route` to `args`.
///
/// Fails only when a path placeholder has no usable value, in which case no
/// request must be issued.
pub fn partition(tool: &str, route: &RouteBinding, mut args: JsonObject) -> DispatchResult<Partitioned> {
    let mut path_params = JsonObject::new();
    let mut segments = HashMap::with_capacity(route.path.placeholders().len());

    for &name in route.path.placeholders() {
        match args.remove(name) {
            Some(value) if !is_blank(&value) => {
                segments.insert(name, urlencoding::encode(&scalar_text(&value)).into_owned());
                path_params.insert(name.to_string(), value);
            }
            _ => {
                return Err(DispatchError::MissingPathParam {
                    tool: tool.to_string(),
                    param: name.to_string(),
                })
            }
        }
    }
    let path = route.path.fill(|name| segments.get(name).cloned());

    let mut query = Vec::new();
    for &flag in &route.query_flags {
        if let Some(value) = args.remove(flag).filter(|v| !v.is_null()) {
            query.push((flag.to_string(), query_text(&value)));
        }
    }

    let mut body = None;
    match route.remainder {
        Remainder::Query => query.extend(
            args.into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| {
                    let text = query_text(&value);
                    (key, text)
                }),
        ),
        Remainder::Body => body = Some(Value::Object(args)),
        Remainder::Discard => {}
    }
    query.sort_by(|a, b| a.0.cmp(&b.0));

    if body.is_none() && matches!(route.method, HttpMethod::Post | HttpMethod::Put) {
        body = Some(Value::Object(JsonObject::new()));
    }

    Ok(Partitioned {
        path,
        path_params,
        query,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("test arguments must be an object"),
        }
    }

    #[test]
    fn test_update_splits_path_flag_and_body() {
        let route = RouteBinding::update("/people/{id}").query_flag("mergeTags");
        let parts = partition(
            "updatePerson",
            &route,
            args(json!({"id": 7, "mergeTags": true, "firstName": "A"})),
        )
        .unwrap();

        assert_eq!(parts.path, "/people/7");
        assert_eq!(parts.query, vec![("mergeTags".to_string(), "true".to_string())]);
        assert_eq!(parts.body, Some(json!({"firstName": "A"})));
        assert_eq!(parts.path_params, args(json!({"id": 7})));
    }

    #[test]
    fn test_null_flag_is_not_sent() {
        let route = RouteBinding::create("/people").query_flag("deduplicate");
        let parts = partition(
            "createPerson",
            &route,
            args(json!({"deduplicate": null, "firstName": "A"})),
        )
        .unwrap();
        assert!(parts.query.is_empty());
        assert_eq!(parts.body, Some(json!({"firstName": "A"})));
    }

    #[test]
    fn test_missing_or_null_placeholder_fails() {
        let route = RouteBinding::get("/notes/{id}");
        for value in [json!({}), json!({"id": null}), json!({"id": ""})] {
            let err = partition("getNote", &route, args(value)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Missing required path parameter 'id' for tool getNote"
            );
        }
    }

    #[test]
    fn test_placeholders_are_percent_encoded() {
        let route = RouteBinding::create("/reactions/{refType}/{refId}");
        let parts = partition(
            "createReaction",
            &route,
            args(json!({"refType": "a/b c", "refId": 9, "emoji": "👍"})),
        )
        .unwrap();
        assert_eq!(parts.path, "/reactions/a%2Fb%20c/9");
        assert_eq!(parts.body, Some(json!({"emoji": "👍"})));
    }

    #[test]
    fn test_query_rendering_and_order() {
        let route = RouteBinding::list("/people", "people");
        let parts = partition(
            "listPeople",
            &route,
            args(json!({
                "tags": ["a", "b"],
                "limit": 5,
                "contacted": false,
                "stage": "Lead",
                "smartListId": null,
                "custom": {"x": 1}
            })),
        )
        .unwrap();

        assert_eq!(
            parts.query,
            vec![
                ("contacted".to_string(), "false".to_string()),
                ("custom".to_string(), r#"{"x":1}"#.to_string()),
                ("limit".to_string(), "5".to_string()),
                ("stage".to_string(), "Lead".to_string()),
                ("tags".to_string(), "a,b".to_string()),
            ]
        );
        assert_eq!(parts.body, None);
    }

    #[test]
    fn test_discard_drops_extras() {
        let route = RouteBinding::get("/notes/{id}");
        let parts = partition("getNote", &route, args(json!({"id": 3, "extra": "x"}))).unwrap();
        assert_eq!(parts.path, "/notes/3");
        assert!(parts.query.is_empty());
        assert_eq!(parts.body, None);
    }

    #[test]
    fn test_post_without_remainder_sends_empty_body() {
        let route = RouteBinding::create("/people/claim");
        let parts = partition("claimPerson", &route, JsonObject::new()).unwrap();
        assert_eq!(parts.body, Some(json!({})));

        let request = parts.into_request(HttpMethod::Post);
        assert_eq!(request.path, "/people/claim");
    }

    #[test]
    fn test_delete_with_body() {
        let route =
            RouteBinding::delete("/inboxApps/participants", "Participant removed").send_body();
        let parts = partition(
            "inboxAppDeleteParticipant",
            &route,
            args(json!({"conversationId": "c1", "personId": 4})),
        )
        .unwrap();
        assert_eq!(parts.body, Some(json!({"conversationId": "c1", "personId": 4})));
    }

    #[test]
    fn test_whole_floats_render_as_integers() {
        let route = RouteBinding::delete("/people/{id}", "Person {id} deleted");
        let parts = partition("deletePerson", &route, args(json!({"id": 42.0}))).unwrap();
        assert_eq!(parts.path, "/people/42");

        let route = RouteBinding::list("/people", "people");
        let parts = partition(
            "listPeople",
            &route,
            args(json!({"limit": 5.0, "minPrice": 2.5, "ids": [1.0, 2]})),
        )
        .unwrap();
        assert_eq!(
            parts.query,
            vec![
                ("ids".to_string(), "1,2".to_string()),
                ("limit".to_string(), "5".to_string()),
                ("minPrice".to_string(), "2.5".to_string()),
            ]
        );
    }
}
