//! Shaping a remote payload into the tool result.

use super::partition::scalar_text;
use crate::models::JsonObject;
use crate::registry::route::render_template;
use crate::registry::ResponseShape;
use serde_json::{json, Value};

const METADATA_KEY: &str = "_metadata";

/// Apply `shape` to the decoded response body.
pub fn shape_response(shape: ResponseShape, data: Value, path_params: &JsonObject) -> Value {
    match shape {
        ResponseShape::Passthrough => data,
        ResponseShape::Collection(key) => collection(data, key),
        ResponseShape::Acknowledge(template) => {
            let message = render_template(template, |name| path_params.get(name).map(scalar_text));
            json!({ "success": true, "message": message })
        }
    }
}

/// Keep `key` and `_metadata`; absent keys stay absent.
fn collection(data: Value, key: &str) -> Value {
    let mut shaped = JsonObject::new();
    if let Value::Object(mut payload) = data {
        for name in [key, METADATA_KEY] {
            if let Some(value) = payload.remove(name) {
                shaped.insert(name.to_string(), value);
            }
        }
    }
    Value::Object(shaped)
}
