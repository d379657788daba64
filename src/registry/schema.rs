//! Tool descriptors and their input schemas.

use crate::models::JsonObject;
use serde_json::{json, Value};

/// Element type of an array parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    String,
    Number,
    Object,
}

impl ItemType {
    fn as_str(&self) -> &'static str {
        match self {
            ItemType::String => "string",
            ItemType::Number => "number",
            ItemType::Object => "object",
        }
    }
}

/// Semantic type of a tool parameter, as advertised in the JSON schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Object,
    Array(ItemType),
}

impl ParamType {
    /// JSON-Schema `type` keyword for this parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Object => "object",
            ParamType::Array(_) => "array",
        }
    }
}

/// One named parameter of a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamType,
    pub description: &'static str,
    pub required: bool,
}

impl ParamSpec {
    /// The property schema for this parameter.
    pub fn schema(&self) -> Value {
        let mut schema = json!({
            "type": self.kind.as_str(),
            "description": self.description,
        });
        if let ParamType::Array(items) = self.kind {
            schema["items"] = json!({ "type": items.as_str() });
        }
        schema
    }
}

/// Static declaration of a tool's name, documentation and input schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub params: Vec<ParamSpec>,
}

impl ToolDescriptor {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            params: Vec::new(),
        }
    }

    /// Whether the schema declares a parameter with this name.
    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }

    /// Names of the parameters a well-formed call must supply.
    pub fn required_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|p| p.required).map(|p| p.name)
    }

    /// The JSON schema object advertised to callers.
    ///
    /// `required` is derived from the declared parameters, so it can only
    /// ever name keys present in `properties`.
    pub fn input_schema(&self) -> JsonObject {
        let properties: JsonObject = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.schema()))
            .collect();
        let required: Vec<Value> = self.required_params().map(Value::from).collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), Value::Array(required));
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ToolDescriptor {
        let mut descriptor = ToolDescriptor::new("createNote", "Create a note on a person");
        descriptor.params.push(ParamSpec {
            name: "personId",
            kind: ParamType::Number,
            description: "Person ID",
            required: true,
        });
        descriptor.params.push(ParamSpec {
            name: "tags",
            kind: ParamType::Array(ItemType::String),
            description: "Tags",
            required: false,
        });
        descriptor
    }

    #[test]
    fn test_input_schema_shape() {
        let schema = Value::Object(sample().input_schema());
        assert_eq!(
            schema,
            json!({
                "type": "object",
                "properties": {
                    "personId": {"type": "number", "description": "Person ID"},
                    "tags": {"type": "array", "description": "Tags", "items": {"type": "string"}}
                },
                "required": ["personId"]
            })
        );
    }

    #[test]
    fn test_empty_schema_has_empty_required() {
        let schema = ToolDescriptor::new("getIdentity", "Get identity").input_schema();
        assert_eq!(schema["properties"], json!({}));
        assert_eq!(schema["required"], json!([]));
    }

    #[test]
    fn test_has_param() {
        let descriptor = sample();
        assert!(descriptor.has_param("tags"));
        assert!(!descriptor.has_param("id"));
        assert_eq!(descriptor.required_params().collect::<Vec<_>>(), ["personId"]);
    }
}
