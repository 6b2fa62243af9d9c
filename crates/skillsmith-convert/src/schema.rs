//! The canonical intermediate representation.
//!
//! Every canonicalizer variant parses its raw input into [`ApiSchema`], the
//! shared, format-agnostic schema the generators consume. The schema is
//! built once per conversion and never mutated afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use skillsmith_core::{Error, Result};
use std::fmt;

/// Raw conversion input: either serialized JSON text or an already-parsed
/// structured value.
///
/// # Examples
///
/// ```
/// use skillsmith_convert::SourceInput;
///
/// let text = SourceInput::Text(r#"{"a": 1}"#.to_string());
/// assert_eq!(text.to_value().unwrap()["a"], 1);
///
/// let broken = SourceInput::Text("{not json".to_string());
/// assert!(broken.to_value().unwrap_err().is_parse_error());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceInput {
    /// A JSON document that still needs parsing.
    Text(String),

    /// An already-parsed JSON value.
    Value(Value),
}

impl SourceInput {
    /// Resolves the input to a JSON value, parsing text input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when text input is not valid JSON.
    pub fn to_value(&self) -> Result<Value> {
        match self {
            Self::Text(raw) => serde_json::from_str(raw).map_err(|e| Error::Parse {
                message: format!("Invalid JSON source: {e}"),
            }),
            Self::Value(value) => Ok(value.clone()),
        }
    }
}

impl From<Value> for SourceInput {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<String> for SourceInput {
    fn from(raw: String) -> Self {
        Self::Text(raw)
    }
}

impl From<&str> for SourceInput {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

/// Where a parameter is carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Query string.
    Query,
    /// Path segment.
    Path,
    /// Request header.
    Header,
    /// Cookie.
    Cookie,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Header => "header",
            Self::Cookie => "cookie",
        };
        write!(f, "{name}")
    }
}

/// One operation parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,

    /// Wire location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,

    /// Whether the parameter must be supplied.
    #[serde(default)]
    pub required: bool,

    /// Optional human description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional schema fragment; only its `type` field is read at render
    /// time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl Parameter {
    /// Declared type from the schema fragment, defaulting to `string`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.schema
            .as_ref()
            .and_then(|schema| schema.get("type"))
            .and_then(Value::as_str)
            .unwrap_or("string")
    }
}

/// One invocable action of the source API.
///
/// `method` keeps the casing of the source variant (uppercase in REST
/// configs, lowercase path keys in OpenAPI documents); renderers uppercase
/// it for display. The MCP variant stores the fixed marker `TOOL`, which
/// its renderer never prints.
#[derive(Debug, Clone)]
pub struct Operation {
    /// Request path (or tool name for MCP sources).
    pub path: String,

    /// HTTP method as declared by the source.
    pub method: String,

    /// Optional operation identifier.
    pub operation_id: Option<String>,

    /// Optional one-line summary.
    pub summary: Option<String>,

    /// Optional longer description.
    pub description: Option<String>,

    /// Category tags, in declaration order.
    pub tags: Vec<String>,

    /// Parameters, in declaration order.
    pub parameters: Vec<Parameter>,

    /// Optional request body schema fragment.
    pub request_body: Option<Value>,
}

impl Operation {
    /// Display label: the operation id when present, else `METHOD path`.
    #[must_use]
    pub fn label(&self) -> String {
        self.operation_id
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.method.to_uppercase(), self.path))
    }
}

/// Authentication scheme of a REST API config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthScheme {
    /// Bearer token in the Authorization header.
    Bearer,
    /// API key.
    ApiKey,
    /// HTTP Basic.
    Basic,
}

/// Authentication declaration carried by REST API configs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Declared scheme.
    #[serde(rename = "type")]
    pub scheme: AuthScheme,

    /// Opaque scheme configuration; passed through, never interpreted.
    #[serde(default)]
    pub config: serde_json::Map<String, Value>,
}

/// How an MCP server is launched; used only to render the server
/// configuration block in MCP skill instructions.
#[derive(Debug, Clone)]
pub struct McpLaunch {
    /// Launcher command.
    pub command: String,

    /// Launcher arguments.
    pub args: Vec<String>,
}

/// The canonical, format-agnostic schema produced by a canonicalizer.
///
/// `operations` keeps declaration order from the source; `tags` is the
/// deduplicated union of operation tags in first-seen order. The `auth`
/// and `launch` carriers are populated only by the variant that knows
/// them (REST and MCP respectively).
#[derive(Debug, Clone)]
pub struct ApiSchema {
    /// Human-readable identifier of the source API.
    pub title: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Optional version string.
    pub version: Option<String>,

    /// Base URL; empty when unknown.
    pub base_url: String,

    /// Operations in declaration order.
    pub operations: Vec<Operation>,

    /// Deduplicated tags in first-seen order.
    pub tags: Vec<String>,

    /// REST authentication declaration, when present.
    pub auth: Option<AuthConfig>,

    /// MCP server launch configuration, when present.
    pub launch: Option<McpLaunch>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_input_text_parses() {
        let input = SourceInput::from(r#"{"key": "value"}"#);
        let value = input.to_value().unwrap();
        assert_eq!(value["key"], "value");
    }

    #[test]
    fn test_source_input_malformed_text_fails() {
        let input = SourceInput::from("{broken");
        let err = input.to_value().unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_source_input_value_passthrough() {
        let input = SourceInput::from(json!({"a": [1, 2]}));
        assert_eq!(input.to_value().unwrap()["a"][1], 2);
    }

    #[test]
    fn test_source_input_untagged_deserialization() {
        let as_text: SourceInput = serde_json::from_value(json!("{\"x\":1}")).unwrap();
        assert!(matches!(as_text, SourceInput::Text(_)));

        let as_value: SourceInput = serde_json::from_value(json!({"x": 1})).unwrap();
        assert!(matches!(as_value, SourceInput::Value(_)));
    }

    #[test]
    fn test_parameter_type_defaults_to_string() {
        let param: Parameter =
            serde_json::from_value(json!({"name": "id", "in": "path"})).unwrap();
        assert_eq!(param.type_name(), "string");
        assert!(!param.required);
    }

    #[test]
    fn test_parameter_type_from_schema() {
        let param: Parameter = serde_json::from_value(
            json!({"name": "limit", "in": "query", "schema": {"type": "integer"}}),
        )
        .unwrap();
        assert_eq!(param.type_name(), "integer");
    }

    #[test]
    fn test_parameter_location_display() {
        assert_eq!(ParameterLocation::Query.to_string(), "query");
        assert_eq!(ParameterLocation::Cookie.to_string(), "cookie");
    }

    #[test]
    fn test_operation_label_prefers_operation_id() {
        let op = Operation {
            path: "/pets".to_string(),
            method: "get".to_string(),
            operation_id: Some("listPets".to_string()),
            summary: None,
            description: None,
            tags: vec![],
            parameters: vec![],
            request_body: None,
        };
        assert_eq!(op.label(), "listPets");
    }

    #[test]
    fn test_operation_label_falls_back_to_method_path() {
        let op = Operation {
            path: "/pets".to_string(),
            method: "get".to_string(),
            operation_id: None,
            summary: None,
            description: None,
            tags: vec![],
            parameters: vec![],
            request_body: None,
        };
        assert_eq!(op.label(), "GET /pets");
    }

    #[test]
    fn test_auth_config_wire_shape() {
        let auth: AuthConfig =
            serde_json::from_value(json!({"type": "api-key", "config": {"header": "X-Key"}}))
                .unwrap();
        assert_eq!(auth.scheme, AuthScheme::ApiKey);
        assert_eq!(auth.config["header"], "X-Key");
    }
}
