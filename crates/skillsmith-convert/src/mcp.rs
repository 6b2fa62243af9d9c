//! Canonicalizer for MCP server manifests.
//!
//! Accepts either a multi-server manifest (`{ mcpServers: { name: cfg } }`)
//! or a single server config (`{ name?, command?, args?, tools }`). Tools
//! accumulate across servers in declaration order and map onto canonical
//! operations: the tool name becomes `path` and `operation_id`, the tool
//! description becomes the operation description, and the tool input
//! schema rides in `request_body`. The `method` field holds the fixed
//! marker `TOOL`, which this variant's renderer never prints.

use serde::Deserialize;
use serde_json::Value;
use skillsmith_core::{Error, Result, SourceType, SupportingFile};

use crate::convert::{SkillConverter, pretty_json, title_case};
use crate::schema::{ApiSchema, McpLaunch, Operation, SourceInput};

/// Wire shape of a single MCP server entry.
#[derive(Debug, Deserialize)]
struct McpServerEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    tools: Vec<McpToolDefinition>,
}

#[derive(Debug, Deserialize)]
struct McpToolDefinition {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "inputSchema")]
    input_schema: Option<Value>,
}

/// Converter for MCP server manifests.
#[derive(Debug, Clone, Copy, Default)]
pub struct McpConverter;

impl SkillConverter for McpConverter {
    fn source_type(&self) -> SourceType {
        SourceType::Mcp
    }

    fn parse(&self, source: &SourceInput) -> Result<ApiSchema> {
        let value = source.to_value()?;

        // Clone the inner map out so the single-config branch can consume
        // the whole value.
        let manifest = value.get("mcpServers").and_then(Value::as_object).cloned();

        let servers: Vec<(String, McpServerEntry)> = match manifest {
            Some(map) => map
                .into_iter()
                .map(|(name, config)| {
                    let entry: McpServerEntry =
                        serde_json::from_value(config).map_err(|e| Error::Parse {
                            message: format!("Invalid MCP server entry '{name}': {e}"),
                        })?;
                    Ok((name, entry))
                })
                .collect::<Result<_>>()?,
            None => {
                let entry: McpServerEntry =
                    serde_json::from_value(value).map_err(|e| Error::Parse {
                        message: format!("Invalid MCP server config: {e}"),
                    })?;
                let name = entry
                    .name
                    .clone()
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| "default".to_string());
                vec![(name, entry)]
            }
        };

        let mut title = None;
        let mut launch = None;
        let mut operations = Vec::new();

        for (name, config) in servers {
            title = Some(name);
            launch = config.command.as_ref().map(|command| McpLaunch {
                command: command.clone(),
                args: config.args.clone(),
            });
            for tool in config.tools {
                operations.push(Operation {
                    path: tool.name.clone(),
                    method: "TOOL".to_string(),
                    operation_id: Some(tool.name),
                    summary: None,
                    description: tool.description,
                    tags: Vec::new(),
                    parameters: Vec::new(),
                    request_body: tool.input_schema,
                });
            }
        }

        Ok(ApiSchema {
            title: title.unwrap_or_else(|| "mcp-server".to_string()),
            description: None,
            version: None,
            base_url: String::new(),
            operations,
            tags: Vec::new(),
            auth: None,
            launch,
        })
    }

    fn generate_description(&self, schema: &ApiSchema) -> String {
        if schema.operations.is_empty() {
            return format!("Provides access to {} capabilities.", schema.title);
        }

        let names: Vec<&str> = schema
            .operations
            .iter()
            .take(5)
            .map(|op| op.path.as_str())
            .collect();
        let mut tool_list = names.join(", ");
        if schema.operations.len() > 5 {
            tool_list.push_str(&format!(" and {} more", schema.operations.len() - 5));
        }

        format!(
            "Use this skill when working with {}. Provides tools for: {}.",
            schema.title, tool_list
        )
    }

    fn generate_instructions(&self, schema: &ApiSchema) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {} Skill", title_case(&schema.title)));
        lines.push(String::new());
        lines.push(format!(
            "This skill provides access to the {} MCP server.",
            schema.title
        ));
        lines.push(String::new());

        if let Some(launch) = &schema.launch {
            lines.push("## MCP Server Configuration".to_string());
            lines.push(String::new());
            lines.push("```json".to_string());
            let mut config = serde_json::Map::new();
            config.insert(
                "command".to_string(),
                Value::String(launch.command.clone()),
            );
            if !launch.args.is_empty() {
                config.insert(
                    "args".to_string(),
                    Value::Array(launch.args.iter().cloned().map(Value::String).collect()),
                );
            }
            lines.push(pretty_json(&Value::Object(config)));
            lines.push("```".to_string());
            lines.push(String::new());
        }

        if !schema.operations.is_empty() {
            lines.push("## Available Tools".to_string());
            lines.push(String::new());
            for op in &schema.operations {
                lines.push(format!("### `{}`", op.path));
                lines.push(String::new());
                if let Some(description) = op.description.as_deref().filter(|d| !d.is_empty()) {
                    lines.push(description.to_string());
                    lines.push(String::new());
                }
                push_tool_parameters(op.request_body.as_ref(), &mut lines);
            }
        }

        lines.push("## Usage".to_string());
        lines.push(String::new());
        lines.push(
            "When a user request matches this skill's capabilities, use the appropriate MCP tool."
                .to_string(),
        );
        lines.push("Always explain what you're doing before invoking a tool.".to_string());
        lines.push(String::new());

        lines.join("\n")
    }

    fn generate_supporting_files(&self, schema: &ApiSchema) -> Vec<SupportingFile> {
        if schema.operations.is_empty() {
            return Vec::new();
        }

        let mut reference = String::from("# Tool Reference\n\nDetailed schema for each tool:\n\n");
        for op in &schema.operations {
            reference.push_str(&format!("## {}\n\n", op.path));
            reference.push_str("```json\n");
            let schema_json = op
                .request_body
                .clone()
                .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
            reference.push_str(&pretty_json(&schema_json));
            reference.push_str("\n```\n\n");
        }

        vec![SupportingFile::new("docs/tools-reference.md", reference)]
    }
}

/// Renders a parameter list from a tool's JSON-Schema input: each property
/// becomes one bullet, `required` membership adds a marker, and the type
/// defaults to `any`.
fn push_tool_parameters(input_schema: Option<&Value>, lines: &mut Vec<String>) {
    let Some(schema) = input_schema else {
        return;
    };
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return;
    };
    if properties.is_empty() {
        return;
    }

    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    lines.push("**Parameters:**".to_string());
    lines.push(String::new());
    for (name, definition) in properties {
        let marker = if required.contains(&name.as_str()) {
            " (required)"
        } else {
            ""
        };
        let type_name = definition
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("any");
        let description = definition
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("");
        lines.push(format!("- `{name}`: {type_name}{marker} - {description}"));
    }
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_single_config_uses_name_field() {
        let schema = McpConverter
            .parse(&SourceInput::from(json!({"name": "weather", "tools": []})))
            .unwrap();
        assert_eq!(schema.title, "weather");
    }

    #[test]
    fn test_parse_single_config_without_name() {
        let schema = McpConverter
            .parse(&SourceInput::from(json!({"tools": []})))
            .unwrap();
        assert_eq!(schema.title, "default");
    }

    #[test]
    fn test_parse_empty_manifest_falls_back() {
        let schema = McpConverter
            .parse(&SourceInput::from(json!({"mcpServers": {}})))
            .unwrap();
        assert_eq!(schema.title, "mcp-server");
        assert!(schema.operations.is_empty());
    }

    #[test]
    fn test_parse_tool_requires_name() {
        let err = McpConverter
            .parse(&SourceInput::from(
                json!({"tools": [{"description": "nameless"}]}),
            ))
            .unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_parse_accumulates_tools_across_servers() {
        let manifest = json!({
            "mcpServers": {
                "alpha": {"tools": [{"name": "one"}]},
                "beta": {"tools": [{"name": "two"}, {"name": "three"}]}
            }
        });
        let schema = McpConverter.parse(&SourceInput::from(manifest)).unwrap();
        assert_eq!(schema.operations.len(), 3);
        assert_eq!(schema.operations[0].path, "one");
        // Last-seen server wins the title.
        assert_eq!(schema.title, "beta");
    }

    #[test]
    fn test_tool_parameters_rendering() {
        let mut lines = Vec::new();
        push_tool_parameters(
            Some(&json!({
                "type": "object",
                "properties": {
                    "title": {"type": "string", "description": "Issue title"},
                    "labels": {"description": "Labels to apply"}
                },
                "required": ["title"]
            })),
            &mut lines,
        );
        assert_eq!(lines[0], "**Parameters:**");
        assert!(lines.contains(&"- `title`: string (required) - Issue title".to_string()));
        assert!(lines.contains(&"- `labels`: any - Labels to apply".to_string()));
    }

    #[test]
    fn test_tool_parameters_skip_empty_schema() {
        let mut lines = Vec::new();
        push_tool_parameters(Some(&json!({"type": "object"})), &mut lines);
        assert!(lines.is_empty());
    }
}
