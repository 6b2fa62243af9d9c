//! End-to-end tests for the REST API config converter.

use serde_json::json;
use skillsmith_convert::{ConvertOptions, RestConverter, SkillConverter, SourceInput};

fn users_config() -> SourceInput {
    SourceInput::from(json!({
        "baseUrl": "https://api.example.com",
        "endpoints": [
            {"path": "/users", "method": "GET", "description": "List all users"}
        ]
    }))
}

#[test]
fn test_hostname_derived_name() {
    let skill = RestConverter
        .convert(&users_config(), ConvertOptions::default())
        .unwrap();
    assert!(skill.metadata.name.as_str().starts_with("example"));
    assert_eq!(skill.metadata.name.as_str(), "example-api");
}

#[test]
fn test_instructions_contain_method_path_line() {
    let skill = RestConverter
        .convert(&users_config(), ConvertOptions::default())
        .unwrap();
    assert!(skill.instructions.lines().any(|line| line == "`GET /users`"));
}

#[test]
fn test_full_instruction_document() {
    let skill = RestConverter
        .convert(&users_config(), ConvertOptions::default())
        .unwrap();

    let expected = "\
# Example API Skill

This skill provides guidance for working with the example REST API.

**Base URL:** `https://api.example.com`

## Operations

### GET /users

`GET /users`

List all users

## Usage Guidelines

When helping users with this API:

1. Construct the full URL by combining the base URL with the endpoint path
2. Include required parameters and authentication headers
3. Use appropriate HTTP methods for each operation
4. Handle errors gracefully and explain any issues to the user
";
    assert_eq!(skill.instructions, expected);
}

#[test]
fn test_description_references_name_and_base_url() {
    let skill = RestConverter
        .convert(&users_config(), ConvertOptions::default())
        .unwrap();
    assert_eq!(
        skill.metadata.description,
        "Use this skill when working with the example API (https://api.example.com). Supports: List all users."
    );
}

#[test]
fn test_explicit_name_wins_over_hostname() {
    let config = SourceInput::from(json!({
        "baseUrl": "https://api.example.com",
        "name": "User Directory",
        "endpoints": []
    }));
    let skill = RestConverter
        .convert(&config, ConvertOptions::default())
        .unwrap();
    assert_eq!(skill.metadata.name.as_str(), "user-directory-api");
}

#[test]
fn test_missing_base_url_is_parse_error() {
    let err = RestConverter
        .parse(&SourceInput::from(json!({"endpoints": []})))
        .unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().contains("baseUrl"));
}

#[test]
fn test_endpoint_order_preserved() {
    let config = SourceInput::from(json!({
        "baseUrl": "https://svc.io",
        "endpoints": [
            {"path": "/z", "method": "GET"},
            {"path": "/a", "method": "POST"},
            {"path": "/m", "method": "DELETE"}
        ]
    }));
    let skill = RestConverter
        .convert(&config, ConvertOptions::default())
        .unwrap();

    let z = skill.instructions.find("`GET /z`").unwrap();
    let a = skill.instructions.find("`POST /a`").unwrap();
    let m = skill.instructions.find("`DELETE /m`").unwrap();
    assert!(z < a);
    assert!(a < m);
}

#[test]
fn test_bearer_auth_section() {
    let config = SourceInput::from(json!({
        "baseUrl": "https://svc.io",
        "auth": {"type": "bearer", "config": {}},
        "endpoints": []
    }));
    let skill = RestConverter
        .convert(&config, ConvertOptions::default())
        .unwrap();
    assert!(skill.instructions.contains("## Authentication"));
    assert!(skill.instructions.contains("This API uses Bearer token authentication."));
    assert!(skill
        .instructions
        .contains("Include the header: `Authorization: Bearer <token>`"));
}

#[test]
fn test_api_key_auth_section() {
    let config = SourceInput::from(json!({
        "baseUrl": "https://svc.io",
        "auth": {"type": "api-key", "config": {"header": "X-Api-Key"}},
        "endpoints": []
    }));
    let skill = RestConverter
        .convert(&config, ConvertOptions::default())
        .unwrap();
    assert!(skill.instructions.contains("This API uses API key authentication."));
}

#[test]
fn test_parameters_rendered_with_types() {
    let config = SourceInput::from(json!({
        "baseUrl": "https://svc.io",
        "endpoints": [{
            "path": "/search",
            "method": "GET",
            "parameters": [
                {"name": "q", "in": "query", "required": true, "description": "Search terms"},
                {"name": "limit", "in": "query", "schema": {"type": "integer"}}
            ]
        }]
    }));
    let skill = RestConverter
        .convert(&config, ConvertOptions::default())
        .unwrap();
    assert!(skill.instructions.contains("- `q` (query): string (required)"));
    assert!(skill.instructions.contains("  - Search terms"));
    assert!(skill.instructions.contains("- `limit` (query): integer"));
}

#[test]
fn test_request_body_rendered_as_json_block() {
    let config = SourceInput::from(json!({
        "baseUrl": "https://svc.io",
        "endpoints": [{
            "path": "/users",
            "method": "POST",
            "requestBody": {"name": "Ada"}
        }]
    }));
    let skill = RestConverter
        .convert(&config, ConvertOptions::default())
        .unwrap();
    assert!(skill.instructions.contains("**Request Body:**"));
    assert!(skill.instructions.contains("```json"));
    assert!(skill.instructions.contains("\"name\": \"Ada\""));
}

#[test]
fn test_examples_file_first_five_endpoints() {
    let endpoints: Vec<_> = (0..8)
        .map(|i| json!({"path": format!("/r{i}"), "method": "GET"}))
        .collect();
    let config = SourceInput::from(json!({
        "baseUrl": "https://svc.io",
        "endpoints": endpoints
    }));
    let skill = RestConverter
        .convert(&config, ConvertOptions::default())
        .unwrap();

    assert_eq!(skill.supporting_files.len(), 1);
    let examples = &skill.supporting_files[0];
    assert_eq!(examples.path, "docs/examples.md");
    assert!(examples.content.starts_with("# API Examples\n"));
    assert_eq!(examples.content.matches("curl -X GET").count(), 5);
    assert!(examples.content.contains("curl -X GET \"https://svc.io/r0\""));
    assert!(!examples.content.contains("/r5"));
}

#[test]
fn test_examples_file_includes_post_body() {
    let config = SourceInput::from(json!({
        "baseUrl": "https://svc.io",
        "endpoints": [{
            "path": "/users",
            "method": "POST",
            "requestBody": {"name": "Ada"}
        }]
    }));
    let skill = RestConverter
        .convert(&config, ConvertOptions::default())
        .unwrap();
    let examples = &skill.supporting_files[0];
    assert!(examples.content.contains("-H \"Content-Type: application/json\""));
    assert!(examples.content.contains("-d '{\"name\":\"Ada\"}'"));
}

#[test]
fn test_no_endpoints_no_examples_file() {
    let config = SourceInput::from(json!({"baseUrl": "https://svc.io", "endpoints": []}));
    let skill = RestConverter
        .convert(&config, ConvertOptions::default())
        .unwrap();
    assert!(skill.supporting_files.is_empty());
}

#[test]
fn test_invalid_base_url_falls_back_to_fixed_name() {
    let config = SourceInput::from(json!({"baseUrl": "not a url", "endpoints": []}));
    let skill = RestConverter
        .convert(&config, ConvertOptions::default())
        .unwrap();
    assert_eq!(skill.metadata.name.as_str(), "rest-api-api");
}
