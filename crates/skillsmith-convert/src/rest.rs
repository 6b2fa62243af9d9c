//! Canonicalizer for ad-hoc REST API configs.
//!
//! Expects `{ baseUrl, name?, description?, endpoints: [], auth? }`.
//! Endpoints map 1:1 to canonical operations in array order; the endpoint
//! description becomes the operation summary. When `name` is absent it is
//! derived from the base URL hostname, skipping conventional `www`/`api`
//! service prefixes so `api.example.com` yields `example`.

use serde::Deserialize;
use serde_json::Value;
use skillsmith_core::{Error, Result, SkillName, SourceType, SupportingFile};
use url::Url;

use crate::convert::{SkillConverter, title_case};
use crate::schema::{ApiSchema, AuthConfig, AuthScheme, Operation, Parameter, SourceInput};

/// Wire shape of a REST API config document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestConfig {
    base_url: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    endpoints: Vec<RestEndpoint>,
    #[serde(default)]
    auth: Option<AuthConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestEndpoint {
    path: String,
    method: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    parameters: Vec<Parameter>,
    #[serde(default)]
    request_body: Option<Value>,
}

/// Converter for ad-hoc REST API configs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestConverter;

impl SkillConverter for RestConverter {
    fn source_type(&self) -> SourceType {
        SourceType::RestApi
    }

    fn parse(&self, source: &SourceInput) -> Result<ApiSchema> {
        let value = source.to_value()?;
        let config: RestConfig = serde_json::from_value(value).map_err(|e| Error::Parse {
            message: format!("Invalid REST API config: {e}"),
        })?;

        let title = config
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| name_from_base_url(&config.base_url));

        let operations = config
            .endpoints
            .into_iter()
            .map(|endpoint| Operation {
                path: endpoint.path,
                method: endpoint.method,
                operation_id: None,
                summary: endpoint.description,
                description: None,
                tags: Vec::new(),
                parameters: endpoint.parameters,
                request_body: endpoint.request_body,
            })
            .collect();

        Ok(ApiSchema {
            title,
            description: config.description,
            version: None,
            base_url: config.base_url,
            operations,
            tags: Vec::new(),
            auth: config.auth,
            launch: None,
        })
    }

    fn generate_skill_name(&self, schema: &ApiSchema) -> SkillName {
        SkillName::slug(format!("{}-api", schema.title))
    }

    fn description_lead(&self, schema: &ApiSchema) -> String {
        format!(
            "Use this skill when working with the {} API ({}). ",
            schema.title, schema.base_url
        )
    }

    fn instructions_title(&self, schema: &ApiSchema) -> String {
        format!("{} API Skill", title_case(&schema.title))
    }

    fn push_intro(&self, schema: &ApiSchema, lines: &mut Vec<String>) {
        lines.push(format!(
            "This skill provides guidance for working with the {} REST API.",
            schema.title
        ));
        lines.push(String::new());
    }

    fn push_sections(&self, schema: &ApiSchema, lines: &mut Vec<String>) {
        let Some(auth) = &schema.auth else {
            return;
        };
        lines.push("## Authentication".to_string());
        lines.push(String::new());
        match auth.scheme {
            AuthScheme::Bearer => {
                lines.push("This API uses Bearer token authentication.".to_string());
                lines.push("Include the header: `Authorization: Bearer <token>`".to_string());
            }
            AuthScheme::ApiKey => {
                lines.push("This API uses API key authentication.".to_string());
            }
            AuthScheme::Basic => {
                lines.push("This API uses Basic authentication.".to_string());
            }
        }
        lines.push(String::new());
    }

    fn usage_steps(&self) -> [&'static str; 4] {
        [
            "Construct the full URL by combining the base URL with the endpoint path",
            "Include required parameters and authentication headers",
            "Use appropriate HTTP methods for each operation",
            "Handle errors gracefully and explain any issues to the user",
        ]
    }

    fn generate_supporting_files(&self, schema: &ApiSchema) -> Vec<SupportingFile> {
        if schema.operations.is_empty() {
            return Vec::new();
        }

        let mut examples = String::from("# API Examples\n\n");
        for op in schema.operations.iter().take(5) {
            examples.push_str(&format!("## {} {}\n\n", op.method, op.path));
            examples.push_str("```bash\n");
            examples.push_str(&format!(
                "curl -X {} \"{}{}\"",
                op.method, schema.base_url, op.path
            ));
            if op.method != "GET" {
                if let Some(body) = &op.request_body {
                    examples.push_str(" \\\n  -H \"Content-Type: application/json\" \\\n");
                    examples.push_str(&format!("  -d '{body}'"));
                }
            }
            examples.push_str("\n```\n\n");
        }

        vec![SupportingFile::new("docs/examples.md", examples)]
    }
}

/// Service prefixes skipped when deriving a name from the hostname.
const GENERIC_HOST_LABELS: [&str; 2] = ["www", "api"];

fn name_from_base_url(base_url: &str) -> String {
    let Ok(parsed) = Url::parse(base_url) else {
        return "rest-api".to_string();
    };
    let Some(host) = parsed.host_str() else {
        return "api".to_string();
    };

    let labels: Vec<&str> = host.split('.').collect();
    let mut label = "";
    for (index, &candidate) in labels.iter().enumerate() {
        if GENERIC_HOST_LABELS.contains(&candidate) && index + 1 < labels.len() {
            continue;
        }
        label = candidate;
        break;
    }

    if label.is_empty() {
        "api".to_string()
    } else {
        label.to_string()
    }
}
