//! Canonicalizer for OpenAPI specifications.
//!
//! Expects `{ info: { title, description?, version? }, servers?, paths }`.
//! Path entries are iterated in declaration order, then method entries in
//! declaration order; only the five HTTP methods in [`HTTP_METHODS`] count
//! as operations, everything else under a path (shared parameters, vendor
//! extensions) is ignored. Request bodies are taken from the
//! `application/json` media type only.

use serde::Deserialize;
use serde_json::Value;
use skillsmith_core::{Error, Result, SourceType, SupportingFile};

use crate::convert::{MAX_INLINE_OPERATIONS, SkillConverter};
use crate::schema::{ApiSchema, Operation, Parameter, SourceInput};

/// The method keys treated as operations under a path entry.
const HTTP_METHODS: [&str; 5] = ["get", "post", "put", "delete", "patch"];

/// Wire shape of an OpenAPI document (the slice this converter reads).
#[derive(Debug, Deserialize)]
struct OpenApiDocument {
    info: OpenApiInfo,
    #[serde(default)]
    servers: Vec<OpenApiServer>,
    paths: serde_json::Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct OpenApiInfo {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenApiServer {
    url: String,
}

#[derive(Debug, Deserialize)]
struct OperationObject {
    #[serde(default, rename = "operationId")]
    operation_id: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    parameters: Vec<Parameter>,
    #[serde(default, rename = "requestBody")]
    request_body: Option<RequestBodyObject>,
}

#[derive(Debug, Deserialize)]
struct RequestBodyObject {
    #[serde(default)]
    content: Option<serde_json::Map<String, Value>>,
}

impl RequestBodyObject {
    /// Schema of the `application/json` media type; other media types are
    /// dropped silently.
    fn json_schema(self) -> Option<Value> {
        self.content?
            .remove("application/json")?
            .get("schema")
            .cloned()
    }
}

/// Converter for OpenAPI specifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenApiConverter;

impl SkillConverter for OpenApiConverter {
    fn source_type(&self) -> SourceType {
        SourceType::OpenApi
    }

    fn parse(&self, source: &SourceInput) -> Result<ApiSchema> {
        let value = source.to_value()?;
        let document: OpenApiDocument =
            serde_json::from_value(value).map_err(|e| Error::Parse {
                message: format!("Invalid OpenAPI document: {e}"),
            })?;

        let mut operations = Vec::new();
        for (path, item) in &document.paths {
            let Some(methods) = item.as_object() else {
                return Err(Error::Parse {
                    message: format!("Invalid path item for {path}: expected an object"),
                });
            };
            for (method, raw) in methods {
                if !HTTP_METHODS.contains(&method.as_str()) {
                    continue;
                }
                let op: OperationObject =
                    serde_json::from_value(raw.clone()).map_err(|e| Error::Parse {
                        message: format!("Invalid operation {method} {path}: {e}"),
                    })?;
                operations.push(Operation {
                    path: path.clone(),
                    method: method.clone(),
                    operation_id: op.operation_id,
                    summary: op.summary,
                    description: op.description,
                    tags: op.tags,
                    parameters: op.parameters,
                    request_body: op.request_body.and_then(RequestBodyObject::json_schema),
                });
            }
        }

        let mut tags: Vec<String> = Vec::new();
        for op in &operations {
            for tag in &op.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }

        let base_url = document
            .servers
            .first()
            .map(|server| server.url.clone())
            .unwrap_or_default();

        Ok(ApiSchema {
            title: document.info.title,
            description: document.info.description,
            version: document.info.version,
            base_url,
            operations,
            tags,
            auth: None,
            launch: None,
        })
    }

    fn generate_supporting_files(&self, schema: &ApiSchema) -> Vec<SupportingFile> {
        if schema.operations.len() <= MAX_INLINE_OPERATIONS {
            return Vec::new();
        }

        let mut reference = String::from("# Complete API Reference\n\n");
        for op in &schema.operations {
            reference.push_str(&format!("## {}\n\n", op.label()));
            reference.push_str(&format!("`{} {}`\n\n", op.method.to_uppercase(), op.path));
            if let Some(summary) = op.summary.as_deref().filter(|s| !s.is_empty()) {
                reference.push_str(&format!("{summary}\n\n"));
            }
        }

        vec![SupportingFile::new("docs/full-api.md", reference)]
    }
}
