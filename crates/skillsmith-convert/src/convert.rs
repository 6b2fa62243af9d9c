//! The converter capability contract and the shared generation pipeline.
//!
//! One trait, [`SkillConverter`], covers both halves of the core: parsing
//! into the canonical schema and generating the skill artifact from it.
//! The generation defaults implement the shared document structure once;
//! variants override only the hooks where their phrasing differs. The
//! `convert` composition runs in a fixed order (name, description,
//! allowed tools, instructions, supporting files) so output is
//! deterministic.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use skillsmith_core::{Error, Result, Skill, SkillMetadata, SkillName, SourceType, SupportingFile};
use tracing::debug;

use crate::schema::{ApiSchema, Operation, SourceInput};
use crate::{McpConverter, OpenApiConverter, RestConverter};

/// How many operations the inline instructions embed before overflowing
/// into a generated reference file.
pub const MAX_INLINE_OPERATIONS: usize = 20;

/// Options carried on a conversion request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Generate supporting documentation files alongside the instructions.
    #[serde(default = "default_generate_docs")]
    pub generate_docs: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            generate_docs: true,
        }
    }
}

const fn default_generate_docs() -> bool {
    true
}

/// A conversion request as received from a collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Which converter variant to use.
    pub source_type: SourceType,

    /// The raw source document.
    pub source: SourceInput,

    /// Optional conversion options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ConvertOptions>,
}

/// The uniform conversion outcome envelope.
///
/// Success carries the skill and its serialized document; failure carries
/// the error list. No partial skills are ever returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    /// Whether conversion succeeded.
    pub success: bool,

    /// The generated skill, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<Skill>,

    /// The serialized SKILL.md document, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_md: Option<String>,

    /// Error messages, on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ConvertResponse {
    /// Builds a success response.
    #[must_use]
    pub fn completed(skill: Skill, skill_md: String) -> Self {
        Self {
            success: true,
            skill: Some(skill),
            skill_md: Some(skill_md),
            errors: None,
        }
    }

    /// Builds a failure response.
    #[must_use]
    pub fn failed(errors: Vec<String>) -> Self {
        Self {
            success: false,
            skill: None,
            skill_md: None,
            errors: Some(errors),
        }
    }
}

/// Capability contract shared by every converter variant.
///
/// Variants are stateless unit structs; the only configuration any of them
/// carries is compiled in (the OpenAPI HTTP-method allowlist). All methods
/// are pure and synchronous.
pub trait SkillConverter: Send + Sync {
    /// Source format this converter is bound to.
    fn source_type(&self) -> SourceType;

    /// Parses raw input into the canonical schema.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed JSON text or structurally
    /// incomplete documents; the message names the offending field.
    fn parse(&self, source: &SourceInput) -> Result<ApiSchema>;

    /// Skill-name slug; defaults to slugging the schema title.
    fn generate_skill_name(&self, schema: &ApiSchema) -> SkillName {
        SkillName::slug(&schema.title)
    }

    /// Lead sentence of the generated description.
    fn description_lead(&self, schema: &ApiSchema) -> String {
        format!("Use this skill when working with the {} API. ", schema.title)
    }

    /// One-line matching description for the skill metadata.
    ///
    /// Lead sentence, then up to 200 characters of the source description
    /// (ellipsis when cut), then the first 5 tags or, when tagless, the
    /// first 3 non-empty operation summaries. The metadata constructor
    /// clamps the final result to the 1024-character bound.
    fn generate_description(&self, schema: &ApiSchema) -> String {
        let mut desc = self.description_lead(schema);

        if let Some(source_desc) = schema.description.as_deref().filter(|d| !d.is_empty()) {
            let cut: String = source_desc.chars().take(200).collect();
            desc.push_str(&cut);
            if source_desc.chars().count() > 200 {
                desc.push_str("...");
            }
            desc.push(' ');
        }

        if schema.tags.is_empty() {
            let summaries: Vec<&str> = schema
                .operations
                .iter()
                .take(3)
                .filter_map(|op| op.summary.as_deref())
                .filter(|summary| !summary.is_empty())
                .collect();
            if !summaries.is_empty() {
                desc.push_str(&format!("Supports: {}.", summaries.join(", ")));
            }
        } else {
            let tags: Vec<&str> = schema.tags.iter().take(5).map(String::as_str).collect();
            desc.push_str(&format!("Categories: {}.", tags.join(", ")));
        }

        desc
    }

    /// Heading text of the instructions document, without the leading `#`.
    fn instructions_title(&self, schema: &ApiSchema) -> String {
        format!("{} Skill", schema.title)
    }

    /// Variant intro lines, pushed immediately under the heading.
    ///
    /// Defaults to the source description as a paragraph when present.
    fn push_intro(&self, schema: &ApiSchema, lines: &mut Vec<String>) {
        if let Some(description) = schema.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(description.to_string());
            lines.push(String::new());
        }
    }

    /// Variant sections rendered between the metadata lines and the
    /// category/operation listing. No-op by default; the REST variant adds
    /// its authentication section here.
    fn push_sections(&self, schema: &ApiSchema, lines: &mut Vec<String>) {
        let _ = (schema, lines);
    }

    /// The four usage-guideline steps, phrased per variant.
    fn usage_steps(&self) -> [&'static str; 4] {
        [
            "Match user requests to the appropriate operation",
            "Construct requests with required parameters",
            "Explain the expected response format",
            "Handle errors and edge cases appropriately",
        ]
    }

    /// Renders the instructions document.
    ///
    /// Structure: title heading, intro, version/base-URL metadata lines,
    /// variant sections, tag categories with matching operation counts,
    /// the first [`MAX_INLINE_OPERATIONS`] operations (plus an overflow
    /// pointer when more exist), and the usage guidelines.
    fn generate_instructions(&self, schema: &ApiSchema) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {}", self.instructions_title(schema)));
        lines.push(String::new());

        self.push_intro(schema, &mut lines);

        let mut pushed_metadata = false;
        if let Some(version) = schema.version.as_deref().filter(|v| !v.is_empty()) {
            lines.push(format!("**Version:** {version}"));
            pushed_metadata = true;
        }
        if !schema.base_url.is_empty() {
            lines.push(format!("**Base URL:** `{}`", schema.base_url));
            pushed_metadata = true;
        }
        if pushed_metadata {
            lines.push(String::new());
        }

        self.push_sections(schema, &mut lines);

        render_categories(schema, &mut lines);
        render_operations(schema, &mut lines);

        lines.push("## Usage Guidelines".to_string());
        lines.push(String::new());
        lines.push("When helping users with this API:".to_string());
        lines.push(String::new());
        for (index, step) in self.usage_steps().iter().enumerate() {
            lines.push(format!("{}. {step}", index + 1));
        }
        lines.push(String::new());

        lines.join("\n")
    }

    /// Optional tool allowlist; no restriction by default.
    fn generate_allowed_tools(&self, schema: &ApiSchema) -> Option<Vec<String>> {
        let _ = schema;
        None
    }

    /// Supporting files; none by default.
    fn generate_supporting_files(&self, schema: &ApiSchema) -> Vec<SupportingFile> {
        let _ = schema;
        Vec::new()
    }

    /// Runs the full conversion pipeline.
    ///
    /// Fixed composition order: parse, name, description, allowed tools,
    /// instructions, supporting files. The generators share nothing but
    /// the schema, so the order carries no data dependency; fixing it
    /// keeps output deterministic.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the source document is malformed or
    /// structurally incomplete. Generation itself is total.
    fn convert(&self, source: &SourceInput, options: ConvertOptions) -> Result<Skill> {
        let schema = self.parse(source)?;
        debug!(
            "Parsed {} source: {} operations, {} tags",
            self.source_type(),
            schema.operations.len(),
            schema.tags.len()
        );

        let mut metadata = SkillMetadata::new(
            self.generate_skill_name(&schema),
            self.generate_description(&schema),
        );
        if let Some(tools) = self.generate_allowed_tools(&schema) {
            metadata = metadata.with_allowed_tools(tools);
        }

        let instructions = self.generate_instructions(&schema);
        let supporting_files = if options.generate_docs {
            self.generate_supporting_files(&schema)
        } else {
            Vec::new()
        };

        Ok(Skill {
            metadata,
            instructions,
            supporting_files,
        })
    }

    /// Request-level entry point.
    ///
    /// Verifies the declared source type before parsing, converts, and
    /// wraps the outcome in the uniform response envelope. Never lets an
    /// error escape past this boundary.
    fn convert_request(&self, request: &ConvertRequest) -> ConvertResponse {
        if request.source_type != self.source_type() {
            let error = Error::TypeMismatch {
                expected: self.source_type(),
                actual: request.source_type,
            };
            return ConvertResponse::failed(vec![error.to_string()]);
        }

        match self.convert(&request.source, request.options.unwrap_or_default()) {
            Ok(skill) => {
                let skill_md = skill.to_document();
                ConvertResponse::completed(skill, skill_md)
            }
            Err(error) => ConvertResponse::failed(vec![error.to_string()]),
        }
    }
}

/// Returns the converter bound to a source type.
#[must_use]
pub fn converter_for(source_type: SourceType) -> &'static dyn SkillConverter {
    match source_type {
        SourceType::Mcp => &McpConverter,
        SourceType::RestApi => &RestConverter,
        SourceType::OpenApi => &OpenApiConverter,
    }
}

/// Converts a request by dispatching on its declared source type.
///
/// # Examples
///
/// ```
/// use skillsmith_convert::{dispatch, ConvertRequest, SourceInput};
/// use skillsmith_core::SourceType;
///
/// let request = ConvertRequest {
///     source_type: SourceType::OpenApi,
///     source: SourceInput::Text("{broken".to_string()),
///     options: None,
/// };
///
/// let response = dispatch(&request);
/// assert!(!response.success);
/// assert!(response.errors.is_some());
/// ```
#[must_use]
pub fn dispatch(request: &ConvertRequest) -> ConvertResponse {
    converter_for(request.source_type).convert_request(request)
}

fn render_categories(schema: &ApiSchema, lines: &mut Vec<String>) {
    if schema.tags.is_empty() {
        return;
    }
    lines.push("## API Categories".to_string());
    lines.push(String::new());
    for tag in &schema.tags {
        let count = schema
            .operations
            .iter()
            .filter(|op| op.tags.iter().any(|t| t == tag))
            .count();
        lines.push(format!("- **{tag}**: {count} operations"));
    }
    lines.push(String::new());
}

fn render_operations(schema: &ApiSchema, lines: &mut Vec<String>) {
    lines.push("## Operations".to_string());
    lines.push(String::new());

    for op in schema.operations.iter().take(MAX_INLINE_OPERATIONS) {
        render_operation(op, lines);
    }

    if schema.operations.len() > MAX_INLINE_OPERATIONS {
        lines.push(format!(
            "*... and {} more operations. See docs/full-api.md for complete reference.*",
            schema.operations.len() - MAX_INLINE_OPERATIONS
        ));
        lines.push(String::new());
    }
}

fn render_operation(op: &Operation, lines: &mut Vec<String>) {
    let method = op.method.to_uppercase();

    lines.push(format!("### {}", op.label()));
    lines.push(String::new());
    lines.push(format!("`{method} {}`", op.path));
    lines.push(String::new());

    let summary = op.summary.as_deref().filter(|s| !s.is_empty());
    if let Some(summary) = summary {
        lines.push(summary.to_string());
        lines.push(String::new());
    }

    if let Some(description) = op.description.as_deref().filter(|d| !d.is_empty()) {
        if Some(description) != summary {
            lines.push(description.to_string());
            lines.push(String::new());
        }
    }

    if !op.parameters.is_empty() {
        lines.push("**Parameters:**".to_string());
        lines.push(String::new());
        for param in &op.parameters {
            let required = if param.required { " (required)" } else { "" };
            lines.push(format!(
                "- `{}` ({}): {}{required}",
                param.name,
                param.location,
                param.type_name()
            ));
            if let Some(description) = param.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(format!("  - {description}"));
            }
        }
        lines.push(String::new());
    }

    if let Some(body) = &op.request_body {
        lines.push("**Request Body:**".to_string());
        lines.push(String::new());
        lines.push("```json".to_string());
        lines.push(pretty_json(body));
        lines.push("```".to_string());
        lines.push(String::new());
    }
}

/// Pretty-prints a JSON fragment with two-space indentation.
pub(crate) fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Capitalizes word-initial letters, treating hyphens and underscores as
/// word separators.
pub(crate) fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut start_of_word = true;
    for ch in name.chars() {
        if ch == '-' || ch == '_' || ch == ' ' {
            out.push(' ');
            start_of_word = true;
        } else if start_of_word {
            out.extend(ch.to_uppercase());
            start_of_word = false;
        } else {
            out.push(ch);
        }
    }
    out
}
