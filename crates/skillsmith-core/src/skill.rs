//! The skill artifact model and its persisted SKILL.md form.
//!
//! A [`Skill`] is constructed once per conversion request, never mutated
//! after construction, and serialized immediately to its SKILL.md document
//! via [`Skill::to_document`]. The document's header layout is load-bearing:
//! downstream consumers parse it by delimiter position, so field order and
//! delimiter placement are exact and stable.
//!
//! # Examples
//!
//! ```
//! use skillsmith_core::{Skill, SkillMetadata, SkillName};
//!
//! let skill = Skill {
//!     metadata: SkillMetadata::new(SkillName::slug("weather"), "Query forecasts."),
//!     instructions: "# Weather Skill\n".to_string(),
//!     supporting_files: vec![],
//! };
//!
//! let document = skill.to_document();
//! assert!(document.starts_with("---\nname: weather\n"));
//! ```

use crate::SkillName;
use serde::{Deserialize, Serialize};

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1024;

/// SKILL.md frontmatter fields.
///
/// Wire names follow the SKILL.md header: `name`, `description`,
/// `allowed-tools`, `model`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMetadata {
    /// Skill name slug.
    pub name: SkillName,

    /// What the skill does and when to use it. Never exceeds
    /// [`MAX_DESCRIPTION_CHARS`] characters.
    pub description: String,

    /// Optional allowlist of tool identifiers the skill may invoke.
    /// Absent means no restriction.
    #[serde(
        rename = "allowed-tools",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_tools: Option<Vec<String>>,

    /// Optional model hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl SkillMetadata {
    /// Creates metadata with the description clamped to the 1024-character
    /// bound. Oversized descriptions are cut to 1021 characters and `...`
    /// appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillsmith_core::{SkillMetadata, SkillName, MAX_DESCRIPTION_CHARS};
    ///
    /// let metadata = SkillMetadata::new(SkillName::slug("big"), "x".repeat(2000));
    /// assert_eq!(metadata.description.chars().count(), MAX_DESCRIPTION_CHARS);
    /// assert!(metadata.description.ends_with("..."));
    /// ```
    #[must_use]
    pub fn new(name: SkillName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: clamp_description(description.into()),
            allowed_tools: None,
            model: None,
        }
    }

    /// Sets the tool allowlist.
    #[must_use]
    pub fn with_allowed_tools(mut self, tools: Vec<String>) -> Self {
        self.allowed_tools = Some(tools);
        self
    }

    /// Sets the model hint.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

fn clamp_description(description: String) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        return description;
    }
    let mut clamped: String = description.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
    clamped.push_str("...");
    clamped
}

/// A supporting file in the skill directory.
///
/// Generated only when inline instructions would be too large to embed
/// everything; the path is relative to the skill directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportingFile {
    /// Relative path, e.g. `docs/full-api.md`.
    pub path: String,

    /// File content.
    pub content: String,
}

impl SupportingFile {
    /// Creates a new supporting file.
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A complete skill artifact.
///
/// # Examples
///
/// ```
/// use skillsmith_core::{Skill, SkillMetadata, SkillName, SupportingFile};
///
/// let skill = Skill {
///     metadata: SkillMetadata::new(SkillName::slug("github"), "Work with GitHub."),
///     instructions: "# GitHub Skill\n".to_string(),
///     supporting_files: vec![SupportingFile::new("docs/full-api.md", "# Reference\n")],
/// };
///
/// assert_eq!(skill.supporting_files.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Frontmatter metadata.
    pub metadata: SkillMetadata,

    /// Markdown instruction body (everything after the frontmatter).
    pub instructions: String,

    /// Supporting files, in generation order.
    #[serde(rename = "supportingFiles", default)]
    pub supporting_files: Vec<SupportingFile>,
}

impl Skill {
    /// Serializes the skill to its persisted SKILL.md document.
    ///
    /// The header is a YAML-like block bounded by a `---` line above and
    /// below, followed by a blank line and the instruction body verbatim:
    ///
    /// ```text
    /// ---
    /// name: my-skill
    /// description: ...
    /// allowed-tools:        (only when present)
    ///   - Bash
    /// model: ...            (only when present)
    /// ---
    ///
    /// # Instructions ...
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use skillsmith_core::{Skill, SkillMetadata, SkillName};
    ///
    /// let skill = Skill {
    ///     metadata: SkillMetadata::new(SkillName::slug("demo"), "A demo."),
    ///     instructions: "# Demo\n".to_string(),
    ///     supporting_files: vec![],
    /// };
    /// assert_eq!(skill.to_document(), "---\nname: demo\ndescription: A demo.\n---\n\n# Demo\n");
    /// ```
    #[must_use]
    pub fn to_document(&self) -> String {
        let mut lines: Vec<String> = vec!["---".to_string()];
        lines.push(format!("name: {}", self.metadata.name));
        lines.push(format!("description: {}", self.metadata.description));

        if let Some(tools) = &self.metadata.allowed_tools {
            lines.push("allowed-tools:".to_string());
            for tool in tools {
                lines.push(format!("  - {tool}"));
            }
        }

        if let Some(model) = &self.metadata.model {
            lines.push(format!("model: {model}"));
        }

        lines.push("---".to_string());
        lines.push(String::new());
        lines.push(self.instructions.clone());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_skill() -> Skill {
        Skill {
            metadata: SkillMetadata::new(SkillName::slug("My Service"), "Does things."),
            instructions: "# Body\n".to_string(),
            supporting_files: vec![],
        }
    }

    #[test]
    fn test_document_minimal_header() {
        let doc = sample_skill().to_document();
        assert_eq!(doc, "---\nname: my-service\ndescription: Does things.\n---\n\n# Body\n");
    }

    #[test]
    fn test_document_full_header() {
        let mut skill = sample_skill();
        skill.metadata = skill
            .metadata
            .with_allowed_tools(vec!["Bash".to_string(), "Read".to_string()])
            .with_model("claude-sonnet-4".to_string());

        let doc = skill.to_document();
        assert_eq!(
            doc,
            "---\nname: my-service\ndescription: Does things.\nallowed-tools:\n  - Bash\n  - Read\nmodel: claude-sonnet-4\n---\n\n# Body\n"
        );
    }

    #[test]
    fn test_document_header_field_order() {
        let mut skill = sample_skill();
        skill.metadata = skill.metadata.with_model("claude-haiku-4".to_string());
        let doc = skill.to_document();

        let name_pos = doc.find("name:").unwrap();
        let desc_pos = doc.find("description:").unwrap();
        let model_pos = doc.find("model:").unwrap();
        assert!(name_pos < desc_pos);
        assert!(desc_pos < model_pos);
    }

    #[test]
    fn test_description_clamped_with_ellipsis() {
        let metadata = SkillMetadata::new(SkillName::slug("big"), "y".repeat(5000));
        assert_eq!(metadata.description.chars().count(), MAX_DESCRIPTION_CHARS);
        assert!(metadata.description.ends_with("..."));
    }

    #[test]
    fn test_description_under_bound_untouched() {
        let metadata = SkillMetadata::new(SkillName::slug("small"), "short");
        assert_eq!(metadata.description, "short");
    }

    #[test]
    fn test_metadata_wire_names() {
        let metadata = SkillMetadata::new(SkillName::slug("wire"), "desc")
            .with_allowed_tools(vec!["Bash".to_string()]);
        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json.get("allowed-tools").is_some());
        assert!(json.get("allowed_tools").is_none());
    }

    #[test]
    fn test_skill_wire_names() {
        let skill = sample_skill();
        let json = serde_json::to_value(&skill).unwrap();
        assert!(json.get("supportingFiles").is_some());
    }
}
