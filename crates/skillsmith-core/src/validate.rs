//! SKILL.md document validation.
//!
//! Checks the structural contract of a persisted skill document: the
//! frontmatter delimiters, the required `name`/`description` fields, the
//! slug shape, and the length bounds. Validation reports problems; it
//! never fails.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9-]+$").expect("valid name pattern"));

/// Outcome of validating a SKILL.md document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Whether the document passed every check.
    pub valid: bool,

    /// Human-readable problems, empty when valid.
    pub errors: Vec<String>,
}

/// Validates a SKILL.md document.
///
/// # Examples
///
/// ```
/// use skillsmith_core::validate_document;
///
/// let report = validate_document("---\nname: demo\ndescription: A demo.\n---\n\n# Demo\n");
/// assert!(report.valid);
///
/// let report = validate_document("# Not a skill document\n");
/// assert!(!report.valid);
/// ```
#[must_use]
pub fn validate_document(document: &str) -> DocumentReport {
    let mut errors = Vec::new();

    if !document.starts_with("---") {
        errors.push("SKILL.md must start with --- (YAML frontmatter)".to_string());
    }

    let lines: Vec<&str> = document.split('\n').collect();
    let frontmatter_end = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == "---")
        .map(|(index, _)| index);

    match frontmatter_end {
        None => errors.push("Missing closing --- for YAML frontmatter".to_string()),
        Some(end) => {
            let frontmatter = &lines[1..end];

            if !frontmatter.iter().any(|line| line.contains("name:")) {
                errors.push("Missing required field: name".to_string());
            }
            if !frontmatter.iter().any(|line| line.contains("description:")) {
                errors.push("Missing required field: description".to_string());
            }

            for line in frontmatter {
                if let Some(name) = line.strip_prefix("name:") {
                    let name = name.trim();
                    if !NAME_PATTERN.is_match(name) {
                        errors.push(
                            "name must be lowercase letters, numbers, and hyphens only"
                                .to_string(),
                        );
                    }
                    if name.len() > 64 {
                        errors.push("name must be 64 characters or less".to_string());
                    }
                }
                if let Some(description) = line.strip_prefix("description:") {
                    if description.trim().len() > 1024 {
                        errors.push("description must be 1024 characters or less".to_string());
                    }
                }
            }
        }
    }

    DocumentReport {
        valid: errors.is_empty(),
        errors,
    }
}
