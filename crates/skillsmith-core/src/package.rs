//! Pure packaging transform: skill + document → directory layout as data.
//!
//! No filesystem access happens here; the caller performs any actual file
//! writing. The layout is `{skill-name}/SKILL.md` plus one entry per
//! supporting file at `{skill-name}/{file.path}`.

use crate::Skill;
use serde::{Deserialize, Serialize};

/// One file in a packaged skill, addressed relative to the package root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagedFile {
    /// Path relative to the package root, e.g. `my-skill/SKILL.md`.
    pub path: String,

    /// File content.
    pub content: String,
}

/// A packaged skill: ordered file list plus installation hints.
///
/// The SKILL.md entry always comes first, followed by supporting files in
/// generation order, so repeated packaging of the same skill is
/// byte-stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPackage {
    /// Files keyed by relative path, SKILL.md first.
    pub files: Vec<PackagedFile>,

    /// Where the package is meant to be installed.
    pub install_path: String,

    /// Human-readable installation steps.
    pub instructions: String,
}

/// Builds the directory layout for a generated skill.
///
/// # Examples
///
/// ```
/// use skillsmith_core::{package, Skill, SkillMetadata, SkillName};
///
/// let skill = Skill {
///     metadata: SkillMetadata::new(SkillName::slug("weather"), "Forecasts."),
///     instructions: "# Weather\n".to_string(),
///     supporting_files: vec![],
/// };
/// let document = skill.to_document();
///
/// let package = package(&skill, &document);
/// assert_eq!(package.files[0].path, "weather/SKILL.md");
/// assert_eq!(package.install_path, ".claude/skills/weather/");
/// ```
#[must_use]
pub fn package(skill: &Skill, document: &str) -> SkillPackage {
    let name = skill.metadata.name.as_str();

    let mut files = Vec::with_capacity(1 + skill.supporting_files.len());
    files.push(PackagedFile {
        path: format!("{name}/SKILL.md"),
        content: document.to_string(),
    });
    for file in &skill.supporting_files {
        files.push(PackagedFile {
            path: format!("{name}/{}", file.path),
            content: file.content.clone(),
        });
    }

    SkillPackage {
        files,
        install_path: format!(".claude/skills/{name}/"),
        instructions: format!(
            "To install this skill:\n1. Copy the {name}/ folder to .claude/skills/ in your project\n2. Or copy to ~/.claude/skills/ for personal use\n3. Restart Claude Code"
        ),
    }
}
