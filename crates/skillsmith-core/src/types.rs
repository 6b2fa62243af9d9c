//! Strong domain types for skill conversion.
//!
//! This module implements the newtype pattern to provide type safety for
//! domain primitives shared across the converter crates.
//!
//! # Examples
//!
//! ```
//! use skillsmith_core::{SkillName, SourceType};
//!
//! let name = SkillName::slug("My Petstore API");
//! assert_eq!(name.as_str(), "my-petstore-api");
//!
//! let source_type: SourceType = "openapi".parse().unwrap();
//! assert_eq!(source_type, SourceType::OpenApi);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source document format selector.
///
/// Each variant selects one converter. The wire representation matches the
/// type tags used by conversion requests: `mcp`, `rest-api`, `openapi`.
///
/// # Examples
///
/// ```
/// use skillsmith_core::SourceType;
///
/// assert_eq!(SourceType::RestApi.as_str(), "rest-api");
/// assert_eq!("mcp".parse::<SourceType>().unwrap(), SourceType::Mcp);
/// assert!("soap".parse::<SourceType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    /// MCP server manifest.
    #[serde(rename = "mcp")]
    Mcp,

    /// Ad-hoc REST API config.
    #[serde(rename = "rest-api")]
    RestApi,

    /// OpenAPI specification.
    #[serde(rename = "openapi")]
    OpenApi,
}

impl SourceType {
    /// Returns the wire tag for this source type.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mcp => "mcp",
            Self::RestApi => "rest-api",
            Self::OpenApi => "openapi",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mcp" => Ok(Self::Mcp),
            "rest-api" => Ok(Self::RestApi),
            "openapi" => Ok(Self::OpenApi),
            other => Err(Error::UnsupportedSourceType {
                value: other.to_string(),
            }),
        }
    }
}

/// Skill name slug (newtype over String).
///
/// Skill names follow the Claude Code naming rules: at most 64 characters,
/// only lowercase letters, numbers, and hyphens, with no leading, trailing,
/// or repeated hyphens.
///
/// The [`SkillName::slug`] constructor is total: it maps any input onto a
/// valid slug. Input containing no letters or digits at all degenerates to
/// the empty string; callers that need a non-empty name are expected to
/// supply a non-empty fallback title before slugging.
///
/// # Examples
///
/// ```
/// use skillsmith_core::SkillName;
///
/// assert_eq!(SkillName::slug("Pet Store").as_str(), "pet-store");
/// assert_eq!(SkillName::slug("weather__v2!").as_str(), "weather-v2");
/// assert_eq!(SkillName::slug("!!!").as_str(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillName(String);

impl SkillName {
    /// Maximum slug length in characters.
    pub const MAX_LEN: usize = 64;

    /// Builds a slug from an arbitrary title.
    ///
    /// Lowercases the input, collapses every run of characters outside
    /// `[a-z0-9-]` into a single hyphen, strips edge hyphens, and truncates
    /// to 64 characters (re-stripping any hyphen the cut exposes). Never
    /// fails; an all-symbol input yields the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillsmith_core::SkillName;
    ///
    /// let name = SkillName::slug("GitHub -- Issues & PRs");
    /// assert_eq!(name.as_str(), "github-issues-prs");
    /// ```
    #[must_use]
    pub fn slug(title: impl AsRef<str>) -> Self {
        let title = title.as_ref();
        let mut slug = String::with_capacity(title.len().min(Self::MAX_LEN));
        for ch in title.chars() {
            let ch = ch.to_ascii_lowercase();
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                slug.push(ch);
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        if slug.len() > Self::MAX_LEN {
            slug.truncate(Self::MAX_LEN);
            while slug.ends_with('-') {
                slug.pop();
            }
        }
        Self(slug)
    }

    /// Returns the slug as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillsmith_core::SkillName;
    ///
    /// let name = SkillName::slug("test-skill");
    /// assert_eq!(name.as_str(), "test-skill");
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `SkillName` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_wire_tags() {
        assert_eq!(SourceType::Mcp.as_str(), "mcp");
        assert_eq!(SourceType::RestApi.as_str(), "rest-api");
        assert_eq!(SourceType::OpenApi.as_str(), "openapi");
    }

    #[test]
    fn test_source_type_serde_round_trip() {
        let json = serde_json::to_string(&SourceType::RestApi).unwrap();
        assert_eq!(json, "\"rest-api\"");
        let parsed: SourceType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SourceType::RestApi);
    }

    #[test]
    fn test_source_type_from_str_rejects_unknown() {
        let err = "grpc".parse::<SourceType>().unwrap_err();
        assert!(err.is_unsupported_source_type());
    }

    #[test]
    fn test_slug_lowercases_and_hyphenates() {
        assert_eq!(SkillName::slug("Pet Store").as_str(), "pet-store");
        assert_eq!(SkillName::slug("My API!!").as_str(), "my-api");
        assert_eq!(SkillName::slug("a_b_c").as_str(), "a-b-c");
    }

    #[test]
    fn test_slug_collapses_runs() {
        assert_eq!(SkillName::slug("a---b").as_str(), "a-b");
        assert_eq!(SkillName::slug("a  &  b").as_str(), "a-b");
    }

    #[test]
    fn test_slug_strips_edge_hyphens() {
        assert_eq!(SkillName::slug("-edge-").as_str(), "edge");
        assert_eq!(SkillName::slug("  spaced  ").as_str(), "spaced");
    }

    #[test]
    fn test_slug_truncates_to_64() {
        let name = SkillName::slug("a".repeat(80));
        assert_eq!(name.as_str().len(), 64);
    }

    #[test]
    fn test_slug_truncation_never_exposes_hyphen() {
        // Character 64 lands on the hyphen separating the two words.
        let input = format!("{}-tail", "a".repeat(63));
        let name = SkillName::slug(&input);
        assert_eq!(name.as_str(), "a".repeat(63));
    }

    #[test]
    fn test_slug_degenerate_input() {
        assert_eq!(SkillName::slug("!!!").as_str(), "");
        assert_eq!(SkillName::slug("").as_str(), "");
    }

    #[test]
    fn test_slug_preserves_unicode_as_separators() {
        assert_eq!(SkillName::slug("caf\u{e9} api").as_str(), "caf-api");
    }

    #[test]
    fn test_skill_name_display() {
        let name = SkillName::slug("test");
        assert_eq!(format!("{name}"), "test");
    }

    #[test]
    fn test_skill_name_serializes_as_string() {
        let name = SkillName::slug("petstore");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"petstore\"");
    }
}
