//! Core types, serialization, and errors for skillsmith.
//!
//! This crate provides the foundational types shared by the converter
//! crates: the skill artifact model, the SKILL.md document serializer,
//! the packaging transform, and the error hierarchy.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`SkillName`, `SourceType`)
//! - The `Skill` artifact model and its persisted SKILL.md form
//! - The pure `package` transform (directory layout as data)
//! - The SKILL.md document validator
//! - Error hierarchy with contextual information

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod package;
mod skill;
mod types;
mod validate;

pub use error::{Error, Result};
pub use package::{PackagedFile, SkillPackage, package};
pub use skill::{MAX_DESCRIPTION_CHARS, Skill, SkillMetadata, SupportingFile};
pub use types::{SkillName, SourceType};
pub use validate::{DocumentReport, validate_document};
