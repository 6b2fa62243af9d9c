//! `skillsmith validate` implementation.

use anyhow::{Context, Result, bail};
use skillsmith_core::validate_document;
use std::fs;
use std::path::Path;

/// Validates a SKILL.md document on disk.
pub fn run(file: &Path) -> Result<()> {
    let document =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let report = validate_document(&document);

    if report.valid {
        println!("{}: valid skill document", file.display());
        return Ok(());
    }

    for error in &report.errors {
        eprintln!("error: {error}");
    }
    bail!(
        "{} validation error(s) in {}",
        report.errors.len(),
        file.display()
    );
}
