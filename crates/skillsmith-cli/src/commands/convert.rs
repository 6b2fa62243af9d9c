//! `skillsmith convert` implementation.

use anyhow::{Context, Result, bail};
use skillsmith_convert::{ConvertOptions, ConvertRequest, SourceInput, dispatch};
use skillsmith_core::{SkillPackage, SourceType, package};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Runs a conversion and prints SKILL.md, prints the JSON envelope, or
/// writes the packaged directory tree.
pub fn run(
    source: Option<&Path>,
    source_type: &str,
    out: Option<&Path>,
    json: bool,
    no_docs: bool,
) -> Result<()> {
    let source_type: SourceType = source_type.parse()?;
    let raw = read_source(source)?;

    let request = ConvertRequest {
        source_type,
        source: SourceInput::Text(raw),
        options: Some(ConvertOptions {
            generate_docs: !no_docs,
        }),
    };
    let response = dispatch(&request);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        if !response.success {
            bail!("conversion failed");
        }
        return Ok(());
    }

    let (Some(skill), Some(skill_md)) = (response.skill, response.skill_md) else {
        let errors = response.errors.unwrap_or_default();
        bail!("conversion failed: {}", errors.join("; "));
    };

    match out {
        None => print!("{skill_md}"),
        Some(base) => {
            let package = package(&skill, &skill_md);
            write_package(&package, base)?;
            info!(
                "Wrote skill '{}': {} file(s)",
                skill.metadata.name,
                package.files.len()
            );
            println!(
                "Wrote {} file(s) under {}",
                package.files.len(),
                base.join(skill.metadata.name.as_str()).display()
            );
            println!("Install hint: {}", package.install_path);
        }
    }

    Ok(())
}

fn read_source(source: Option<&Path>) -> Result<String> {
    match source {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading source document from stdin")?;
            Ok(raw)
        }
    }
}

fn write_package(package: &SkillPackage, base: &Path) -> Result<()> {
    for file in &package.files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, &file.content).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
