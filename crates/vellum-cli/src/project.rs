//! Project files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::info;
use vellum_model::{ElementDefinition, Project};

/// Reads a JSON project file.
pub fn load_project(path: &Path) -> Result<Project> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let project = parse_project(&content).with_context(|| format!("in {}", path.display()))?;
    info!(
        path = %path.display(),
        elements = project.elements().count(),
        behaviors = project.behaviors().count(),
        "loaded project"
    );
    Ok(project)
}

pub fn parse_project(content: &str) -> Result<Project> {
    serde_json::from_str(content).context("parse project JSON")
}

/// Looks up an element by name, failing with the known names listed.
pub fn require_element<'a>(project: &'a Project, name: &str) -> Result<&'a ElementDefinition> {
    project.element(name).ok_or_else(|| {
        let known: Vec<_> = project.elements().map(|element| element.name.as_str()).collect();
        anyhow!("no element named {name} (known: {})", known.join(", "))
    })
}
