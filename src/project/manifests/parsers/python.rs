//! pip requirement lists and pyproject.toml

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::toml_constraint;
use crate::project::manifests::types::{ManifestError, ParsedDependency};

/// `name[extras] <rest>` where rest holds the version spec or a direct reference
static REQUIREMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>[A-Za-z0-9][A-Za-z0-9._-]*)\s*(?:\[[^\]]*\])?\s*(?P<rest>.*)$")
        .expect("requirement pattern is valid")
});

const VERSION_OPERATOR_CHARS: &[char] = &['=', '<', '>', '!', '~'];

/// Parse one PEP 508 style requirement into a name and constraint.
/// Environment markers are dropped. Returns `None` for lines that are not a
/// named requirement.
pub fn parse_requirement(spec: &str) -> Option<(String, Option<String>)> {
    let spec = spec.split(';').next().unwrap_or("").trim();
    if spec.is_empty() {
        return None;
    }

    let caps = REQUIREMENT.captures(spec)?;
    let name = caps["name"].to_string();
    let rest = caps["rest"].trim();

    if rest.is_empty() || rest.starts_with('@') {
        return Some((name, None));
    }

    let rest = rest.trim_start_matches('(').trim_end_matches(')').trim();
    if !rest.starts_with(VERSION_OPERATOR_CHARS) {
        return None;
    }

    let constraint: String = rest.chars().filter(|c| !c.is_whitespace()).collect();
    Some((name, Some(constraint)))
}

/// requirements.txt: one requirement per line. Options (`-r`, `-e`,
/// `--hash`), comments and unrecognized lines are skipped.
pub fn parse_requirements(content: &str, dev: bool) -> Vec<ParsedDependency> {
    let mut dependencies = Vec::new();

    for raw in content.lines() {
        let line = strip_comment(raw).trim().trim_end_matches('\\').trim();
        if line.is_empty() || line.starts_with('-') {
            continue;
        }

        let line = match line.find(" --") {
            Some(idx) => &line[..idx],
            None => line,
        };

        match parse_requirement(line) {
            Some((name, constraint)) => {
                dependencies.push(ParsedDependency::new(name, constraint, dev));
            }
            None => debug!("Skipping unrecognized requirement line: {}", line),
        }
    }

    dependencies
}

fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    match line.find(" #") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// pyproject.toml: PEP 621 `[project]` and its extras, PEP 735 `[dependency-groups]` and
/// Poetry's `[tool.poetry]` tables.
pub fn parse_pyproject(content: &str) -> Result<Vec<ParsedDependency>, ManifestError> {
    let pyproject: toml::Value =
        toml::from_str(content).map_err(|e| ManifestError::Parse(e.to_string()))?;

    let mut dependencies = Vec::new();

    if let Some(project) = pyproject.get("project") {
        if let Some(specs) = project.get("dependencies").and_then(|d| d.as_array()) {
            push_specs(&mut dependencies, specs, false);
        }

        // Extras sit outside the default scope
        if let Some(extras) = project.get("optional-dependencies").and_then(|o| o.as_table()) {
            for specs in extras.values().filter_map(|e| e.as_array()) {
                push_specs(&mut dependencies, specs, true);
            }
        }
    }

    if let Some(groups) = pyproject.get("dependency-groups").and_then(|g| g.as_table()) {
        for specs in groups.values().filter_map(|g| g.as_array()) {
            push_specs(&mut dependencies, specs, true);
        }
    }

    if let Some(poetry) = pyproject.get("tool").and_then(|t| t.get("poetry")) {
        if let Some(table) = poetry.get("dependencies").and_then(|d| d.as_table()) {
            push_poetry_table(&mut dependencies, table, false);
        }

        if let Some(table) = poetry.get("dev-dependencies").and_then(|d| d.as_table()) {
            push_poetry_table(&mut dependencies, table, true);
        }

        if let Some(groups) = poetry.get("group").and_then(|g| g.as_table()) {
            for table in groups
                .values()
                .filter_map(|g| g.get("dependencies"))
                .filter_map(|d| d.as_table())
            {
                push_poetry_table(&mut dependencies, table, true);
            }
        }
    }

    Ok(dependencies)
}

fn push_specs(dependencies: &mut Vec<ParsedDependency>, specs: &[toml::Value], dev: bool) {
    for spec in specs.iter().filter_map(|s| s.as_str()) {
        match parse_requirement(spec) {
            Some((name, constraint)) => dependencies.push(ParsedDependency::new(name, constraint, dev)),
            None => debug!("Skipping unrecognized requirement: {}", spec),
        }
    }
}

fn push_poetry_table(dependencies: &mut Vec<ParsedDependency>, table: &toml::Table, dev: bool) {
    for (name, value) in table {
        // Interpreter constraint, not a package
        if name == "python" {
            continue;
        }
        dependencies.push(ParsedDependency::new(name.clone(), toml_constraint(value), dev));
    }
}
