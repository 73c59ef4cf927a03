//! Cargo.toml

use super::toml_constraint;
use crate::project::manifests::types::{ManifestError, ParsedDependency};

const SECTIONS: &[(&str, bool)] = &[
    ("dependencies", false),
    ("build-dependencies", false),
    ("dev-dependencies", true),
];

pub fn parse_cargo_toml(content: &str) -> Result<Vec<ParsedDependency>, ManifestError> {
    let manifest: toml::Value =
        toml::from_str(content).map_err(|e| ManifestError::Parse(e.to_string()))?;

    let mut dependencies = Vec::new();
    push_sections(&mut dependencies, &manifest);

    if let Some(workspace_deps) = manifest
        .get("workspace")
        .and_then(|w| w.get("dependencies"))
        .and_then(|d| d.as_table())
    {
        push_table(&mut dependencies, workspace_deps, false);
    }

    // [target.'cfg(...)'.dependencies]
    if let Some(targets) = manifest.get("target").and_then(|t| t.as_table()) {
        for target in targets.values() {
            push_sections(&mut dependencies, target);
        }
    }

    Ok(dependencies)
}

fn push_sections(dependencies: &mut Vec<ParsedDependency>, scope: &toml::Value) {
    for (section, dev) in SECTIONS {
        if let Some(table) = scope.get(*section).and_then(|d| d.as_table()) {
            push_table(dependencies, table, *dev);
        }
    }
}

fn push_table(dependencies: &mut Vec<ParsedDependency>, table: &toml::Table, dev: bool) {
    for (name, value) in table {
        // `foo = { package = "bar" }` renames the crate
        let crate_name = value
            .get("package")
            .and_then(|p| p.as_str())
            .unwrap_or(name.as_str());
        dependencies.push(ParsedDependency::new(crate_name, toml_constraint(value), dev));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_cargo_sections() {
        let content = r#"
[package]
name = "demo"

[dependencies]
serde = { version = "1.0", features = ["derive"] }
tokio = "1.35"
core = { path = "../core" }
json = { package = "serde_json", version = "1" }

[dev-dependencies]
tempfile = "3"

[target.'cfg(unix)'.dependencies]
libc = "0.2"
"#;

        let deps = parse_cargo_toml(content).unwrap();
        assert_eq!(
            deps,
            vec![
                ParsedDependency::new("core", None, false),
                ParsedDependency::new("serde_json", Some("1".into()), false),
                ParsedDependency::new("serde", Some("1.0".into()), false),
                ParsedDependency::new("tokio", Some("1.35".into()), false),
                ParsedDependency::new("tempfile", Some("3".into()), true),
                ParsedDependency::new("libc", Some("0.2".into()), false),
            ]
        );
    }

    #[test]
    fn test_invalid_cargo_toml() {
        assert!(matches!(
            parse_cargo_toml("[dependencies\nserde ="),
            Err(ManifestError::Parse(_))
        ));
    }
}
