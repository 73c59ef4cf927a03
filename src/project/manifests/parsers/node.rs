//! package.json

use serde_json::Value as JsonValue;

use crate::project::manifests::types::{ManifestError, ParsedDependency};

/// Dependency sections and whether they are dev-scoped
const SECTIONS: &[(&str, bool)] = &[
    ("dependencies", false),
    ("peerDependencies", false),
    ("optionalDependencies", false),
    ("devDependencies", true),
];

pub fn parse_package_json(content: &str) -> Result<Vec<ParsedDependency>, ManifestError> {
    let package: JsonValue =
        serde_json::from_str(content).map_err(|e| ManifestError::Parse(e.to_string()))?;

    let package = package.as_object().ok_or_else(|| {
        ManifestError::Unsupported("expected a JSON object at the top level".to_string())
    })?;

    let mut dependencies = Vec::new();

    for (section, dev) in SECTIONS {
        let Some(entries) = package.get(*section).and_then(|d| d.as_object()) else {
            continue;
        };

        for (name, value) in entries {
            let constraint = match value {
                JsonValue::String(version) => Some(version.clone()),
                JsonValue::Object(spec) => spec
                    .get("version")
                    .and_then(|v| v.as_str())
                    .map(String::from),
                _ => None,
            };
            dependencies.push(ParsedDependency::new(name.clone(), constraint, *dev));
        }
    }

    Ok(dependencies)
}
