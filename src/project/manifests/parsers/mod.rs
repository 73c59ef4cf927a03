//! One parser per manifest grammar

pub mod cargo;
pub mod java;
pub mod node;
pub mod python;

/// Version of a TOML dependency entry: the string itself, or the `version`
/// key of an inline table. Path/git/workspace entries have none.
pub(crate) fn toml_constraint(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(version) => Some(version.clone()),
        toml::Value::Table(table) => table
            .get("version")
            .and_then(|v| v.as_str())
            .map(String::from),
        _ => None,
    }
}
