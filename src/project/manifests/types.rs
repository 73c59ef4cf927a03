use thiserror::Error;

/// A dependency as read from a single manifest, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDependency {
    pub name: String,
    pub constraint: Option<String>,
    pub dev: bool,
}

impl ParsedDependency {
    pub fn new(name: impl Into<String>, constraint: Option<String>, dev: bool) -> Self {
        Self {
            name: name.into(),
            constraint: normalize_constraint(constraint),
            dev,
        }
    }
}

/// Why a manifest contributed nothing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// The content is not valid in its declared format
    #[error("{0}")]
    Parse(String),

    /// The content parsed but is not shaped like any known manifest
    #[error("{0}")]
    Unsupported(String),
}

/// Blank and wildcard constraints both mean "any version"
fn normalize_constraint(constraint: Option<String>) -> Option<String> {
    constraint
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty() && c != "*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_constraint_is_any() {
        assert_eq!(ParsedDependency::new("x", Some("*".into()), false).constraint, None);
        assert_eq!(ParsedDependency::new("x", Some("  ".into()), false).constraint, None);
        assert_eq!(
            ParsedDependency::new("x", Some(" ^1.2 ".into()), false).constraint.as_deref(),
            Some("^1.2")
        );
    }
}
