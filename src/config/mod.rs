//! Analysis configuration
//!
//! [`AnalysisConfig`] is the only way to customize a scan. The built-in tables
//! in [`crate::core::constants`] provide the defaults; nothing here mutates
//! process-wide state.

pub mod validation;

pub use validation::ValidatedConfig;

use crate::core::constants::{exclusions, limits};
use crate::core::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Options recognized by `analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Directory names that are never descended into
    pub excluded_dirs: BTreeSet<String>,
    /// Depth at which the directory tree collapses to counts (>= 1)
    pub max_depth: usize,
    /// Extra file names treated as dependency manifests
    pub extra_manifest_names: BTreeSet<String>,
    /// Dot-prefixed names that are still walked
    pub include_hidden_whitelist: BTreeSet<String>,
    /// Glob patterns matched against file names to skip
    pub ignored_file_patterns: Vec<String>,
    /// Stop the walk after this many files
    pub max_files: Option<usize>,
    /// Overrides the name derived from the root directory
    pub project_name: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: to_set(exclusions::EXCLUDED_DIRS),
            max_depth: limits::DEFAULT_MAX_DEPTH,
            extra_manifest_names: BTreeSet::new(),
            include_hidden_whitelist: to_set(exclusions::HIDDEN_WHITELIST),
            ignored_file_patterns: exclusions::IGNORED_FILE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            max_files: None,
            project_name: None,
        }
    }
}

impl AnalysisConfig {
    /// Load a config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn with_excluded_dir(mut self, name: impl Into<String>) -> Self {
        self.excluded_dirs.insert(name.into());
        self
    }

    pub fn with_extra_manifest(mut self, name: impl Into<String>) -> Self {
        self.extra_manifest_names.insert(name.into());
        self
    }

    pub fn with_max_files(mut self, limit: usize) -> Self {
        self.max_files = Some(limit);
        self
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_tables() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_depth, 3);
        assert!(config.excluded_dirs.contains("node_modules"));
        assert!(config.excluded_dirs.contains(".git"));
        assert!(config.include_hidden_whitelist.contains(".env.example"));
        assert!(config.max_files.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AnalysisConfig::from_toml_str(
            r#"
max_depth = 5
extra_manifest_names = ["requirements-prod.txt"]
"#,
        )
        .unwrap();

        assert_eq!(config.max_depth, 5);
        assert!(config.extra_manifest_names.contains("requirements-prod.txt"));
        assert!(config.excluded_dirs.contains("node_modules"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "project_name = \"demo\"\nmax_files = 100").unwrap();

        let config = AnalysisConfig::load(file.path()).unwrap();
        assert_eq!(config.project_name.as_deref(), Some("demo"));
        assert_eq!(config.max_files, Some(100));
    }

    #[test]
    fn test_load_reports_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_depth = \"deep\"").unwrap();

        let err = AnalysisConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
