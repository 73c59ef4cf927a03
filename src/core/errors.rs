//! Error and warning types for repository analysis
//!
//! Only [`AnalysisError`] aborts a scan. Everything that goes wrong with a
//! single entry or a single manifest is reported as an [`AnalysisWarning`]
//! next to the finished model.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors returned by `analyze`
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Project root not found or not a directory: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid analysis configuration for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

/// Non-fatal problems encountered during a scan
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    #[error("Skipped unreadable entry {path}: {message}")]
    Permission { path: PathBuf, message: String },

    #[error("Failed to parse manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Unsupported manifest format in {path}: {message}")]
    UnsupportedFormat { path: PathBuf, message: String },

    #[error("Walk stopped after {limit} files")]
    Truncated { limit: usize },
}

impl AnalysisWarning {
    pub fn permission(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Permission {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn manifest_parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ManifestParse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn unsupported_format(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Errors raised while loading an analysis config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display_includes_path() {
        let warning = AnalysisWarning::manifest_parse("web/package.json", "expected value at line 1");
        assert_eq!(
            warning.to_string(),
            "Failed to parse manifest web/package.json: expected value at line 1"
        );
    }

    #[test]
    fn test_warning_serializes_with_kind_tag() {
        let warning = AnalysisWarning::Truncated { limit: 10 };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "truncated");
        assert_eq!(json["limit"], 10);
    }
}
