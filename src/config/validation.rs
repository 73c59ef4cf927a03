//! Configuration validation

use super::AnalysisConfig;
use crate::core::{AnalysisError, AnalysisResult};
use glob::Pattern;

/// A config that passed validation, with its glob patterns compiled
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub config: AnalysisConfig,
    ignored_patterns: Vec<Pattern>,
}

impl ValidatedConfig {
    /// Whether a file name matches one of the ignored patterns
    pub fn is_ignored_file(&self, file_name: &str) -> bool {
        self.ignored_patterns.iter().any(|p| p.matches(file_name))
    }
}

impl AnalysisConfig {
    /// Check the invariants `analyze` relies on
    pub fn validate(&self) -> AnalysisResult<ValidatedConfig> {
        if self.max_depth == 0 {
            return Err(invalid("max_depth", "must be at least 1"));
        }

        if self.max_files == Some(0) {
            return Err(invalid("max_files", "must be at least 1 when set"));
        }

        if let Some(name) = &self.project_name {
            if name.trim().is_empty() {
                return Err(invalid("project_name", "must not be blank"));
            }
        }

        if let Some(name) = self
            .excluded_dirs
            .iter()
            .chain(self.extra_manifest_names.iter())
            .find(|n| n.is_empty() || n.contains('/') || n.contains('\\'))
        {
            return Err(invalid(
                "excluded_dirs/extra_manifest_names",
                &format!("'{name}' must be a bare file or directory name"),
            ));
        }

        let ignored_patterns = self
            .ignored_file_patterns
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .map_err(|e| invalid("ignored_file_patterns", &format!("'{p}': {e}")))
            })
            .collect::<AnalysisResult<Vec<_>>>()?;

        Ok(ValidatedConfig {
            config: self.clone(),
            ignored_patterns,
        })
    }
}

fn invalid(field: &str, reason: &str) -> AnalysisError {
    AnalysisError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
