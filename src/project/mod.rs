//! # Project Analysis
//!
//! The analysis engine. One call to [`analyze`] walks a root directory,
//! classifies every file, detects languages, extracts declared
//! dependencies and summarizes the directory layout into a
//! [`ProjectModel`].
//!
//! ## Pipeline
//!
//! 1. [`walker`] yields non-excluded files and directories, depth first
//! 2. [`classifier`] assigns each file a [`FileCategory`]
//! 3. [`languages`] accumulates per-language totals
//! 4. [`manifests`] parses every manifest in walk order
//! 5. [`structure_analyzer`] builds the depth-capped tree
//!
//! Scans are read-only and share no state, so any number can run at once.
//! Per-file and per-manifest failures become [`AnalysisWarning`]s on the
//! returned [`AnalysisReport`]; only a missing root or an invalid config
//! fails the call.

pub mod classifier;
pub mod languages;
pub mod manifests;
pub mod structure_analyzer;
pub mod types;
pub mod walker;

pub use classifier::{FileClassifier, Rule};
pub use languages::{LanguageDetector, LanguageSummary};
pub use manifests::{DependencyCollector, ManifestKind};
pub use structure_analyzer::{TreeBuilder, TreeRenderer};
pub use types::{
    AnalysisReport, Dependency, DirectoryNode, Ecosystem, FileCategory, FileEntry, KeyFile,
    KeyFileRole, LanguageStat, ProjectModel,
};
pub use walker::{PathWalker, WalkEntry};

use crate::config::{AnalysisConfig, ValidatedConfig};
use crate::core::{AnalysisResult, AnalysisWarning};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Analyze the project rooted at `root`
pub fn analyze(root: impl AsRef<Path>, config: &AnalysisConfig) -> AnalysisResult<AnalysisReport> {
    ProjectAnalyzer::new(config)?.analyze(root.as_ref())
}

/// Reusable analyzer holding a validated config
#[derive(Debug, Clone)]
pub struct ProjectAnalyzer {
    config: ValidatedConfig,
    classifier: FileClassifier,
}

impl ProjectAnalyzer {
    pub fn new(config: &AnalysisConfig) -> AnalysisResult<Self> {
        Ok(Self {
            config: config.validate()?,
            classifier: FileClassifier::new(config),
        })
    }

    pub fn analyze(&self, root: &Path) -> AnalysisResult<AnalysisReport> {
        let walker = PathWalker::new(root, &self.config)?;
        let root = walker.root().to_path_buf();
        let name = match &self.config.config.project_name {
            Some(name) => name.clone(),
            None => root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| root.display().to_string()),
        };
        info!("Analyzing project {} at {}", name, root.display());

        let mut warnings = Vec::new();
        let mut tree = TreeBuilder::new(name.clone());
        let mut detector = LanguageDetector::new();
        let mut files = Vec::new();

        for item in walker.walk() {
            match item {
                Ok(WalkEntry::Directory { relative_path }) => tree.add_directory(&relative_path),
                Ok(WalkEntry::File {
                    relative_path,
                    absolute_path,
                    size,
                }) => {
                    let category = self.classifier.classify(&relative_path);
                    debug!("{} -> {}", relative_path, category);
                    let entry = FileEntry {
                        relative_path,
                        absolute_path,
                        size,
                        category,
                    };
                    detector.record(&entry);
                    files.push(entry);
                }
                Err(warning) => {
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        let mut collector = DependencyCollector::new();
        for manifest in files.iter().filter(|f| f.category == FileCategory::Manifest) {
            if let Err(warning) = collector.collect(manifest) {
                warnings.push(warning);
            }
        }

        let mut category_counts = BTreeMap::new();
        for file in &files {
            *category_counts.entry(file.category).or_insert(0) += 1;
        }

        let key_files = collect_key_files(&files);
        let total_files = files.len();
        let total_bytes = files.iter().map(|f| f.size).sum();
        let summary = detector.finish();

        for file in files {
            tree.add_file(file);
        }

        let model = ProjectModel {
            root,
            name,
            primary_language: summary.primary,
            languages: summary.languages,
            dependencies: collector.finish(),
            key_files,
            tree: tree.build(self.config.config.max_depth),
            total_files,
            total_bytes,
            category_counts,
        };

        info!(
            "Analyzed {}: {} files, {} languages, {} dependencies, {} warnings",
            model.name,
            model.total_files,
            model.languages.len(),
            model.dependencies.len(),
            warnings.len()
        );

        Ok(AnalysisReport { model, warnings })
    }
}

/// Entry points, manifests, documentation and deployment files, by path
fn collect_key_files(files: &[FileEntry]) -> Vec<KeyFile> {
    let mut key_files: Vec<KeyFile> = files
        .iter()
        .filter_map(|entry| {
            key_file_role(entry).map(|role| KeyFile {
                role,
                entry: entry.clone(),
            })
        })
        .collect();
    key_files.sort_by(|a, b| a.entry.relative_path.cmp(&b.entry.relative_path));
    key_files
}

fn key_file_role(entry: &FileEntry) -> Option<KeyFileRole> {
    let file_name = entry.file_name();

    match entry.category {
        FileCategory::Manifest => return Some(KeyFileRole::Manifest),
        FileCategory::EntryPoint => return Some(KeyFileRole::EntryPoint),
        FileCategory::Documentation => return Some(documentation_role(file_name)),
        _ => {}
    }

    match file_name {
        "Dockerfile" | "docker-compose.yml" | "docker-compose.yaml" | "compose.yml"
        | "compose.yaml" => Some(KeyFileRole::Docker),
        ".gitlab-ci.yml" | ".travis.yml" => Some(KeyFileRole::Ci),
        ".env.example" | ".env.sample" => Some(KeyFileRole::EnvTemplate),
        _ if entry.relative_path.starts_with(".github/workflows/") => Some(KeyFileRole::Ci),
        _ => None,
    }
}

fn documentation_role(file_name: &str) -> KeyFileRole {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    match stem.to_ascii_uppercase().as_str() {
        "README" => KeyFileRole::Readme,
        "LICENSE" | "LICENCE" | "COPYING" => KeyFileRole::License,
        "CHANGELOG" | "CHANGES" | "HISTORY" => KeyFileRole::Changelog,
        "CONTRIBUTING" => KeyFileRole::Contributing,
        _ => KeyFileRole::Documentation,
    }
}

/// Warnings that only mean the scan saw less than the whole tree
pub fn is_partial_scan(warnings: &[AnalysisWarning]) -> bool {
    warnings
        .iter()
        .any(|w| matches!(w, AnalysisWarning::Permission { .. } | AnalysisWarning::Truncated { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn entry(path: &str, category: FileCategory) -> FileEntry {
        FileEntry {
            relative_path: path.to_string(),
            absolute_path: PathBuf::from("/repo").join(path),
            size: 1,
            category,
        }
    }

    #[test]
    fn test_key_file_roles() {
        let cases = [
            ("README.md", FileCategory::Documentation, Some(KeyFileRole::Readme)),
            ("LICENSE", FileCategory::Documentation, Some(KeyFileRole::License)),
            ("docs/guide.md", FileCategory::Documentation, Some(KeyFileRole::Documentation)),
            ("CHANGELOG.md", FileCategory::Documentation, Some(KeyFileRole::Changelog)),
            ("package.json", FileCategory::Manifest, Some(KeyFileRole::Manifest)),
            ("src/main.py", FileCategory::EntryPoint, Some(KeyFileRole::EntryPoint)),
            ("Dockerfile", FileCategory::Configuration, Some(KeyFileRole::Docker)),
            (".github/workflows/ci.yml", FileCategory::Configuration, Some(KeyFileRole::Ci)),
            (".env.example", FileCategory::Configuration, Some(KeyFileRole::EnvTemplate)),
            ("src/util.py", FileCategory::Source, None),
            ("setup.cfg", FileCategory::Configuration, None),
        ];

        for (path, category, expected) in cases {
            assert_eq!(key_file_role(&entry(path, category)), expected, "{path}");
        }
    }

    #[test]
    fn test_analyze_small_project() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/index.js"), "console.log('hi')").unwrap();
        fs::write(root.join("src/util.js"), "module.exports = {}").unwrap();
        fs::write(root.join("README.md"), "# Demo").unwrap();
        fs::write(
            root.join("package.json"),
            r#"{"dependencies": {"express": "^4.18.2"}}"#,
        )
        .unwrap();

        let report = analyze(root, &AnalysisConfig::default().with_project_name("demo")).unwrap();
        let model = &report.model;

        assert!(report.is_clean());
        assert_eq!(model.name, "demo");
        assert_eq!(model.primary_language.as_deref(), Some("javascript"));
        assert_eq!(model.total_files, 4);
        assert_eq!(model.count(FileCategory::EntryPoint), 1);
        assert_eq!(model.count(FileCategory::Source), 1);
        assert_eq!(model.readme().unwrap().relative_path, "README.md");
        assert_eq!(model.dependencies.len(), 1);
        assert_eq!(model.tree.total_files(), 4);

        let key_paths: Vec<_> = model
            .key_files
            .iter()
            .map(|k| k.entry.relative_path.as_str())
            .collect();
        assert_eq!(key_paths, vec!["README.md", "package.json", "src/index.js"]);
    }

    #[test]
    fn test_project_name_defaults_to_root_name() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("my-service");
        fs::create_dir_all(&root).unwrap();

        let report = analyze(&root, &AnalysisConfig::default()).unwrap();
        assert_eq!(report.model.name, "my-service");
        assert_eq!(report.model.primary_language, None);
        assert_eq!(report.model.tree.name, "my-service");
    }

    #[test]
    fn test_invalid_config_fails_before_walking() {
        let dir = TempDir::new().unwrap();
        let config = AnalysisConfig {
            max_depth: 0,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            analyze(dir.path(), &config),
            Err(crate::core::AnalysisError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_truncated_scan_is_partial() {
        let dir = TempDir::new().unwrap();
        for name in ["a.py", "b.py", "c.py"] {
            fs::write(dir.path().join(name), "x = 1").unwrap();
        }

        let report = analyze(dir.path(), &AnalysisConfig::default().with_max_files(2)).unwrap();
        assert_eq!(report.model.total_files, 2);
        assert!(is_partial_scan(&report.warnings));
    }
}
