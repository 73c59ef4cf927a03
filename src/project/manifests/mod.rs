//! # Dependency Extraction
//!
//! Reads every manifest found during the walk and normalizes its declared
//! dependencies into [`Dependency`] records.
//!
//! ## Supported Manifests
//!
//! - **pip** - `requirements.txt`, `requirements-dev.txt`, `pyproject.toml`
//! - **npm** - `package.json`
//! - **Maven** - `pom.xml`
//! - **Gradle** - `build.gradle`, `build.gradle.kts`
//! - **Cargo** - `Cargo.toml`, recorded under the `other` ecosystem
//!
//! Manifests are dispatched by file name through [`ManifestKind`]. Names
//! added via `extra_manifest_names` are dispatched by extension instead.
//! A manifest that cannot be read or parsed contributes nothing and leaves
//! a warning; it never aborts the scan.

pub mod parsers;
pub mod types;

pub use types::{ManifestError, ParsedDependency};

use crate::core::constants::manifest_files;
use crate::core::AnalysisWarning;
use crate::project::types::{Dependency, Ecosystem, FileEntry};
use std::collections::BTreeMap;
use std::fs;
use tracing::{debug, warn};

/// Grammar a manifest is parsed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Requirements { dev: bool },
    Pyproject,
    PackageJson,
    MavenPom,
    Gradle,
    Cargo,
}

impl ManifestKind {
    /// Dispatch on a well-known manifest file name
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let kind = match file_name {
            manifest_files::REQUIREMENTS_TXT => Self::Requirements { dev: false },
            manifest_files::REQUIREMENTS_DEV_TXT => Self::Requirements { dev: true },
            manifest_files::PYPROJECT_TOML => Self::Pyproject,
            manifest_files::PACKAGE_JSON => Self::PackageJson,
            manifest_files::POM_XML => Self::MavenPom,
            manifest_files::BUILD_GRADLE | manifest_files::BUILD_GRADLE_KTS => Self::Gradle,
            manifest_files::CARGO_TOML => Self::Cargo,
            _ => return None,
        };
        Some(kind)
    }

    /// Dispatch a configured manifest name on its extension
    pub fn from_extension(file_name: &str) -> Option<Self> {
        let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
        let kind = match extension.as_str() {
            "txt" | "in" => Self::Requirements { dev: false },
            "toml" => Self::Pyproject,
            "json" => Self::PackageJson,
            "xml" => Self::MavenPom,
            "gradle" | "kts" => Self::Gradle,
            _ => return None,
        };
        Some(kind)
    }

    pub fn for_file_name(file_name: &str) -> Option<Self> {
        Self::from_file_name(file_name).or_else(|| Self::from_extension(file_name))
    }

    pub fn ecosystem(self) -> Ecosystem {
        match self {
            Self::Requirements { .. } | Self::Pyproject => Ecosystem::Pip,
            Self::PackageJson => Ecosystem::Npm,
            Self::MavenPom => Ecosystem::Maven,
            Self::Gradle => Ecosystem::Gradle,
            Self::Cargo => Ecosystem::Other,
        }
    }

    pub fn parse(self, content: &str) -> Result<Vec<ParsedDependency>, ManifestError> {
        match self {
            Self::Requirements { dev } => Ok(parsers::python::parse_requirements(content, dev)),
            Self::Pyproject => parsers::python::parse_pyproject(content),
            Self::PackageJson => parsers::node::parse_package_json(content),
            Self::MavenPom => parsers::java::parse_pom(content),
            Self::Gradle => Ok(parsers::java::parse_gradle(content)),
            Self::Cargo => parsers::cargo::parse_cargo_toml(content),
        }
    }
}

/// Accumulates dependencies across manifests, deduplicated by
/// (name, ecosystem). A later manifest overwrites an earlier declaration.
#[derive(Debug, Default)]
pub struct DependencyCollector {
    dependencies: BTreeMap<(Ecosystem, String), Dependency>,
    manifests_read: usize,
}

impl DependencyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse one manifest. The file is opened, read and closed
    /// before this returns. Returns how many declarations were recorded.
    pub fn collect(&mut self, manifest: &FileEntry) -> Result<usize, AnalysisWarning> {
        let path = &manifest.relative_path;

        let kind = ManifestKind::for_file_name(manifest.file_name()).ok_or_else(|| {
            AnalysisWarning::unsupported_format(path, "no known grammar for this file name")
        })?;

        let bytes = fs::read(&manifest.absolute_path).map_err(|e| {
            warn!("Failed to read manifest {}: {}", path, e);
            AnalysisWarning::manifest_parse(path, e)
        })?;
        let content = String::from_utf8(bytes).map_err(|e| {
            warn!("Manifest {} is not valid UTF-8", path);
            AnalysisWarning::manifest_parse(path, e)
        })?;

        let parsed = kind.parse(&content).map_err(|e| {
            warn!("Failed to parse manifest {}: {}", path, e);
            match e {
                ManifestError::Parse(message) => AnalysisWarning::manifest_parse(path, message),
                ManifestError::Unsupported(message) => AnalysisWarning::unsupported_format(path, message),
            }
        })?;

        let ecosystem = kind.ecosystem();
        let count = parsed.len();
        for dependency in parsed {
            self.insert(Dependency {
                name: dependency.name,
                constraint: dependency.constraint,
                ecosystem,
                manifest: path.clone(),
                dev: dependency.dev,
            });
        }

        self.manifests_read += 1;
        debug!("Read {} dependencies from {}", count, path);
        Ok(count)
    }

    fn insert(&mut self, dependency: Dependency) {
        let key = (dependency.ecosystem, dependency.name.clone());
        if let Some(previous) = self.dependencies.get(&key) {
            if previous.constraint != dependency.constraint {
                debug!(
                    "{} declared as {:?} in {} and {:?} in {}; keeping the latter",
                    dependency.name,
                    previous.constraint,
                    previous.manifest,
                    dependency.constraint,
                    dependency.manifest
                );
            }
        }
        self.dependencies.insert(key, dependency);
    }

    pub fn manifests_read(&self) -> usize {
        self.manifests_read
    }

    /// Dependencies ordered by ecosystem, then name
    pub fn finish(self) -> Vec<Dependency> {
        self.dependencies.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::types::FileCategory;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn manifest(dir: &TempDir, relative: &str, content: &str) -> FileEntry {
        let absolute = dir.path().join(relative);
        if let Some(parent) = absolute.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&absolute, content).unwrap();
        FileEntry {
            relative_path: relative.to_string(),
            absolute_path: absolute,
            size: content.len() as u64,
            category: FileCategory::Manifest,
        }
    }

    #[test]
    fn test_dispatch_by_name_and_extension() {
        assert_eq!(
            ManifestKind::for_file_name("requirements-dev.txt"),
            Some(ManifestKind::Requirements { dev: true })
        );
        assert_eq!(ManifestKind::for_file_name("build.gradle.kts"), Some(ManifestKind::Gradle));
        assert_eq!(
            ManifestKind::for_file_name("requirements-prod.txt"),
            Some(ManifestKind::Requirements { dev: false })
        );
        assert_eq!(ManifestKind::for_file_name("deps.xml"), Some(ManifestKind::MavenPom));
        assert_eq!(ManifestKind::for_file_name("Gemfile"), None);
        assert_eq!(ManifestKind::Cargo.ecosystem(), Ecosystem::Other);
    }

    #[test]
    fn test_last_manifest_wins_on_conflict() {
        let dir = TempDir::new().unwrap();
        let first = manifest(&dir, "requirements.txt", "requests==2.30.0\nflask\n");
        let second = manifest(&dir, "services/api/requirements.txt", "requests==2.31.0\n");

        let mut collector = DependencyCollector::new();
        assert_eq!(collector.collect(&first), Ok(2));
        assert_eq!(collector.collect(&second), Ok(1));

        let deps = collector.finish();
        assert_eq!(deps.len(), 2);
        let requests = deps.iter().find(|d| d.name == "requests").unwrap();
        assert_eq!(requests.constraint.as_deref(), Some("==2.31.0"));
        assert_eq!(requests.manifest, "services/api/requirements.txt");
    }

    #[test]
    fn test_same_name_different_ecosystem_kept_apart() {
        let dir = TempDir::new().unwrap();
        let pip = manifest(&dir, "requirements.txt", "six==1.16.0\n");
        let npm = manifest(&dir, "package.json", r#"{"dependencies": {"six": "1.0.0"}}"#);

        let mut collector = DependencyCollector::new();
        collector.collect(&pip).unwrap();
        collector.collect(&npm).unwrap();

        let deps = collector.finish();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].ecosystem, Ecosystem::Pip);
        assert_eq!(deps[1].ecosystem, Ecosystem::Npm);
    }

    #[test]
    fn test_corrupt_manifest_is_a_warning() {
        let dir = TempDir::new().unwrap();
        let broken = manifest(&dir, "package.json", "{ not json");

        let mut collector = DependencyCollector::new();
        let warning = collector.collect(&broken).unwrap_err();

        assert!(matches!(warning, AnalysisWarning::ManifestParse { .. }));
        assert!(collector.finish().is_empty());
    }

    #[test]
    fn test_unknown_extra_manifest_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let gemfile = manifest(&dir, "Gemfile", "gem 'rails'\n");

        let mut collector = DependencyCollector::new();
        let warning = collector.collect(&gemfile).unwrap_err();

        assert!(matches!(warning, AnalysisWarning::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_non_utf8_manifest_is_a_warning() {
        let dir = TempDir::new().unwrap();
        let entry = manifest(&dir, "requirements.txt", "");
        fs::write(&entry.absolute_path, [0xff, 0xfe, 0x00]).unwrap();

        let mut collector = DependencyCollector::new();
        assert!(matches!(
            collector.collect(&entry),
            Err(AnalysisWarning::ManifestParse { .. })
        ));
        assert_eq!(collector.manifests_read(), 0);
    }
}
