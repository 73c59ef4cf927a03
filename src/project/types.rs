//! Project analysis data model

use crate::core::AnalysisWarning;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Semantic category assigned to every discovered file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    EntryPoint,
    Test,
    Documentation,
    Configuration,
    Manifest,
    Source,
    Other,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntryPoint => "entry_point",
            Self::Test => "test",
            Self::Documentation => "documentation",
            Self::Configuration => "configuration",
            Self::Manifest => "manifest",
            Self::Source => "source",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file discovered during the walk. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the scanned root, `/`-separated
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub size: u64,
    pub category: FileCategory,
}

impl FileEntry {
    pub fn file_name(&self) -> &str {
        self.relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path)
    }

    /// Lowercased extension without the dot
    pub fn extension(&self) -> Option<String> {
        Path::new(self.file_name())
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

/// Per-language file and byte totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub language: String,
    pub files: usize,
    pub bytes: u64,
}

/// Packaging system a dependency belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Pip,
    Npm,
    Maven,
    Gradle,
    Other,
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pip => "pip",
            Self::Npm => "npm",
            Self::Maven => "maven",
            Self::Gradle => "gradle",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A declared dependency, normalized across manifest formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    /// `None` means any version
    pub constraint: Option<String>,
    pub ecosystem: Ecosystem,
    /// Relative path of the manifest that declared it last
    pub manifest: String,
    /// Declared outside the default runtime scope (dev, test or optional)
    pub dev: bool,
}

/// Directory tree node. Nodes at the depth cap list their own files but
/// replace descendant directories with counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: String,
    /// Relative path, empty for the root
    pub path: String,
    pub directories: Vec<DirectoryNode>,
    pub files: Vec<FileEntry>,
    /// Descendant directories not expanded because of the depth cap
    pub collapsed_dirs: usize,
    /// Files inside the collapsed directories
    pub collapsed_files: usize,
}

impl DirectoryNode {
    pub fn is_collapsed(&self) -> bool {
        self.collapsed_dirs > 0
    }

    /// Total files beneath this node, collapsed ones included
    pub fn total_files(&self) -> usize {
        self.files.len()
            + self.collapsed_files
            + self
                .directories
                .iter()
                .map(DirectoryNode::total_files)
                .sum::<usize>()
    }

    pub fn find_directory(&self, relative_path: &str) -> Option<&DirectoryNode> {
        if self.path == relative_path {
            return Some(self);
        }
        self.directories
            .iter()
            .find_map(|child| child.find_directory(relative_path))
    }
}

/// Why a file made it into the key-file set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyFileRole {
    Readme,
    License,
    Changelog,
    Contributing,
    Manifest,
    EntryPoint,
    Documentation,
    Docker,
    Ci,
    EnvTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFile {
    pub role: KeyFileRole,
    pub entry: FileEntry,
}

/// Result of one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectModel {
    pub root: PathBuf,
    pub name: String,
    pub primary_language: Option<String>,
    /// Ranked: most files first, then most bytes, then name
    pub languages: Vec<LanguageStat>,
    /// Sorted by ecosystem, then name
    pub dependencies: Vec<Dependency>,
    pub key_files: Vec<KeyFile>,
    pub tree: DirectoryNode,
    pub total_files: usize,
    pub total_bytes: u64,
    pub category_counts: BTreeMap<FileCategory, usize>,
}

impl ProjectModel {
    /// Shallowest key file with `role`; a root README wins over `docs/README.md`
    pub fn key_file(&self, role: KeyFileRole) -> Option<&FileEntry> {
        self.key_files
            .iter()
            .filter(|k| k.role == role)
            .map(|k| &k.entry)
            .min_by(|a, b| {
                let depth = |e: &FileEntry| e.relative_path.matches('/').count();
                depth(a)
                    .cmp(&depth(b))
                    .then_with(|| a.relative_path.cmp(&b.relative_path))
            })
    }

    pub fn readme(&self) -> Option<&FileEntry> {
        self.key_file(KeyFileRole::Readme)
    }

    pub fn license(&self) -> Option<&FileEntry> {
        self.key_file(KeyFileRole::License)
    }

    pub fn entry_points(&self) -> impl Iterator<Item = &FileEntry> {
        self.key_files
            .iter()
            .filter(|k| k.role == KeyFileRole::EntryPoint)
            .map(|k| &k.entry)
    }

    pub fn dependencies_for(&self, ecosystem: Ecosystem) -> impl Iterator<Item = &Dependency> {
        self.dependencies
            .iter()
            .filter(move |d| d.ecosystem == ecosystem)
    }

    pub fn count(&self, category: FileCategory) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }

    /// Short plain-text report of the scan
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Project Analysis for: {}\n\
             Name: {}\n\
             Total files: {} ({} bytes)\n",
            self.root.display(),
            self.name,
            self.total_files,
            self.total_bytes
        );

        match &self.primary_language {
            Some(lang) => summary.push_str(&format!("Primary language: {lang}\n")),
            None => summary.push_str("Primary language: none detected\n"),
        }

        if !self.languages.is_empty() {
            let langs: Vec<_> = self
                .languages
                .iter()
                .map(|l| format!("{} ({} files)", l.language, l.files))
                .collect();
            summary.push_str(&format!("Languages detected: {}\n", langs.join(", ")));
        }

        if !self.key_files.is_empty() {
            let keys: Vec<_> = self
                .key_files
                .iter()
                .map(|k| k.entry.relative_path.as_str())
                .collect();
            summary.push_str(&format!("Key files found: {}\n", keys.join(", ")));
        }

        summary.push_str(&format!("Dependencies: {}\n", self.dependencies.len()));

        summary
    }
}

/// A model together with the warnings collected while building it.
/// A non-empty warning list does not make the model any less usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub model: ProjectModel,
    pub warnings: Vec<AnalysisWarning>,
}

impl AnalysisReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
