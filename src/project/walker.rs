//! Filesystem walk with exclusion rules

use crate::config::ValidatedConfig;
use crate::core::{AnalysisError, AnalysisResult, AnalysisWarning};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// One entry produced by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEntry {
    Directory {
        relative_path: String,
    },
    File {
        relative_path: String,
        absolute_path: PathBuf,
        size: u64,
    },
}

/// Depth-first walker over a project root
pub struct PathWalker<'a> {
    root: PathBuf,
    config: &'a ValidatedConfig,
}

impl<'a> PathWalker<'a> {
    /// Fails with `NotFound` unless `root` is an existing directory
    pub fn new(root: &Path, config: &'a ValidatedConfig) -> AnalysisResult<Self> {
        let not_found = || AnalysisError::NotFound {
            path: root.to_path_buf(),
        };

        let root = fs::canonicalize(root).map_err(|_| not_found())?;
        let metadata = fs::metadata(&root).map_err(|_| not_found())?;
        if !metadata.is_dir() {
            return Err(not_found());
        }

        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a directory entry named `name` is kept by the exclusion rules
    pub fn is_excluded(&self, name: &str, is_dir: bool) -> bool {
        let config = &self.config.config;

        if is_dir && config.excluded_dirs.contains(name) {
            return true;
        }

        if name.starts_with('.') && !config.include_hidden_whitelist.contains(name) {
            return true;
        }

        !is_dir && self.config.is_ignored_file(name)
    }

    /// Lazily walk the tree. Unreadable entries come through as `Err`
    /// warnings and the walk carries on.
    pub fn walk(&self) -> Walk<'_> {
        let inner = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| entry.depth() == 0 || !self.excludes(entry));

        Walk {
            walker: self,
            inner: Box::new(inner),
            files_seen: 0,
            finished: false,
        }
    }

    fn excludes(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        let excluded = self.is_excluded(&name, entry.file_type().is_dir());
        if excluded {
            debug!("Excluding {}", entry.path().display());
        }
        excluded
    }

    fn relative(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Iterator returned by [`PathWalker::walk`]
pub struct Walk<'w> {
    walker: &'w PathWalker<'w>,
    inner: Box<dyn Iterator<Item = walkdir::Result<DirEntry>> + 'w>,
    files_seen: usize,
    finished: bool,
}

impl Iterator for Walk<'_> {
    type Item = Result<WalkEntry, AnalysisWarning>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| self.walker.relative(p))
                        .unwrap_or_default();
                    debug!("Skipping unreadable entry {}: {}", path, err);
                    return Some(Err(AnalysisWarning::permission(path, &err)));
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let file_type = entry.file_type();
            let relative_path = self.walker.relative(entry.path());

            if file_type.is_symlink() {
                debug!("Not following symlink {}", relative_path);
                continue;
            }

            if file_type.is_dir() {
                return Some(Ok(WalkEntry::Directory { relative_path }));
            }

            if !file_type.is_file() {
                continue;
            }

            if let Some(limit) = self.walker.config.config.max_files {
                if self.files_seen >= limit {
                    self.finished = true;
                    return Some(Err(AnalysisWarning::Truncated { limit }));
                }
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(err) => {
                    debug!("Skipping {} without metadata: {}", relative_path, err);
                    return Some(Err(AnalysisWarning::permission(relative_path, &err)));
                }
            };

            self.files_seen += 1;
            return Some(Ok(WalkEntry::File {
                relative_path,
                absolute_path: entry.into_path(),
                size,
            }));
        }
    }
}
