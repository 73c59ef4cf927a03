//! Directory tree construction

use crate::project::types::{DirectoryNode, FileEntry};
use std::collections::BTreeMap;

/// Directory gathered during the walk, before the depth cap is applied
#[derive(Debug, Default)]
struct PendingDirectory {
    directories: BTreeMap<String, PendingDirectory>,
    files: Vec<FileEntry>,
}

impl PendingDirectory {
    fn descend(&mut self, relative_path: &str) -> &mut PendingDirectory {
        relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self, |node, segment| {
                node.directories.entry(segment.to_string()).or_default()
            })
    }

    /// (directories, files) strictly below this node
    fn descendant_counts(&self) -> (usize, usize) {
        self.directories
            .values()
            .fold((0, 0), |(dirs, files), child| {
                let (child_dirs, child_files) = child.descendant_counts();
                (dirs + 1 + child_dirs, files + child.files.len() + child_files)
            })
    }
}

/// Builds a [`DirectoryNode`] tree from walk output.
///
/// Directories and files can be added in any order. Empty directories are
/// kept so the tree mirrors what the walk saw.
#[derive(Debug)]
pub struct TreeBuilder {
    root_name: String,
    root: PendingDirectory,
}

impl TreeBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            root: PendingDirectory::default(),
        }
    }

    pub fn add_directory(&mut self, relative_path: &str) {
        self.root.descend(relative_path);
    }

    pub fn add_file(&mut self, entry: FileEntry) {
        let parent = match entry.relative_path.rsplit_once('/') {
            Some((parent, _)) => parent.to_string(),
            None => String::new(),
        };
        self.root.descend(&parent).files.push(entry);
    }

    /// Expand directories down to `max_depth` levels below the root. A node
    /// at the cap keeps its own files and reports everything beneath it as
    /// counts.
    pub fn build(self, max_depth: usize) -> DirectoryNode {
        convert(self.root_name, String::new(), self.root, 0, max_depth)
    }
}

fn convert(
    name: String,
    path: String,
    pending: PendingDirectory,
    depth: usize,
    max_depth: usize,
) -> DirectoryNode {
    let mut files = pending.files;
    files.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    if depth >= max_depth {
        let (collapsed_dirs, collapsed_files) = PendingDirectory {
            directories: pending.directories,
            files: Vec::new(),
        }
        .descendant_counts();

        return DirectoryNode {
            name,
            path,
            directories: Vec::new(),
            files,
            collapsed_dirs,
            collapsed_files,
        };
    }

    // BTreeMap iteration keeps directories alphabetical
    let directories = pending
        .directories
        .into_iter()
        .map(|(child_name, child)| {
            let child_path = if path.is_empty() {
                child_name.clone()
            } else {
                format!("{path}/{child_name}")
            };
            convert(child_name, child_path, child, depth + 1, max_depth)
        })
        .collect();

    DirectoryNode {
        name,
        path,
        directories,
        files,
        collapsed_dirs: 0,
        collapsed_files: 0,
    }
}
