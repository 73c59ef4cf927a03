use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Shared test utilities to reduce duplication across test files
pub mod test_helpers {
    use super::*;

    /// Create a temporary project from `(relative path, content)` pairs.
    /// Parent directories are created as needed.
    pub fn create_project(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (path, content) in files {
            write_file(dir.path(), path, content);
        }
        dir
    }

    pub fn write_file(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}
