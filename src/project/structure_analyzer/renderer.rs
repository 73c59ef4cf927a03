//! Tree visualization and rendering

use crate::project::types::DirectoryNode;

/// Renders a [`DirectoryNode`] as an indented text tree
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, root: &DirectoryNode) -> String {
        let mut result = format!("{}\n", directory_label(root));
        self.format_children(root, &mut result, "");
        result
    }

    fn format_children(&self, node: &DirectoryNode, result: &mut String, prefix: &str) {
        let total = node.directories.len() + node.files.len();

        for (i, child) in node.directories.iter().enumerate() {
            let is_last = i + 1 == total;
            let connector = if is_last { "└── " } else { "├── " };
            result.push_str(&format!("{prefix}{connector}{}\n", directory_label(child)));

            let next_prefix = if is_last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            self.format_children(child, result, &next_prefix);
        }

        for (i, file) in node.files.iter().enumerate() {
            let is_last = node.directories.len() + i + 1 == total;
            let connector = if is_last { "└── " } else { "├── " };
            result.push_str(&format!("{prefix}{connector}{}\n", file.file_name()));
        }
    }
}

fn directory_label(node: &DirectoryNode) -> String {
    if node.is_collapsed() {
        format!(
            "{}/ (+{} dirs, {} files)",
            node.name, node.collapsed_dirs, node.collapsed_files
        )
    } else {
        format!("{}/", node.name)
    }
}

impl DirectoryNode {
    /// Text tree with `├──` / `└──` connectors, directories first
    pub fn render(&self) -> String {
        TreeRenderer::new().render(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::project::structure_analyzer::TreeBuilder;
    use crate::project::types::{FileCategory, FileEntry};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn build(paths: &[&str], max_depth: usize) -> String {
        let mut builder = TreeBuilder::new("repo");
        for path in paths {
            builder.add_file(FileEntry {
                relative_path: path.to_string(),
                absolute_path: PathBuf::from("/repo").join(path),
                size: 0,
                category: FileCategory::Other,
            });
        }
        builder.build(max_depth).render()
    }

    #[test]
    fn test_render_tree() {
        let rendered = build(
            &["README.md", "src/main.py", "src/utils/helpers.py", "tests/test_main.py"],
            3,
        );

        let expected = "\
repo/
├── src/
│   ├── utils/
│   │   └── helpers.py
│   └── main.py
├── tests/
│   └── test_main.py
└── README.md
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_collapsed_directory() {
        let rendered = build(&["a/top.txt", "a/b/c/deep.txt"], 1);

        let expected = "\
repo/
└── a/ (+2 dirs, 1 files)
    └── top.txt
";
        assert_eq!(rendered, expected);
    }
}
