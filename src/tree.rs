/*!
 * Tree rendering of the selected files
 */

use std::collections::BTreeMap;
use std::path::{Component, Path};

use crate::types::FileEntry;

/// A node of the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Directory with children keyed (and sorted) by name
    Directory(BTreeMap<String, TreeNode>),
    /// File leaf
    File,
}

impl TreeNode {
    /// Build the tree for a list of root-relative paths
    pub fn from_paths<'a, I>(paths: I) -> Self
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut root = BTreeMap::new();
        for path in paths {
            insert(&mut root, path);
        }
        TreeNode::Directory(root)
    }

    /// Build the tree for collected entries
    pub fn from_entries(entries: &[FileEntry]) -> Self {
        Self::from_paths(entries.iter().map(|e| e.relative_path.as_path()))
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }
}

fn insert(root: &mut BTreeMap<String, TreeNode>, path: &Path) {
    let segments: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let Some((leaf, dirs)) = segments.split_last() else {
        return;
    };

    let mut level = root;
    for dir in dirs {
        let node = level
            .entry(dir.clone())
            .or_insert_with(|| TreeNode::Directory(BTreeMap::new()));
        if !node.is_dir() {
            *node = TreeNode::Directory(BTreeMap::new());
        }
        level = match node {
            TreeNode::Directory(children) => children,
            TreeNode::File => return,
        };
    }

    level.entry(leaf.clone()).or_insert(TreeNode::File);
}

/// Render entries as a tree headed by `root_name/`
///
/// Children are listed alphabetically at every level with directories and
/// files interleaved. Lines are joined with `\n` and there is no trailing
/// newline.
pub fn render(entries: &[FileEntry], root_name: &str) -> String {
    render_node(&TreeNode::from_entries(entries), root_name)
}

/// Render an already built tree
pub fn render_node(tree: &TreeNode, root_name: &str) -> String {
    let mut lines = vec![format!("{}/", root_name)];
    if let TreeNode::Directory(children) = tree {
        render_children(children, "", &mut lines);
    }
    lines.join("\n")
}

fn render_children(children: &BTreeMap<String, TreeNode>, prefix: &str, lines: &mut Vec<String>) {
    let count = children.len();
    for (i, (name, node)) in children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            TreeNode::Directory(grandchildren) => {
                lines.push(format!("{}{}{}/", prefix, connector, name));
                let child_prefix = if is_last { "    " } else { "│   " };
                render_children(grandchildren, &format!("{}{}", prefix, child_prefix), lines);
            }
            TreeNode::File => lines.push(format!("{}{}{}", prefix, connector, name)),
        }
    }
}

/// Base name used for the first line of the tree
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_paths(paths: &[&str], root: &str) -> String {
        render_node(&TreeNode::from_paths(paths.iter().map(Path::new)), root)
    }

    #[test]
    fn test_render_simple_tree() {
        let rendered = render_paths(&["a/b.txt", "a/c.txt", "d.txt"], "proj");
        let expected = "proj/\n├── a/\n│   ├── b.txt\n│   └── c.txt\n└── d.txt";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_children_sorted_regardless_of_insertion_order() {
        let rendered = render_paths(&["zeta.rs", "src/lib.rs", "alpha.rs"], "proj");
        let expected = "proj/\n├── alpha.rs\n├── src/\n│   └── lib.rs\n└── zeta.rs";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_last_directory_uses_blank_indent() {
        let rendered = render_paths(&["a.txt", "z/y/x.txt", "z/w.txt"], "root");
        let expected = "root/\n├── a.txt\n└── z/\n    ├── w.txt\n    └── y/\n        └── x.txt";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_empty_tree_is_root_line_only() {
        assert_eq!(render(&[], "proj"), "proj/");
    }

    #[test]
    fn test_duplicate_paths_collapse() {
        let tree = TreeNode::from_paths(["a/b.txt", "a/b.txt"].iter().map(Path::new));
        let TreeNode::Directory(top) = tree else {
            panic!("root must be a directory");
        };
        let Some(TreeNode::Directory(a)) = top.get("a") else {
            panic!("a must be a directory");
        };
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_root_name() {
        assert_eq!(root_name(Path::new("/home/me/proj")), "proj");
        assert_eq!(root_name(Path::new("/")), "/");
    }
}
