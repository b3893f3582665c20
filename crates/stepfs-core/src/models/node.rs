use serde::{Deserialize, Serialize};

use crate::config::PATH_SEPARATOR;
use crate::fs::path;

/// Kind of a file-system entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// One entry of a root's tree, as returned by the file-management browse
/// endpoint.
///
/// `path` is relative to the root's mount point and unique within the tree.
/// A directory with no children may simply not have been fetched yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub path: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<TreeNode>,
    /// Marks the synthetic root node of a root's tree
    #[serde(default)]
    pub root: bool,
}

impl TreeNode {
    /// Create the lone root node a tree starts from.
    pub fn root_node() -> Self {
        Self {
            path: PATH_SEPARATOR.to_string(),
            name: String::new(),
            kind: NodeKind::Directory,
            children: Vec::new(),
            root: true,
        }
    }

    /// Create an (unexpanded) directory node. `path` should end with `/`.
    pub fn directory(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: path::leaf_name(&path).to_string(),
            path,
            kind: NodeKind::Directory,
            children: Vec::new(),
            root: false,
        }
    }

    /// Create a file node.
    pub fn file(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: path::leaf_name(&path).to_string(),
            path,
            kind: NodeKind::File,
            children: Vec::new(),
            root: false,
        }
    }

    /// Builder-style helper to attach children.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}
