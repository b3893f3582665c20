//! Session-scoped owner of the per-root trees.

use std::collections::HashMap;

use tracing::debug;

use crate::config;
use crate::models::{CombinedPath, Root, TreeNode};

use super::tree::{self, SearchResult};

// ============================================================================
// TreeRegistry
// ============================================================================

/// One tree per configured root.
///
/// Trees start as a lone root node and grow as fetched subtrees are merged
/// in. The registry is the only writer of its trees; callers hand it data
/// after each fetch completes.
#[derive(Clone, Debug)]
pub struct TreeRegistry {
    /// Root trees, keyed by root
    trees: HashMap<Root, TreeNode>,
    /// Configured root order (for iteration and defaults)
    order: Vec<Root>,
}

impl TreeRegistry {
    /// Create a registry with an empty tree for each root.
    ///
    /// Duplicate roots are registered once, at their first position.
    pub fn new(roots: impl IntoIterator<Item = Root>) -> Self {
        let mut registry = Self {
            trees: HashMap::new(),
            order: Vec::new(),
        };
        for root in roots {
            if !registry.trees.contains_key(&root) {
                registry.order.push(root);
                registry.trees.insert(root, TreeNode::root_node());
            }
        }
        registry
    }

    /// Create a registry for [`config::configured_roots`].
    pub fn from_config() -> Self {
        Self::new(config::configured_roots())
    }

    /// Configured roots in registration order.
    pub fn roots(&self) -> &[Root] {
        &self.order
    }

    /// Tree of `root`, if the root is configured.
    pub fn tree(&self, root: Root) -> Option<&TreeNode> {
        self.trees.get(&root)
    }

    /// Splice a fetched subtree into `root`'s tree.
    ///
    /// A subtree rooted at `/` replaces the whole tree; any other subtree
    /// replaces the node with the same path. Returns `false` when there was
    /// nothing to replace (e.g. the directory vanished before the fetch
    /// finished).
    pub fn merge(&mut self, root: Root, sub_tree: TreeNode) -> bool {
        let Some(full_tree) = self.trees.get_mut(&root) else {
            debug!(%root, "merge into unconfigured root ignored");
            return false;
        };

        if sub_tree.path == full_tree.path {
            debug!(%root, nodes = sub_tree.count(), "replacing root tree");
            *full_tree = TreeNode {
                root: true,
                ..sub_tree
            };
            return true;
        }

        let path = sub_tree.path.clone();
        let merged = tree::merge(sub_tree, full_tree);
        if merged {
            debug!(%root, %path, "merged subtree");
        } else {
            debug!(%root, %path, "no node to merge into; ignoring");
        }
        merged
    }

    /// Discard everything loaded for `root`.
    pub fn refresh(&mut self, root: Root) {
        if let Some(tree) = self.trees.get_mut(&root) {
            debug!(%root, "refreshing root tree");
            *tree = TreeNode::root_node();
        }
    }

    /// Search for the node at a combined path. See [`tree::search`].
    pub fn search(&self, path: &CombinedPath) -> SearchResult<'_> {
        self.tree(path.root())
            .map(|tree| tree::search(path.path(), tree))
            .unwrap_or_default()
    }

    /// Node at a combined path, including the mount point itself.
    pub fn find(&self, path: &CombinedPath) -> Option<&TreeNode> {
        tree::find_node(path.path(), self.tree(path.root())?)
    }

    /// Check if the node at `path` exists and has no children loaded.
    pub fn is_childless(&self, path: &CombinedPath) -> bool {
        self.tree(path.root())
            .is_some_and(|tree| tree::is_childless(path.path(), tree))
    }

    /// Root in focus for the given selection.
    pub fn active_root(&self, selected: &[CombinedPath]) -> Root {
        selected
            .first()
            .map(CombinedPath::root)
            .or_else(|| self.order.first().copied())
            .unwrap_or_else(config::default_root)
    }
}

impl Default for TreeRegistry {
    fn default() -> Self {
        Self::from_config()
    }
}
