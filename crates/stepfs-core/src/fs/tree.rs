//! Search and in-place merge over a root's tree.
//!
//! Paths given here are root-relative (`/a/b.py`), matching the `path` field
//! of [`TreeNode`].

use tracing::trace;

use crate::models::TreeNode;

/// Outcome of [`search`]. Both fields are `None` when nothing matched.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchResult<'a> {
    pub parent: Option<&'a TreeNode>,
    pub node: Option<&'a TreeNode>,
}

impl SearchResult<'_> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }
}

/// Depth-first search below `tree` for the node whose path equals `target`.
///
/// Children are visited in stored order and each child's descendants are
/// exhausted before its next sibling. The first match wins. `tree` itself is
/// never matched since it has no parent to report.
pub fn search<'a>(target: &str, tree: &'a TreeNode) -> SearchResult<'a> {
    match find(target, tree) {
        Some((parent, node)) => SearchResult {
            parent: Some(parent),
            node: Some(node),
        },
        None => SearchResult::default(),
    }
}

fn find<'a>(target: &str, tree: &'a TreeNode) -> Option<(&'a TreeNode, &'a TreeNode)> {
    for child in &tree.children {
        if child.path == target {
            return Some((tree, child));
        }
        if let Some(found) = find(target, child) {
            return Some(found);
        }
    }
    None
}

/// Look up a node, matching `tree` itself as well as its descendants.
pub fn find_node<'a>(target: &str, tree: &'a TreeNode) -> Option<&'a TreeNode> {
    if tree.path == target {
        return Some(tree);
    }
    search(target, tree).node
}

/// Replace the node at `sub_tree.path` with `sub_tree`, in place.
///
/// The replaced node keeps its position among its siblings. Returns `false`
/// and leaves `full_tree` untouched when no such node exists.
pub fn merge(sub_tree: TreeNode, full_tree: &mut TreeNode) -> bool {
    match replace_node(sub_tree, full_tree) {
        Ok(()) => true,
        Err(sub_tree) => {
            trace!(path = %sub_tree.path, "merge target not found");
            false
        }
    }
}

/// Swap `sub_tree` into the first node below `tree` with the same path,
/// in the same depth-first order as [`search`]. Hands `sub_tree` back on a
/// miss.
fn replace_node(mut sub_tree: TreeNode, tree: &mut TreeNode) -> Result<(), TreeNode> {
    for child in &mut tree.children {
        if child.path == sub_tree.path {
            *child = sub_tree;
            return Ok(());
        }
        sub_tree = match replace_node(sub_tree, child) {
            Ok(()) => return Ok(()),
            Err(sub_tree) => sub_tree,
        };
    }
    Err(sub_tree)
}

/// Check if the node at `target` exists and has no children loaded.
///
/// A missing node is not childless.
pub fn is_childless(target: &str, tree: &TreeNode) -> bool {
    find_node(target, tree).is_some_and(|node| node.children.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tree() -> TreeNode {
        TreeNode::root_node().with_children(vec![
            TreeNode::directory("/a/").with_children(vec![
                TreeNode::directory("/a/b/").with_children(vec![TreeNode::file("/a/b/deep.py")]),
                TreeNode::file("/a/x.py"),
            ]),
            TreeNode::directory("/empty/"),
            TreeNode::file("/main.py"),
        ])
    }

    #[test]
    fn test_search_miss_is_empty() {
        let tree = create_test_tree();
        let result = search("/nope.py", &tree);
        assert!(result.is_empty());
        assert!(result.parent.is_none());
        assert!(result.node.is_none());
    }

    #[test]
    fn test_search_top_level() {
        let tree = create_test_tree();
        let result = search("/main.py", &tree);
        assert_eq!(result.node.unwrap().name, "main.py");
        assert!(result.parent.unwrap().root);
    }

    #[test]
    fn test_search_nested() {
        let tree = create_test_tree();
        let result = search("/a/b/deep.py", &tree);
        assert_eq!(result.node.unwrap().path, "/a/b/deep.py");
        assert_eq!(result.parent.unwrap().path, "/a/b/");
    }

    #[test]
    fn test_search_never_matches_tree_itself() {
        let tree = create_test_tree();
        assert!(search("/", &tree).is_empty());
        assert!(find_node("/", &tree).is_some());
    }

    #[test]
    fn test_search_is_depth_first() {
        // Same path twice: once deep under the first child, once as the
        // second child. Depth-first order reaches the deep one first.
        let tree = TreeNode::root_node().with_children(vec![
            TreeNode::directory("/a/").with_children(vec![TreeNode {
                name: "deep".to_string(),
                ..TreeNode::file("/dup")
            }]),
            TreeNode {
                name: "shallow".to_string(),
                ..TreeNode::file("/dup")
            },
        ]);
        let result = search("/dup", &tree);
        assert_eq!(result.node.unwrap().name, "deep");
        assert_eq!(result.parent.unwrap().path, "/a/");
    }

    #[test]
    fn test_merge_preserves_sibling_order() {
        let mut tree = create_test_tree();
        let fetched = TreeNode::directory("/empty/")
            .with_children(vec![TreeNode::file("/empty/new.ipynb")]);

        assert!(merge(fetched, &mut tree));

        let paths: Vec<_> = tree.children.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["/a/", "/empty/", "/main.py"]);
        assert_eq!(tree.children[1].children.len(), 1);
    }

    #[test]
    fn test_merge_nested() {
        let mut tree = create_test_tree();
        let fetched = TreeNode::directory("/a/b/").with_children(vec![
            TreeNode::file("/a/b/deep.py"),
            TreeNode::file("/a/b/other.sh"),
        ]);

        assert!(merge(fetched, &mut tree));

        let a = &tree.children[0];
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].children.len(), 2);
        assert_eq!(a.children[1].path, "/a/x.py");
    }

    #[test]
    fn test_merge_replaces_first_depth_first_match() {
        let mut tree = TreeNode::root_node().with_children(vec![
            TreeNode::directory("/a/").with_children(vec![TreeNode::directory("/dup/")]),
            TreeNode::directory("/dup/"),
        ]);
        let fetched = TreeNode::directory("/dup/").with_children(vec![TreeNode::file("/dup/x")]);

        assert!(merge(fetched, &mut tree));
        assert_eq!(tree.children[0].children[0].children.len(), 1);
        assert!(tree.children[1].children.is_empty());
    }

    #[test]
    fn test_merge_missing_is_noop() {
        let mut tree = create_test_tree();
        let before = tree.clone();

        assert!(!merge(TreeNode::directory("/gone/"), &mut tree));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_is_childless() {
        let tree = create_test_tree();
        assert!(is_childless("/empty/", &tree));
        assert!(is_childless("/main.py", &tree));
        assert!(!is_childless("/a/", &tree));
        assert!(!is_childless("/missing/", &tree));
        assert!(!is_childless("/", &tree));
        assert!(is_childless("/", &TreeNode::root_node()));
    }
}
