//! Data models for the file namespace.
//!
//! Contains domain types for:
//! - [`Root`] - Fixed set of top-level mounts
//! - [`CombinedPath`] - Root-qualified path value
//! - [`TreeNode`], [`NodeKind`] - Entries of a root's tree
//! - [`Step`] - Pipeline step file binding

mod node;
mod path;
mod root;
mod step;

pub use node::{NodeKind, TreeNode};
pub use path::CombinedPath;
pub use root::Root;
pub use step::Step;
