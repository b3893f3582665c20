//! Virtual file namespace for pipeline step files.
//!
//! Models the files of a project as one in-memory tree per root
//! (`/project-dir`, `/data`), filled lazily from the file-management API,
//! together with the path algebra used by the file manager:
//!
//! - [`CombinedPath`], [`fs::path`] - root-qualified paths and string helpers
//! - [`TreeNode`], [`fs::tree`] - depth-first search, merge, childless checks
//! - [`TreeRegistry`] - single owner of each root's tree for a session
//! - [`fs::validate`] - step file extension and notebook reuse checks
//! - [`utils`] - extension-search request building and ancestor lookup

pub mod config;
pub mod error;
pub mod fs;
pub mod models;
pub mod utils;

pub use error::{PathError, QueryError};
pub use fs::{FileValidation, MoveTarget, SearchResult, TreeRegistry};
pub use models::{CombinedPath, NodeKind, Root, Step, TreeNode};
