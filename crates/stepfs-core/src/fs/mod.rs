//! Tree and path operations.
//!
//! - [`path`] - combined-path codec, parent/relative paths, move targets
//! - [`tree`] - depth-first search, in-place merge, childless checks
//! - [`TreeRegistry`] - per-root tree ownership for a session
//! - [`validate`] - step file extension checks

pub mod path;
mod registry;
pub mod tree;
pub mod validate;

pub use path::MoveTarget;
pub use registry::TreeRegistry;
pub use tree::SearchResult;
pub use validate::FileValidation;
