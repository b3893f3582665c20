//! Error types for path parsing and request building.
//!
//! - [`PathError`] - malformed combined paths or unknown roots
//! - [`QueryError`] - invalid extension-search parameters

use thiserror::Error;

/// Errors raised when a combined path string cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// No root separator in the input
    #[error("combined path '{0}' has no root separator")]
    MissingSeparator(String),
    /// Root segment names no configured root
    #[error("unknown root '{0}'")]
    UnknownRoot(String),
    /// Path part does not start at the root's mount point
    #[error("path '{0}' must start with '/'")]
    NotAbsolute(String),
}

/// Errors raised while building an extension-search request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No extensions requested
    #[error("at least one extension is required")]
    NoExtensions,
    /// Extension contains characters other than letters and digits
    #[error("invalid extension '{0}'")]
    InvalidExtension(String),
    /// Project identifier is empty
    #[error("project uuid is empty")]
    EmptyProject,
}
