//! Crate-wide configuration.
//!
//! Centralizes the constants shared by the path codec, the validators and
//! the request builders.

use crate::models::Root;

// =============================================================================
// Path Configuration
// =============================================================================

/// Separator between the root identifier and the path in a combined path.
pub const ROOT_SEPARATOR: char = ':';

/// Path segment separator. A trailing separator marks a directory.
pub const PATH_SEPARATOR: char = '/';

/// Marker every root identifier starts with.
pub const ROOT_MARKER: char = '/';

// =============================================================================
// Step Files
// =============================================================================

/// File extensions a pipeline step may point at (compared case-insensitively).
pub const ALLOWED_STEP_EXTENSIONS: &[&str] = &["ipynb", "py", "R", "sh", "jl", "js"];

/// Extension of notebook files. A notebook may back at most one step.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

// =============================================================================
// File Management API
// =============================================================================

/// Base path of the file-management endpoints.
pub const FILE_MANAGEMENT_ENDPOINT: &str = "/async/file-management";

/// Separator used when joining extensions into a single query value.
pub const EXTENSION_LIST_SEPARATOR: &str = ",";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable read for the log filter directive.
pub const LOG_ENV_VAR: &str = "STEPFS_LOG";

// =============================================================================
// Root Configuration
// =============================================================================

/// Roots in display order. The first one is the default when nothing is
/// selected.
pub const CONFIGURED_ROOTS: &[Root] = &[Root::ProjectDir, Root::Data];

/// Get the configured roots in display order.
pub fn configured_roots() -> Vec<Root> {
    CONFIGURED_ROOTS.to_vec()
}

/// Get the default root (the first configured one).
pub fn default_root() -> Root {
    CONFIGURED_ROOTS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_is_first_configured() {
        assert_eq!(default_root(), Root::ProjectDir);
        assert_eq!(configured_roots().first(), Some(&default_root()));
    }
}
