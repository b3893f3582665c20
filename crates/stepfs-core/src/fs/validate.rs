//! Step file validation.
//!
//! Decides which selected files may back a pipeline step. The caller turns
//! the partition into user-facing warnings.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::config::{ALLOWED_STEP_EXTENSIONS, NOTEBOOK_EXTENSION, PATH_SEPARATOR};
use crate::models::{Root, Step};

use super::path;

/// Check if `path` ends with one of `extensions` (case-insensitive).
///
/// Extensions may be given with or without the leading dot.
pub fn is_file_of_extension<S: AsRef<str>>(extensions: &[S], path: &str) -> bool {
    let path = path.to_lowercase();
    extensions.iter().any(|extension| {
        let extension = extension.as_ref();
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        !extension.is_empty() && path.ends_with(&format!(".{}", extension.to_lowercase()))
    })
}

/// Path relative to the project directory, the form steps store.
///
/// Accepts `notebooks/a.ipynb`, `/notebooks/a.ipynb` and
/// `/project-dir:/notebooks/a.ipynb` alike. Paths in other roots keep their
/// root segment and never match a step.
fn project_relative(path: &str) -> &str {
    let path = match path::unpack(path) {
        Ok((root, rest)) if root == Root::ProjectDir.as_str() => rest,
        _ => path,
    };
    path.strip_prefix(PATH_SEPARATOR).unwrap_or(path)
}

/// Selected files split by what may happen to them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FileValidation {
    /// Notebooks already backing another step
    pub used_notebook_files: Vec<String>,
    /// Files whose extension cannot back a step
    pub forbidden: Vec<String>,
    /// Files that can be assigned
    pub allowed: Vec<String>,
}

impl FileValidation {
    /// Check if every selected file can be assigned.
    pub fn is_clean(&self) -> bool {
        self.used_notebook_files.is_empty() && self.forbidden.is_empty()
    }
}

/// Partition `selected` for assignment to the step `current_step_id`.
///
/// A notebook bound to a different step goes to `used_notebook_files`;
/// rebinding it to the step that already uses it is fine. Selected and
/// stored paths are compared relative to the project directory, so tree
/// paths and combined paths match too. Anything else with
/// an extension outside [`ALLOWED_STEP_EXTENSIONS`] is `forbidden`. Each
/// path lands in exactly one group, in input order.
pub fn validate_files<S: AsRef<str>>(
    current_step_id: &str,
    steps: &HashMap<String, Step>,
    selected: &[S],
) -> FileValidation {
    let mut validation = FileValidation::default();

    for path in selected.iter().map(AsRef::as_ref) {
        let relative = project_relative(path);
        let used_elsewhere = is_file_of_extension(&[NOTEBOOK_EXTENSION], path)
            && steps.iter().any(|(id, step)| {
                id != current_step_id && project_relative(&step.file_path) == relative
            });

        let group = if used_elsewhere {
            &mut validation.used_notebook_files
        } else if !is_file_of_extension(ALLOWED_STEP_EXTENSIONS, path) {
            &mut validation.forbidden
        } else {
            &mut validation.allowed
        };
        group.push(path.to_string());
    }

    debug!(
        step = current_step_id,
        allowed = validation.allowed.len(),
        forbidden = validation.forbidden.len(),
        used_notebooks = validation.used_notebook_files.len(),
        "validated step files"
    );
    validation
}
