//! String-level path algebra.
//!
//! Works directly on the string forms used by the UI: combined paths
//! (`/project-dir:/a/b.py`) and root-relative paths (`/a/b.py`). A trailing
//! `/` marks a directory everywhere. Only [`unpack`] and the helpers built on
//! it look at the root segment; the rest treat their input as plain
//! `/`-delimited strings and accept either form.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::{self, PATH_SEPARATOR, ROOT_MARKER, ROOT_SEPARATOR};
use crate::error::PathError;
use crate::models::{CombinedPath, Root};

// =============================================================================
// Codec
// =============================================================================

/// Split a combined path into `(root, path)` on the first separator.
pub fn unpack(combined: &str) -> Result<(&str, &str), PathError> {
    combined
        .split_once(ROOT_SEPARATOR)
        .ok_or_else(|| PathError::MissingSeparator(combined.to_string()))
}

/// Join a root identifier and a root-relative path.
pub fn pack(root: &str, path: &str) -> String {
    format!("{root}{ROOT_SEPARATOR}{path}")
}

/// Check if a path denotes a directory.
#[inline]
pub fn is_directory(path: &str) -> bool {
    path.ends_with(PATH_SEPARATOR)
}

/// Name of the last entry of a path: the directory's own name for
/// directories, the file name otherwise. Empty for `/`.
pub fn leaf_name(path: &str) -> &str {
    let trimmed = path.strip_suffix(PATH_SEPARATOR).unwrap_or(path);
    trimmed.rsplit(PATH_SEPARATOR).next().unwrap_or_default()
}

/// Entry name of a combined path. The mount point of a root is named after
/// the root without its marker (`/project-dir:/` is `project-dir`).
pub fn basename(combined: &str) -> Result<String, PathError> {
    let (root, path) = unpack(combined)?;
    Ok(match leaf_name(path) {
        "" => root.strip_prefix(ROOT_MARKER).unwrap_or(root).to_string(),
        name => name.to_string(),
    })
}

/// Go up one level.
///
/// A directory drops its own (empty-terminated) segment pair, a file drops
/// its name; the result always ends with `/`. `/` is its own parent.
pub fn parent_path(path: &str) -> String {
    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    let drop = if is_directory(path) { 2 } else { 1 };
    let keep = segments.len().saturating_sub(drop);
    format!("{}{PATH_SEPARATOR}", segments[..keep].join("/"))
}

// =============================================================================
// Relative Paths
// =============================================================================

/// Path leading from `target_folder` to `file_path` using only `../` steps.
///
/// Both inputs lose one leading `/`. The shared prefix is measured character
/// by character and then cut back to the last segment boundary, so
/// `a/xy.py` against `a/x/` still climbs out of `x`. Every non-empty segment
/// of the folder past that point costs one `../`. Identical inputs give the
/// empty string.
pub fn relative_path(file_path: &str, target_folder: &str) -> String {
    let file = file_path.strip_prefix(PATH_SEPARATOR).unwrap_or(file_path);
    let folder = target_folder
        .strip_prefix(PATH_SEPARATOR)
        .unwrap_or(target_folder);

    if file == folder {
        return String::new();
    }

    let common = file
        .bytes()
        .zip(folder.bytes())
        .take_while(|(a, b)| a == b)
        .count();
    let cut = file.as_bytes()[..common]
        .iter()
        .rposition(|&b| b == b'/')
        .map_or(0, |i| i + 1);

    let up_levels = folder[cut..]
        .split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .count();

    format!("{}{}", "../".repeat(up_levels), &file[cut..])
}

// =============================================================================
// Moves
// =============================================================================

/// Source and destination of a drag-and-drop move.
///
/// Equal paths mean the drop was illegal or had nothing to do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveTarget {
    pub source: String,
    pub destination: String,
}

impl MoveTarget {
    fn noop(source: &str) -> Self {
        Self {
            source: source.to_string(),
            destination: source.to_string(),
        }
    }

    /// Check if nothing should be moved.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.source == self.destination
    }
}

/// Compute where `source` ends up when dropped on `target`.
///
/// Dropping onto itself or anywhere below itself is a no-op. Dropping onto a
/// file moves next to that file. Neither existence nor name collisions are
/// checked here.
pub fn derive_move_target(source: &str, target: &str) -> Result<MoveTarget, PathError> {
    unpack(target)?;
    if target == source || target.starts_with(source) {
        return Ok(MoveTarget::noop(source));
    }

    let mut destination = if is_directory(target) {
        target.to_string()
    } else {
        parent_path(target)
    };
    destination.push_str(&basename(source)?);
    if is_directory(source) {
        destination.push(PATH_SEPARATOR);
    }

    Ok(MoveTarget {
        source: source.to_string(),
        destination,
    })
}

// =============================================================================
// Selections
// =============================================================================

/// Drop paths already covered by another selected directory, and duplicates.
///
/// Order of first appearance is kept.
pub fn filter_redundant_child_paths<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    let directories: Vec<&str> = paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|path| is_directory(path))
        .collect();

    let mut seen = HashSet::new();
    paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|path| {
            !directories
                .iter()
                .any(|dir| path != dir && path.starts_with(dir))
        })
        .filter(|path| seen.insert(*path))
        .map(str::to_string)
        .collect()
}

/// Root currently in focus: the first configured root when nothing is
/// selected, else the root of the first selected path.
pub fn active_root<S: AsRef<str>>(selected: &[S], roots: &[Root]) -> Result<Root, PathError> {
    match selected.first() {
        None => Ok(roots.first().copied().unwrap_or_else(config::default_root)),
        Some(first) => unpack(first.as_ref())?.0.parse(),
    }
}

/// Folder new entries go into: the last selected directory, the folder of
/// the last selected file, or the active root's mount point.
pub fn target_folder<S: AsRef<str>>(selected: &[S], roots: &[Root]) -> Result<String, PathError> {
    let Some(last) = selected.last().map(AsRef::as_ref) else {
        return Ok(CombinedPath::root_of(active_root(selected, roots)?).to_string());
    };
    unpack(last)?;
    if is_directory(last) {
        Ok(last.to_string())
    } else {
        Ok(parent_path(last))
    }
}

/// Human-readable description of a combined path.
pub fn describe_target(combined: &str) -> Result<String, PathError> {
    Ok(combined.parse::<CombinedPath>()?.describe())
}
