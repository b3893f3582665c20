//! Root-qualified path value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{PATH_SEPARATOR, ROOT_SEPARATOR};
use crate::error::PathError;
use crate::fs::path;

use super::Root;

/// A path inside one root, e.g. `/project-dir:/notebooks/eda.ipynb`.
///
/// # Path Convention
///
/// - Root of a mount: `/`
/// - File: `/notebooks/eda.ipynb`
/// - Directory: `/notebooks/` (trailing separator)
///
/// The string form is only produced through [`fmt::Display`] and read back
/// through [`FromStr`], so a constructed value always has a known root and an
/// absolute path part.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CombinedPath {
    root: Root,
    path: String,
}

impl CombinedPath {
    /// Create a path inside `root`. The path part must start with `/`.
    pub fn new(root: Root, path: impl Into<String>) -> Result<Self, PathError> {
        let path = path.into();
        if !path.starts_with(PATH_SEPARATOR) {
            return Err(PathError::NotAbsolute(path));
        }
        Ok(Self { root, path })
    }

    /// The mount point of `root` itself.
    pub fn root_of(root: Root) -> Self {
        Self {
            root,
            path: PATH_SEPARATOR.to_string(),
        }
    }

    #[inline]
    pub fn root(&self) -> Root {
        self.root
    }

    /// Path relative to the root's mount point.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Check if this path denotes a directory.
    #[inline]
    pub fn is_directory(&self) -> bool {
        path::is_directory(&self.path)
    }

    /// Check if this is the mount point of its root.
    pub fn is_root(&self) -> bool {
        self.path.len() == 1
    }

    /// Leaf name; the root's own name for a mount point.
    pub fn basename(&self) -> String {
        match path::leaf_name(&self.path) {
            "" => self.root.name().to_string(),
            name => name.to_string(),
        }
    }

    /// The directory containing this entry. The mount point is its own parent.
    pub fn parent(&self) -> Self {
        Self {
            root: self.root,
            path: path::parent_path(&self.path),
        }
    }

    /// Human-readable location, e.g. `Project files/notebooks/`.
    pub fn describe(&self) -> String {
        format!("{}{}", self.root.pretty(), self.path)
    }
}

impl fmt::Display for CombinedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.root, ROOT_SEPARATOR, self.path)
    }
}

impl FromStr for CombinedPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (root, path) = path::unpack(s)?;
        Self::new(root.parse()?, path)
    }
}

impl TryFrom<String> for CombinedPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CombinedPath> for String {
    fn from(value: CombinedPath) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let path: CombinedPath = "/project-dir:/notebooks/eda.ipynb".parse().unwrap();
        assert_eq!(path.root(), Root::ProjectDir);
        assert_eq!(path.path(), "/notebooks/eda.ipynb");
        assert!(!path.is_directory());
        assert_eq!(path.to_string(), "/project-dir:/notebooks/eda.ipynb");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "/project-dir/a.py".parse::<CombinedPath>(),
            Err(PathError::MissingSeparator("/project-dir/a.py".to_string()))
        );
        assert_eq!(
            "/home:/a.py".parse::<CombinedPath>(),
            Err(PathError::UnknownRoot("/home".to_string()))
        );
        assert_eq!(
            "/data:a.py".parse::<CombinedPath>(),
            Err(PathError::NotAbsolute("a.py".to_string()))
        );
    }

    #[test]
    fn test_only_first_separator_splits() {
        let path: CombinedPath = "/data:/logs/12:30.txt".parse().unwrap();
        assert_eq!(path.root(), Root::Data);
        assert_eq!(path.path(), "/logs/12:30.txt");
        assert_eq!(path.basename(), "12:30.txt");
    }

    #[test]
    fn test_basename() {
        let root = CombinedPath::root_of(Root::ProjectDir);
        assert!(root.is_root());
        assert_eq!(root.basename(), "project-dir");

        let dir: CombinedPath = "/data:/raw/".parse().unwrap();
        assert_eq!(dir.basename(), "raw");
    }

    #[test]
    fn test_parent() {
        let file: CombinedPath = "/project-dir:/a/b/c.py".parse().unwrap();
        assert_eq!(file.parent().to_string(), "/project-dir:/a/b/");
        assert_eq!(file.parent().parent().to_string(), "/project-dir:/a/");

        let root = CombinedPath::root_of(Root::Data);
        assert_eq!(root.parent(), root);
    }

    #[test]
    fn test_describe() {
        let dir: CombinedPath = "/project-dir:/notebooks/".parse().unwrap();
        assert_eq!(dir.describe(), "Project files/notebooks/");
        let data: CombinedPath = "/data:/raw/".parse().unwrap();
        assert_eq!(data.describe(), "/data/raw/");
    }

    #[test]
    fn test_serde_as_string() {
        let path: CombinedPath = "/data:/x.csv".parse().unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"/data:/x.csv\"");
        let back: CombinedPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
        assert!(serde_json::from_str::<CombinedPath>("\"nope\"").is_err());
    }
}
