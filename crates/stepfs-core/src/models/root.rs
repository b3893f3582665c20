//! Top-level mounts of the file namespace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ROOT_MARKER;
use crate::error::PathError;

/// An independent top-level mount.
///
/// Roots never nest inside one another. The string form always starts with
/// the root marker (`/`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Root {
    /// Files of the current project
    #[serde(rename = "/project-dir")]
    ProjectDir,
    /// Shared data directory
    #[serde(rename = "/data")]
    Data,
}

impl Root {
    /// Identifier as it appears in combined paths (e.g. `/project-dir`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectDir => "/project-dir",
            Self::Data => "/data",
        }
    }

    /// Identifier without its leading marker (e.g. `project-dir`).
    pub fn name(&self) -> &'static str {
        let id = self.as_str();
        id.strip_prefix(ROOT_MARKER).unwrap_or(id)
    }

    /// Label shown to users when describing a location.
    pub fn pretty(&self) -> &'static str {
        match self {
            Self::ProjectDir => "Project files",
            Self::Data => "/data",
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Root {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/project-dir" => Ok(Self::ProjectDir),
            "/data" => Ok(Self::Data),
            other => Err(PathError::UnknownRoot(other.to_string())),
        }
    }
}
