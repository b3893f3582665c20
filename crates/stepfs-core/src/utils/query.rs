//! Request paths for the file-management API.
//!
//! Only the request and response shapes live here; performing the request is
//! left to the caller's HTTP layer.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::config::{EXTENSION_LIST_SEPARATOR, FILE_MANAGEMENT_ENDPOINT};
use crate::error::QueryError;
use crate::models::Root;

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.?[A-Za-z0-9]+$").expect("extension pattern is valid"));

/// Build `endpoint?k=v&...` with percent-encoded values.
fn build_url(endpoint: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{FILE_MANAGEMENT_ENDPOINT}/{endpoint}?{query}")
}

// =============================================================================
// Extension Search
// =============================================================================

/// Search for files with given extensions below a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionSearchQuery {
    project_uuid: String,
    root: Root,
    path: String,
    extensions: Vec<String>,
}

impl ExtensionSearchQuery {
    /// Validate and normalize the parameters.
    ///
    /// Extensions lose their leading dot; they must be non-empty and
    /// alphanumeric.
    pub fn new<S: AsRef<str>>(
        project_uuid: impl Into<String>,
        root: Root,
        path: impl Into<String>,
        extensions: &[S],
    ) -> Result<Self, QueryError> {
        let project_uuid = project_uuid.into();
        if project_uuid.is_empty() {
            return Err(QueryError::EmptyProject);
        }
        if extensions.is_empty() {
            return Err(QueryError::NoExtensions);
        }

        let extensions = extensions
            .iter()
            .map(|extension| {
                let extension = extension.as_ref();
                if !EXTENSION_RE.is_match(extension) {
                    return Err(QueryError::InvalidExtension(extension.to_string()));
                }
                Ok(extension.trim_start_matches('.').to_string())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            project_uuid,
            root,
            path: path.into(),
            extensions,
        })
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Request path, e.g.
    /// `/async/file-management/extension-search?project_uuid=..&root=%2Fdata&path=%2F&extensions=py%2Cipynb`.
    pub fn to_url(&self) -> String {
        let extensions = self.extensions.join(EXTENSION_LIST_SEPARATOR);
        build_url(
            "extension-search",
            &[
                ("project_uuid", self.project_uuid.as_str()),
                ("root", self.root.as_str()),
                ("path", self.path.as_str()),
                ("extensions", extensions.as_str()),
            ],
        )
    }
}

/// Body of an extension-search response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ExtensionSearchResponse {
    /// Matching files, relative to the searched directory
    pub files: Vec<String>,
}

// =============================================================================
// Browse
// =============================================================================

/// Fetch a directory subtree for merging into a root's tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseQuery {
    pub project_uuid: String,
    pub root: Root,
    pub path: String,
    /// Levels to expand; `None` fetches the full subtree
    pub depth: Option<u32>,
}

impl BrowseQuery {
    pub fn to_url(&self) -> String {
        let depth = self.depth.map(|d| d.to_string());
        let mut params = vec![
            ("project_uuid", self.project_uuid.as_str()),
            ("root", self.root.as_str()),
            ("path", self.path.as_str()),
        ];
        if let Some(depth) = depth.as_deref() {
            params.push(("depth", depth));
        }
        build_url("browse", &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_search_url() {
        let query =
            ExtensionSearchQuery::new("p-1", Root::ProjectDir, "/src/", &["py", ".ipynb"]).unwrap();
        assert_eq!(query.extensions(), &["py", "ipynb"]);
        assert_eq!(
            query.to_url(),
            "/async/file-management/extension-search?project_uuid=p-1\
             &root=%2Fproject-dir&path=%2Fsrc%2F&extensions=py%2Cipynb"
        );
    }

    #[test]
    fn test_extension_search_encodes_path() {
        let query = ExtensionSearchQuery::new("p", Root::Data, "/my dir/&x/", &["R"]).unwrap();
        assert!(query.to_url().contains("path=%2Fmy%20dir%2F%26x%2F"));
    }

    #[test]
    fn test_extension_search_rejects_bad_input() {
        assert_eq!(
            ExtensionSearchQuery::new("", Root::Data, "/", &["py"]),
            Err(QueryError::EmptyProject)
        );
        let none: [&str; 0] = [];
        assert_eq!(
            ExtensionSearchQuery::new("p", Root::Data, "/", &none),
            Err(QueryError::NoExtensions)
        );
        assert_eq!(
            ExtensionSearchQuery::new("p", Root::Data, "/", &["py,sh"]),
            Err(QueryError::InvalidExtension("py,sh".to_string()))
        );
        assert!(ExtensionSearchQuery::new("p", Root::Data, "/", &["."]).is_err());
    }

    #[test]
    fn test_extension_search_response() {
        let response: ExtensionSearchResponse =
            serde_json::from_str(r#"{"files": ["a.py", "sub/b.py"]}"#).unwrap();
        assert_eq!(response.files, vec!["a.py", "sub/b.py"]);
    }

    #[test]
    fn test_browse_url() {
        let mut query = BrowseQuery {
            project_uuid: "p".to_string(),
            root: Root::Data,
            path: "/raw/".to_string(),
            depth: Some(1),
        };
        assert_eq!(
            query.to_url(),
            "/async/file-management/browse?project_uuid=p&root=%2Fdata&path=%2Fraw%2F&depth=1"
        );
        query.depth = None;
        assert!(!query.to_url().contains("depth"));
    }
}
