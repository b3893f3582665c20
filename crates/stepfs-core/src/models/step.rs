use serde::{Deserialize, Serialize};

/// A pipeline step as far as file binding is concerned.
///
/// Steps are keyed by their uuid in the pipeline definition, so the id is
/// not repeated here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// File backing the step, relative to the project directory
    pub file_path: String,
    /// Display title
    #[serde(default)]
    pub title: String,
}

impl Step {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            title: String::new(),
        }
    }
}
