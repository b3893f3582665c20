//! Helpers at the edges of the file manager.
//!
//! Provides:
//! - [`ExtensionSearchQuery`], [`BrowseQuery`] - file-management request paths
//! - [`ElementTree`] - nearest labeled ancestor lookup for drag sources

mod ancestry;
mod query;

pub use ancestry::{ElementId, ElementTree};
pub use query::{BrowseQuery, ExtensionSearchQuery, ExtensionSearchResponse};
