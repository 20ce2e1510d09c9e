//! Menu errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    #[error("Failed to fetch menu export: {0}")]
    Fetch(String),

    #[error("Menu export returned status {status}")]
    Upstream { status: u16 },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown parent category: {0}")]
    UnknownParent(String),

    #[error("Sub-category {sub_category} is not part of {parent}")]
    UnknownSubCategory { parent: String, sub_category: String },

    #[error("Parent category {0} has no sub-categories")]
    EmptyParent(String),

    #[error("Category catalog is empty")]
    EmptyCatalog,
}
