//! # Menu Core - Domain Module
//!
//! Menu records, languages and the category catalog.

pub mod catalog;
pub mod language;
pub mod record;

pub use catalog::{CategoryCatalog, ParentCategory, SubCategory};
pub use language::Language;
pub use record::{format_price, DietType, MenuRecord};
