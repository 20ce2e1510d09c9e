//! # Menu Core
//!
//! Menu data pipeline shared by every language page: the record model,
//! CSV parsing and validation, language and category filtering, the
//! category catalog and the navigation / splash state machines.

pub mod domain;
pub mod error;
pub mod filter;
pub mod parser;
pub mod pipeline;
pub mod selection;
pub mod session;
pub mod splash;
pub mod variant;

pub use domain::*;
pub use error::MenuError;
pub use filter::{filter_by_category, filter_by_language, LanguageMenu, LanguagePolicy};
pub use parser::{parse_menu_csv, ParseOutcome, RejectedRow, RowRejection};
pub use pipeline::{MenuBoard, MenuPipeline, MenuSource};
pub use selection::CategorySelection;
pub use session::SessionState;
pub use splash::{SplashPhase, SplashSequence, SplashState, SplashTimings};
pub use variant::{default_source_url, LanguageVariant, VariantLabels, VariantRegistry};
