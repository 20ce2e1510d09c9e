pub mod sheet_source;
pub mod visit_tracker;

pub use sheet_source::HttpSheetSource;
pub use visit_tracker::{VisitError, VisitTracker};
