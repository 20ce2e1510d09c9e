pub mod error;
pub mod links;
pub mod session;

pub use error::ApiError;
