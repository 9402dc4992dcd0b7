//! Record model for the automations table.
//!
//! This crate defines the plain data the query engine works over:
//! - [`Automation`] records and their closed enumerations
//! - [`Column`], the fixed set of queryable columns
//! - [`FieldValue`], a typed view of one cell with a canonical string form
//!
//! Nothing here knows about filtering, sorting or HTTP.

mod column;
mod record;
pub mod timestamp;

pub use column::{Column, FieldValue};
pub use record::{Automation, AutomationType, Status};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
