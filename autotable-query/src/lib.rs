//! Query engine for the automations table.
//!
//! A query runs three pure stages against an in-memory snapshot, always in
//! this order:
//! - [`FilterSpec`]: per-column value membership (OR within a column,
//!   AND across columns by default)
//! - [`SortSpec`]: stable multi-key ordering
//! - [`PageRequest`]: 1-based page slicing, reporting the filtered total
//!
//! [`Query::run`] wires the stages together. No stage mutates the input
//! collection or keeps state between calls, so a shared snapshot can be
//! queried from many requests at once.

mod collate;
mod column_ref;
mod error;
mod facets;
mod filter;
mod page;
mod query;
mod sort;
mod wire;

pub use column_ref::ColumnRef;
pub use error::{QueryError, QueryResult};
pub use facets::{DEFAULT_SAMPLE_LIMIT, sample_values};
pub use filter::{ColumnFilter, FilterOperation, FilterSpec};
pub use page::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest, PageResult};
pub use query::Query;
pub use sort::{SortDirection, SortKey, SortSpec};
