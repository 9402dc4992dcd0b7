//! Pagination stage.

use autotable_types::Automation;
use serde::{Deserialize, Serialize};

use crate::{QueryError, QueryResult};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A validated, 1-based page window.
///
/// Both fields are at least 1; the only way to build one is through
/// [`PageRequest::new`] or [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Validates a page number and page size.
    ///
    /// Returns [`QueryError::InvalidQuery`] if either is below 1.
    pub fn new(page: i64, page_size: i64) -> QueryResult<Self> {
        let page = positive("page", page)?;
        let page_size = positive("pageSize", page_size)?;
        Ok(Self { page, page_size })
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first record on this page. Saturates instead of
    /// overflowing for absurd page numbers.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed to show `total` records.
    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Cuts one page out of the filtered, sorted rows.
    ///
    /// `total` is always the length of `rows`, whichever page is asked for.
    /// A page past the end is empty, not an error.
    #[must_use]
    pub fn paginate(&self, rows: &[&Automation]) -> PageResult {
        let total = rows.len();
        let start = self.offset();
        if start >= total {
            return PageResult {
                data: Vec::new(),
                total,
            };
        }
        let end = start.saturating_add(self.page_size).min(total);
        PageResult {
            data: rows[start..end].iter().map(|r| (*r).clone()).collect(),
            total,
        }
    }
}

fn positive(name: &str, value: i64) -> QueryResult<usize> {
    if value < 1 {
        return Err(QueryError::InvalidQuery(format!(
            "{name} must be a positive integer, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| QueryError::InvalidQuery(format!("{name} is too large: {value}")))
}

/// One page of results plus the number of records that matched the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub data: Vec<Automation>,
    pub total: usize,
}
