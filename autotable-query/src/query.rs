//! Filter, sort and paginate in one pass over a snapshot.

use autotable_types::Automation;
use tracing::debug;

use crate::{FilterSpec, PageRequest, PageResult, SortSpec};

/// A complete table query: filter, then sort, then paginate.
///
/// Any part may be left at its default; an empty filter and an empty sort
/// are identities, and the default page is page 1 of 10.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub page: PageRequest,
}

impl Query {
    #[must_use]
    pub fn new(filter: FilterSpec, sort: SortSpec, page: PageRequest) -> Self {
        Self { filter, sort, page }
    }

    /// Runs the query against a snapshot of the collection.
    ///
    /// The snapshot is only read; only the records on the returned page are
    /// cloned.
    #[must_use]
    pub fn run(&self, records: &[Automation]) -> PageResult {
        let filtered = self.filter.apply(records);
        let sorted = self.sort.apply(filtered);
        let result = self.page.paginate(&sorted);
        debug!(
            scanned = records.len(),
            total = result.total,
            page = self.page.page(),
            page_size = self.page.page_size(),
            returned = result.data.len(),
            "query executed"
        );
        result
    }
}
