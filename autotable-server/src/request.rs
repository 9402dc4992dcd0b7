//! Query-string decoding for the `/automations` endpoints.

use autotable_query::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SAMPLE_LIMIT, FilterOperation, FilterSpec,
    PageRequest, Query, QueryError, QueryResult, SortSpec,
};
use tracing::{debug, warn};

/// Raw parameters of `GET /automations`.
///
/// Everything is kept as text so that bad values surface as
/// [`QueryError::InvalidQuery`] (for paging) or degrade silently (for sort
/// and filters) instead of failing extraction. Built from the raw query
/// pairs; when a key repeats, the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct AutomationsParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    /// JSON array of `{column, direction}`.
    pub sort: Option<String>,
    /// JSON object of `column -> {filterValues}`.
    pub filters: Option<String>,
    /// `and` (default) or `or`.
    pub filter_operation: Option<String>,
}

impl FromIterator<(String, String)> for AutomationsParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "pageSize" => &mut params.page_size,
                "sort" => &mut params.sort,
                "filters" => &mut params.filters,
                "filterOperation" => &mut params.filter_operation,
                _ => continue,
            };
            keep_first(slot, &key, value);
        }
        params
    }
}

impl AutomationsParams {
    /// Builds the engine query, applying defaults for missing parameters.
    pub fn into_query(self) -> QueryResult<Query> {
        let page = parse_count("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let page_size = parse_count("pageSize", self.page_size.as_deref(), DEFAULT_PAGE_SIZE)?;
        let page = PageRequest::new(page, page_size)?;

        let operation = match self.filter_operation.as_deref() {
            None => FilterOperation::And,
            Some(raw) => FilterOperation::parse(raw).unwrap_or_else(|| {
                warn!(value = raw, "unknown filterOperation, using and");
                FilterOperation::And
            }),
        };

        let filter = match self.filters.as_deref() {
            Some(raw) => FilterSpec::from_json_lenient(raw, operation),
            None => FilterSpec::new().with_operation(operation),
        };
        let sort = self
            .sort
            .as_deref()
            .map(SortSpec::from_json_lenient)
            .unwrap_or_default();

        Ok(Query::new(filter, sort, page))
    }
}

/// Raw parameters of `GET /automations/columns/{column}/samples`.
#[derive(Debug, Clone, Default)]
pub struct SampleParams {
    pub limit: Option<String>,
}

impl FromIterator<(String, String)> for SampleParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            if key == "limit" {
                keep_first(&mut params.limit, &key, value);
            }
        }
        params
    }
}

impl SampleParams {
    pub fn limit(&self) -> QueryResult<usize> {
        match blank_to_none(self.limit.as_deref()) {
            None => Ok(DEFAULT_SAMPLE_LIMIT),
            Some(raw) => raw.parse().map_err(|_| {
                QueryError::InvalidQuery(format!("limit must be a non-negative integer, got {raw:?}"))
            }),
        }
    }
}

fn keep_first(slot: &mut Option<String>, key: &str, value: String) {
    if slot.is_some() {
        debug!(key, "repeated query parameter ignored");
    } else {
        *slot = Some(value);
    }
}

fn parse_count(name: &str, raw: Option<&str>, default: usize) -> QueryResult<i64> {
    match blank_to_none(raw) {
        None => Ok(default as i64),
        Some(raw) => raw
            .parse()
            .map_err(|_| QueryError::InvalidQuery(format!("{name} must be an integer, got {raw:?}"))),
    }
}

fn blank_to_none(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
