//! Decoding of the `sort` and `filters` query parameters.
//!
//! Both arrive as JSON embedded in the query string:
//!
//! ```text
//! sort=[{"column":"name","direction":"ASC"}]
//! filters={"status":{"filterValues":["active"]}}
//! ```
//!
//! Decoding never fails. Malformed JSON yields an empty spec and individual
//! malformed entries are skipped, each with a warning, so a bad parameter
//! only ever widens the result.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::{ColumnFilter, ColumnRef, FilterOperation, FilterSpec, SortDirection, SortKey, SortSpec};

#[derive(Deserialize)]
struct WireSortKey {
    column: String,
    direction: SortDirection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireColumnFilter {
    filter_values: Vec<String>,
    #[serde(default)]
    operation: Option<FilterOperation>,
}

impl SortSpec {
    /// Decodes a JSON array of `{column, direction}` objects.
    #[must_use]
    pub fn from_json_lenient(raw: &str) -> Self {
        let entries: Vec<Value> = match serde_json::from_str(raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "ignoring malformed sort parameter");
                return Self::default();
            }
        };

        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<WireSortKey>(entry) {
                Ok(key) => Some(SortKey {
                    column: ColumnRef::from(key.column),
                    direction: key.direction,
                }),
                Err(e) => {
                    warn!(error = %e, "skipping malformed sort entry");
                    None
                }
            })
            .collect()
    }
}

impl FilterSpec {
    /// Decodes a JSON object of `column -> {filterValues, operation?}`.
    ///
    /// `operation` sets how constrained columns combine with each other.
    /// A column without its own `operation` accepts any of its values.
    #[must_use]
    pub fn from_json_lenient(raw: &str, operation: FilterOperation) -> Self {
        let mut spec = Self::new().with_operation(operation);
        let columns: serde_json::Map<String, Value> = match serde_json::from_str(raw) {
            Ok(columns) => columns,
            Err(e) => {
                warn!(error = %e, "ignoring malformed filters parameter");
                return spec;
            }
        };

        for (name, entry) in columns {
            match serde_json::from_value::<WireColumnFilter>(entry) {
                Ok(filter) => {
                    let operation = filter.operation.unwrap_or(FilterOperation::Or);
                    spec.insert(
                        name,
                        ColumnFilter::with_operation(filter.filter_values, operation),
                    );
                }
                Err(e) => warn!(column = %name, error = %e, "skipping malformed column filter"),
            }
        }
        spec
    }
}
