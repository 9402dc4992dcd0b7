//! Filter stage.
//!
//! A [`FilterSpec`] maps columns to the set of canonical string values a
//! record may hold in that column. Comparison is exact string equality
//! against [`FieldValue::canonical`](autotable_types::FieldValue::canonical);
//! there is no substring or case-insensitive matching.
//!
//! The default combination is OR within a column and AND across columns.
//! Either level can be switched with [`FilterOperation`] to reproduce the
//! older per-column / global operation toggles of the table UI.

use autotable_types::Automation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ColumnRef;

/// How several constraints are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperation {
    And,
    Or,
}

impl FilterOperation {
    /// Parses `and` / `or`, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("and") {
            Some(Self::And)
        } else if s.eq_ignore_ascii_case("or") {
            Some(Self::Or)
        } else {
            None
        }
    }
}

/// Permitted values for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    values: Vec<String>,
    operation: FilterOperation,
}

impl ColumnFilter {
    /// The cell must equal at least one of `values`.
    pub fn any_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_operation(values, FilterOperation::Or)
    }

    /// The cell must equal every one of `values`.
    pub fn all_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_operation(values, FilterOperation::And)
    }

    pub fn with_operation<I, S>(values: I, operation: FilterOperation) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !deduped.contains(&value) {
                deduped.push(value);
            }
        }
        Self {
            values: deduped,
            operation,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub const fn operation(&self) -> FilterOperation {
        self.operation
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn accepts(&self, cell: &str) -> bool {
        match self.operation {
            FilterOperation::Or => self.values.iter().any(|v| v == cell),
            FilterOperation::And => self.values.iter().all(|v| v == cell),
        }
    }
}

/// Per-column value constraints for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    columns: BTreeMap<ColumnRef, ColumnFilter>,
    operation: FilterOperation,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSpec {
    /// An empty spec: every record matches.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: BTreeMap::new(),
            operation: FilterOperation::And,
        }
    }

    /// Sets how constrained columns are combined (AND by default).
    #[must_use]
    pub fn with_operation(mut self, operation: FilterOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Adds or replaces the constraint for a column.
    ///
    /// An empty value set removes the constraint instead.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<ColumnRef>, filter: ColumnFilter) -> Self {
        self.insert(column, filter);
        self
    }

    /// Adds or replaces the constraint for a column.
    ///
    /// An empty value set removes the constraint instead.
    pub fn insert(&mut self, column: impl Into<ColumnRef>, filter: ColumnFilter) {
        let column = column.into();
        if filter.is_empty() {
            self.columns.remove(&column);
        } else {
            self.columns.insert(column, filter);
        }
    }

    #[must_use]
    pub fn get(&self, column: &ColumnRef) -> Option<&ColumnFilter> {
        self.columns.get(column)
    }

    #[must_use]
    pub const fn operation(&self) -> FilterOperation {
        self.operation
    }

    /// Number of constrained columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if the record satisfies the spec.
    #[must_use]
    pub fn matches(&self, record: &Automation) -> bool {
        if self.columns.is_empty() {
            return true;
        }
        let mut per_column = self
            .columns
            .iter()
            .map(|(column, filter)| column_matches(record, column, filter));
        match self.operation {
            FilterOperation::And => per_column.all(|m| m),
            FilterOperation::Or => per_column.any(|m| m),
        }
    }

    /// Returns the matching records, in input order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Automation>
    where
        I: IntoIterator<Item = &'a Automation>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn column_matches(record: &Automation, column: &ColumnRef, filter: &ColumnFilter) -> bool {
    match column.column() {
        Some(column) => filter.accepts(&record.field(column).canonical()),
        None => false,
    }
}
