//! Sort stage.
//!
//! Records are ordered by the first key, ties broken by the next, and so
//! on. Records still tied after the last key keep their input order: the
//! stage relies on `slice::sort_by`, which is a stable sort.

use autotable_types::{Automation, FieldValue};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use crate::ColumnRef;
use crate::collate::collate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison result.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// One `(column, direction)` entry of a [`SortSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: ColumnRef,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(column: impl Into<ColumnRef>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: impl Into<ColumnRef>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Desc,
        }
    }

    fn compare(&self, a: &Automation, b: &Automation) -> Ordering {
        match self.column.column() {
            Some(column) => self
                .direction
                .apply(compare_values(&a.field(column), &b.field(column))),
            None => Ordering::Equal,
        }
    }
}

/// Ordered sort keys, highest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Builds a spec from keys in priority order.
    ///
    /// A column may appear only once; later repeats are dropped.
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = SortKey>,
    {
        let mut deduped: Vec<SortKey> = Vec::new();
        for key in keys {
            if deduped.iter().any(|k| k.column == key.column) {
                debug!(column = %key.column, "dropping repeated sort column");
                continue;
            }
            deduped.push(key);
        }
        Self { keys: deduped }
    }

    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compares two records under every key in turn.
    #[must_use]
    pub fn compare(&self, a: &Automation, b: &Automation) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Returns the records in sorted order without touching the input.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Automation>
    where
        I: IntoIterator<Item = &'a Automation>,
    {
        let mut rows: Vec<&'a Automation> = records.into_iter().collect();
        if !self.keys.is_empty() {
            rows.sort_by(|a, b| self.compare(a, b));
        }
        rows
    }
}

impl FromIterator<SortKey> for SortSpec {
    fn from_iter<I: IntoIterator<Item = SortKey>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Type-aware comparison of two cells.
///
/// Text and enum literals collate; timestamps compare by instant; anything
/// else falls back to ordering the canonical strings.
fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Timestamp(x), FieldValue::Timestamp(y)) => x.cmp(y),
        _ => match (a.as_text(), b.as_text()) {
            (Some(x), Some(y)) => collate(x, y),
            _ => a.canonical().cmp(&b.canonical()),
        },
    }
}
