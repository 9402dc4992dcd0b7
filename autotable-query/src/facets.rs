//! Distinct sample values per column, for filter pickers.

use autotable_types::{Automation, Column};
use std::collections::HashSet;

pub const DEFAULT_SAMPLE_LIMIT: usize = 3;

/// Returns up to `limit` distinct canonical values of `column`, in the order
/// they first appear in `records`.
///
/// Clients use these to offer preset filter values; since they are
/// canonical strings they always round-trip through the filter stage.
#[must_use]
pub fn sample_values(records: &[Automation], column: Column, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut samples = Vec::new();
    for record in records {
        if samples.len() >= limit {
            break;
        }
        let value = record.field(column).canonical().into_owned();
        if seen.insert(value.clone()) {
            samples.push(value);
        }
    }
    samples
}
