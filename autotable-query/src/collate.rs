//! Locale-style string ordering for text columns.

use std::cmp::Ordering;

/// Compares two strings the way a table UI expects them ordered.
///
/// Ordering is decided in three passes:
/// 1. case-insensitively, over lowercased characters
/// 2. position by position, lowercase sorts before anything else
/// 3. by code point, so distinct strings never compare equal
///
/// Accent folding is not applied.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a
        .cmp(folded_b)
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    let upper_a = a.chars().map(|c| !c.is_lowercase());
    let upper_b = b.chars().map(|c| !c.is_lowercase());
    upper_a.cmp(upper_b)
}
