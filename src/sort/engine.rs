//! Composite multi-key comparison of build-time records.
//!
//! Keys are applied in priority order: the first key that tells two records
//! apart decides, later keys only break ties.

use super::key::{SortDescriptor, SortKey};
use crate::parser::BuildTimeRecord;
use log::debug;
use std::cmp::Ordering;

/// Compare two records under an ordered list of sort descriptors
///
/// **Public** - main comparator
///
/// # Arguments
/// * `a`, `b` - Records to compare
/// * `order` - Descriptors, highest priority first
///
/// # Returns
/// `Ordering::Equal` when every key ties, including for an empty order
pub fn compare(a: &BuildTimeRecord, b: &BuildTimeRecord, order: &[SortDescriptor]) -> Ordering {
    order
        .iter()
        .map(|descriptor| {
            let ordering = compare_key(a, b, descriptor.key);
            if descriptor.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compare two records on a single key, ascending
///
/// **Public** - building block of compare
pub fn compare_key(a: &BuildTimeRecord, b: &BuildTimeRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Duration => a.duration_seconds().total_cmp(&b.duration_seconds()),
        SortKey::Path => compare_case_insensitive(a.path(), b.path()),
        SortKey::FunctionName => compare_case_insensitive(a.function_name(), b.function_name()),
        SortKey::LineNumber => a.line_number().cmp(&b.line_number()),
    }
}

/// Sort records in place
///
/// **Public** - used when the caller owns the collection directly
///
/// The sort is stable. With a non-empty order, records that tie on every
/// key fall back to `canonical_order`, so any permutation of the same input
/// sorts to the same output. An empty order leaves the slice untouched.
pub fn sort_records(records: &mut [BuildTimeRecord], order: &[SortDescriptor]) {
    if order.is_empty() {
        return;
    }

    debug!("Sorting {} records by {} keys", records.len(), order.len());
    records.sort_by(|a, b| compare(a, b, order).then_with(|| canonical_order(a, b)));
}

/// Sort a permutation of indices into `records` instead of the records
///
/// **Public** - used by the view state, which keeps records in load order
///
/// Same tie-breaking rules as `sort_records`.
pub fn sort_indices(records: &[BuildTimeRecord], indices: &mut [usize], order: &[SortDescriptor]) {
    if order.is_empty() {
        return;
    }

    indices.sort_by(|&a, &b| {
        let (a, b) = (&records[a], &records[b]);
        compare(a, b, order).then_with(|| canonical_order(a, b))
    });
}

/// Exact total order over every field, used only to break full ties
///
/// **Private** - internal helper for sort_records / sort_indices
fn canonical_order(a: &BuildTimeRecord, b: &BuildTimeRecord) -> Ordering {
    a.path()
        .cmp(b.path())
        .then_with(|| a.function_name().cmp(b.function_name()))
        .then_with(|| a.line_number().cmp(&b.line_number()))
        .then_with(|| a.duration_seconds().total_cmp(&b.duration_seconds()))
}

/// Lexicographic comparison after lowercasing each character
///
/// **Private** - internal helper for compare_key
fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
