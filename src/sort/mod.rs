//! Multi-key sorting of build-time records.
//!
//! Single-key comparators are combined into one deterministic order that
//! honors a prioritized list of (key, direction) pairs.

pub mod engine;
pub mod key;

pub use engine::{compare, compare_key, sort_indices, sort_records};
pub use key::{format_sort_order, parse_sort_order, SortDescriptor, SortKey};
