//! Aggregation of build-time records into display data.
//!
//! This module turns a set of records into:
//! - Summary statistics (count, files, total, mean, std dev)
//! - Histogram bar fractions relative to the longest record

pub mod bars;
pub mod stats;

// Re-export main types and functions
pub use bars::{bar_fraction, bar_fractions, longest_duration};
pub use stats::{summarize, AggregateStats};
