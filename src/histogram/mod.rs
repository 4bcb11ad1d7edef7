//! Histogram views of build-time records.
//!
//! Bars are sized by the display contract in `aggregator::bars`; this module
//! only draws them.

pub mod generator;

// Re-export main types
pub use generator::{generate_histogram_svg, generate_text_histogram, HistogramConfig};
