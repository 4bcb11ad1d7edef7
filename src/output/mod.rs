//! Output writers for build-time reports and histograms.
//!
//! This module handles writing data to disk or the terminal:
//! - JSON reports
//! - SVG histograms
//! - Text tables

mod file;
pub mod json;
pub mod schema;
pub mod svg;
pub mod table;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use schema::{to_report, Report, SkippedLineEntry};
pub use svg::write_svg;
pub use table::format_table;
