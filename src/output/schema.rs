//! Output JSON schema for build-time reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::AggregateStats;
use crate::parser::{BuildTimeRecord, SkippedLine};
use crate::sort::SortDescriptor;
use crate::utils::config::SCHEMA_VERSION;
use crate::view::ViewState;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Log file the records were loaded from
    pub source_file: String,

    /// Sort order the records are listed in
    pub sort_order: Vec<SortDescriptor>,

    /// Statistics of the selection (or of every record when nothing is selected)
    pub stats: AggregateStats,

    /// Display positions of the selected records
    pub selected_rows: Vec<usize>,

    /// Every record, in display order
    pub records: Vec<BuildTimeRecord>,

    /// Lines of the log that failed to parse
    pub skipped_lines: Vec<SkippedLineEntry>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// A rejected log line as stored in the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkippedLineEntry {
    pub line_number: usize,
    pub readout: String,
    pub error: String,
}

/// Convert the view and the lines its load skipped to the report format
///
/// **Public** - used by commands to create final output
pub fn to_report(source_file: &str, view: &ViewState, skipped: &[SkippedLine]) -> Report {
    use chrono::Utc;

    let stats = if view.stats().is_empty() {
        crate::aggregator::summarize(view.rows())
    } else {
        view.stats().clone()
    };

    Report {
        version: SCHEMA_VERSION.to_string(),
        source_file: source_file.to_string(),
        sort_order: view.sort_order().to_vec(),
        stats,
        selected_rows: view.selected_rows(),
        records: view.rows().cloned().collect(),
        skipped_lines: skipped
            .iter()
            .map(|skipped| SkippedLineEntry {
                line_number: skipped.line_number,
                readout: skipped.readout().to_string(),
                error: skipped.error.to_string(),
            })
            .collect(),
        generated_at: Utc::now().to_rfc3339(),
    }
}
