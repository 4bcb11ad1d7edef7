//! Summary statistics over a set of build-time records.
//!
//! The statistics describe whatever subset the caller hands in: the whole
//! log, or just the rows a user has selected.

use crate::parser::BuildTimeRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Summary statistics for a set of records
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of records
    pub count: usize,

    /// Number of distinct source paths
    pub unique_file_count: usize,

    /// Sum of all durations, in seconds
    pub total_duration: f64,

    /// Mean duration in seconds (0 for an empty set)
    pub mean_duration: f64,

    /// Population standard deviation in seconds (0 for an empty set)
    pub std_dev_duration: f64,
}

/// Calculate summary statistics for any collection of records
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `records` - Records to summarize, in any order
///
/// # Returns
/// Statistics that are identical for every ordering of the same records
pub fn summarize<'a, I>(records: I) -> AggregateStats
where
    I: IntoIterator<Item = &'a BuildTimeRecord>,
{
    let mut durations = Vec::new();
    let mut paths = HashSet::new();

    for record in records {
        durations.push(record.duration_seconds());
        paths.insert(record.path());
    }

    if durations.is_empty() {
        return AggregateStats::default();
    }

    // Summed in ascending order so every input permutation yields the same bits
    durations.sort_by(f64::total_cmp);

    let count = durations.len();
    let total: f64 = durations.iter().sum();
    let mean = total / count as f64;
    let variance = durations
        .iter()
        .map(|d| (d - mean) * (d - mean))
        .sum::<f64>()
        / count as f64;

    let stats = AggregateStats {
        count,
        unique_file_count: paths.len(),
        total_duration: total,
        mean_duration: mean,
        std_dev_duration: variance.sqrt(),
    };

    debug!("Summarized selection: {}", stats.summary());

    stats
}

impl AggregateStats {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for the status line of any renderer
    pub fn summary(&self) -> String {
        let items = if self.count == 1 { "item" } else { "items" };
        let files = if self.unique_file_count == 1 {
            "file"
        } else {
            "files"
        };

        format!(
            "{} {} in {} {}     Total time: {:.3}s     Mean: {:.3}s     Std dev: {:.3}s",
            self.count,
            items,
            self.unique_file_count,
            files,
            self.total_duration,
            self.mean_duration,
            self.std_dev_duration
        )
    }
}
