//! Inspect command implementation.
//!
//! The inspect command:
//! 1. Loads the build-time log (skipping malformed lines)
//! 2. Sorts the records
//! 3. Applies the selection and summarizes it
//! 4. Prints the table or text histogram
//! 5. Writes optional SVG and JSON outputs

use super::models::InspectArgs;
use crate::aggregator::{summarize, AggregateStats};
use crate::histogram::{generate_histogram_svg, generate_text_histogram};
use crate::output::{format_table, to_report, write_report, write_svg};
use crate::parser::{load_log_file, BuildTimeRecord, LoadReport};
use crate::utils::config::MAX_TABLE_LIMIT;
use crate::view::{PrintRevealer, ViewState};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// What an inspect run produced
///
/// **Public** - returned to callers and tests
#[derive(Debug, Clone)]
pub struct InspectOutcome {
    /// Records loaded into the view
    pub record_count: usize,

    /// Lines skipped as malformed
    pub skipped_count: usize,

    /// Statistics of the selection
    pub selection_stats: AggregateStats,

    /// Statistics of every record
    pub overall_stats: AggregateStats,
}

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Log file missing or unreadable
/// * File write errors for SVG / JSON outputs
///
/// Malformed lines are not errors; they are counted in the outcome.
pub fn execute_inspect(args: InspectArgs) -> Result<InspectOutcome> {
    let start_time = Instant::now();

    info!("Starting inspection of: {}", args.log_file.display());

    // Step 1: Load log
    info!("Step 1/5: Loading build-time log...");
    let load_report = load_log_file(&args.log_file).context("Failed to load build-time log")?;

    if load_report.has_skipped() {
        warn!(
            "Skipped {} malformed lines out of {}",
            load_report.skipped.len(),
            load_report.lines_read()
        );
    }

    let LoadReport { records, skipped } = load_report;
    let record_count = records.len();
    let mut view = ViewState::new(Box::new(PrintRevealer));
    view.load(records);

    // Step 2: Sort
    info!("Step 2/5: Sorting {} records...", record_count);
    view.set_sort_order(args.sort_order.clone());

    // Step 3: Select
    info!("Step 3/5: Applying selection...");
    if args.select_all {
        view.select_all();
    } else if !args.select_rows.is_empty() {
        view.set_selection(args.select_rows.iter().copied());
    }

    let selection_stats = view.stats().clone();
    let overall_stats = summarize(view.rows());
    debug!("Overall: {}", overall_stats.summary());

    // Step 4: Render
    info!("Step 4/5: Rendering...");
    let rows: Vec<&BuildTimeRecord> = view.rows().collect();

    println!();
    if args.histogram {
        println!(
            "{}",
            generate_text_histogram(&rows, args.limit, &args.histogram_config)
        );
    } else {
        println!("{}", format_table(&view, args.limit));
    }
    println!();
    println!("All:       {}", overall_stats.summary());
    if !selection_stats.is_empty() {
        println!("Selection: {}", selection_stats.summary());
    }
    if !skipped.is_empty() {
        println!("Skipped:   {} malformed lines", skipped.len());
    }

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");

    if let Some(svg_path) = &args.output_svg {
        if rows.is_empty() {
            warn!("No records to chart, skipping SVG histogram");
        } else {
            let svg = generate_histogram_svg(&rows, Some(&args.histogram_config))
                .context("Failed to generate histogram")?;
            write_svg(&svg, svg_path).context("Failed to write histogram SVG")?;
            info!("✓ Histogram written to: {}", svg_path.display());
        }
    }

    if let Some(json_path) = &args.output_json {
        let report = to_report(
            &args.log_file.display().to_string(),
            &view,
            &skipped,
        );
        write_report(&report, json_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Inspection completed in {:.2}s", elapsed.as_secs_f64());

    Ok(InspectOutcome {
        record_count,
        skipped_count: skipped.len(),
        selection_stats,
        overall_stats,
    })
}

/// Validate inspect arguments
///
/// **Public** - can be called before execute_inspect for early validation
pub fn validate_args(args: &InspectArgs) -> Result<()> {
    if args.log_file.as_os_str().is_empty() {
        anyhow::bail!("Log file path cannot be empty");
    }

    if args.limit == 0 {
        anyhow::bail!("limit must be greater than 0");
    }

    if args.limit > MAX_TABLE_LIMIT {
        anyhow::bail!("limit is too large (max {})", MAX_TABLE_LIMIT);
    }

    if args.select_all && !args.select_rows.is_empty() {
        anyhow::bail!("Use either explicit rows or select-all, not both");
    }

    if args.histogram_config.text_width == 0 || args.histogram_config.bar_width == 0 {
        anyhow::bail!("Histogram bar width must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> InspectArgs {
        InspectArgs {
            log_file: PathBuf::from("build.log"),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_path() {
        assert!(validate_args(&InspectArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_limit_zero() {
        let args = InspectArgs { limit: 0, ..args() };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_limit_too_large() {
        let args = InspectArgs {
            limit: MAX_TABLE_LIMIT + 1,
            ..args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_conflicting_selection() {
        let args = InspectArgs {
            select_all: true,
            select_rows: vec![1],
            ..args()
        };
        assert!(validate_args(&args).is_err());
    }
}
