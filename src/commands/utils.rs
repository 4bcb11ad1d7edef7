use crate::output::read_report;
use crate::sort::SortKey;
use crate::utils::config::{DEFAULT_EDITOR_COMMAND, EDITOR_ENV_VAR, SCHEMA_VERSION};
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source_file);
    println!("  Records: {}", report.records.len());
    println!("  Selected: {}", report.selected_rows.len());
    println!("  Skipped Lines: {}", report.skipped_lines.len());
    println!("  Stats: {}", report.stats.summary());

    Ok(())
}

/// Display the accepted log format and report schema
pub fn display_format(show_details: bool) {
    println!("Build-Time Log Format");
    println!("Report Schema Version: {}", SCHEMA_VERSION);
    println!();
    println!("Build with: -Xfrontend -debug-time-function-bodies");
    println!("One readout per line:  <ms>ms<TAB><path>:<line>[:<col>]<TAB><function>");
    println!("Example:               12.3ms\t/src/App.swift:42:10\tinit()");
    println!();

    if show_details {
        println!("Report Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source_file: string      - Log the records came from");
        println!("  sort_order: array        - Sort descriptors, highest priority first");
        println!("    key: string            - duration | path | function | line");
        println!("    ascending: bool        - Direction");
        println!("  stats: object            - Selection statistics (all rows if none selected)");
        println!("    count: number          - Number of records");
        println!("    unique_file_count: number - Distinct source files");
        println!("    total_duration: number - Seconds");
        println!("    mean_duration: number  - Seconds");
        println!("    std_dev_duration: number - Population standard deviation");
        println!("  selected_rows: array     - Display positions of selected rows");
        println!("  records: array           - Records in display order");
        println!("  skipped_lines: array     - Malformed lines with their errors");
        println!("  generated_at: string     - ISO 8601 timestamp");
        println!();
        println!("Sort Keys (--sort key[:asc|:desc],...):");
        println!("  {}", sort_key_names());
        println!();
        println!("Editor:");
        println!("  Default command: {}", DEFAULT_EDITOR_COMMAND);
        println!("  Override with ${} or --editor", EDITOR_ENV_VAR);
    } else {
        println!("Use --show for detailed report information");
    }
}

/// Canonical sort key names, comma separated
fn sort_key_names() -> String {
    SortKey::ALL
        .iter()
        .map(SortKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display version information
pub fn display_version() {
    println!("Build-Time Inspector v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Sort, select and summarize Swift function build times.");
}
