use buildtime_inspector::commands::{execute_inspect, validate_inspect_args, InspectArgs};
use buildtime_inspector::output::read_report;
use buildtime_inspector::sort::{SortDescriptor, SortKey};
use buildtime_inspector::utils::config::SCHEMA_VERSION;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_log() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        b"12.0ms\t/App/Feed.swift:30:5\tfunc render()\n\
          3.5ms\t/App/Feed.swift:80:9\tinit(items:)\n\
          warning: something unrelated\n\
          40.25ms\t/App/Store.swift:12:1\tfunc reduce(_:)\n",
    )
    .unwrap();
    file
}

#[test]
fn test_inspect_writes_report_and_histogram() {
    let log = write_log();
    let out_dir = tempfile::tempdir().unwrap();
    let json_path = out_dir.path().join("report.json");
    let svg_path = out_dir.path().join("histogram.svg");

    let args = InspectArgs {
        log_file: log.path().to_path_buf(),
        sort_order: vec![SortDescriptor::descending(SortKey::Duration)],
        select_rows: vec![0, 2],
        output_json: Some(json_path.clone()),
        output_svg: Some(svg_path.clone()),
        ..Default::default()
    };
    validate_inspect_args(&args).unwrap();

    let outcome = execute_inspect(args).unwrap();
    assert_eq!(outcome.record_count, 3);
    assert_eq!(outcome.skipped_count, 1);
    assert_eq!(outcome.selection_stats.count, 2);
    assert_eq!(outcome.overall_stats.unique_file_count, 2);

    let report = read_report(&json_path).unwrap();
    assert_eq!(report.version, SCHEMA_VERSION);
    assert_eq!(report.selected_rows, vec![0, 2]);
    assert_eq!(report.records[0].function_name(), "func reduce(_:)");
    assert_eq!(report.skipped_lines.len(), 1);
    assert_eq!(report.skipped_lines[0].line_number, 3);
    assert_eq!(report.stats.count, outcome.selection_stats.count);
    assert!((report.stats.total_duration - 0.04375).abs() < 1e-9);

    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.starts_with("<svg"));
}

#[test]
fn test_inspect_report_stats_cover_all_rows_without_selection() {
    let log = write_log();
    let out_dir = tempfile::tempdir().unwrap();
    let json_path = out_dir.path().join("report.json");

    let args = InspectArgs {
        log_file: log.path().to_path_buf(),
        histogram: true,
        output_json: Some(json_path.clone()),
        ..Default::default()
    };

    let outcome = execute_inspect(args).unwrap();
    assert!(outcome.selection_stats.is_empty());

    let report = read_report(&json_path).unwrap();
    assert!(report.selected_rows.is_empty());
    assert_eq!(report.stats.count, 3);
    assert_eq!(report.stats.unique_file_count, outcome.overall_stats.unique_file_count);
    assert!((report.stats.total_duration - outcome.overall_stats.total_duration).abs() < 1e-12);
}

#[test]
fn test_inspect_missing_file() {
    let out_dir = tempfile::tempdir().unwrap();
    let args = InspectArgs {
        log_file: out_dir.path().join("missing.log"),
        ..Default::default()
    };

    assert!(execute_inspect(args).is_err());
}
