use buildtime_inspector::aggregator::{bar_fractions, longest_duration, summarize, AggregateStats};
use buildtime_inspector::parser::{parse_log, BuildTimeRecord};

fn sample_records() -> Vec<BuildTimeRecord> {
    parse_log(
        "120.4ms\t/App/Sources/View.swift:10:5\tvar body: some View\n\
         0.3ms\t/App/Sources/View.swift:40:9\tinit()\n\
         55.0ms\t/App/Sources/Model.swift:7:14\tfunc load()\n\
         9.9ms\t/App/Sources/Network.swift:88:2\tfunc request()\n\
         0.1ms\t/App/Sources/Model.swift:22:3\tget {}\n",
    )
    .records
}

#[test]
fn test_summarize_log() {
    let stats = summarize(&sample_records());

    assert_eq!(stats.count, 5);
    assert_eq!(stats.unique_file_count, 3);
    assert!((stats.total_duration - 0.1857).abs() < 1e-9);
    assert!((stats.mean_duration * stats.count as f64 - stats.total_duration).abs() < 1e-12);
    assert!(stats.std_dev_duration >= 0.0);
}

#[test]
fn test_summarize_is_order_independent() {
    let records = sample_records();
    let forward = summarize(&records);

    let mut reversed = records.clone();
    reversed.reverse();
    let mut rotated = records.clone();
    rotated.rotate_left(2);

    assert_eq!(summarize(&reversed), forward);
    assert_eq!(summarize(&rotated), forward);
}

#[test]
fn test_summarize_empty() {
    let records: Vec<BuildTimeRecord> = vec![];
    let stats = summarize(&records);

    assert_eq!(stats, AggregateStats::default());
    assert!(stats.is_empty());
}

#[test]
fn test_summarize_single_record_has_zero_deviation() {
    let records = vec![BuildTimeRecord::new(1.5, "/a.swift", "f()", 1)];
    let stats = summarize(&records);

    assert_eq!(stats.mean_duration, 1.5);
    assert_eq!(stats.std_dev_duration, 0.0);
    assert_eq!(
        stats.summary(),
        "1 item in 1 file     Total time: 1.500s     Mean: 1.500s     Std dev: 0.000s"
    );
}

#[test]
fn test_bar_fractions_relative_to_longest() {
    let records = sample_records();
    let fractions = bar_fractions(&records);

    let longest = longest_duration(&records).unwrap();
    assert!((longest - 0.1204).abs() < 1e-12);
    assert_eq!(fractions.len(), records.len());
    assert_eq!(fractions[0], 1.0);
    assert!(fractions.iter().all(|f| (0.0..=1.0).contains(f)));
}
