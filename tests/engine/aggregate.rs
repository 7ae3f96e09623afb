use crate::fixtures::{ids, planets};
use exoview::engine::{aggregate, filter, paginate, CategoryFilter, UNKNOWN_BUCKET};
use exoview::records::{Record, Value};

#[test]
fn test_counts_sum_to_record_count() {
    let records = planets();
    let counts = aggregate(records.iter(), "status");
    assert_eq!(counts.total(), records.len());
    assert_eq!(counts.get("CONFIRMED"), 6);
    assert_eq!(counts.get("CANDIDATE"), 3);
    assert_eq!(counts.get("FALSE POSITIVE"), 2);
    assert_eq!(counts.get(UNKNOWN_BUCKET), 1);
}

#[test]
fn test_buckets_keep_first_appearance_order() {
    let records = planets();
    let labels: Vec<String> = aggregate(records.iter(), "status").iter().map(|b| b.label.clone()).collect();
    assert_eq!(labels, vec!["CONFIRMED", "CANDIDATE", "FALSE POSITIVE", "unknown"]);
}

#[test]
fn test_missing_bucket_reads_zero() {
    let records = planets();
    let counts = aggregate(records.iter(), "status");
    assert_eq!(counts.get("NOT A LABEL"), 0);
    assert_eq!(counts.share("NOT A LABEL"), 0.0);
    assert!((counts.share("CONFIRMED") - 0.5).abs() < 1e-12);
}

#[test]
fn test_empty_input_has_no_buckets() {
    let records: Vec<Record> = Vec::new();
    let counts = aggregate(records.iter(), "status");
    assert!(counts.is_empty());
    assert_eq!(counts.total(), 0);
}

#[test]
fn test_filter_then_aggregate_scenario() {
    let records = vec![
        Record::new([("id", Value::Number(1.0)), ("status", Value::Text("CP".into()))]),
        Record::new([("id", Value::Number(2.0)), ("status", Value::Text("FP".into()))]),
        Record::new([("id", Value::Number(3.0)), ("status", Value::Text("CP".into()))]),
    ];
    let kept = filter(records.iter(), Some("status"), &CategoryFilter::parse("CP"), "");
    assert_eq!(ids(&kept), vec![1.0, 3.0]);

    let counts = aggregate(kept.iter().copied(), "status");
    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get("CP"), 2);

    let page = paginate(&kept, 1, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(ids(&page.items), vec![3.0]);
}
