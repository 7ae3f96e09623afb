use crate::fixtures::{ids, planets, record};
use exoview::engine::{filter, filter_displayed, CategoryFilter};
use exoview::records::{Record, Value};

#[test]
fn test_all_with_empty_text_keeps_everything_in_order() {
    let records = planets();
    let kept = filter(records.iter(), Some("status"), &CategoryFilter::All, "");
    assert_eq!(kept.len(), records.len());
    assert_eq!(ids(&kept), (1..=12).map(f64::from).collect::<Vec<_>>());
}

#[test]
fn test_category_filter_keeps_matching_records_only() {
    let records = planets();
    let kept = filter(records.iter(), Some("status"), &CategoryFilter::parse("CONFIRMED"), "");
    assert_eq!(ids(&kept), vec![1.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
}

#[test]
fn test_category_filter_skips_absent_values() {
    let records = planets();
    let kept = filter(records.iter(), Some("status"), &CategoryFilter::parse("CANDIDATE"), "");
    assert!(!ids(&kept).contains(&7.0));
    assert_eq!(kept.len(), 3);
}

#[test]
fn test_category_synonyms_match() {
    let records = planets();
    let by_code = filter(records.iter(), Some("status"), &CategoryFilter::parse("FP"), "");
    let by_spelling = filter(records.iter(), Some("status"), &CategoryFilter::parse("false_positive"), "");
    assert_eq!(ids(&by_code), vec![3.0, 9.0]);
    assert_eq!(ids(&by_code), ids(&by_spelling));
}

#[test]
fn test_text_filter_is_case_insensitive_across_fields() {
    let records = planets();
    let kept = filter(records.iter(), Some("status"), &CategoryFilter::All, "kepler-4");
    assert_eq!(ids(&kept), vec![6.0, 10.0]);

    // Numbers match on their displayed text
    let by_period = filter(records.iter(), Some("status"), &CategoryFilter::All, "384.8");
    assert_eq!(ids(&by_period), vec![3.0, 6.0]);
}

#[test]
fn test_text_filter_finds_numbers_as_the_table_shows_them() {
    let records = planets();
    let shown = records[2].get("period").display(2);
    assert_eq!(shown, "384.80");

    let kept = filter(records.iter(), Some("status"), &CategoryFilter::All, &shown);
    assert_eq!(ids(&kept), vec![3.0, 6.0]);

    let kept = filter_displayed(records.iter(), Some("status"), &CategoryFilter::All, "289.900", 3);
    assert_eq!(ids(&kept), vec![1.0]);
    let kept = filter_displayed(records.iter(), Some("status"), &CategoryFilter::All, "289.900", 2);
    assert!(kept.is_empty());
}

#[test]
fn test_text_and_category_combine() {
    let records = planets();
    let kept = filter(records.iter(), Some("status"), &CategoryFilter::parse("CONFIRMED"), "kepler-6");
    assert_eq!(ids(&kept), vec![8.0]);
}

#[test]
fn test_filter_is_idempotent() {
    let records = planets();
    let category = CategoryFilter::parse("CANDIDATE");
    let once = filter(records.iter(), Some("status"), &category, "koi");
    let twice = filter(once.iter().copied(), Some("status"), &category, "koi");
    assert_eq!(once, twice);
}

#[test]
fn test_no_category_field_rejects_specific_filter() {
    let records = planets();
    assert!(filter(records.iter(), None, &CategoryFilter::parse("CONFIRMED"), "").is_empty());
    assert_eq!(filter(records.iter(), None, &CategoryFilter::All, "").len(), records.len());
}

#[test]
fn test_text_typed_status_matches_by_label() {
    let records = vec![
        Record::new([("id", Value::Number(1.0)), ("status", Value::Text("CP".into()))]),
        Record::new([("id", Value::Number(2.0)), ("status", Value::Text("PC".into()))]),
        record(3, "x", Some("CONFIRMED"), None),
    ];
    let kept = filter(records.iter(), Some("status"), &CategoryFilter::parse("confirmed"), "");
    assert_eq!(ids(&kept), vec![1.0, 3.0]);
}

#[test]
fn test_empty_input() {
    let records: Vec<Record> = Vec::new();
    assert!(filter(records.iter(), Some("status"), &CategoryFilter::All, "abc").is_empty());
}
