use crate::fixtures::{ids, planets};
use exoview::engine::{sort, SortDirection, SortState};
use exoview::records::{Record, Value};

#[test]
fn test_ascending_sort_is_stable_and_absent_first() {
    let records = planets();
    let refs: Vec<&Record> = records.iter().collect();
    let sorted = sort(&refs, &SortState::ascending("period"));
    assert_eq!(
        ids(&sorted),
        vec![5.0, 7.0, 9.0, 11.0, 12.0, 10.0, 4.0, 2.0, 8.0, 1.0, 3.0, 6.0]
    );
}

#[test]
fn test_descending_sort_keeps_ties_in_input_order() {
    let records = planets();
    let refs: Vec<&Record> = records.iter().collect();
    let sorted = sort(&refs, &SortState::descending("period"));
    assert_eq!(
        ids(&sorted),
        vec![3.0, 6.0, 1.0, 8.0, 2.0, 4.0, 10.0, 12.0, 7.0, 9.0, 11.0, 5.0]
    );
}

#[test]
fn test_sort_leaves_input_untouched() {
    let records = planets();
    let refs: Vec<&Record> = records.iter().collect();
    let before = ids(&refs);
    let _ = sort(&refs, &SortState::descending("name"));
    assert_eq!(ids(&refs), before);
}

#[test]
fn test_toggle_same_key_reverses_direction() {
    let state = SortState::ascending("period");
    let toggled = state.toggled("period");
    assert_eq!(toggled.direction, SortDirection::Descending);
    assert_eq!(toggled.toggled("period"), state);
}

#[test]
fn test_toggle_new_key_starts_ascending() {
    let state = SortState::descending("period");
    let toggled = state.toggled("name");
    assert_eq!(toggled, SortState::ascending("name"));
}

#[test]
fn test_default_sort_is_by_id() {
    assert_eq!(SortState::default(), SortState::ascending("id"));
}

#[test]
fn test_toggle_twice_restores_order_for_distinct_keys() {
    let records = planets();
    let refs: Vec<&Record> = records.iter().collect();
    let asc = sort(&refs, &SortState::ascending("id"));
    let desc = sort(&refs, &SortState::ascending("id").toggled("id"));
    let mut reversed = ids(&desc);
    reversed.reverse();
    assert_eq!(ids(&asc), reversed);
}

#[test]
fn test_text_sorts_lexically() {
    let records = vec![
        Record::new([("id", Value::Number(1.0)), ("name", Value::Text("b".into()))]),
        Record::new([("id", Value::Number(2.0)), ("name", Value::Text("a".into()))]),
        Record::new([("id", Value::Number(3.0)), ("name", Value::Text("c".into()))]),
    ];
    let refs: Vec<&Record> = records.iter().collect();
    assert_eq!(ids(&sort(&refs, &SortState::ascending("name"))), vec![2.0, 1.0, 3.0]);
}
