use crate::fixtures::{dataset, ids};
use exoview::engine::{CategoryFilter, ViewEngine, ViewState, PAGE_SIZES};
use exoview::ingest::sample_dataset;
use std::sync::Arc;

#[test]
fn test_default_view_shows_first_page() {
    let mut engine = ViewEngine::new(Arc::new(dataset()));
    let view = engine.derive(&ViewState::default());
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.page_index, 1);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.filtered_count, 12);
    assert_eq!(view.buckets.total(), 12);
    assert_eq!(ids(&view.rows), (1..=10).map(f64::from).collect::<Vec<_>>());
}

#[test]
fn test_second_page_holds_the_rest() {
    let mut engine = ViewEngine::new(Arc::new(dataset()));
    let view = engine.derive(&ViewState::default().with_page(2));
    assert_eq!(ids(&view.rows), vec![11.0, 12.0]);
}

#[test]
fn test_stale_page_is_clamped_after_filter_shrinks() {
    let mut engine = ViewEngine::new(Arc::new(dataset()));
    let state = ViewState::default()
        .with_category(CategoryFilter::parse("CANDIDATE"))
        .with_page(2);
    let view = engine.derive(&state);
    assert_eq!(view.page_index, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(ids(&view.rows), vec![2.0, 5.0, 11.0]);
}

#[test]
fn test_buckets_follow_the_filtered_set() {
    let mut engine = ViewEngine::new(Arc::new(dataset()));
    let state = ViewState::default().with_category(CategoryFilter::parse("CONFIRMED"));
    let view = engine.derive(&state);
    assert_eq!(view.buckets.len(), 1);
    assert_eq!(view.buckets.get("CONFIRMED"), 6);
}

#[test]
fn test_reducers_reset_page_where_expected() {
    let state = ViewState::default().with_page(2);
    assert_eq!(state.with_text("kepler").page_index, 1);
    assert_eq!(state.with_category(CategoryFilter::parse("FP")).page_index, 1);
    assert_eq!(state.with_page_size(20).page_index, 1);
    assert_eq!(state.with_sort_toggled("period").page_index, 2);
}

#[test]
fn test_page_size_cycles_through_choices() {
    let state = ViewState::default();
    assert_eq!(state.page_size, PAGE_SIZES[0]);
    let sizes: Vec<usize> = std::iter::successors(Some(state), |s| Some(s.with_next_page_size()))
        .skip(1)
        .take(3)
        .map(|s| s.page_size)
        .collect();
    assert_eq!(sizes, vec![20, 50, 10]);
}

#[test]
fn test_paging_reducers_stay_in_range() {
    let state = ViewState::default();
    assert_eq!(state.previous_page().page_index, 1);
    assert_eq!(state.next_page(12).page_index, 2);
    assert_eq!(state.next_page(12).next_page(12).page_index, 2);
    assert_eq!(state.last_page(45).page_index, 5);
    assert_eq!(state.last_page(45).first_page().page_index, 1);
    assert_eq!(state.with_page(9).clamp(12).page_index, 2);
}

#[test]
fn test_filter_and_sort_are_memoized() {
    let mut engine = ViewEngine::new(Arc::new(dataset()));
    let state = ViewState::default();

    let _ = engine.derive(&state);
    let _ = engine.derive(&state);
    assert_eq!(engine.recomputations(), (1, 1));

    // Paging reuses both
    let _ = engine.derive(&state.with_page(2));
    assert_eq!(engine.recomputations(), (1, 1));

    // A new sort reuses the filter
    let sorted = state.with_sort_toggled("period");
    let _ = engine.derive(&sorted);
    assert_eq!(engine.recomputations(), (1, 2));

    // A new filter runs both
    let _ = engine.derive(&sorted.with_text("koi"));
    assert_eq!(engine.recomputations(), (2, 3));
}

#[test]
fn test_sorted_view_applies_direction() {
    let mut engine = ViewEngine::new(Arc::new(dataset()));
    let state = ViewState::default().with_sort_toggled("id");
    let sorted = engine.sorted(&state);
    assert_eq!(sorted.first().and_then(|r| r.get("id").as_number()), Some(12.0));
    assert_eq!(engine.filtered(&state).len(), 12);
    assert_eq!(engine.filtered_count(&state.with_text("kepler")), 7);
}

#[test]
fn test_replace_dataset_drops_cache() {
    let mut engine = ViewEngine::new(Arc::new(dataset()));
    let state = ViewState::default();
    assert_eq!(engine.filtered_count(&state), 12);

    engine.replace_dataset(Arc::new(sample_dataset(30, 7)));
    assert_eq!(engine.filtered_count(&state), 30);
    assert_eq!(engine.derive(&state).total_pages, 3);
}

#[test]
fn test_sample_dataset_is_deterministic() {
    let a = sample_dataset(25, 42);
    let b = sample_dataset(25, 42);
    assert_eq!(a.records, b.records);
    assert_eq!(a.len(), 25);
}

#[test]
fn test_search_uses_the_configured_precision() {
    let mut engine = ViewEngine::new(Arc::new(dataset())).with_precision(3);
    assert_eq!(engine.precision(), 3);
    let view = engine.derive(&ViewState::default().with_text("267.300"));
    assert_eq!(ids(&view.rows), vec![8.0]);
}
