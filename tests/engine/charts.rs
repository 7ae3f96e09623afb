use crate::fixtures::planets;
use exoview::engine::{bar_series, padded_bounds, scatter_points};

#[test]
fn test_scatter_skips_non_numeric_pairs() {
    let records = planets();
    let points = scatter_points(records.iter(), "id", "period");
    assert_eq!(points.len(), 11);
    assert_eq!(points[0], (1.0, 289.9));
    assert!(!points.iter().any(|(x, _)| *x == 5.0));
}

#[test]
fn test_bar_series_labels_by_field() {
    let records = planets();
    let bars = bar_series(records.iter().take(3), "name", "period");
    assert_eq!(
        bars,
        vec![
            ("Kepler-22 b".to_string(), 289.9),
            ("Kepler-69 c".to_string(), 242.5),
            ("KOI-7016".to_string(), 384.8),
        ]
    );
}

#[test]
fn test_padded_bounds() {
    assert_eq!(padded_bounds(Vec::<f64>::new()), [0.0, 1.0]);
    let [lo, hi] = padded_bounds([0.0, 10.0]);
    assert!((lo + 0.5).abs() < 1e-12);
    assert!((hi - 10.5).abs() < 1e-12);
}

#[test]
fn test_padded_bounds_widen_a_flat_series() {
    assert_eq!(padded_bounds([3.0]), [2.0, 4.0]);
    assert_eq!(padded_bounds([0.0, 0.0]), [-1.0, 1.0]);
    let [lo, hi] = padded_bounds([384.8, 384.8]);
    assert!((lo - 365.56).abs() < 1e-9);
    assert!((hi - 404.04).abs() < 1e-9);
}
