//! Series derived from the filtered record set for the explore charts.

use crate::records::Record;

/// `(x, y)` pairs for records where both fields are numbers.
pub fn scatter_points<'a, I>(records: I, x_key: &str, y_key: &str) -> Vec<(f64, f64)>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|r| Some((r.get(x_key).as_number()?, r.get(y_key).as_number()?)))
        .collect()
}

/// `(label, value)` bars; records without a numeric value are skipped.
pub fn bar_series<'a, I>(records: I, label_key: &str, value_key: &str) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|r| {
            let value = r.get(value_key).as_number()?;
            Some((r.get(label_key).label(), value))
        })
        .collect()
}

/// Axis bounds padded by 5% so points do not sit on the frame. A flat
/// series gets 5% of its magnitude, at least 1, on each side.
pub fn padded_bounds(values: impl IntoIterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = if max > min {
        (max - min) * 0.05
    } else {
        (max.abs() * 0.05).max(1.0)
    };
    [min - pad, max + pad]
}
