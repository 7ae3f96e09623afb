//! Category and free-text filtering.

use crate::records::{labels_match, Record, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};

/// Label of the category filter that excludes nothing.
pub const ALL_LABEL: &str = "All";

/// Categorical equality filter on the designated category field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector label; `"All"` (any case) maps to [`CategoryFilter::All`].
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_LABEL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(trimmed.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(label) => label,
        }
    }

    /// Whether a record passes this filter on `field`.
    pub fn accepts(&self, record: &Record, field: Option<&str>) -> bool {
        match (self, field) {
            (CategoryFilter::All, _) => true,
            (CategoryFilter::Only(_), None) => false,
            (CategoryFilter::Only(wanted), Some(key)) => {
                let value = record.get(key);
                !value.is_absent() && labels_match(&value.label(), wanted)
            }
        }
    }
}

/// Whether any field of the record contains `needle` (already lower-cased),
/// either as the table shows it or in its full-precision form.
fn contains_text(record: &Record, needle: &str, precision: usize) -> bool {
    record.values().any(|value| {
        value.display(precision).to_lowercase().contains(needle) || value.label().to_lowercase().contains(needle)
    })
}

/// Keep records that pass both the category filter and the text filter,
/// matching text against cells rendered with the default precision.
///
/// The output preserves input order. An empty `text` disables the text
/// filter.
pub fn filter<'a, I>(records: I, category_field: Option<&str>, category: &CategoryFilter, text: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    filter_displayed(records, category_field, category, text, DEFAULT_PRECISION)
}

/// [`filter`] for a table that renders numbers with `precision` decimals.
pub fn filter_displayed<'a, I>(
    records: I,
    category_field: Option<&str>,
    category: &CategoryFilter,
    text: &str,
    precision: usize,
) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let needle = text.to_lowercase();
    records
        .into_iter()
        .filter(|record| category.accepts(record, category_field))
        .filter(|record| needle.is_empty() || contains_text(record, &needle, precision))
        .collect()
}
