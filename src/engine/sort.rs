//! Stable single-key sorting.

use crate::records::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Sort key plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Selecting the current key flips direction; a new key starts ascending.
    #[must_use]
    pub fn toggled(&self, key: &str) -> Self {
        if self.key == key {
            Self {
                key: self.key.clone(),
                direction: self.direction.flipped(),
            }
        } else {
            Self::ascending(key)
        }
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = a.get(&self.key).total_cmp(b.get(&self.key));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::ascending("id")
    }
}

/// Return the records ordered by `sort`, leaving the input untouched.
///
/// The sort is stable in both directions: records with equal keys keep their
/// input order.
pub fn sort<'a>(records: &[&'a Record], sort: &SortState) -> Vec<&'a Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| sort.compare(a, b));
    sorted
}

/// Same as [`sort`] but over positions into a backing slice.
pub(crate) fn sort_indices(records: &[Record], indices: &mut [usize], sort: &SortState) {
    indices.sort_by(|&a, &b| sort.compare(&records[a], &records[b]));
}
