//! Category counts for summary charts.

use crate::records::Record;
use std::collections::HashMap;

/// Bucket label for records with no value under the counted key.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// One chart bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub count: usize,
}

/// Counts per distinct value, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketCounts {
    buckets: Vec<Bucket>,
    index: HashMap<String, usize>,
}

impl BucketCounts {
    fn add(&mut self, label: String) {
        match self.index.get(&label) {
            Some(&i) => self.buckets[i].count += 1,
            None => {
                self.index.insert(label.clone(), self.buckets.len());
                self.buckets.push(Bucket { label, count: 1 });
            }
        }
    }

    /// Count under `label`, zero when the bucket does not exist.
    pub fn get(&self, label: &str) -> usize {
        self.index.get(label).map(|&i| self.buckets[i].count).unwrap_or(0)
    }

    /// Sum over all buckets; equals the number of counted records.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Share of the total held by `label`, in `[0, 1]`.
    pub fn share(&self, label: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(label) as f64 / total as f64
        }
    }
}

/// Count records by their value under `key` in a single pass.
///
/// Missing values are counted under [`UNKNOWN_BUCKET`].
pub fn aggregate<'a, I>(records: I, key: &str) -> BucketCounts
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = BucketCounts::default();
    for record in records {
        let value = record.get(key);
        let label = if value.is_absent() {
            UNKNOWN_BUCKET.to_string()
        } else {
            value.label()
        };
        counts.add(label);
    }
    counts
}
