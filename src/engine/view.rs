//! View state and the memoizing engine that derives what the table shows.

use super::aggregate::{aggregate, BucketCounts};
use super::filter::{filter_displayed, CategoryFilter};
use super::paginate::{clamp_page, paginate, total_pages};
use super::sort::{sort_indices, SortState};
use crate::records::{Dataset, Record, DEFAULT_PRECISION};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Page sizes offered by the row-count selector.
pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];

/// Everything the user has asked for on the explore table.
///
/// Treated as an immutable value: every user action produces a new state
/// through one of the `with_*` reducers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub category: CategoryFilter,
    pub text: String,
    pub sort: SortState,
    pub page_size: usize,
    pub page_index: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            text: String::new(),
            sort: SortState::default(),
            page_size: PAGE_SIZES[0],
            page_index: 1,
        }
    }
}

impl ViewState {
    pub fn with_page_size_default(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self {
            category,
            page_index: 1,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page_index: 1,
            ..self.clone()
        }
    }

    /// Toggle the sort on `key`. The page index is kept.
    #[must_use]
    pub fn with_sort_toggled(&self, key: &str) -> Self {
        Self {
            sort: self.sort.toggled(key),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_page_size(&self, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page_index: 1,
            ..self.clone()
        }
    }

    /// Advance to the next size in [`PAGE_SIZES`], wrapping around.
    #[must_use]
    pub fn with_next_page_size(&self) -> Self {
        let next = PAGE_SIZES
            .iter()
            .position(|&s| s == self.page_size)
            .map(|i| PAGE_SIZES[(i + 1) % PAGE_SIZES.len()])
            .unwrap_or(PAGE_SIZES[0]);
        self.with_page_size(next)
    }

    #[must_use]
    pub fn with_page(&self, page_index: usize) -> Self {
        Self {
            page_index,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn next_page(&self, filtered_count: usize) -> Self {
        self.with_page(clamp_page(self.page_index + 1, filtered_count, self.page_size))
    }

    #[must_use]
    pub fn previous_page(&self) -> Self {
        self.with_page(self.page_index.saturating_sub(1).max(1))
    }

    #[must_use]
    pub fn first_page(&self) -> Self {
        self.with_page(1)
    }

    #[must_use]
    pub fn last_page(&self, filtered_count: usize) -> Self {
        self.with_page(total_pages(filtered_count, self.page_size))
    }

    /// Bring the page index back into range for `filtered_count` rows.
    #[must_use]
    pub fn clamp(&self, filtered_count: usize) -> Self {
        self.with_page(clamp_page(self.page_index, filtered_count, self.page_size))
    }
}

/// What the table and charts render for one view state.
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub rows: Vec<&'a Record>,
    pub page_index: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub buckets: BucketCounts,
}

#[derive(Debug, Clone, PartialEq)]
struct FilterKey {
    category: CategoryFilter,
    text: String,
}

#[derive(Debug)]
struct Cache {
    filter_key: FilterKey,
    sort_key: SortState,
    /// Positions passing the filters, in input order.
    filtered: Vec<usize>,
    /// The same positions in sort order.
    sorted: Vec<usize>,
}

/// Derives views over a shared dataset, recomputing the filter and sort only
/// when their inputs change.
#[derive(Debug)]
pub struct ViewEngine {
    dataset: Arc<Dataset>,
    precision: usize,
    cache: Option<Cache>,
    filter_runs: usize,
    sort_runs: usize,
}

impl ViewEngine {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            precision: DEFAULT_PRECISION,
            cache: None,
            filter_runs: 0,
            sort_runs: 0,
        }
    }

    /// Match search text against numbers rendered with `precision` decimals,
    /// the way the table shows them.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self.cache = None;
        self
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Swap the backing dataset and drop memoized results.
    pub fn replace_dataset(&mut self, dataset: Arc<Dataset>) {
        self.dataset = dataset;
        self.cache = None;
    }

    /// How many times the filter and the sort have actually run.
    pub fn recomputations(&self) -> (usize, usize) {
        (self.filter_runs, self.sort_runs)
    }

    fn refresh(&mut self, state: &ViewState) {
        let filter_key = FilterKey {
            category: state.category.clone(),
            text: state.text.clone(),
        };

        let filter_stale = self.cache.as_ref().map(|c| c.filter_key != filter_key).unwrap_or(true);
        if filter_stale {
            let records = &self.dataset.records;
            let category_field = self.dataset.schema.category_field();
            let kept = filter_displayed(records.iter(), category_field, &state.category, &state.text, self.precision);
            let filtered = positions_of(records, &kept);
            self.filter_runs += 1;
            debug!(
                "view: filter {:?} / {:?} kept {} of {}",
                state.category,
                state.text,
                filtered.len(),
                records.len()
            );
            self.cache = Some(Cache {
                filter_key,
                sort_key: state.sort.clone(),
                sorted: Vec::new(),
                filtered,
            });
            self.resort(&state.sort);
            return;
        }

        let sort_stale = self.cache.as_ref().map(|c| c.sort_key != state.sort).unwrap_or(true);
        if sort_stale {
            self.resort(&state.sort);
        }
    }

    fn resort(&mut self, sort: &SortState) {
        if let Some(cache) = self.cache.as_mut() {
            let mut sorted = cache.filtered.clone();
            sort_indices(&self.dataset.records, &mut sorted, sort);
            cache.sorted = sorted;
            cache.sort_key = sort.clone();
            self.sort_runs += 1;
        }
    }

    /// Records passing the filters, in input order.
    pub fn filtered(&mut self, state: &ViewState) -> Vec<&Record> {
        self.refresh(state);
        let records = &self.dataset.records;
        self.cache
            .as_ref()
            .map(|c| c.filtered.iter().map(|&i| &records[i]).collect())
            .unwrap_or_default()
    }

    /// Number of records passing the filters.
    pub fn filtered_count(&mut self, state: &ViewState) -> usize {
        self.refresh(state);
        self.cache.as_ref().map(|c| c.filtered.len()).unwrap_or(0)
    }

    /// Records passing the filters, in sort order.
    pub fn sorted(&mut self, state: &ViewState) -> Vec<&Record> {
        self.refresh(state);
        let records = &self.dataset.records;
        self.cache
            .as_ref()
            .map(|c| c.sorted.iter().map(|&i| &records[i]).collect())
            .unwrap_or_default()
    }

    /// Derive the visible page and chart buckets. The page index is clamped
    /// into range, so a stale index after a shrinking filter shows the last
    /// page instead of nothing.
    pub fn derive(&mut self, state: &ViewState) -> View<'_> {
        self.refresh(state);
        let records = &self.dataset.records;
        let (filtered, sorted) = match self.cache.as_ref() {
            Some(c) => (&c.filtered, &c.sorted),
            None => {
                return View {
                    rows: Vec::new(),
                    page_index: 1,
                    total_pages: 1,
                    filtered_count: 0,
                    buckets: BucketCounts::default(),
                }
            }
        };

        let page_index = clamp_page(state.page_index, sorted.len(), state.page_size);
        let page = paginate(sorted, state.page_size, page_index);
        let buckets = match self.dataset.schema.category_field() {
            Some(key) => aggregate(filtered.iter().map(|&i| &records[i]), key),
            None => BucketCounts::default(),
        };

        View {
            rows: page.items.iter().map(|&i| &records[i]).collect(),
            page_index: page.page_index,
            total_pages: page.total_pages,
            filtered_count: filtered.len(),
            buckets,
        }
    }
}

/// Map filtered references back to their positions in `records`.
fn positions_of(records: &[Record], kept: &[&Record]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(kept.len());
    let mut cursor = 0;
    for wanted in kept {
        while cursor < records.len() && !std::ptr::eq(&records[cursor], *wanted) {
            cursor += 1;
        }
        positions.push(cursor);
        cursor += 1;
    }
    positions
}
