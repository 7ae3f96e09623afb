//! Tabular view engine.
//!
//! Pure functions from (records, filters, sort, pagination) to the rows the
//! explore table shows and the counts its charts draw:
//!
//! * [`filter`] - category and free-text predicates, order preserving
//! * [`sort`] - stable single-key sort that never touches its input
//! * [`paginate`] - 1-based page windows with an explicit empty page when
//!   the index is out of range
//! * [`aggregate`] - per-category counts with an `unknown` bucket
//!
//! [`ViewEngine`] composes them over a shared dataset and memoizes the
//! filtered and sorted positions between renders.

pub mod aggregate;
pub mod charts;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod view;

pub use aggregate::{aggregate, Bucket, BucketCounts, UNKNOWN_BUCKET};
pub use charts::{bar_series, padded_bounds, scatter_points};
pub use filter::{filter, filter_displayed, CategoryFilter, ALL_LABEL};
pub use paginate::{clamp_page, paginate, total_pages, Page};
pub use sort::{sort, SortDirection, SortState};
pub use view::{View, ViewEngine, ViewState, PAGE_SIZES};
