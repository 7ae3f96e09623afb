//! Fixed-size page windows.

/// One page of rows plus the page count for the whole input.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub total_pages: usize,
}

/// Number of pages needed for `count` rows; never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    count.div_ceil(page_size).max(1)
}

/// Clamp a 1-based page index into `[1, total_pages]`.
pub fn clamp_page(page_index: usize, count: usize, page_size: usize) -> usize {
    page_index.clamp(1, total_pages(count, page_size))
}

/// Slice out page `page_index` (1-based) of `records`.
///
/// A page index of zero or past the last page yields an empty page; callers
/// that want the nearest valid page clamp with [`clamp_page`] first. A page
/// size of zero is treated as one.
pub fn paginate<T: Clone>(records: &[T], page_size: usize, page_index: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = total_pages(records.len(), page_size);

    let items = if page_index == 0 || page_index > total {
        Vec::new()
    } else {
        let start = (page_index - 1) * page_size;
        let end = (start + page_size).min(records.len());
        records.get(start..end).map(<[T]>::to_vec).unwrap_or_default()
    };

    Page {
        items,
        page_index,
        total_pages: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 30, 10), 1);
        assert_eq!(clamp_page(7, 30, 10), 3);
        assert_eq!(clamp_page(2, 30, 10), 2);
    }
}
