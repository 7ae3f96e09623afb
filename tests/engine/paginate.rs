use exoview::engine::{clamp_page, paginate, total_pages};

#[test]
fn test_pages_cover_input_exactly_once() {
    let items: Vec<u32> = (1..=23).collect();
    for size in [1, 5, 10, 20, 50] {
        let pages = total_pages(items.len(), size);
        let rebuilt: Vec<u32> = (1..=pages).flat_map(|i| paginate(&items, size, i).items).collect();
        assert_eq!(rebuilt, items, "page size {}", size);
    }
}

#[test]
fn test_last_page_is_partial() {
    let items: Vec<u32> = (1..=23).collect();
    let page = paginate(&items, 10, 3);
    assert_eq!(page.items, vec![21, 22, 23]);
    assert_eq!(page.page_index, 3);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn test_out_of_range_page_is_empty() {
    let items: Vec<u32> = (1..=5).collect();
    let page = paginate(&items, 10, 4);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 1);
    assert!(paginate(&items, 10, 0).items.is_empty());
}

#[test]
fn test_empty_input_has_one_empty_page() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(&items, 10, 1);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 1);
}

#[test]
fn test_clamp_page_brings_index_into_range() {
    assert_eq!(clamp_page(5, 12, 10), 2);
    assert_eq!(clamp_page(0, 12, 10), 1);
    assert_eq!(clamp_page(2, 0, 10), 1);
}
