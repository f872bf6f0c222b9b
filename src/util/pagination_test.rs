use super::*;

fn window(current: u32, total: u32, siblings: u32) -> Vec<PageItem> {
    page_window(current, total, siblings).expect("valid arguments")
}

fn numbers(items: &[PageItem]) -> Vec<u32> {
    items
        .iter()
        .filter_map(|item| match item {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        })
        .collect()
}

// =============================================================
// Everything fits
// =============================================================

#[test]
fn small_total_lists_every_page() {
    use PageItem::Page;
    assert_eq!(window(2, 4, 1), vec![Page(1), Page(2), Page(3), Page(4)]);
}

#[test]
fn boundary_total_still_fits() {
    // 7 == 5 + 2 * 1, the largest total with no ellipsis.
    let items = window(4, 7, 1);
    assert_eq!(numbers(&items), vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(!items.contains(&PageItem::Ellipsis));
}

#[test]
fn single_page_window() {
    assert_eq!(window(1, 1, 1), vec![PageItem::Page(1)]);
}

// =============================================================
// Gaps
// =============================================================

#[test]
fn middle_page_shows_both_gaps() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(
        window(10, 20, 1),
        vec![
            Page(1),
            Ellipsis,
            Page(9),
            Page(10),
            Page(11),
            Ellipsis,
            Page(20),
        ]
    );
}

#[test]
fn near_end_shows_left_gap_only() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(
        window(18, 20, 1),
        vec![Page(1), Ellipsis, Page(17), Page(18), Page(19), Page(20)]
    );
}

#[test]
fn near_start_shows_right_gap_only() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(
        window(2, 20, 1),
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
    );
}

#[test]
fn zero_siblings_keeps_current_page_alone() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(
        window(10, 20, 0),
        vec![Page(1), Ellipsis, Page(10), Ellipsis, Page(20)]
    );
}

#[test]
fn wide_siblings_absorb_the_edges() {
    // left == 2 so no left gap; right == 8 < 19 so a right gap remains.
    let items = window(5, 20, 3);
    assert_eq!(
        numbers(&items),
        vec![1, 2, 3, 4, 5, 6, 7, 8, 20],
        "window: {items:?}"
    );
    assert_eq!(
        items.iter().filter(|i| **i == PageItem::Ellipsis).count(),
        1
    );
}

// =============================================================
// Invalid arguments
// =============================================================

#[test]
fn zero_total_pages_is_rejected() {
    assert_eq!(
        page_window(1, 0, 1),
        Err(PageWindowError::InvalidArgument {
            current_page: 1,
            total_pages: 0,
        })
    );
}

#[test]
fn current_page_zero_is_rejected() {
    assert!(page_window(0, 10, 1).is_err());
}

#[test]
fn current_page_past_the_end_is_rejected() {
    assert!(page_window(11, 10, 1).is_err());
}
