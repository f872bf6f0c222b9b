//! Pagination window computation.
//!
//! Pure and deterministic: given the current page, the total page count,
//! and how many siblings to show on each side of the current page,
//! produce the ordered row of page buttons and ellipsis markers. Pages
//! are 1-based here; converting to the 0-based index the list APIs take
//! is the caller's job.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use thiserror::Error;

/// One entry in the rendered pagination row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Caller contract violation on [`page_window`] inputs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PageWindowError {
    #[error("invalid pagination arguments: current_page {current_page} not in 1..={total_pages}")]
    InvalidArgument { current_page: u32, total_pages: u32 },
}

/// Compute the pagination window.
///
/// When every page fits (`total_pages <= 5 + 2 * sibling_count`) the
/// window is simply `1..=total_pages`. Otherwise the current page keeps
/// `sibling_count` neighbors on each side, the first and last page are
/// always shown, and an ellipsis marks each elided gap.
///
/// # Errors
///
/// `total_pages == 0` or `current_page` outside `1..=total_pages` is a
/// caller bug and fails with [`PageWindowError::InvalidArgument`]; the
/// window is never silently clamped.
pub fn page_window(
    current_page: u32,
    total_pages: u32,
    sibling_count: u32,
) -> Result<Vec<PageItem>, PageWindowError> {
    if total_pages == 0 || current_page == 0 || current_page > total_pages {
        return Err(PageWindowError::InvalidArgument {
            current_page,
            total_pages,
        });
    }

    if total_pages <= 5 + 2 * sibling_count {
        return Ok(pages(1, total_pages));
    }

    let left = current_page.saturating_sub(sibling_count).max(1);
    let right = (current_page + sibling_count).min(total_pages);
    let show_left_gap = left > 2;
    let show_right_gap = right < total_pages - 1;

    let mut window = Vec::new();
    match (show_left_gap, show_right_gap) {
        (true, true) => {
            window.push(PageItem::Page(1));
            window.push(PageItem::Ellipsis);
            window.extend(pages(left, right));
            window.push(PageItem::Ellipsis);
            window.push(PageItem::Page(total_pages));
        }
        (true, false) => {
            window.push(PageItem::Page(1));
            window.push(PageItem::Ellipsis);
            window.extend(pages(left, total_pages));
        }
        (false, true) => {
            window.extend(pages(1, right));
            window.push(PageItem::Ellipsis);
            window.push(PageItem::Page(total_pages));
        }
        // Unreachable given the fits-entirely branch above, kept so a
        // future change to that branch cannot produce a broken window.
        (false, false) => window = pages(1, total_pages),
    }
    Ok(window)
}

fn pages(start: u32, end: u32) -> Vec<PageItem> {
    (start..=end).map(PageItem::Page).collect()
}
