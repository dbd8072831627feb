//! Page arithmetic and the page snapshot type.

use std::ops::Range;

use serde::Serialize;

/// Number of pages needed for `total_rows`.
///
/// Never zero: an empty result still has one (empty) page. A page size of
/// zero means unbounded, so everything fits on one page.
pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_rows.div_ceil(page_size).max(1)
}

/// Clamp a 1-based page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Row range of `page` (1-based) within `total_rows`.
pub fn page_range(page: usize, page_size: usize, total_rows: usize) -> Range<usize> {
    if page_size == 0 {
        return 0..total_rows;
    }
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total_rows);
    let end = start.saturating_add(page_size).min(total_rows);
    start..end
}

/// A snapshot of the current page.
///
/// `start..end` is the half-open range of the page within the filtered and
/// sorted rows.
///
/// # Example
///
/// ```
/// use datagrid::PageInfo;
///
/// let info = PageInfo::new(2, 10, 25);
/// assert_eq!(info.total_pages, 3);
/// assert_eq!((info.start, info.end), (10, 20));
/// assert!(info.has_previous() && info.has_next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current page, 1-based.
    pub current_page: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Rows per page; 0 means unbounded.
    pub page_size: usize,
    /// Rows after filtering.
    pub total_rows: usize,
    /// First row of the page.
    pub start: usize,
    /// One past the last row of the page.
    pub end: usize,
}

impl PageInfo {
    /// Describe `page` for `total_rows` rows, clamping the page into bounds.
    pub fn new(page: usize, page_size: usize, total_rows: usize) -> Self {
        let total_pages = total_pages(total_rows, page_size);
        let current_page = clamp_page(page, total_pages);
        let range = page_range(current_page, page_size, total_rows);
        Self {
            current_page,
            total_pages,
            page_size,
            total_rows,
            start: range.start,
            end: range.end,
        }
    }

    /// Returns `true` if a previous page exists and there is data.
    pub fn has_previous(&self) -> bool {
        self.total_rows > 0 && self.current_page > 1
    }

    /// Returns `true` if a next page exists and there is data.
    pub fn has_next(&self) -> bool {
        self.total_rows > 0 && self.current_page < self.total_pages
    }

    /// Returns `true` if the page holds no rows.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of rows on the page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The page's row range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
