//! Listing pagination.

use serde::{Deserialize, Serialize};

/// Pagination metadata returned alongside a product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, 1-indexed.
    #[serde(default = "default_page")]
    pub current_page: i64,
    /// Last available page.
    #[serde(default = "default_page")]
    pub last_page: i64,
    /// Items per page.
    #[serde(default)]
    pub per_page: i64,
    /// Total number of items.
    #[serde(default)]
    pub total: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: 0,
            total: 0,
        }
    }
}

/// One entry in the rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(i64),
    /// An ellipsis between non-adjacent numbers.
    Gap,
}

impl Pagination {
    /// Check if a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Check if a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Check if a page number is in range.
    pub fn contains(&self, page: i64) -> bool {
        (1..=self.last_page).contains(&page)
    }

    /// The windowed page-number strip the pager renders: `delta` pages
    /// around the current one, with the first and last page always shown
    /// and gaps where numbers are skipped.
    pub fn page_window(&self, delta: i64) -> Vec<PageItem> {
        let current = self.current_page;
        let last = self.last_page.max(1);

        let start = (current - delta).max(1);
        let end = (current + delta).min(last);

        let mut items = Vec::new();
        if start > 1 {
            items.push(PageItem::Page(1));
            if start > 2 {
                items.push(PageItem::Gap);
            }
        }
        for page in start..=end {
            items.push(PageItem::Page(page));
        }
        if end < last {
            if end < last - 1 {
                items.push(PageItem::Gap);
            }
            items.push(PageItem::Page(last));
        }
        items
    }
}
