//! Pagination cursor for the post listing.

use crate::api::ApiRequest;

/// Number of pages needed for `total_count` posts.
pub fn total_pages(total_count: u64, posts_per_page: u32) -> u64 {
    total_count.div_ceil(u64::from(posts_per_page.max(1)))
}

/// Page cursor and filter of a post listing.
///
/// `current_page` goes back to 0 whenever the filter or page size changes.
/// The server's `has_next` flag decides whether a next page exists; it is
/// not recomputed from `total_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u64,
    posts_per_page: u32,
    total_count: u64,
    has_next_page: bool,
    category_filter: Option<String>,
}

impl PaginationState {
    /// Cursor on the first page. A zero page size is raised to 1.
    pub fn new(posts_per_page: u32, category_filter: Option<String>) -> Self {
        Self {
            current_page: 0,
            posts_per_page: posts_per_page.max(1),
            total_count: 0,
            has_next_page: false,
            category_filter,
        }
    }

    /// Zero-based page index.
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Page size.
    pub fn posts_per_page(&self) -> u32 {
        self.posts_per_page
    }

    /// Total posts reported by the last successful load.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Category the listing is filtered by.
    pub fn category_filter(&self) -> Option<&str> {
        self.category_filter.as_deref()
    }

    /// Number of posts before the current page.
    pub fn skip(&self) -> u64 {
        self.current_page * u64::from(self.posts_per_page)
    }

    /// Pages needed for the reported total.
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_count, self.posts_per_page)
    }

    /// Controls are only shown when there is more than one page.
    pub fn shows_controls(&self) -> bool {
        self.total_pages() > 1
    }

    /// Whether "Previous" is enabled.
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Whether "Next" is enabled.
    pub fn can_go_next(&self) -> bool {
        self.has_next_page
    }

    /// Step back one page. Returns `false` (and does nothing) on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Step forward one page. Returns `false` (and does nothing) without a next page.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Change filter and page size; returns whether anything changed.
    ///
    /// Any change rewinds to the first page.
    pub fn refilter(&mut self, category_filter: Option<String>, posts_per_page: u32) -> bool {
        let posts_per_page = posts_per_page.max(1);
        if self.category_filter == category_filter && self.posts_per_page == posts_per_page {
            return false;
        }
        self.category_filter = category_filter;
        self.posts_per_page = posts_per_page;
        self.current_page = 0;
        true
    }

    /// Store the totals of a successful load.
    pub fn record(&mut self, total_count: u64, has_next_page: bool) {
        self.total_count = total_count;
        self.has_next_page = has_next_page;
    }

    /// Request for the current page.
    pub fn request(&self) -> ApiRequest {
        ApiRequest::Posts {
            limit: self.posts_per_page,
            skip: self.skip(),
            category_id: self.category_filter.clone(),
        }
    }
}
