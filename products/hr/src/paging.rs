use platform_api::{ApiError, ApiResult};
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u64 = 25;

/// A validated page request. `page` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64) -> ApiResult<Self> {
        if page_size <= 0 {
            return Err(ApiError::validation("pageSize must be positive"));
        }
        if page <= 0 {
            return Err(ApiError::validation("page must be at least 1"));
        }
        Ok(Self {
            page: page as u64,
            page_size: page_size as u64,
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Resolves the request against a row count, clamping the page.
    pub fn window(&self, total_count: u64) -> PageWindow {
        let total_pages = total_pages(total_count, self.page_size);
        let page = clamp_page(self.page, total_pages);
        PageWindow {
            page,
            total_pages,
            offset: (page - 1) * self.page_size,
            limit: self.page_size,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub total_pages: u64,
    pub offset: u64,
    pub limit: u64,
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    total_count.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(requested: u64, total_pages: u64) -> u64 {
    requested.clamp(1, total_pages.max(1))
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub total_pages: u64,
    pub page_size: u64,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn from_window(items: Vec<T>, window: PageWindow, total_count: u64) -> Self {
        Self {
            items,
            page: window.page,
            total_pages: window.total_pages,
            page_size: window.limit,
            total_count,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_still_has_one_page() {
        assert_eq!(total_pages(0, 25), 1);
        let window = PageRequest::new(3, 25).unwrap().window(0);
        assert_eq!(window.page, 1);
        assert_eq!(window.offset, 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 25), 1);
        assert_eq!(total_pages(26, 25), 2);
        assert_eq!(total_pages(101, 10), 11);
    }

    #[test]
    fn page_past_the_end_is_clamped() {
        let window = PageRequest::new(9, 10).unwrap().window(35);
        assert_eq!(window.total_pages, 4);
        assert_eq!(window.page, 4);
        assert_eq!(window.offset, 30);
        assert_eq!(window.limit, 10);
    }

    #[test]
    fn windows_cover_every_row_exactly_once() {
        for total in 0..40u64 {
            for size in 1..8u64 {
                let request = PageRequest::new(1, size as i64).unwrap();
                let pages = request.window(total).total_pages;
                let mut seen = 0;
                for page in 1..=pages {
                    let w = PageRequest::new(page as i64, size as i64).unwrap().window(total);
                    assert_eq!(w.offset, seen);
                    seen += w.limit.min(total - w.offset);
                }
                assert_eq!(seen, total, "total={total} size={size}");
            }
        }
    }

    #[test]
    fn invalid_requests_are_rejected() {
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, -5).is_err());
        assert!(PageRequest::new(0, 10).is_err());
    }

    #[test]
    fn large_page_size_is_one_page() {
        let window = PageRequest::new(1, 10_000).unwrap().window(35);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.offset, 0);
        assert_eq!(window.limit, 10_000);
    }
}
