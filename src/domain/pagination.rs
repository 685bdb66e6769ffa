// src/domain/pagination.rs
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// One-based page window used by every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Missing or zero values fall back to the defaults; `limit` is capped.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .min(MAX_PAGE_LIMIT);
        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    pub fn pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.request.limit()))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_or_zero_values() {
        let request = PageRequest::new(Some(0), None);
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), DEFAULT_PAGE_LIMIT);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn limit_is_capped() {
        let request = PageRequest::new(Some(3), Some(1_000));
        assert_eq!(request.limit(), MAX_PAGE_LIMIT);
        assert_eq!(request.offset(), 200);
    }

    #[test]
    fn pages_rounds_up() {
        let page: Page<u8> = Page::new(vec![], 21, PageRequest::new(Some(1), Some(10)));
        assert_eq!(page.pages(), 3);
        let empty: Page<u8> = Page::new(vec![], 0, PageRequest::default());
        assert_eq!(empty.pages(), 0);
    }
}
