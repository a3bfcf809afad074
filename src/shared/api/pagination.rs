use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalized page/limit pair taken from query strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        Self { page, limit }
    }

    /// Row offset, capped at `i64::MAX` so Postgres accepts it; a page past
    /// the end yields an empty result rather than an error.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: PageRequest) -> Self {
        Self {
            items,
            meta: PageMeta {
                total,
                total_pages: page.total_pages(total),
                current_page: page.page,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let page = PageRequest::new(None, None);
        assert_eq!(page, PageRequest { page: 1, limit: 10 });
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn caps_limit_and_ignores_zero_page() {
        let page = PageRequest::new(Some(0), Some(500));
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = PageRequest::new(Some(3), Some(10));
        assert_eq!(page.offset(), 20);
        assert_eq!(page.total_pages(21), 3);
        assert_eq!(page.total_pages(0), 0);
    }

    #[test]
    fn huge_page_number_saturates_offset() {
        let page = PageRequest::new(Some(u64::MAX), Some(100));
        assert_eq!(page.offset(), i64::MAX as u64);
        assert_eq!(page.total_pages(5), 1);
    }
}
