//! Pagination types

/// Default items per page
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// Page and page size are both clamped to a minimum of 1.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// Build from optional query input, filling in defaults.
    pub fn from_params(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self::new(page.unwrap_or(1), page_size.unwrap_or(DEFAULT_PAGE_SIZE))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        let p = Pagination::new(1, 10);
        assert_eq!(p.offset(), 0);

        let p = Pagination::new(2, 5);
        assert_eq!(p.offset(), 5);

        let p = Pagination::new(3, 25);
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn clamps_page() {
        let p = Pagination::new(0, 10);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn clamps_page_size() {
        let p = Pagination::new(1, 0);
        assert_eq!(p.page_size, 1);
    }

    #[test]
    fn defaults() {
        let p = Pagination::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.limit(), 10);
    }

    #[test]
    fn from_params_fills_defaults() {
        let p = Pagination::from_params(None, None);
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 10);

        let p = Pagination::from_params(Some(2), Some(5));
        assert_eq!(p.offset(), 5);
    }
}
