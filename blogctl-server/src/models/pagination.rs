//! Pagination for the article list view

/// Articles shown per page on the index
pub const ARTICLES_PER_PAGE: u32 = 6;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: i64,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination, clamping the page to a minimum of 1.
    pub fn new(page: i64, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Build from a raw `page` query value.
    ///
    /// Missing or non-numeric input falls back to page 1; values below 1
    /// clamp to 1.
    pub fn from_query(raw: Option<&str>, per_page: u32) -> Self {
        let page = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page, per_page)
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(i64::from(self.per_page))
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    /// Check if there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Check if rows exist past this page given a total row count.
    pub fn has_next(&self, total: i64) -> bool {
        self.offset().saturating_add(self.limit()) < total
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: ARTICLES_PER_PAGE,
        }
    }
}
