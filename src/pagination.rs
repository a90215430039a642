use serde::{Deserialize, Serialize};

/// Page size applied when the client does not request one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
/// Upper bound on the page size a client may request.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Pagination options applied to a repository listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Requested page, 1-based.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

impl Pagination {
    /// Offset of the first item on the page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.per_page
    }
}

/// One page of results together with the paging envelope returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items belonging to the requested page.
    pub items: Vec<T>,
    /// Page that was served, 1-based.
    pub page: usize,
    /// Page size used to slice the results.
    pub per_page: usize,
    /// Total number of items across all pages.
    pub total: usize,
    /// Total number of pages at `per_page` items each.
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Wrap a page of `items` and derive `total_pages` from the totals.
    pub fn new(items: Vec<T>, page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = total.div_ceil(per_page.max(1));
        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_total_pages() {
        let page = Paginated::new(vec![1, 2, 3], 1, 3, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn empty_listing_has_no_pages() {
        let page: Paginated<i32> = Paginated::new(Vec::new(), 1, 20, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn offset_is_zero_based() {
        let pagination = Pagination {
            page: 3,
            per_page: 20,
        };
        assert_eq!(pagination.offset(), 40);
    }
}
