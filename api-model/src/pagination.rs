use serde::{Deserialize, Serialize};

/// Page size used by list endpoints when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Request-side pagination cursor. Page numbers are 1-based.
///
/// Attached to every paged dispatch as the `page`/`perPage` query
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// First page with a custom page size.
    pub fn per_page(per_page: u32) -> Self {
        Self { page: 1, per_page }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination metadata the server reports alongside a page of results.
///
/// GetResponse carries this in the `TotalPages`, `TotalCount` and
/// `CurrentPage` response headers rather than the body. A response without
/// a `TotalPages` header is not paginated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    pub total_pages: u32,
    pub total_count: Option<u64>,
    pub current_page: Option<u32>,
}

/// One collected page: the rows the server returned, in server order, plus
/// the most recent final-page number it reported.
///
/// The data set may grow or shrink between requests, so `final_page` is
/// whatever the *latest* response said, not a value fixed up front.
#[derive(Debug, Clone)]
pub struct FetchedPage<T> {
    pub rows: Vec<T>,
    pub final_page: u32,
}
