//! Pagination state and the page type returned by evaluation.

use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

use crate::error::QueryError;
use crate::model::Row;

/// Pagination state of a table.
///
/// `current_page` is 1-based. Whenever the number of matching rows is known
/// the page is clamped into `1..=total_pages` rather than rejected.
///
/// # Example
///
/// ```
/// use tablekit_lib::query::PaginationConfig;
///
/// let mut pagination = PaginationConfig::new(2).with_page(10);
/// pagination.clamp(5);
///
/// assert_eq!(pagination.total_pages(), Some(3));
/// assert_eq!(pagination.current_page, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationConfig {
    pub current_page: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<usize>,
    pub page_size_options: Vec<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: 10,
            total_rows: None,
            page_size_options: vec![10, 25, 50, 100],
        }
    }
}

impl PaginationConfig {
    /// Creates a config showing the first page.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Sets the current page (builder pattern, not clamped).
    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Sets the selectable page sizes.
    pub fn with_page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    /// Returns the number of pages if the total row count is known.
    pub fn total_pages(&self) -> Option<usize> {
        self.total_rows.map(|total| total_pages(total, self.page_size))
    }

    /// Records the total row count and clamps the current page into range.
    ///
    /// Call this after every filter change.
    pub fn clamp(&mut self, total_rows: usize) {
        self.total_rows = Some(total_rows);
        self.current_page = clamp_page(self.current_page, total_pages(total_rows, self.page_size));
    }

    /// Moves to a page, clamped into range when the total is known.
    ///
    /// Returns `true` if the current page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let page = match self.total_pages() {
            Some(last) => clamp_page(page, last),
            None => page.max(1),
        };
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    /// Changes the page size and returns to the first page.
    ///
    /// When `page_size_options` is not empty the size must be one of them.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), QueryError> {
        self.check_page_size(page_size)?;
        self.page_size = page_size;
        self.current_page = 1;
        Ok(())
    }

    /// Checks a page size against zero and the offered sizes.
    pub fn check_page_size(&self, page_size: usize) -> Result<(), QueryError> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize);
        }
        if !self.page_size_options.is_empty() && !self.page_size_options.contains(&page_size) {
            return Err(QueryError::PageSizeNotOffered { size: page_size });
        }
        Ok(())
    }
}

/// `ceil(total / page_size)`, never less than one.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

fn clamp_page(page: usize, last: usize) -> usize {
    page.clamp(1, last.max(1))
}

/// Computes the effective page and the index range of its rows.
pub(crate) fn page_window(total: usize, page: usize, page_size: usize) -> (usize, Range<usize>) {
    let page = clamp_page(page, total_pages(total, page_size));
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);
    (page, start..end)
}

/// One evaluated page of a table.
///
/// # Example
///
/// ```ignore
/// let page = evaluate(&rows, &columns, &filter, &sort, &pagination)?;
///
/// for row in page.rows() {
///     println!("{:?}", row.get("name"));
/// }
///
/// println!("page {} of {}", page.current_page(), page.total_pages());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    rows: Vec<Row>,
    /// Rows that passed the filter, before slicing.
    total_matched: usize,
    total_pages: usize,
    /// The page actually shown, after clamping.
    current_page: usize,
    page_size: usize,
}

impl Page {
    pub(crate) fn new(rows: Vec<Row>, total_matched: usize, current_page: usize, page_size: usize) -> Self {
        Self {
            rows,
            total_matched,
            total_pages: total_pages(total_matched, page_size),
            current_page,
            page_size,
        }
    }

    /// Returns a reference to the rows in this page.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the page and returns the rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Returns the number of rows that matched the filter.
    pub fn total_matched(&self) -> usize {
        self.total_matched
    }

    /// Returns the number of pages, at least one.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the 1-based page number shown.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the page size used.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` if there is a page before this one.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(4, 2), 2);
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn test_page_window_clamps() {
        assert_eq!(page_window(5, 10, 2), (3, 4..5));
        assert_eq!(page_window(5, 0, 2), (1, 0..2));
        assert_eq!(page_window(0, 4, 10), (1, 0..0));
    }

    #[test]
    fn test_clamp_after_filter_change() {
        let mut pagination = PaginationConfig::new(10).with_page(7);
        pagination.clamp(25);
        assert_eq!(pagination.current_page, 3);
        pagination.clamp(0);
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.total_rows, Some(0));
    }

    #[test]
    fn test_go_to() {
        let mut pagination = PaginationConfig::new(10);
        assert!(pagination.go_to(4));
        assert_eq!(pagination.current_page, 4);

        pagination.clamp(15);
        assert!(!pagination.go_to(9));
        assert_eq!(pagination.current_page, 2);
        assert!(pagination.go_to(0));
        assert_eq!(pagination.current_page, 1);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut pagination = PaginationConfig::new(10).with_page(3);
        pagination.set_page_size(25).unwrap();
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.page_size, 25);
        assert_eq!(pagination.set_page_size(0), Err(QueryError::InvalidPageSize));
        assert_eq!(pagination.page_size, 25);
    }

    #[test]
    fn test_set_page_size_must_be_offered() {
        let mut pagination = PaginationConfig::new(10).with_page(3);
        assert_eq!(
            pagination.set_page_size(7),
            Err(QueryError::PageSizeNotOffered { size: 7 })
        );
        assert_eq!(pagination.page_size, 10);
        assert_eq!(pagination.current_page, 3);

        let mut pagination = PaginationConfig::new(10).with_page_size_options(Vec::new());
        pagination.set_page_size(7).unwrap();
        assert_eq!(pagination.page_size, 7);
    }

    #[test]
    fn test_page_navigation_flags() {
        let page = Page::new(Vec::new(), 25, 2, 10);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(page.has_previous());
        assert!(page.is_empty());
    }
}
