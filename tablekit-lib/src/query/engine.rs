//! The query pipeline: filter, sort, paginate.

use super::PaginationConfig;
use super::TableFilter;
use super::TableSort;
use super::page::Page;
use super::page::page_window;
use super::sort::sort_rows;
use crate::error::QueryError;
use crate::model::Column;
use crate::model::Row;

/// Evaluates a table query and returns the visible page.
///
/// Rows are filtered by `filter`, stably sorted by the effective keys of
/// `sort`, then sliced into pages of `pagination.page_size`. A current page
/// past the end is clamped to the last page. The input rows are never
/// modified, and the same inputs always produce the same page.
///
/// Configuration is checked before any row is touched: unknown columns,
/// filter values that do not fit their column's data type, non-filterable or
/// non-sortable columns, an oversized sort and a zero page size are errors.
///
/// # Example
///
/// ```
/// use tablekit_lib::model::{Column, Row};
/// use tablekit_lib::query::{evaluate, FilterCondition, PaginationConfig, SortConfig, TableFilter, TableSort};
///
/// let columns = vec![Column::number("id"), Column::number("age")];
/// let rows = vec![
///     Row::new().set("id", 1i64).set("age", 30i64),
///     Row::new().set("id", 2i64).set("age", 20i64),
///     Row::new().set("id", 3i64).set("age", 30i64),
/// ];
/// let filter = TableFilter::all([FilterCondition::ge("age", 25)]);
/// let sort = TableSort::new().with_active([SortConfig::asc("age")]);
///
/// let page = evaluate(&rows, &columns, &filter, &sort, &PaginationConfig::new(10)).unwrap();
///
/// assert_eq!(page.total_matched(), 2);
/// assert_eq!(page.rows(), &[rows[0].clone(), rows[2].clone()]);
/// ```
pub fn evaluate(
    rows: &[Row],
    columns: &[Column],
    filter: &TableFilter,
    sort: &TableSort,
    pagination: &PaginationConfig,
) -> Result<Page, QueryError> {
    if pagination.page_size == 0 {
        return Err(QueryError::InvalidPageSize);
    }
    let compiled = filter.compile(columns)?;
    let keys = sort.compile(columns)?;

    let matched: Vec<&Row> = rows.iter().filter(|row| compiled.matches(row)).collect();
    let total_matched = matched.len();
    log::trace!("filter kept {} of {} rows", total_matched, rows.len());

    let sorted = sort_rows(matched, &keys);
    let (current_page, window) = page_window(total_matched, pagination.current_page, pagination.page_size);
    if current_page != pagination.current_page {
        log::debug!(
            "page {} out of range for {} rows, showing page {}",
            pagination.current_page,
            total_matched,
            current_page
        );
    }

    let page_rows: Vec<Row> = sorted[window].iter().map(|row| (*row).clone()).collect();
    log::debug!(
        "evaluated {} rows: {} matched, page {} has {} rows",
        rows.len(),
        total_matched,
        current_page,
        page_rows.len()
    );
    Ok(Page::new(page_rows, total_matched, current_page, pagination.page_size))
}
