//! Table view sessions.
//!
//! A [`TableView`] is created from the static props of one table (columns,
//! row key field, initial filter/sort/pagination/selection) and then changed
//! only through its operations. Every operation checks its input first and
//! leaves the view untouched when it fails.

mod validate;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

pub use validate::validate;

use crate::error::ConfigError;
use crate::error::QueryError;
use crate::error::SelectionError;
use crate::error::ValidationErrors;
use crate::model::Column;
use crate::model::Row;
use crate::query::Page;
use crate::query::PaginationConfig;
use crate::query::RowSelection;
use crate::query::TableFilter;
use crate::query::TableSort;
use crate::query::evaluate;
use crate::query::sortable_column;

/// The state of one table view.
///
/// # Example
///
/// ```
/// use tablekit_lib::model::{Column, Row};
/// use tablekit_lib::view::TableView;
///
/// let mut view = TableView::new(vec![Column::number("id"), Column::string("name")]);
/// let rows = vec![
///     Row::new().set("id", 1i64).set("name", "Ada"),
///     Row::new().set("id", 2i64).set("name", "Grace"),
/// ];
///
/// view.set_global_search(Some("grace".to_string()));
/// let page = view.evaluate(&rows).unwrap();
/// assert_eq!(page.total_matched(), 1);
///
/// view.toggle_selection("2").unwrap();
/// assert_eq!(view.selected_rows(&rows), vec![&rows[1]]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableView {
    columns: Vec<Column>,
    row_key_field: String,
    filter: TableFilter,
    sort: TableSort,
    pagination: PaginationConfig,
    selection: RowSelection,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            row_key_field: "id".to_string(),
            filter: TableFilter::default(),
            sort: TableSort::default(),
            pagination: PaginationConfig::default(),
            selection: RowSelection::default(),
        }
    }
}

impl TableView {
    /// Creates a view over the given columns with default settings.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Parses a view definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a view definition from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded table view from {}", path.display());
        Self::from_json(&json)
    }

    /// Sets the field that identifies rows.
    pub fn with_row_key_field(mut self, field: impl Into<String>) -> Self {
        self.row_key_field = field.into();
        self
    }

    /// Sets the initial filter.
    pub fn with_filter(mut self, filter: TableFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the initial sort.
    pub fn with_sort(mut self, sort: TableSort) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the initial pagination.
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Sets the initial selection.
    pub fn with_selection(mut self, selection: RowSelection) -> Self {
        self.selection = selection;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_key_field(&self) -> &str {
        &self.row_key_field
    }

    pub fn filter(&self) -> &TableFilter {
        &self.filter
    }

    pub fn sort(&self) -> &TableSort {
        &self.sort
    }

    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }

    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    /// Checks the whole view and reports every problem found.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate(self)
    }

    // =========================================================================
    // Query
    // =========================================================================

    /// Evaluates the view over `rows`.
    ///
    /// Records the matched row count in the pagination state and clamps the
    /// stored current page, so later page moves stay in range. If clamping
    /// moves the page, the page-change selection rule applies.
    pub fn evaluate(&mut self, rows: &[Row]) -> Result<Page, QueryError> {
        let page = evaluate(rows, &self.columns, &self.filter, &self.sort, &self.pagination)?;
        let before = self.pagination.current_page;
        self.pagination.clamp(page.total_matched());
        if self.pagination.current_page != before {
            self.selection.page_changed();
        }
        Ok(page)
    }

    /// Replaces the filter after checking it against the columns.
    pub fn apply_filter(&mut self, filter: TableFilter) -> Result<(), QueryError> {
        filter.compile(&self.columns)?;
        log::debug!("filter applied: {} condition(s)", filter.conditions.len());
        self.filter = filter;
        Ok(())
    }

    /// Sets or clears the global search query.
    pub fn set_global_search(&mut self, query: Option<String>) {
        self.filter.global_search.query = query;
    }

    /// Applies a header click on a sortable column.
    pub fn toggle_sort(&mut self, column_id: &str, additive: bool) -> Result<(), QueryError> {
        sortable_column(column_id, &self.columns)?;
        if self.sort.limit() == 0 {
            return Err(QueryError::TooManySortColumns { count: 1, max: 0 });
        }
        self.sort.toggle(column_id, additive);
        Ok(())
    }

    /// Replaces the sort after checking it against the columns.
    pub fn set_sort(&mut self, sort: TableSort) -> Result<(), QueryError> {
        sort.compile(&self.columns)?;
        self.sort = sort;
        Ok(())
    }

    /// Moves to a page. Returns `true` if the page changed.
    ///
    /// A page change clears the selection unless it is preserved across pages.
    pub fn set_page(&mut self, page: usize) -> bool {
        let changed = self.pagination.go_to(page);
        if changed && self.selection.page_changed() {
            log::debug!("selection cleared on move to page {}", self.pagination.current_page);
        }
        changed
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), QueryError> {
        let before = self.pagination.current_page;
        self.pagination.set_page_size(page_size)?;
        if self.pagination.current_page != before {
            self.selection.page_changed();
        }
        Ok(())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Toggles a row key.
    pub fn toggle_selection(&mut self, key: impl Into<String>) -> Result<(), SelectionError> {
        self.selection.toggle(key)
    }

    /// Toggles a row by its key field.
    pub fn toggle_row(&mut self, row: &Row) -> Result<(), SelectionError> {
        self.selection.toggle_row(row, &self.row_key_field)
    }

    /// Selects every keyed row of a page.
    pub fn select_page(&mut self, page: &Page) -> Result<(), SelectionError> {
        let keys: Vec<String> = page
            .rows()
            .iter()
            .filter_map(|row| row.key(&self.row_key_field))
            .collect();
        self.selection.select_all(keys)
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Returns the selected rows of a row set, in input order.
    pub fn selected_rows<'r>(&self, rows: &'r [Row]) -> Vec<&'r Row> {
        self.selection.selected_rows(rows, &self.row_key_field)
    }
}
