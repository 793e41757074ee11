//! Structural validation of a table view.

use std::collections::HashSet;

use super::TableView;
use crate::error::FieldValidationError;
use crate::error::QueryError;
use crate::error::ValidationErrors;
use crate::query::SelectionMode;
use crate::query::SortConfig;
use crate::query::TableFilter;
use crate::query::sortable_column;

/// Checks a table view and returns every problem found.
///
/// Unlike the view's operations, which stop at the first error, this walks
/// the whole definition so a caller can report all problems at once.
pub fn validate(view: &TableView) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_columns(view, &mut errors);
    check_filter(view, &mut errors);
    check_sort(view, &mut errors);
    check_pagination(view, &mut errors);
    check_selection(view, &mut errors);
    errors.into_result()
}

fn check_columns(view: &TableView, errors: &mut ValidationErrors) {
    if view.columns.is_empty() {
        errors.push(FieldValidationError::with_code(
            "columns",
            "at least one column is required",
            "no_columns",
        ));
    }
    let mut seen = HashSet::new();
    for (i, column) in view.columns.iter().enumerate() {
        if column.id.is_empty() {
            errors.push(FieldValidationError::with_code(
                format!("columns[{}].id", i),
                "column id must not be empty",
                "empty_column_id",
            ));
        } else if !seen.insert(column.id.as_str()) {
            errors.push(FieldValidationError::with_code(
                format!("columns[{}].id", i),
                format!("duplicate column id '{}'", column.id),
                "duplicate_column",
            ));
        }
    }
    if view.row_key_field.is_empty() {
        errors.push(FieldValidationError::with_code(
            "rowKeyField",
            "row key field must not be empty",
            "empty_row_key_field",
        ));
    }
}

fn check_filter(view: &TableView, errors: &mut ValidationErrors) {
    for (i, condition) in view.filter.conditions.iter().enumerate() {
        if let Err(e) = TableFilter::check_condition(condition, &view.columns) {
            errors.push(query_error(format!("filter.conditions[{}]", i), &e));
        }
    }
}

fn check_sort(view: &TableView, errors: &mut ValidationErrors) {
    let sort = &view.sort;
    if sort.multi_sort && sort.max_sort_columns == 0 {
        errors.push(FieldValidationError::with_code(
            "sort.maxSortColumns",
            "must be at least 1 when multi-sort is enabled",
            "invalid_sort_limit",
        ));
    }
    check_sort_keys("sort.activeSort", &sort.active_sort, sort.limit(), view, errors);
    check_sort_keys("sort.defaultSort", &sort.default_sort, sort.limit(), view, errors);
}

fn check_sort_keys(
    field: &str,
    keys: &[SortConfig],
    limit: usize,
    view: &TableView,
    errors: &mut ValidationErrors,
) {
    if keys.len() > limit {
        let e = QueryError::TooManySortColumns {
            count: keys.len(),
            max: limit,
        };
        errors.push(query_error(field.to_string(), &e));
    }
    for (i, key) in keys.iter().enumerate() {
        if let Err(e) = sortable_column(&key.column_id, &view.columns) {
            errors.push(query_error(format!("{}[{}]", field, i), &e));
        }
    }
}

fn check_pagination(view: &TableView, errors: &mut ValidationErrors) {
    let pagination = &view.pagination;
    if let Err(e) = pagination.check_page_size(pagination.page_size) {
        errors.push(query_error("pagination.pageSize".to_string(), &e));
    }
    if pagination.page_size_options.contains(&0) {
        errors.push(FieldValidationError::with_code(
            "pagination.pageSizeOptions",
            "page sizes must be greater than zero",
            "invalid_page_size",
        ));
    }
    if pagination.current_page == 0 {
        errors.push(FieldValidationError::with_code(
            "pagination.currentPage",
            "pages are numbered from 1",
            "invalid_page",
        ));
    }
}

fn check_selection(view: &TableView, errors: &mut ValidationErrors) {
    let selection = &view.selection;
    let selected = selection.selected_keys().len();
    if selection.mode == SelectionMode::Single && selected > 1 {
        errors.push(FieldValidationError::with_code(
            "selection.selectedKeys",
            format!("single selection holds {} keys", selected),
            "single_mode_overflow",
        ));
    }
    if selection.max_selections > 0 && selected > selection.max_selections {
        errors.push(FieldValidationError::with_code(
            "selection.selectedKeys",
            format!("{} keys selected, at most {} allowed", selected, selection.max_selections),
            "selection_limit_exceeded",
        ));
    }
}

fn query_error(field: String, error: &QueryError) -> FieldValidationError {
    FieldValidationError::with_code(field, error.to_string(), error.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;
    use crate::query::FilterCondition;
    use crate::query::PaginationConfig;
    use crate::query::RowSelection;
    use crate::query::TableSort;

    #[test]
    fn test_valid_view() {
        let view = TableView::new(vec![Column::number("id"), Column::string("name")])
            .with_filter(TableFilter::all([FilterCondition::contains("name", "a")]))
            .with_sort(TableSort::new().with_default([SortConfig::asc("name")]));
        assert_eq!(validate(&view), Ok(()));
    }

    #[test]
    fn test_reports_every_problem() {
        let mut selection = RowSelection::single();
        selection.selected_keys.extend(["a".to_string(), "b".to_string()]);

        let view = TableView::new(vec![Column::number("id"), Column::number("id")])
            .with_row_key_field("")
            .with_filter(TableFilter::all([
                FilterCondition::gt("id", "ten"),
                FilterCondition::eq("ghost", 1),
            ]))
            .with_sort(TableSort::new().with_active([SortConfig::asc("id"), SortConfig::asc("ghost")]))
            .with_pagination(PaginationConfig::new(7).with_page(0))
            .with_selection(selection);

        let errors = validate(&view).unwrap_err();
        for code in [
            "duplicate_column",
            "empty_row_key_field",
            "invalid_filter_value",
            "unknown_column",
            "too_many_sort_columns",
            "page_size_not_offered",
            "invalid_page",
            "single_mode_overflow",
        ] {
            assert!(errors.has_code(code), "missing {}", code);
        }
        assert!(errors
            .errors()
            .iter()
            .any(|e| e.field == "filter.conditions[1]"));
    }

    #[test]
    fn test_zero_page_size() {
        let mut pagination = PaginationConfig::new(10);
        pagination.page_size = 0;
        let view = TableView::new(vec![Column::number("id")]).with_pagination(pagination);
        let errors = validate(&view).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field, "pagination.pageSize");
    }

    #[test]
    fn test_selection_over_limit() {
        let mut selection = RowSelection::multiple().with_max_selections(1);
        selection.selected_keys.extend(["a".to_string(), "b".to_string()]);
        let view = TableView::new(vec![Column::number("id")]).with_selection(selection);
        assert!(validate(&view)
            .unwrap_err()
            .has_code("selection_limit_exceeded"));
    }
}
