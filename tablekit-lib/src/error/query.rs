//! Query evaluation error types

/// Errors that can occur while evaluating a table query.
///
/// None of these are fatal: the caller can reject the edit that produced the
/// bad configuration and keep using the previous one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// A filter condition or sort key references a column that does not exist.
    #[error("Unknown column '{column}'")]
    UnknownColumn { column: String },

    /// A filter condition's value cannot be coerced to the column's data type.
    #[error("Invalid filter value for column '{column}': expected {expected}, {message}")]
    InvalidFilterValue {
        column: String,
        expected: &'static str,
        message: String,
    },

    /// A filter condition targets a column that is not filterable.
    #[error("Column '{column}' is not filterable")]
    ColumnNotFilterable { column: String },

    /// A sort key targets a column that is not sortable.
    #[error("Column '{column}' is not sortable")]
    ColumnNotSortable { column: String },

    /// The page size is zero.
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    /// The page size is not one of the sizes the pagination offers.
    #[error("Page size {size} is not one of the offered sizes")]
    PageSizeNotOffered { size: usize },

    /// More sort keys are active than the sort configuration allows.
    #[error("Too many sort columns: {count} (max {max})")]
    TooManySortColumns { count: usize, max: usize },
}

impl QueryError {
    /// Creates a new unknown column error.
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }

    /// Creates a new invalid filter value error.
    pub fn invalid_value(
        column: impl Into<String>,
        expected: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidFilterValue {
            column: column.into(),
            expected,
            message: message.into(),
        }
    }

    /// Returns a stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownColumn { .. } => "unknown_column",
            Self::InvalidFilterValue { .. } => "invalid_filter_value",
            Self::ColumnNotFilterable { .. } => "column_not_filterable",
            Self::ColumnNotSortable { .. } => "column_not_sortable",
            Self::InvalidPageSize => "invalid_page_size",
            Self::PageSizeNotOffered { .. } => "page_size_not_offered",
            Self::TooManySortColumns { .. } => "too_many_sort_columns",
        }
    }

    /// Returns the column this error refers to, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::UnknownColumn { column }
            | Self::InvalidFilterValue { column, .. }
            | Self::ColumnNotFilterable { column }
            | Self::ColumnNotSortable { column } => Some(column),
            Self::InvalidPageSize | Self::PageSizeNotOffered { .. } | Self::TooManySortColumns { .. } => None,
        }
    }
}
