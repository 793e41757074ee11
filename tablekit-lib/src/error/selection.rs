//! Row selection error types

/// Errors that can occur when changing a row selection.
///
/// A failed selection change leaves the selection exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Adding the key(s) would exceed the configured maximum.
    #[error("Selection limit exceeded: at most {max} rows can be selected")]
    SelectionLimitExceeded { max: usize },

    /// The row has no value in its row key field and cannot be selected.
    #[error("Row has no value for key field '{field}'")]
    MissingRowKey { field: String },

    /// Bulk selection was requested in single selection mode.
    #[error("Cannot select multiple rows in single selection mode")]
    SingleModeBulkSelect,
}
