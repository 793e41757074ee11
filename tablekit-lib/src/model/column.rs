//! Column definitions

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::QueryError;

/// The data type of a column, which drives filtering and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    #[default]
    String,
    Number,
    Date,
    Boolean,
    Currency,
    Percentage,
    Badge,
    Avatar,
    Actions,
    Custom,
}

/// How values of a [`DataType`] are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Numeric comparison (number, currency, percentage).
    Numeric,
    /// Chronological comparison (date).
    Temporal,
    /// `false < true` (boolean).
    Boolean,
    /// Lexicographic comparison on the string form (everything else).
    Text,
}

impl DataType {
    /// Returns the comparison kind for this data type.
    pub fn kind(&self) -> ValueKind {
        match self {
            DataType::Number | DataType::Currency | DataType::Percentage => ValueKind::Numeric,
            DataType::Date => ValueKind::Temporal,
            DataType::Boolean => ValueKind::Boolean,
            DataType::String
            | DataType::Badge
            | DataType::Avatar
            | DataType::Actions
            | DataType::Custom => ValueKind::Text,
        }
    }

    /// Returns the schema name of this data type.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Date => "date",
            DataType::Boolean => "boolean",
            DataType::Currency => "currency",
            DataType::Percentage => "percentage",
            DataType::Badge => "badge",
            DataType::Avatar => "avatar",
            DataType::Actions => "actions",
            DataType::Custom => "custom",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named, typed accessor into a row.
///
/// # Example
///
/// ```
/// use tablekit_lib::model::{Column, DataType};
///
/// let column = Column::new("price", DataType::Currency)
///     .with_header("Price")
///     .filterable(false);
///
/// assert!(column.sortable);
/// assert!(!column.filterable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Key of the field in each row.
    pub id: String,
    /// Display label, defaults to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default = "default_true")]
    pub filterable: bool,
}

fn default_true() -> bool {
    true
}

impl Column {
    /// Creates a sortable, filterable column.
    pub fn new(id: impl Into<String>, data_type: DataType) -> Self {
        Self {
            id: id.into(),
            header: None,
            data_type,
            sortable: true,
            filterable: true,
        }
    }

    /// Creates a string column.
    pub fn string(id: impl Into<String>) -> Self {
        Self::new(id, DataType::String)
    }

    /// Creates a number column.
    pub fn number(id: impl Into<String>) -> Self {
        Self::new(id, DataType::Number)
    }

    /// Creates a date column.
    pub fn date(id: impl Into<String>) -> Self {
        Self::new(id, DataType::Date)
    }

    /// Creates a boolean column.
    pub fn boolean(id: impl Into<String>) -> Self {
        Self::new(id, DataType::Boolean)
    }

    /// Sets the display label.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets whether the column can be sorted.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets whether the column can be filtered and searched.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.id)
    }
}

/// Finds a column by id.
pub fn find_column<'a>(columns: &'a [Column], id: &str) -> Result<&'a Column, QueryError> {
    columns
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| QueryError::unknown_column(id))
}
