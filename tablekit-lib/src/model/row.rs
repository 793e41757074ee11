//! Dynamic table row

use std::collections::HashMap;

use super::Value;

/// A single table row.
///
/// Rows hold cell values as a `HashMap<String, Value>` keyed by column id.
/// A field that is missing and a field holding [`Value::Null`] are treated
/// the same way by the query engine: both are absent.
///
/// # Example
///
/// ```
/// use tablekit_lib::model::Row;
///
/// let row = Row::new()
///     .set("id", 1i64)
///     .set("name", "Contoso");
///
/// assert_eq!(row.get("name").and_then(|v| v.as_str()), Some("Contoso"));
/// assert_eq!(row.key("id"), Some("1".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub(crate) fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value unless it is missing or null.
    pub fn present(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the row key stored in `key_field`.
    ///
    /// Returns `None` when the field is missing, null or renders as an empty
    /// string; such rows cannot be selected.
    pub fn key(&self, key_field: &str) -> Option<String> {
        let key = self.present(key_field)?.to_string();
        if key.is_empty() { None } else { Some(key) }
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
