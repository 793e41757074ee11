//! Row selection state.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::error::SelectionError;
use crate::model::Row;

/// Whether one or many rows can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    #[default]
    Multiple,
}

/// Borrowed view of the selection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState<'a> {
    Empty,
    HasSelection(&'a BTreeSet<String>),
}

/// The set of selected row keys.
///
/// Changes go through [`toggle`](Self::toggle), [`select_all`](Self::select_all)
/// and [`clear`](Self::clear). A change that fails leaves the selection as it
/// was.
///
/// # Example
///
/// ```
/// use tablekit_lib::error::SelectionError;
/// use tablekit_lib::query::RowSelection;
///
/// let mut selection = RowSelection::multiple().with_max_selections(2);
/// selection.toggle("a").unwrap();
/// selection.toggle("b").unwrap();
///
/// assert_eq!(
///     selection.toggle("c"),
///     Err(SelectionError::SelectionLimitExceeded { max: 2 })
/// );
/// assert_eq!(selection.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RowSelection {
    pub mode: SelectionMode,
    pub(crate) selected_keys: BTreeSet<String>,
    pub preserve_across_pages: bool,
    /// Zero means unlimited.
    pub max_selections: usize,
}

impl RowSelection {
    /// Creates an empty single-row selection.
    pub fn single() -> Self {
        Self {
            mode: SelectionMode::Single,
            ..Self::default()
        }
    }

    /// Creates an empty multi-row selection.
    pub fn multiple() -> Self {
        Self::default()
    }

    /// Sets the selection limit (zero for unlimited).
    pub fn with_max_selections(mut self, max: usize) -> Self {
        self.max_selections = max;
        self
    }

    /// Keeps the selection when the page changes.
    pub fn preserving_across_pages(mut self) -> Self {
        self.preserve_across_pages = true;
        self
    }

    /// Returns the selected keys in sorted order.
    pub fn selected_keys(&self) -> &BTreeSet<String> {
        &self.selected_keys
    }

    /// Returns the current state.
    pub fn state(&self) -> SelectionState<'_> {
        if self.selected_keys.is_empty() {
            SelectionState::Empty
        } else {
            SelectionState::HasSelection(&self.selected_keys)
        }
    }

    /// Returns `true` if the key is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_keys.contains(key)
    }

    /// Returns the number of selected keys.
    pub fn len(&self) -> usize {
        self.selected_keys.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected_keys.is_empty()
    }

    /// Toggles a row key.
    ///
    /// In single mode a new key replaces the current selection and the
    /// selected key is deselected. In multiple mode the key is removed if
    /// selected, otherwise added unless the limit is reached.
    pub fn toggle(&mut self, key: impl Into<String>) -> Result<(), SelectionError> {
        let key = key.into();
        if self.selected_keys.remove(&key) {
            log::trace!("deselected row {}", key);
            return Ok(());
        }
        match self.mode {
            SelectionMode::Single => self.selected_keys.clear(),
            SelectionMode::Multiple => {
                if self.max_selections > 0 && self.selected_keys.len() >= self.max_selections {
                    log::debug!("selection of row {} rejected: limit {} reached", key, self.max_selections);
                    return Err(SelectionError::SelectionLimitExceeded {
                        max: self.max_selections,
                    });
                }
            }
        }
        log::trace!("selected row {}", key);
        self.selected_keys.insert(key);
        Ok(())
    }

    /// Toggles the row identified by `key_field`.
    ///
    /// Rows without a key cannot be selected.
    pub fn toggle_row(&mut self, row: &Row, key_field: &str) -> Result<(), SelectionError> {
        let key = row.key(key_field).ok_or_else(|| SelectionError::MissingRowKey {
            field: key_field.to_string(),
        })?;
        self.toggle(key)
    }

    /// Selects every given key, or none of them if that would exceed the limit.
    ///
    /// Only available in multiple mode.
    pub fn select_all<I, K>(&mut self, keys: I) -> Result<(), SelectionError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        if self.mode == SelectionMode::Single {
            return Err(SelectionError::SingleModeBulkSelect);
        }
        let mut merged = self.selected_keys.clone();
        merged.extend(keys.into_iter().map(Into::into));
        if self.max_selections > 0 && merged.len() > self.max_selections {
            return Err(SelectionError::SelectionLimitExceeded {
                max: self.max_selections,
            });
        }
        self.selected_keys = merged;
        Ok(())
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.selected_keys.clear();
    }

    /// Applies the page-change rule: the selection is cleared unless it is
    /// preserved across pages.
    ///
    /// Returns `true` if keys were dropped.
    pub fn page_changed(&mut self) -> bool {
        if self.preserve_across_pages || self.selected_keys.is_empty() {
            return false;
        }
        self.selected_keys.clear();
        true
    }

    /// Returns the rows whose key is selected, in input order.
    pub fn selected_rows<'r>(&self, rows: &'r [Row], key_field: &str) -> Vec<&'r Row> {
        rows.iter()
            .filter(|row| row.key(key_field).is_some_and(|key| self.is_selected(&key)))
            .collect()
    }
}
