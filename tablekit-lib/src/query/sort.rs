//! Sort configuration and stable multi-column sorting.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use super::scalar::Scalar;
use crate::error::QueryError;
use crate::model::Column;
use crate::model::Row;
use crate::model::find_column;

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Applies this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// One sort key: a column and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    pub column_id: String,
    #[serde(default)]
    pub direction: Direction,
}

impl SortConfig {
    /// Creates an ascending sort key.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort key.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Desc,
        }
    }
}

/// The sort state of a table.
///
/// Entries in `active_sort` are in precedence order: the first one is the
/// primary key, later ones break ties. When `active_sort` is empty the
/// `default_sort` applies.
///
/// # Example
///
/// ```
/// use tablekit_lib::query::{SortConfig, TableSort};
///
/// let mut sort = TableSort::multi(2).with_default([SortConfig::asc("name")]);
/// sort.toggle("revenue", false);
/// sort.toggle("name", true);
///
/// assert_eq!(
///     sort.effective(),
///     &[SortConfig::asc("revenue"), SortConfig::asc("name")]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableSort {
    pub multi_sort: bool,
    pub max_sort_columns: usize,
    pub active_sort: Vec<SortConfig>,
    pub default_sort: Vec<SortConfig>,
}

impl Default for TableSort {
    fn default() -> Self {
        Self {
            multi_sort: false,
            max_sort_columns: 3,
            active_sort: Vec::new(),
            default_sort: Vec::new(),
        }
    }
}

impl TableSort {
    /// Creates a single-column sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a multi-column sort holding at most `max_sort_columns` keys.
    pub fn multi(max_sort_columns: usize) -> Self {
        Self {
            multi_sort: true,
            max_sort_columns,
            ..Self::default()
        }
    }

    /// Sets the sort used while no column is actively sorted.
    pub fn with_default(mut self, keys: impl IntoIterator<Item = SortConfig>) -> Self {
        self.default_sort = keys.into_iter().collect();
        self
    }

    /// Sets the active sort keys.
    pub fn with_active(mut self, keys: impl IntoIterator<Item = SortConfig>) -> Self {
        self.active_sort = keys.into_iter().collect();
        self
    }

    /// Returns the maximum number of active keys.
    pub fn limit(&self) -> usize {
        if self.multi_sort { self.max_sort_columns } else { 1 }
    }

    /// Returns the keys that apply: the active sort, or the default sort when
    /// nothing is active.
    pub fn effective(&self) -> &[SortConfig] {
        if self.active_sort.is_empty() {
            &self.default_sort
        } else {
            &self.active_sort
        }
    }

    /// Returns the active direction of a column, if it is sorted.
    pub fn direction_of(&self, column_id: &str) -> Option<Direction> {
        self.active_sort
            .iter()
            .find(|s| s.column_id == column_id)
            .map(|s| s.direction)
    }

    /// Clears the active sort, falling back to the default sort.
    pub fn clear(&mut self) {
        self.active_sort.clear();
    }

    /// Applies a header click on a column.
    ///
    /// Each click cycles the column through ascending, descending and
    /// unsorted. A plain click (or any click in single-sort mode) makes the
    /// column the only sort key. An `additive` click in multi-sort mode keeps
    /// the other keys and appends the column as the lowest-precedence key; if
    /// the sort is full, the current lowest-precedence key is dropped first.
    ///
    /// A sort limited to zero columns ignores every click.
    pub fn toggle(&mut self, column_id: impl Into<String>, additive: bool) {
        if self.limit() == 0 {
            return;
        }
        let column_id = column_id.into();
        let position = self.active_sort.iter().position(|s| s.column_id == column_id);

        if !(additive && self.multi_sort) {
            let next = match position.map(|i| self.active_sort[i].direction) {
                None => Some(Direction::Asc),
                Some(Direction::Asc) => Some(Direction::Desc),
                Some(Direction::Desc) => None,
            };
            self.active_sort.clear();
            if let Some(direction) = next {
                self.active_sort.push(SortConfig { column_id, direction });
            }
            return;
        }

        match position {
            Some(i) if self.active_sort[i].direction == Direction::Asc => {
                self.active_sort[i].direction = Direction::Desc;
            }
            Some(i) => {
                self.active_sort.remove(i);
            }
            None => {
                if self.active_sort.len() >= self.limit() {
                    self.active_sort.pop();
                }
                self.active_sort.push(SortConfig::asc(column_id));
            }
        }
    }

    /// Resolves the effective keys against the columns.
    pub(crate) fn compile<'a>(&self, columns: &'a [Column]) -> Result<Vec<SortKey<'a>>, QueryError> {
        let limit = self.limit();
        if self.active_sort.len() > limit {
            return Err(QueryError::TooManySortColumns {
                count: self.active_sort.len(),
                max: limit,
            });
        }
        self.effective()
            .iter()
            .map(|key| {
                Ok(SortKey {
                    column: sortable_column(&key.column_id, columns)?,
                    direction: key.direction,
                })
            })
            .collect()
    }
}

/// Finds a column and checks that it can be sorted.
pub(crate) fn sortable_column<'a>(column_id: &str, columns: &'a [Column]) -> Result<&'a Column, QueryError> {
    let column = find_column(columns, column_id)?;
    if !column.sortable {
        return Err(QueryError::ColumnNotSortable {
            column: column.id.clone(),
        });
    }
    Ok(column)
}

/// A sort key resolved to its column.
pub(crate) struct SortKey<'a> {
    column: &'a Column,
    direction: Direction,
}

/// Sorts rows by the given keys, keeping the input order of equal rows.
///
/// Rows whose value for a key is absent or cannot be coerced to the column's
/// data type sort after every other row, in either direction.
pub(crate) fn sort_rows<'r>(rows: Vec<&'r Row>, keys: &[SortKey<'_>]) -> Vec<&'r Row> {
    if keys.is_empty() {
        return rows;
    }

    let mut decorated: Vec<(Vec<Option<Scalar>>, &'r Row)> = rows
        .into_iter()
        .map(|row| {
            let values = keys
                .iter()
                .map(|key| {
                    row.present(&key.column.id)
                        .and_then(|v| Scalar::coerce(v, key.column.data_type.kind()))
                })
                .collect();
            (values, row)
        })
        .collect();

    // slice::sort_by is stable
    decorated.sort_by(|(a, _), (b, _)| compare_keys(a, b, keys));
    decorated.into_iter().map(|(_, row)| row).collect()
}

fn compare_keys(a: &[Option<Scalar>], b: &[Option<Scalar>], keys: &[SortKey<'_>]) -> Ordering {
    for ((a, b), key) in a.iter().zip(b).zip(keys) {
        let ordering = match (a, b) {
            (Some(a), Some(b)) => key.direction.apply(a.compare(b).unwrap_or(Ordering::Equal)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataType;

    fn columns() -> Vec<Column> {
        vec![
            Column::number("id"),
            Column::string("name"),
            Column::number("age"),
            Column::date("joined"),
            Column::boolean("active"),
            Column::new("status", DataType::Badge).sortable(false),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::new().set("id", 1i64).set("name", "b").set("age", 30i64).set("joined", "2024-02-01").set("active", true),
            Row::new().set("id", 2i64).set("name", "a").set("age", 9i64).set("joined", "2023-12-31").set("active", false),
            Row::new().set("id", 3i64).set("name", "c").set("age", 30i64).set("joined", "2024-01-15"),
            Row::new().set("id", 4i64).set("name", "a").set("age", 100i64).set("joined", "2024-03-01").set("active", true),
        ]
    }

    fn sorted_ids(sort: &TableSort) -> Vec<i64> {
        let columns = columns();
        let rows = rows();
        let keys = sort.compile(&columns).unwrap();
        sort_rows(rows.iter().collect(), &keys)
            .into_iter()
            .map(|r| r.key("id").unwrap().parse::<i64>().unwrap())
            .collect()
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        let sort = TableSort::new().with_active([SortConfig::asc("age")]);
        assert_eq!(sorted_ids(&sort), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_stable_on_equal_keys() {
        let sort = TableSort::new().with_active([SortConfig::desc("age")]);
        // ids 1 and 3 share age 30 and keep their input order
        assert_eq!(sorted_ids(&sort), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_multi_key_precedence() {
        let sort = TableSort::multi(3).with_active([SortConfig::asc("name"), SortConfig::desc("age")]);
        assert_eq!(sorted_ids(&sort), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_dates_and_booleans() {
        let sort = TableSort::new().with_active([SortConfig::asc("joined")]);
        assert_eq!(sorted_ids(&sort), vec![2, 3, 1, 4]);

        // row 3 has no value and stays last in both directions
        let sort = TableSort::new().with_active([SortConfig::asc("active")]);
        assert_eq!(sorted_ids(&sort), vec![2, 1, 4, 3]);
        let sort = TableSort::new().with_active([SortConfig::desc("active")]);
        assert_eq!(sorted_ids(&sort), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_numbers_beyond_decimal_range() {
        let columns = vec![Column::number("id"), Column::number("amount")];
        let rows = vec![
            Row::new().set("id", 1i64).set("amount", 5i64),
            Row::new().set("id", 2i64).set("amount", 1e30),
            Row::new().set("id", 3i64).set("amount", 50i64),
            Row::new().set("id", 4i64).set("amount", 1e-30),
            Row::new().set("id", 5i64).set("amount", 0i64),
        ];
        let ids = |sort: TableSort| -> Vec<i64> {
            let keys = sort.compile(&columns).unwrap();
            sort_rows(rows.iter().collect(), &keys)
                .into_iter()
                .map(|r| r.key("id").unwrap().parse::<i64>().unwrap())
                .collect()
        };
        assert_eq!(ids(TableSort::new().with_active([SortConfig::desc("amount")])), vec![2, 3, 1, 4, 5]);
        assert_eq!(ids(TableSort::new().with_active([SortConfig::asc("amount")])), vec![5, 4, 1, 3, 2]);
    }

    #[test]
    fn test_default_sort_when_inactive() {
        let sort = TableSort::new().with_default([SortConfig::desc("id")]);
        assert_eq!(sorted_ids(&sort), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_compile_errors() {
        let columns = columns();
        let sort = TableSort::new().with_active([SortConfig::asc("salary")]);
        assert_eq!(
            sort.compile(&columns).err(),
            Some(QueryError::unknown_column("salary"))
        );

        let sort = TableSort::new().with_active([SortConfig::asc("status")]);
        assert!(matches!(
            sort.compile(&columns).err(),
            Some(QueryError::ColumnNotSortable { .. })
        ));

        let sort = TableSort::new().with_active([SortConfig::asc("id"), SortConfig::asc("age")]);
        assert_eq!(
            sort.compile(&columns).err(),
            Some(QueryError::TooManySortColumns { count: 2, max: 1 })
        );
    }

    #[test]
    fn test_toggle_single_cycles() {
        let mut sort = TableSort::new();
        sort.toggle("name", false);
        assert_eq!(sort.direction_of("name"), Some(Direction::Asc));
        sort.toggle("name", true);
        assert_eq!(sort.direction_of("name"), Some(Direction::Desc));
        sort.toggle("age", true);
        assert_eq!(sort.active_sort, vec![SortConfig::asc("age")]);
        sort.toggle("age", false);
        sort.toggle("age", false);
        assert!(sort.active_sort.is_empty());
    }

    #[test]
    fn test_toggle_multi_evicts_lowest_precedence() {
        let mut sort = TableSort::multi(2);
        sort.toggle("name", true);
        sort.toggle("age", true);
        sort.toggle("joined", true);
        assert_eq!(
            sort.active_sort,
            vec![SortConfig::asc("name"), SortConfig::asc("joined")]
        );

        sort.toggle("joined", true);
        assert_eq!(sort.direction_of("joined"), Some(Direction::Desc));
        sort.toggle("joined", true);
        assert_eq!(sort.active_sort, vec![SortConfig::asc("name")]);

        sort.toggle("age", false);
        assert_eq!(sort.active_sort, vec![SortConfig::asc("age")]);
    }

    #[test]
    fn test_toggle_with_zero_limit_is_ignored() {
        let mut sort = TableSort::multi(0);
        sort.toggle("name", true);
        sort.toggle("age", false);
        assert!(sort.active_sort.is_empty());
        assert!(sort.compile(&columns()).is_ok());
    }
}
