//! Filter conditions, global search and their evaluation against rows.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use super::scalar::Scalar;
use super::scalar::loose_compare;
use crate::error::QueryError;
use crate::model::Column;
use crate::model::Row;
use crate::model::Value;
use crate::model::ValueKind;
use crate::model::find_column;

/// Comparison operator of a [`FilterCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    #[default]
    Equals,
    NotEquals,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,
    Between,
    In,
    NotIn,
    IsEmpty,
    IsNotEmpty,
}

impl FilterOperator {
    /// Get the display label for the operator
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::Contains => "contains",
            Self::NotContains => "does not contain",
            Self::StartsWith => "starts with",
            Self::EndsWith => "ends with",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Between => "is between",
            Self::In => "is in list",
            Self::NotIn => "is not in list",
            Self::IsEmpty => "is empty",
            Self::IsNotEmpty => "is not empty",
        }
    }

    /// Returns true if this operator requires a value
    pub fn requires_value(&self) -> bool {
        !matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }

    /// Returns true if this operator requires two values (for BETWEEN)
    pub fn requires_two_values(&self) -> bool {
        matches!(self, Self::Between)
    }

    /// Returns true if this operator compares by order
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::LessThan | Self::GreaterEqual | Self::LessEqual | Self::Between
        )
    }
}

/// A single filter condition on one column.
///
/// # Example
///
/// ```
/// use tablekit_lib::query::FilterCondition;
///
/// let adults = FilterCondition::ge("age", 18);
/// let priced = FilterCondition::between("price", 10, 20);
/// let tagged = FilterCondition::in_list("status", ["open", "pending"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    pub column_id: String,
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: Value,
    /// Upper bound, only used by `between`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_to: Option<Value>,
}

impl FilterCondition {
    /// Creates a condition with a single operand.
    pub fn new(column_id: impl Into<String>, operator: FilterOperator, value: impl Into<Value>) -> Self {
        Self {
            column_id: column_id.into(),
            operator,
            value: value.into(),
            value_to: None,
        }
    }

    /// Creates an equality condition.
    pub fn eq(column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column_id, FilterOperator::Equals, value)
    }

    /// Creates a not-equal condition.
    pub fn ne(column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column_id, FilterOperator::NotEquals, value)
    }

    /// Creates a case-insensitive substring condition.
    pub fn contains(column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column_id, FilterOperator::Contains, value)
    }

    /// Creates a negated case-insensitive substring condition.
    pub fn not_contains(column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column_id, FilterOperator::NotContains, value)
    }

    /// Creates a case-insensitive prefix condition.
    pub fn starts_with(column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column_id, FilterOperator::StartsWith, value)
    }

    /// Creates a case-insensitive suffix condition.
    pub fn ends_with(column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column_id, FilterOperator::EndsWith, value)
    }

    /// Creates a greater-than condition.
    pub fn gt(column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column_id, FilterOperator::GreaterThan, value)
    }

    /// Creates a greater-than-or-equal condition.
    pub fn ge(column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column_id, FilterOperator::GreaterEqual, value)
    }

    /// Creates a less-than condition.
    pub fn lt(column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column_id, FilterOperator::LessThan, value)
    }

    /// Creates a less-than-or-equal condition.
    pub fn le(column_id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column_id, FilterOperator::LessEqual, value)
    }

    /// Creates an inclusive range condition: `from <= field <= to`.
    pub fn between(column_id: impl Into<String>, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        Self {
            value_to: Some(to.into()),
            ..Self::new(column_id, FilterOperator::Between, from)
        }
    }

    /// Creates a set membership condition.
    pub fn in_list<V: Into<Value>>(column_id: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self::new(column_id, FilterOperator::In, Value::List(values))
    }

    /// Creates a negated set membership condition.
    pub fn not_in<V: Into<Value>>(column_id: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self::new(column_id, FilterOperator::NotIn, Value::List(values))
    }

    /// Creates an is-empty condition (null, missing or empty string).
    pub fn is_empty(column_id: impl Into<String>) -> Self {
        Self::new(column_id, FilterOperator::IsEmpty, Value::Null)
    }

    /// Creates an is-not-empty condition.
    pub fn is_not_empty(column_id: impl Into<String>) -> Self {
        Self::new(column_id, FilterOperator::IsNotEmpty, Value::Null)
    }
}

/// How multiple conditions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOperator {
    /// Every condition must pass.
    #[default]
    And,
    /// At least one condition must pass.
    Or,
}

/// Free-text search across every filterable column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalSearch {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Input debounce hint for the caller. The engine itself never waits.
    pub debounce_ms: u64,
}

impl Default for GlobalSearch {
    fn default() -> Self {
        Self {
            enabled: true,
            query: None,
            debounce_ms: 300,
        }
    }
}

impl GlobalSearch {
    /// Returns the lowercased, trimmed query if search is active.
    pub(crate) fn needle(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let query = self.query.as_deref()?.trim();
        if query.is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        }
    }
}

/// The complete filter state of a table: conditions plus global search.
///
/// # Example
///
/// ```
/// use tablekit_lib::query::{FilterCondition, TableFilter};
///
/// let filter = TableFilter::any([
///     FilterCondition::eq("status", "open"),
///     FilterCondition::gt("priority", 3),
/// ])
/// .with_search("acme");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableFilter {
    pub conditions: Vec<FilterCondition>,
    pub logical_operator: LogicalOperator,
    pub global_search: GlobalSearch,
}

impl TableFilter {
    /// Creates an empty filter that admits every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter where every condition must pass.
    pub fn all(conditions: impl IntoIterator<Item = FilterCondition>) -> Self {
        Self {
            conditions: conditions.into_iter().collect(),
            logical_operator: LogicalOperator::And,
            ..Self::default()
        }
    }

    /// Creates a filter where at least one condition must pass.
    pub fn any(conditions: impl IntoIterator<Item = FilterCondition>) -> Self {
        Self {
            conditions: conditions.into_iter().collect(),
            logical_operator: LogicalOperator::Or,
            ..Self::default()
        }
    }

    /// Adds a condition.
    pub fn with_condition(mut self, condition: FilterCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Checks one condition against the columns without evaluating it.
    pub fn check_condition(condition: &FilterCondition, columns: &[Column]) -> Result<(), QueryError> {
        Predicate::compile(condition, columns).map(|_| ())
    }

    /// Sets the global search query.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.global_search.query = Some(query.into());
        self
    }

    /// Returns `true` if this filter admits every row.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.global_search.needle().is_none()
    }

    /// Resolves and type-checks every condition against the columns.
    pub(crate) fn compile<'a>(&'a self, columns: &'a [Column]) -> Result<CompiledFilter<'a>, QueryError> {
        let predicates = self
            .conditions
            .iter()
            .map(|c| Predicate::compile(c, columns))
            .collect::<Result<Vec<_>, _>>()?;
        let search = self
            .global_search
            .needle()
            .map(|needle| (needle, columns.iter().filter(|c| c.filterable).collect()));
        Ok(CompiledFilter {
            predicates,
            logical_operator: self.logical_operator,
            search,
        })
    }
}

/// A filter whose conditions have been checked and whose operands are coerced.
pub(crate) struct CompiledFilter<'a> {
    predicates: Vec<Predicate<'a>>,
    logical_operator: LogicalOperator,
    search: Option<(String, Vec<&'a Column>)>,
}

impl CompiledFilter<'_> {
    /// Returns `true` if the row passes the conditions and the global search.
    pub(crate) fn matches(&self, row: &Row) -> bool {
        let conditions = match self.logical_operator {
            _ if self.predicates.is_empty() => true,
            LogicalOperator::And => self.predicates.iter().all(|p| p.matches(row)),
            LogicalOperator::Or => self.predicates.iter().any(|p| p.matches(row)),
        };
        conditions && self.matches_search(row)
    }

    fn matches_search(&self, row: &Row) -> bool {
        let Some((needle, columns)) = &self.search else {
            return true;
        };
        columns.iter().any(|column| {
            row.present(&column.id)
                .is_some_and(|v| v.to_string().to_lowercase().contains(needle.as_str()))
        })
    }
}

/// Right-hand side of an ordering comparison.
enum Comparand {
    /// Already coerced to the column's kind.
    Typed(Scalar),
    /// Compared numerically or chronologically per row (text columns).
    Loose(Value),
}

impl Comparand {
    fn compile(condition: &FilterCondition, column: &Column, value: &Value) -> Result<Self, QueryError> {
        match column.data_type.kind() {
            ValueKind::Text => match value {
                Value::List(_) | Value::Json(_) => Err(invalid(condition, column, "got a structured value")),
                _ => Ok(Comparand::Loose(value.clone())),
            },
            kind => coerce_operand(condition, column, value, kind).map(Comparand::Typed),
        }
    }

    /// Orders the field relative to this operand.
    fn order(&self, field: &Value, kind: ValueKind) -> Option<Ordering> {
        match self {
            Comparand::Typed(operand) => Scalar::coerce(field, kind)?.compare(operand),
            Comparand::Loose(operand) => loose_compare(field, operand),
        }
    }
}

enum Operand {
    None,
    Exact(Scalar),
    Needle(String),
    Ordered(Comparand),
    Range(Comparand, Comparand),
    Set(Vec<Scalar>),
}

/// A condition bound to its column with a pre-coerced operand.
struct Predicate<'a> {
    column: &'a Column,
    operator: FilterOperator,
    operand: Operand,
}

impl<'a> Predicate<'a> {
    fn compile(condition: &FilterCondition, columns: &'a [Column]) -> Result<Self, QueryError> {
        let column = find_column(columns, &condition.column_id)?;
        if !column.filterable {
            return Err(QueryError::ColumnNotFilterable {
                column: column.id.clone(),
            });
        }

        let kind = column.data_type.kind();
        let value = &condition.value;
        let operator = condition.operator;
        if operator.requires_value() && value.is_null() {
            return Err(invalid(condition, column, "got no value"));
        }

        let operand = match operator {
            FilterOperator::IsEmpty | FilterOperator::IsNotEmpty => Operand::None,
            FilterOperator::Equals | FilterOperator::NotEquals => {
                Operand::Exact(coerce_operand(condition, column, value, kind)?)
            }
            FilterOperator::Contains
            | FilterOperator::NotContains
            | FilterOperator::StartsWith
            | FilterOperator::EndsWith => match value {
                Value::List(_) | Value::Json(_) => {
                    return Err(invalid(condition, column, "got a structured value"));
                }
                _ => Operand::Needle(value.to_string().to_lowercase()),
            },
            FilterOperator::GreaterThan
            | FilterOperator::LessThan
            | FilterOperator::GreaterEqual
            | FilterOperator::LessEqual => Operand::Ordered(Comparand::compile(condition, column, value)?),
            FilterOperator::Between => {
                let to = match &condition.value_to {
                    Some(to) if !to.is_null() => to,
                    _ => return Err(invalid(condition, column, "between requires valueTo")),
                };
                Operand::Range(
                    Comparand::compile(condition, column, value)?,
                    Comparand::compile(condition, column, to)?,
                )
            }
            FilterOperator::In | FilterOperator::NotIn => {
                let Some(items) = value.as_list() else {
                    return Err(invalid(condition, column, "expected an array of values"));
                };
                let set = items
                    .iter()
                    .map(|item| coerce_operand(condition, column, item, kind))
                    .collect::<Result<Vec<_>, _>>()?;
                Operand::Set(set)
            }
        };

        Ok(Self {
            column,
            operator,
            operand,
        })
    }

    fn matches(&self, row: &Row) -> bool {
        let field = row.present(&self.column.id);
        let Some(field) = field else {
            // Absent fields only satisfy `is_empty`.
            return self.operator == FilterOperator::IsEmpty;
        };

        let kind = self.column.data_type.kind();
        match (&self.operator, &self.operand) {
            (FilterOperator::IsEmpty, _) => field.is_empty(),
            (FilterOperator::IsNotEmpty, _) => !field.is_empty(),
            (FilterOperator::Equals, Operand::Exact(expected)) => {
                Scalar::coerce(field, kind).as_ref() == Some(expected)
            }
            (FilterOperator::NotEquals, Operand::Exact(expected)) => {
                Scalar::coerce(field, kind).is_some_and(|v| &v != expected)
            }
            (FilterOperator::Contains, Operand::Needle(needle)) => text(field).contains(needle.as_str()),
            (FilterOperator::NotContains, Operand::Needle(needle)) => !text(field).contains(needle.as_str()),
            (FilterOperator::StartsWith, Operand::Needle(needle)) => text(field).starts_with(needle.as_str()),
            (FilterOperator::EndsWith, Operand::Needle(needle)) => text(field).ends_with(needle.as_str()),
            (FilterOperator::GreaterThan, Operand::Ordered(c)) => c.order(field, kind) == Some(Ordering::Greater),
            (FilterOperator::LessThan, Operand::Ordered(c)) => c.order(field, kind) == Some(Ordering::Less),
            (FilterOperator::GreaterEqual, Operand::Ordered(c)) => {
                matches!(c.order(field, kind), Some(Ordering::Greater | Ordering::Equal))
            }
            (FilterOperator::LessEqual, Operand::Ordered(c)) => {
                matches!(c.order(field, kind), Some(Ordering::Less | Ordering::Equal))
            }
            (FilterOperator::Between, Operand::Range(from, to)) => {
                matches!(from.order(field, kind), Some(Ordering::Greater | Ordering::Equal))
                    && matches!(to.order(field, kind), Some(Ordering::Less | Ordering::Equal))
            }
            (FilterOperator::In, Operand::Set(set)) => {
                Scalar::coerce(field, kind).is_some_and(|v| set.contains(&v))
            }
            (FilterOperator::NotIn, Operand::Set(set)) => {
                Scalar::coerce(field, kind).is_some_and(|v| !set.contains(&v))
            }
            // compile() pairs every operator with its operand shape
            _ => false,
        }
    }
}

fn text(field: &Value) -> String {
    field.to_string().to_lowercase()
}

fn coerce_operand(
    condition: &FilterCondition,
    column: &Column,
    value: &Value,
    kind: ValueKind,
) -> Result<Scalar, QueryError> {
    Scalar::coerce(value, kind)
        .ok_or_else(|| invalid(condition, column, format!("got {} {}", value.type_name(), value)))
}

fn invalid(condition: &FilterCondition, column: &Column, message: impl Into<String>) -> QueryError {
    QueryError::invalid_value(&condition.column_id, column.data_type.name(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataType;

    fn columns() -> Vec<Column> {
        vec![
            Column::string("name"),
            Column::number("age"),
            Column::new("price", DataType::Currency),
            Column::date("joined"),
            Column::boolean("active"),
            Column::string("secret").filterable(false),
        ]
    }

    fn row() -> Row {
        Row::new()
            .set("name", "Ada Lovelace")
            .set("age", 36i64)
            .set("price", 19.5)
            .set("joined", "2024-03-01")
            .set("active", true)
            .set("secret", "hidden")
    }

    fn check(condition: FilterCondition) -> bool {
        let filter = TableFilter::all([condition]);
        let columns = columns();
        filter.compile(&columns).unwrap().matches(&row())
    }

    #[test]
    fn test_equality() {
        assert!(check(FilterCondition::eq("age", 36)));
        assert!(check(FilterCondition::eq("age", "36")));
        assert!(check(FilterCondition::eq("price", 19.50)));
        assert!(check(FilterCondition::ne("name", "ada lovelace")));
        assert!(check(FilterCondition::eq("active", true)));
        assert!(check(FilterCondition::eq("joined", "2024-03-01T00:00:00Z")));
    }

    #[test]
    fn test_text_operators_ignore_case() {
        assert!(check(FilterCondition::contains("name", "LOVE")));
        assert!(!check(FilterCondition::not_contains("name", "love")));
        assert!(check(FilterCondition::starts_with("name", "ada")));
        assert!(check(FilterCondition::ends_with("name", "LACE")));
        assert!(check(FilterCondition::contains("age", 3)));
    }

    #[test]
    fn test_ordering_operators() {
        assert!(check(FilterCondition::gt("age", 30)));
        assert!(!check(FilterCondition::lt("age", 36)));
        assert!(check(FilterCondition::le("age", 36)));
        assert!(check(FilterCondition::ge("joined", "2024-01-01")));
        assert!(check(FilterCondition::between("price", 10, 20)));
        assert!(!check(FilterCondition::between("price", 20, 30)));
    }

    #[test]
    fn test_ordering_on_text_column_excludes_mismatch() {
        // "Ada Lovelace" is neither a number nor a date
        assert!(!check(FilterCondition::gt("name", 5)));
        assert!(!check(FilterCondition::lt("name", 5)));
    }

    #[test]
    fn test_set_membership() {
        assert!(check(FilterCondition::in_list("age", [20, 36])));
        assert!(!check(FilterCondition::not_in("age", [20, 36])));
        assert!(check(FilterCondition::not_in("name", ["Grace Hopper"])));
    }

    #[test]
    fn test_missing_field_only_passes_is_empty() {
        let columns = vec![Column::string("nickname")];
        let row = Row::new().set("id", 1i64);
        let passes = |condition: FilterCondition| {
            TableFilter::all([condition])
                .compile(&columns)
                .unwrap()
                .matches(&row)
        };
        assert!(passes(FilterCondition::is_empty("nickname")));
        assert!(!passes(FilterCondition::is_not_empty("nickname")));
        assert!(!passes(FilterCondition::ne("nickname", "x")));
        assert!(!passes(FilterCondition::not_contains("nickname", "x")));
        assert!(!passes(FilterCondition::not_in("nickname", ["x"])));
    }

    #[test]
    fn test_uncoercible_field_fails_negated_operators() {
        let columns = vec![Column::number("age")];
        let row = Row::new().set("age", "unknown");
        let passes = |condition: FilterCondition| {
            TableFilter::all([condition])
                .compile(&columns)
                .unwrap()
                .matches(&row)
        };
        assert!(!passes(FilterCondition::ne("age", 36)));
        assert!(!passes(FilterCondition::not_in("age", [36])));
        assert!(!passes(FilterCondition::eq("age", 36)));
        assert!(passes(FilterCondition::is_not_empty("age")));
    }

    #[test]
    fn test_numbers_beyond_decimal_range() {
        let columns = vec![Column::number("amount")];
        let passes = |amount: f64, condition: FilterCondition| {
            TableFilter::all([condition])
                .compile(&columns)
                .unwrap()
                .matches(&Row::new().set("amount", amount))
        };
        assert!(passes(1e30, FilterCondition::gt("amount", 10)));
        assert!(passes(1e30, FilterCondition::gt("amount", 1e29)));
        assert!(!passes(1e28, FilterCondition::gt("amount", 1e29)));
        assert!(passes(1e30, FilterCondition::eq("amount", 1e30)));
        assert!(!passes(1e-30, FilterCondition::eq("amount", 0)));
        assert!(passes(1e-30, FilterCondition::gt("amount", 0)));
        assert!(passes(1e-30, FilterCondition::lt("amount", 1e-29)));
    }

    #[test]
    fn test_empty_string_is_empty() {
        let columns = vec![Column::string("nickname")];
        let row = Row::new().set("nickname", "");
        let filter = TableFilter::all([FilterCondition::is_empty("nickname")]);
        assert!(filter.compile(&columns).unwrap().matches(&row));
    }

    #[test]
    fn test_invalid_values() {
        let columns = columns();
        let compile = |condition: FilterCondition| TableFilter::all([condition]).compile(&columns).err();

        assert!(matches!(
            compile(FilterCondition::gt("age", "old")),
            Some(QueryError::InvalidFilterValue { .. })
        ));
        assert!(matches!(
            compile(FilterCondition::eq("joined", "someday")),
            Some(QueryError::InvalidFilterValue { .. })
        ));
        assert!(matches!(
            compile(FilterCondition::new("price", FilterOperator::Between, 10)),
            Some(QueryError::InvalidFilterValue { .. })
        ));
        assert!(matches!(
            compile(FilterCondition::new("age", FilterOperator::In, 10)),
            Some(QueryError::InvalidFilterValue { .. })
        ));
        assert!(matches!(
            compile(FilterCondition::eq("age", Value::Null)),
            Some(QueryError::InvalidFilterValue { .. })
        ));
        assert_eq!(
            compile(FilterCondition::eq("salary", 1)),
            Some(QueryError::unknown_column("salary"))
        );
        assert_eq!(
            compile(FilterCondition::eq("secret", "x")),
            Some(QueryError::ColumnNotFilterable {
                column: "secret".to_string()
            })
        );
    }

    #[test]
    fn test_logical_or() {
        let columns = columns();
        let filter = TableFilter::any([
            FilterCondition::eq("age", 1),
            FilterCondition::contains("name", "ada"),
        ]);
        assert!(filter.compile(&columns).unwrap().matches(&row()));

        let filter = TableFilter::all([
            FilterCondition::eq("age", 1),
            FilterCondition::contains("name", "ada"),
        ]);
        assert!(!filter.compile(&columns).unwrap().matches(&row()));
    }

    #[test]
    fn test_global_search_skips_unfilterable_columns() {
        let columns = columns();
        let compiled = |query: &str| TableFilter::new().with_search(query);

        assert!(compiled("LOVELACE").compile(&columns).unwrap().matches(&row()));
        assert!(compiled("  36 ").compile(&columns).unwrap().matches(&row()));
        assert!(!compiled("hidden").compile(&columns).unwrap().matches(&row()));

        let mut disabled = compiled("hidden-nowhere");
        disabled.global_search.enabled = false;
        assert!(disabled.compile(&columns).unwrap().matches(&row()));
    }

    #[test]
    fn test_deserialize_condition() {
        let condition: FilterCondition = serde_json::from_value(serde_json::json!({
            "columnId": "price",
            "operator": "between",
            "value": 10,
            "valueTo": 20
        }))
        .unwrap();
        assert_eq!(condition, FilterCondition::between("price", 10, 20));
    }
}
