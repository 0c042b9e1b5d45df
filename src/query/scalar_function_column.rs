use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::query::{AggregationColumn, Column, InvalidQueryError, ScalarFunction, SimpleColumn};
use crate::table::{TableSchema, ValueType};

/// A named function applied to an ordered list of sub-expressions.
/// Sub-expressions may themselves be aggregations or nested function
/// applications; argument order is significant both for evaluation and for
/// the identifier. Immutable; the function descriptor is shared read-only.
#[derive(Clone)]
pub struct ScalarFunctionColumn {
    columns: Vec<Column>,
    function: Arc<dyn ScalarFunction>,
}

impl ScalarFunctionColumn {
    /// Separates the function name from its arguments inside an identifier.
    /// Reserved: must not appear in a raw schema column identifier.
    pub const FUNCTION_SEPARATOR: &'static str = "_";
    /// Separates argument identifiers from each other. Reserved like
    /// `FUNCTION_SEPARATOR`.
    pub const ARGUMENT_SEPARATOR: &'static str = ",";

    pub fn new(columns: Vec<Column>, function: Arc<dyn ScalarFunction>) -> Self {
        Self { columns, function }
    }

    /// `name_child1,child2,...` over the child identifiers, in argument
    /// order. Stable for a given expression; used as a schema lookup and
    /// cache key.
    pub fn id(&self) -> String {
        let column_ids: Vec<String> = self.columns.iter().map(|c| c.id()).collect();
        format!(
            "{}{}{}",
            self.function.name(),
            Self::FUNCTION_SEPARATOR,
            column_ids.join(Self::ARGUMENT_SEPARATOR)
        )
    }

    pub fn function(&self) -> &Arc<dyn ScalarFunction> {
        &self.function
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn all_simple_columns(&self) -> Vec<&SimpleColumn> {
        self.columns.iter().flat_map(|c| c.all_simple_columns()).collect()
    }

    pub fn all_simple_column_ids(&self) -> Vec<String> {
        self.columns.iter().flat_map(|c| c.all_simple_column_ids()).collect()
    }

    pub fn all_aggregation_columns(&self) -> Vec<&AggregationColumn> {
        self.columns.iter().flat_map(|c| c.all_aggregation_columns()).collect()
    }

    /// Function columns found by recursing into the children: each function
    /// child followed by its own descendants, in argument order. The node
    /// never reports itself; a caller holding the root adds it when the root
    /// itself is wanted.
    pub fn all_scalar_function_columns(&self) -> Vec<&ScalarFunctionColumn> {
        let mut found = Vec::new();
        for column in &self.columns {
            if let Column::ScalarFunction(child) = column {
                found.push(child);
            }
            found.extend(column.all_scalar_function_columns());
        }
        found
    }

    /// Validates every child in order (first failure wins), then hands the
    /// ordered child types to the function descriptor's parameter rule.
    pub fn validate(&self, table: &dyn TableSchema) -> Result<(), InvalidQueryError> {
        let mut types = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            column.validate(table)?;
            types.push(column.value_type(table)?);
        }
        self.function
            .validate_parameters(&types)
            .map_err(|kind| InvalidQueryError::new(kind, table.locale_for_user_messages().clone()))
    }

    /// If the table already materializes a column under this expression's
    /// identifier, its declared type is the answer. Otherwise every child's
    /// value type is collected, in argument order, and the function
    /// descriptor's return-type rule decides.
    pub fn value_type(&self, table: &dyn TableSchema) -> Result<ValueType, InvalidQueryError> {
        let id = self.id();
        if let Some(description) = table.column_description(&id) {
            trace!(column = %id, "resolved value type from materialized column");
            return Ok(description.value_type);
        }
        let mut types = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            types.push(column.value_type(table)?);
        }
        Ok(self.function.return_type(&types))
    }

    pub fn to_query_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScalarFunctionColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.columns.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "{}{}{}",
            self.function.name(),
            Self::FUNCTION_SEPARATOR,
            args.join(Self::ARGUMENT_SEPARATOR)
        )
    }
}

impl fmt::Debug for ScalarFunctionColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarFunctionColumn({})", self)
    }
}

/// Two function columns are equal when they apply the same-named function to
/// equal arguments in the same order.
impl PartialEq for ScalarFunctionColumn {
    fn eq(&self, other: &Self) -> bool {
        self.function.name() == other.function.name() && self.columns == other.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::scalar_functions::{UpperImpl, YearImpl};
    use crate::query::{AggregationType, InvalidQueryKind};
    use crate::table::{ColumnDescription, DataTable};

    fn table() -> DataTable {
        let mut table = DataTable::new();
        table
            .add_column(ColumnDescription::new("age", ValueType::Number))
            .add_column(ColumnDescription::new("name", ValueType::Text));
        table
    }

    fn year_of(column_id: &str) -> ScalarFunctionColumn {
        ScalarFunctionColumn::new(
            vec![Column::Simple(SimpleColumn::new(column_id))],
            Arc::new(YearImpl),
        )
    }

    /// Returns the type of its last argument; accepts anything. Used to pin
    /// that every child type reaches the return-type rule, in order.
    struct LastArgImpl;
    impl ScalarFunction for LastArgImpl {
        fn name(&self) -> &'static str { "lastarg" }
        fn validate_parameters(&self, _types: &[ValueType]) -> Result<(), InvalidQueryKind> {
            Ok(())
        }
        fn return_type(&self, types: &[ValueType]) -> ValueType {
            types.last().copied().unwrap_or(ValueType::Number)
        }
    }

    #[test]
    fn test_id_single_argument() {
        assert_eq!(year_of("age").id(), "year_age");
    }

    #[test]
    fn test_id_joins_arguments_in_order() {
        let column = ScalarFunctionColumn::new(
            vec![
                Column::Simple(SimpleColumn::new("age")),
                Column::Simple(SimpleColumn::new("name")),
            ],
            Arc::new(LastArgImpl),
        );
        assert_eq!(column.id(), "lastarg_age,name");
    }

    #[test]
    fn test_id_uses_child_ids_not_serializations() {
        // An aggregation argument contributes its bare column id, while the
        // query string keeps the AGGTYPE(...) form.
        let column = ScalarFunctionColumn::new(
            vec![Column::Aggregation(AggregationColumn::new(
                SimpleColumn::new("age"),
                AggregationType::Sum,
            ))],
            Arc::new(YearImpl),
        );
        assert_eq!(column.id(), "year_age");
        assert_eq!(column.to_query_string(), "year_SUM(age)");
    }

    #[test]
    fn test_validate_delegates_argument_types() {
        let table = table();
        assert!(year_of("age").validate(&table).is_ok());

        let err = year_of("name").validate(&table).unwrap_err();
        assert_eq!(
            err.kind,
            InvalidQueryKind::FunctionArgMismatch {
                function: "year".to_string(),
                expected: "year(date | datetime | number)".to_string(),
                got: vec![ValueType::Text],
            }
        );
    }

    #[test]
    fn test_validate_children_first_fail_fast() {
        // The unknown first argument surfaces before the second argument's
        // type mismatch could.
        let table = table();
        let column = ScalarFunctionColumn::new(
            vec![
                Column::Simple(SimpleColumn::new("salary")),
                Column::Simple(SimpleColumn::new("age")),
            ],
            Arc::new(UpperImpl),
        );
        let err = column.validate(&table).unwrap_err();
        assert_eq!(
            err.kind,
            InvalidQueryKind::UnknownColumn { column: "salary".to_string() }
        );
    }

    #[test]
    fn test_value_type_from_return_type_rule() {
        let table = table();
        assert_eq!(year_of("age").value_type(&table).unwrap(), ValueType::Number);
    }

    #[test]
    fn test_value_type_feeds_all_child_types_in_order() {
        let table = table();
        let column = ScalarFunctionColumn::new(
            vec![
                Column::Simple(SimpleColumn::new("age")),
                Column::Simple(SimpleColumn::new("name")),
            ],
            Arc::new(LastArgImpl),
        );
        // The last child's type wins, proving the rule saw the full ordered
        // list rather than a single repeated type.
        assert_eq!(column.value_type(&table).unwrap(), ValueType::Text);
    }

    #[test]
    fn test_value_type_prefers_materialized_column() {
        let mut table = table();
        table.add_column(ColumnDescription::new("year_age", ValueType::Date));
        assert_eq!(year_of("age").value_type(&table).unwrap(), ValueType::Date);
    }

    #[test]
    fn test_nested_function_columns_exclude_self() {
        let inner = year_of("age");
        let outer = ScalarFunctionColumn::new(
            vec![Column::ScalarFunction(inner.clone())],
            Arc::new(LastArgImpl),
        );
        assert_eq!(outer.all_scalar_function_columns(), vec![&inner]);
        assert_eq!(inner.all_scalar_function_columns(), Vec::<&ScalarFunctionColumn>::new());
    }

    #[test]
    fn test_deeply_nested_function_columns_in_order() {
        let innermost = year_of("age");
        let middle = ScalarFunctionColumn::new(
            vec![Column::ScalarFunction(innermost.clone())],
            Arc::new(UpperImpl),
        );
        let sibling = year_of("name");
        let root = ScalarFunctionColumn::new(
            vec![
                Column::ScalarFunction(middle.clone()),
                Column::ScalarFunction(sibling.clone()),
            ],
            Arc::new(LastArgImpl),
        );
        // Each function child, then its descendants, in argument order.
        assert_eq!(
            root.all_scalar_function_columns(),
            vec![&middle, &innermost, &sibling]
        );
    }

    #[test]
    fn test_duplicate_arguments_are_kept() {
        let age = SimpleColumn::new("age");
        let column = ScalarFunctionColumn::new(
            vec![
                Column::Simple(age.clone()),
                Column::Simple(age.clone()),
            ],
            Arc::new(LastArgImpl),
        );
        assert_eq!(column.all_simple_columns(), vec![&age, &age]);
        assert_eq!(column.all_simple_column_ids(), vec!["age", "age"]);
    }

    #[test]
    fn test_equality_by_function_name_and_arguments() {
        assert_eq!(year_of("age"), year_of("age"));
        assert_ne!(year_of("age"), year_of("name"));
    }
}
