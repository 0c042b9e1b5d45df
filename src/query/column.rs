use std::fmt;

use crate::query::{AggregationColumn, InvalidQueryError, ScalarFunctionColumn, SimpleColumn};
use crate::table::{TableSchema, ValueType};

/// One node of a column-expression tree: what a query computes for one
/// output field. The enumeration is closed; every operation below matches
/// exhaustively, so no variant can silently fall through.
#[derive(Clone, PartialEq)]
pub enum Column {
    Simple(SimpleColumn),
    Aggregation(AggregationColumn),
    ScalarFunction(ScalarFunctionColumn),
}

impl Column {
    /// Canonical identifier: a pure function of the expression's structure,
    /// never of any table. Equal expressions yield equal identifiers, which
    /// is what schema lookups and result caches key on.
    pub fn id(&self) -> String {
        match self {
            Column::Simple(column) => column.id().to_string(),
            Column::Aggregation(column) => column.id().to_string(),
            Column::ScalarFunction(column) => column.id(),
        }
    }

    /// Every leaf reachable from this node, in argument order, duplicates
    /// kept. An aggregation contributes nothing: it is not decomposed into
    /// its base column here.
    pub fn all_simple_columns(&self) -> Vec<&SimpleColumn> {
        match self {
            Column::Simple(column) => vec![column],
            Column::Aggregation(_) => Vec::new(),
            Column::ScalarFunction(column) => column.all_simple_columns(),
        }
    }

    /// Identifiers of the physical columns this expression reads. Unlike
    /// `all_simple_columns`, an aggregation does report its base column id.
    pub fn all_simple_column_ids(&self) -> Vec<String> {
        match self {
            Column::Simple(column) => vec![column.id().to_string()],
            Column::Aggregation(column) => vec![column.id().to_string()],
            Column::ScalarFunction(column) => column.all_simple_column_ids(),
        }
    }

    pub fn all_aggregation_columns(&self) -> Vec<&AggregationColumn> {
        match self {
            Column::Simple(_) => Vec::new(),
            Column::Aggregation(column) => vec![column],
            Column::ScalarFunction(column) => column.all_aggregation_columns(),
        }
    }

    /// Function columns nested below this node. A function node reports its
    /// descendants only, never itself.
    pub fn all_scalar_function_columns(&self) -> Vec<&ScalarFunctionColumn> {
        match self {
            Column::Simple(_) | Column::Aggregation(_) => Vec::new(),
            Column::ScalarFunction(column) => column.all_scalar_function_columns(),
        }
    }

    /// Type-check this expression against a schema. Recurses children-first
    /// and stops at the first failure, so the most specific error surfaces.
    pub fn validate(&self, table: &dyn TableSchema) -> Result<(), InvalidQueryError> {
        match self {
            Column::Simple(column) => column.validate(table),
            Column::Aggregation(column) => column.validate(table),
            Column::ScalarFunction(column) => column.validate(table),
        }
    }

    /// Output type of this expression against a schema. Safe to call before
    /// `validate`: it fails with the same error validation would instead of
    /// guessing a type.
    pub fn value_type(&self, table: &dyn TableSchema) -> Result<ValueType, InvalidQueryError> {
        match self {
            Column::Simple(column) => column.value_type(table),
            Column::Aggregation(column) => column.value_type(table),
            Column::ScalarFunction(column) => column.value_type(table),
        }
    }

    /// Canonical query-string form. An external parser maps it back to a
    /// tree with the same identifier and value type.
    pub fn to_query_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Simple(column) => write!(f, "{}", column),
            Column::Aggregation(column) => write!(f, "{}", column),
            Column::ScalarFunction(column) => write!(f, "{}", column),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Simple(_) => write!(f, "Column::Simple({})", self),
            Column::Aggregation(_) => write!(f, "Column::Aggregation({})", self),
            Column::ScalarFunction(_) => write!(f, "Column::ScalarFunction({})", self),
        }
    }
}

impl From<SimpleColumn> for Column {
    fn from(column: SimpleColumn) -> Self {
        Column::Simple(column)
    }
}

impl From<AggregationColumn> for Column {
    fn from(column: AggregationColumn) -> Self {
        Column::Aggregation(column)
    }
}

impl From<ScalarFunctionColumn> for Column {
    fn from(column: ScalarFunctionColumn) -> Self {
        Column::ScalarFunction(column)
    }
}
