pub mod table;
pub use table::{ColumnDescription, DataTable, Locale, TableSchema, ValueType};

pub mod query;
pub use query::{
    AggregationColumn, AggregationType, Column, InvalidQueryError, InvalidQueryKind,
    ScalarFunction, ScalarFunctionColumn, ScalarFunctionRegistry, SimpleColumn,
};
