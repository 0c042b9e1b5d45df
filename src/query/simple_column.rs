use std::fmt;

use crate::query::{InvalidQueryError, InvalidQueryKind};
use crate::table::{TableSchema, ValueType};

/// Leaf of the expression tree: a direct reference to one physical table
/// column. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleColumn {
    id: String,
}

impl SimpleColumn {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn validate(&self, table: &dyn TableSchema) -> Result<(), InvalidQueryError> {
        if table.contains_column(&self.id) {
            Ok(())
        } else {
            Err(InvalidQueryError::new(
                InvalidQueryKind::UnknownColumn { column: self.id.clone() },
                table.locale_for_user_messages().clone(),
            ))
        }
    }

    pub fn value_type(&self, table: &dyn TableSchema) -> Result<ValueType, InvalidQueryError> {
        match table.column_description(&self.id) {
            Some(description) => Ok(description.value_type),
            None => Err(InvalidQueryError::new(
                InvalidQueryKind::UnknownColumn { column: self.id.clone() },
                table.locale_for_user_messages().clone(),
            )),
        }
    }

    pub fn to_query_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SimpleColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ColumnDescription, DataTable};

    fn table() -> DataTable {
        let mut table = DataTable::new();
        table
            .add_column(ColumnDescription::new("age", ValueType::Number))
            .add_column(ColumnDescription::new("name", ValueType::Text));
        table
    }

    #[test]
    fn test_id_and_query_string() {
        let column = SimpleColumn::new("age");
        assert_eq!(column.id(), "age");
        assert_eq!(column.to_query_string(), "age");
    }

    #[test]
    fn test_validate_known_column() {
        let table = table();
        assert!(SimpleColumn::new("age").validate(&table).is_ok());
    }

    #[test]
    fn test_validate_unknown_column() {
        let table = table();
        let err = SimpleColumn::new("salary").validate(&table).unwrap_err();
        assert_eq!(
            err.kind,
            InvalidQueryKind::UnknownColumn { column: "salary".to_string() }
        );
    }

    #[test]
    fn test_value_type_is_declared_type() {
        let table = table();
        assert_eq!(
            SimpleColumn::new("name").value_type(&table).unwrap(),
            ValueType::Text
        );
        assert!(SimpleColumn::new("salary").value_type(&table).is_err());
    }
}
