use serde::{Deserialize, Serialize};

use crate::table::ValueType;

/// Schema entry for one table column: its identifier and declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescription {
    pub id: String,
    pub value_type: ValueType,
}

impl ColumnDescription {
    pub fn new(id: impl Into<String>, value_type: ValueType) -> Self {
        Self { id: id.into(), value_type }
    }
}
