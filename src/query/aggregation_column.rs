use std::fmt;

use tracing::debug;

use crate::query::{AggregationType, InvalidQueryError, InvalidQueryKind, SimpleColumn};
use crate::table::{TableSchema, ValueType};

/// One reducing operator applied to one underlying column. Immutable.
///
/// Its identifier is the wrapped column's identifier; the aggregation tag is
/// deliberately not part of it, so a planner can group several aggregations
/// of the same base column under one key and combine the tag separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregationColumn {
    column: SimpleColumn,
    aggregation: AggregationType,
}

impl AggregationColumn {
    pub fn new(column: SimpleColumn, aggregation: AggregationType) -> Self {
        Self { column, aggregation }
    }

    pub fn id(&self) -> &str {
        self.column.id()
    }

    pub fn aggregated_column(&self) -> &SimpleColumn {
        &self.column
    }

    pub fn aggregation_type(&self) -> AggregationType {
        self.aggregation
    }

    /// COUNT/MIN/MAX accept any declared type; SUM/AVG require a numeric
    /// column. The wrapped identifier must exist in the schema either way.
    pub fn validate(&self, table: &dyn TableSchema) -> Result<(), InvalidQueryError> {
        let declared = self.column.value_type(table)?;
        match self.aggregation {
            AggregationType::Count | AggregationType::Max | AggregationType::Min => Ok(()),
            AggregationType::Avg | AggregationType::Sum => {
                if declared.is_numeric() {
                    Ok(())
                } else {
                    debug!(
                        column = self.column.id(),
                        aggregation = self.aggregation.name(),
                        "aggregation over non-numeric column rejected"
                    );
                    Err(InvalidQueryError::new(
                        InvalidQueryKind::AggregateRequiresNumeric {
                            column: self.column.id().to_string(),
                            aggregation: self.aggregation,
                            found: declared,
                        },
                        table.locale_for_user_messages().clone(),
                    ))
                }
            }
        }
    }

    /// COUNT yields a number whatever it counts; the other operators keep
    /// the wrapped column's declared type.
    pub fn value_type(&self, table: &dyn TableSchema) -> Result<ValueType, InvalidQueryError> {
        let declared = self.column.value_type(table)?;
        match self.aggregation {
            AggregationType::Count => Ok(ValueType::Number),
            AggregationType::Avg
            | AggregationType::Sum
            | AggregationType::Max
            | AggregationType::Min => Ok(declared),
        }
    }

    pub fn to_query_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AggregationColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.aggregation, self.column)
    }
}
