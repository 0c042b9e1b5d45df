use crate::query::{InvalidQueryKind, ScalarFunction};
use crate::table::ValueType;

fn is_date_like(value_type: ValueType) -> bool {
    matches!(value_type, ValueType::Date | ValueType::DateTime)
}

/// Extracts the year component. Also accepts plain numbers so epoch-style
/// columns can be queried without a cast.
pub struct YearImpl;
impl ScalarFunction for YearImpl {
    fn name(&self) -> &'static str { "year" }
    fn validate_parameters(&self, types: &[ValueType]) -> Result<(), InvalidQueryKind> {
        match types {
            [t] if is_date_like(*t) || t.is_numeric() => Ok(()),
            other => Err(InvalidQueryKind::FunctionArgMismatch {
                function: self.name().to_string(),
                expected: "year(date | datetime | number)".to_string(),
                got: other.to_vec(),
            }),
        }
    }
    fn return_type(&self, _types: &[ValueType]) -> ValueType { ValueType::Number }
}

/// Whole days between two date-valued expressions.
pub struct DateDiffImpl;
impl ScalarFunction for DateDiffImpl {
    fn name(&self) -> &'static str { "datediff" }
    fn validate_parameters(&self, types: &[ValueType]) -> Result<(), InvalidQueryKind> {
        match types {
            [a, b] if is_date_like(*a) && is_date_like(*b) => Ok(()),
            other => Err(InvalidQueryKind::FunctionArgMismatch {
                function: self.name().to_string(),
                expected: "datediff(date | datetime, date | datetime)".to_string(),
                got: other.to_vec(),
            }),
        }
    }
    fn return_type(&self, _types: &[ValueType]) -> ValueType { ValueType::Number }
}
