use crate::query::{InvalidQueryKind, ScalarFunction};
use crate::table::ValueType;

pub struct AbsImpl;
impl ScalarFunction for AbsImpl {
    fn name(&self) -> &'static str { "abs" }
    fn validate_parameters(&self, types: &[ValueType]) -> Result<(), InvalidQueryKind> {
        match types {
            [ValueType::Number] => Ok(()),
            other => Err(InvalidQueryKind::FunctionArgMismatch {
                function: self.name().to_string(),
                expected: "abs(number)".to_string(),
                got: other.to_vec(),
            }),
        }
    }
    fn return_type(&self, _types: &[ValueType]) -> ValueType { ValueType::Number }
}

pub struct RoundImpl;
impl ScalarFunction for RoundImpl {
    fn name(&self) -> &'static str { "round" }
    fn validate_parameters(&self, types: &[ValueType]) -> Result<(), InvalidQueryKind> {
        match types {
            [ValueType::Number] => Ok(()),
            other => Err(InvalidQueryKind::FunctionArgMismatch {
                function: self.name().to_string(),
                expected: "round(number)".to_string(),
                got: other.to_vec(),
            }),
        }
    }
    fn return_type(&self, _types: &[ValueType]) -> ValueType { ValueType::Number }
}
