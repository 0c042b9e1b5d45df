use crate::query::{InvalidQueryKind, ScalarFunction};
use crate::table::ValueType;

pub struct UpperImpl;
impl ScalarFunction for UpperImpl {
    fn name(&self) -> &'static str { "upper" }
    fn validate_parameters(&self, types: &[ValueType]) -> Result<(), InvalidQueryKind> {
        match types {
            [ValueType::Text] => Ok(()),
            other => Err(InvalidQueryKind::FunctionArgMismatch {
                function: self.name().to_string(),
                expected: "upper(text)".to_string(),
                got: other.to_vec(),
            }),
        }
    }
    fn return_type(&self, _types: &[ValueType]) -> ValueType { ValueType::Text }
}

pub struct LowerImpl;
impl ScalarFunction for LowerImpl {
    fn name(&self) -> &'static str { "lower" }
    fn validate_parameters(&self, types: &[ValueType]) -> Result<(), InvalidQueryKind> {
        match types {
            [ValueType::Text] => Ok(()),
            other => Err(InvalidQueryKind::FunctionArgMismatch {
                function: self.name().to_string(),
                expected: "lower(text)".to_string(),
                got: other.to_vec(),
            }),
        }
    }
    fn return_type(&self, _types: &[ValueType]) -> ValueType { ValueType::Text }
}

pub struct ConcatImpl;
impl ScalarFunction for ConcatImpl {
    fn name(&self) -> &'static str { "concat" }
    fn validate_parameters(&self, types: &[ValueType]) -> Result<(), InvalidQueryKind> {
        if !types.is_empty() && types.iter().all(|t| *t == ValueType::Text) {
            Ok(())
        } else {
            Err(InvalidQueryKind::FunctionArgMismatch {
                function: self.name().to_string(),
                expected: "concat(text, ...)".to_string(),
                got: types.to_vec(),
            })
        }
    }
    fn return_type(&self, _types: &[ValueType]) -> ValueType { ValueType::Text }
}
