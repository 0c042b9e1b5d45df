use std::fmt;

use crate::query::AggregationType;
use crate::table::{Locale, ValueType};

/// What went wrong while validating a column expression against a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidQueryKind {
    UnknownColumn { column: String },
    AggregateRequiresNumeric { column: String, aggregation: AggregationType, found: ValueType },
    FunctionArgMismatch { function: String, expected: String, got: Vec<ValueType> },
}

/// User-facing validation error. Carries the locale of the table it was
/// raised against so the reporting layer can localize the message; the
/// locale never influences control flow.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidQueryError {
    pub kind: InvalidQueryKind,
    pub locale: Locale,
}

impl InvalidQueryError {
    pub fn new(kind: InvalidQueryKind, locale: Locale) -> Self {
        Self { kind, locale }
    }
}

impl fmt::Display for InvalidQueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidQueryKind::UnknownColumn { column } => {
                write!(f, "unknown column '{}'", column)
            }
            InvalidQueryKind::AggregateRequiresNumeric { column, aggregation, found } => {
                write!(
                    f,
                    "{} requires a numeric column, but '{}' has type {}",
                    aggregation, column, found
                )
            }
            InvalidQueryKind::FunctionArgMismatch { function, expected, got } => {
                let got: Vec<String> = got.iter().map(|t| t.to_string()).collect();
                write!(
                    f,
                    "function '{}' expected {}, got ({})",
                    function,
                    expected,
                    got.join(", ")
                )
            }
        }
    }
}

impl fmt::Display for InvalidQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for InvalidQueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_column_message() {
        let err = InvalidQueryError::new(
            InvalidQueryKind::UnknownColumn { column: "salary".to_string() },
            Locale::default(),
        );
        assert_eq!(err.to_string(), "unknown column 'salary'");
        assert_eq!(err.locale.tag(), "en-US");
    }

    #[test]
    fn test_aggregate_requires_numeric_message() {
        let err = InvalidQueryError::new(
            InvalidQueryKind::AggregateRequiresNumeric {
                column: "name".to_string(),
                aggregation: AggregationType::Avg,
                found: ValueType::Text,
            },
            Locale::new("de-DE"),
        );
        assert_eq!(
            err.to_string(),
            "AVG requires a numeric column, but 'name' has type text"
        );
        assert_eq!(err.locale.tag(), "de-DE");
    }

    #[test]
    fn test_function_arg_mismatch_message() {
        let kind = InvalidQueryKind::FunctionArgMismatch {
            function: "upper".to_string(),
            expected: "upper(text)".to_string(),
            got: vec![ValueType::Number, ValueType::Date],
        };
        assert_eq!(
            kind.to_string(),
            "function 'upper' expected upper(text), got (number, date)"
        );
    }
}
