use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of a table column and of every expression evaluated over it.
///
/// This is the whole type universe the model reasons about: schema lookups,
/// aggregation rules and scalar-function signatures all speak in these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Truth value
    Boolean,
    /// Any numeric value (integral or floating)
    Number,
    /// Free-form text
    Text,
    /// Calendar date without time
    Date,
    /// Calendar date with time of day
    DateTime,
    /// Time of day without a date
    TimeOfDay,
}

impl ValueType {
    /// Whether this type is accepted where a numeric input is required
    /// (SUM/AVG aggregation, arithmetic scalar functions).
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Number)
    }

    /// Classify a JSON value into a declared column type.
    ///
    /// Nulls, arrays and objects carry no usable declared type and map to
    /// `None`; callers doing schema inference skip such fields.
    pub fn of_json(value: &Value) -> Option<ValueType> {
        match value {
            Value::Bool(_) => Some(ValueType::Boolean),
            Value::Number(_) => Some(ValueType::Number),
            Value::String(_) => Some(ValueType::Text),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::Text => "text",
            ValueType::Date => "date",
            ValueType::DateTime => "datetime",
            ValueType::TimeOfDay => "timeofday",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_number_is_numeric() {
        assert!(ValueType::Number.is_numeric());
        assert!(!ValueType::Boolean.is_numeric());
        assert!(!ValueType::Text.is_numeric());
        assert!(!ValueType::Date.is_numeric());
        assert!(!ValueType::DateTime.is_numeric());
        assert!(!ValueType::TimeOfDay.is_numeric());
    }

    #[test]
    fn test_of_json_primitives() {
        assert_eq!(ValueType::of_json(&json!(true)), Some(ValueType::Boolean));
        assert_eq!(ValueType::of_json(&json!(12)), Some(ValueType::Number));
        assert_eq!(ValueType::of_json(&json!(1.5)), Some(ValueType::Number));
        assert_eq!(ValueType::of_json(&json!("hi")), Some(ValueType::Text));
        assert_eq!(ValueType::of_json(&json!(null)), None);
        assert_eq!(ValueType::of_json(&json!([1, 2])), None);
        assert_eq!(ValueType::of_json(&json!({"a": 1})), None);
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(ValueType::Number.to_string(), "number");
        assert_eq!(ValueType::TimeOfDay.to_string(), "timeofday");
    }
}
