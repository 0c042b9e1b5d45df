use crate::query::InvalidQueryKind;
use crate::table::ValueType;

/// Per-function metadata and type rules.
/// One instance is registered globally per function name.
/// It is stateless and thread-safe to share.
pub trait ScalarFunction: Send + Sync {
    /// Canonical lowercase function name ("upper", "year", ...).
    fn name(&self) -> &'static str;

    /// Check arity and argument types for one application of this function.
    /// `types` is the ordered list of the argument expressions' value types.
    /// The caller attaches the table locale to the returned kind.
    fn validate_parameters(&self, types: &[ValueType]) -> Result<(), InvalidQueryKind>;

    /// Output type for an application whose arguments have these types.
    /// Only meaningful once `validate_parameters` accepted the same list.
    fn return_type(&self, types: &[ValueType]) -> ValueType;
}
