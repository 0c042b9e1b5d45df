pub mod value_type;
pub use value_type::*;

pub mod column_description;
pub use column_description::*;

pub mod locale;
pub use locale::*;

pub mod data_table;
pub use data_table::*;

/// Schema contract the expression model validates against. Implementations
/// provide a consistent, read-only snapshot for the lifetime of one
/// validation + type-inference pass.
pub trait TableSchema {
    /// Whether a column with this identifier is declared (or materialized)
    /// in the table.
    fn contains_column(&self, column_id: &str) -> bool;

    /// The description of a declared column, or `None` if the identifier is
    /// unknown.
    fn column_description(&self, column_id: &str) -> Option<&ColumnDescription>;

    /// Locale attached to user-facing validation errors raised against this
    /// table.
    fn locale_for_user_messages(&self) -> &Locale;
}
