use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::table::{ColumnDescription, Locale, TableSchema, ValueType};

/// In-memory table schema: an ordered map of column descriptions plus the
/// locale used for user-facing messages.
///
/// Column order is insertion order and is preserved for deterministic
/// iteration. Raw column identifiers must not contain `'_'` or `','` if the
/// table will be queried through scalar-function expressions, since those
/// characters are reserved by the expression identifier grammar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: IndexMap<String, ColumnDescription>,
    locale: Locale,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self { columns: IndexMap::new(), locale }
    }

    /// Register a column description. A description with an id already
    /// present replaces the previous one.
    pub fn add_column(&mut self, description: ColumnDescription) -> &mut Self {
        self.columns.insert(description.id.clone(), description);
        self
    }

    /// Build a schema from a single JSON object by classifying each field's
    /// value. Fields whose value carries no usable declared type (null,
    /// array, object) are skipped.
    pub fn from_json_object(obj: &Map<String, Value>, locale: Locale) -> Self {
        let mut table = Self::with_locale(locale);
        for (key, value) in obj {
            if let Some(value_type) = ValueType::of_json(value) {
                table.add_column(ColumnDescription::new(key.clone(), value_type));
            }
        }
        table
    }

    pub fn column_descriptions(&self) -> impl Iterator<Item = &ColumnDescription> {
        self.columns.values()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl TableSchema for DataTable {
    fn contains_column(&self, column_id: &str) -> bool {
        self.columns.contains_key(column_id)
    }

    fn column_description(&self, column_id: &str) -> Option<&ColumnDescription> {
        self.columns.get(column_id)
    }

    fn locale_for_user_messages(&self) -> &Locale {
        &self.locale
    }
}
