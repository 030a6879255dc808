//! Dynamic row record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// A dynamic row record.
///
/// Records hold cell values as a `HashMap<String, Value>`, allowing dynamic
/// access to any field. The row identity used by selection is resolved from a
/// configured id field and canonicalized to a string.
///
/// # Example
///
/// ```
/// use gridstate::model::Record;
///
/// let record = Record::new()
///     .set("id", 7)
///     .set("name", "Contoso");
///
/// assert_eq!(record.cell_string("name"), "Contoso");
/// assert_eq!(record.row_id("id"), Some("7".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder style).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns a mutable reference to all fields.
    pub fn fields_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.fields
    }

    /// Returns the canonical cell string for a field.
    ///
    /// A missing field resolves to the empty string, same as a null value.
    pub fn cell_string(&self, field: &str) -> String {
        self.fields
            .get(field)
            .map(Value::cell_string)
            .unwrap_or_default()
    }

    /// Resolves the row id from the given id field.
    ///
    /// Returns `None` when the field is missing or null, since such a row
    /// cannot participate in selection.
    pub fn row_id(&self, id_field: &str) -> Option<String> {
        match self.fields.get(id_field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.cell_string()),
        }
    }
}
