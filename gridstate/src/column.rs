//! Column declarations.

use serde::Deserialize;
use serde::Serialize;

/// A declared table column.
///
/// Columns define which fields the table knows about: free-text search scans
/// every declared column, exact-equality filters are only accepted for
/// declared column keys, and sort intents are only accepted for columns
/// marked sortable.
///
/// # Examples
///
/// ```
/// use gridstate::Column;
///
/// let columns = vec![
///     Column::new("id", "ID"),
///     Column::new("name", "Name").sortable(),
///     Column::new("status", "Status"),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Field key resolved against row records.
    pub key: String,
    /// Human-readable column label.
    pub label: String,
    /// Whether sort intents on this column are accepted.
    pub sortable: bool,
}

impl Column {
    /// Creates a new column.
    ///
    /// # Arguments
    /// * `key` - The record field this column displays
    /// * `label` - The column header label
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
        }
    }

    /// Makes the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}
