//! Active filter set.

use serde::Deserialize;
use serde::Serialize;

/// Reserved filter key for the free-text search filter.
///
/// In local mode the search value is matched case-insensitively against the
/// cell string of every declared column. Every other filter key matches its
/// own column by exact equality.
pub const SEARCH_KEY: &str = "search";

/// The active key/value filters of a table.
///
/// Filters preserve insertion order so the parameters emitted for a remote
/// fetch are stable across refetches. Setting an existing key updates it in
/// place; setting an empty value removes the key.
///
/// # Example
///
/// ```
/// use gridstate::query::{Filters, SEARCH_KEY};
///
/// let mut filters = Filters::new();
/// filters.set("status", "active");
/// filters.set(SEARCH_KEY, "acme");
///
/// assert_eq!(filters.get("status"), Some("active"));
/// assert_eq!(filters.search(), Some("acme"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    entries: Vec<(String, String)>,
}

impl Filters {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter value, replacing any previous value for the key.
    ///
    /// An empty value removes the key instead.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.remove(&key);
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Removes a filter key. Returns `true` if it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        self.entries.len() != before
    }

    /// Returns the value for a key, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the key has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the free-text search value, if set.
    pub fn search(&self) -> Option<&str> {
        self.get(SEARCH_KEY)
    }

    /// Removes all filters.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of active filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
