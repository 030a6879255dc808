//! Row selection tracking.

use std::collections::HashSet;

/// Tracks selected rows by canonical id string.
///
/// Ids enter the set only while their row is visible, but the set is never
/// pruned afterwards: a selected row that is later filtered out stays
/// selected until it is toggled off or the selection is cleared. That is
/// long-standing behavior that downstream bulk actions rely on, so it is kept
/// as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles selection for an id. Returns `true` if the id is now selected.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.selected.contains(&id) {
            self.selected.remove(&id);
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Replaces the selection with exactly the given ids.
    ///
    /// Select-all is always scoped to the currently visible page; it never
    /// unions with a previous selection.
    pub fn select_all<I>(&mut self, visible_ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.selected = visible_ids.into_iter().map(Into::into).collect();
    }

    /// Clears all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Checks if an id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Checks if every given id is selected.
    ///
    /// Returns `false` for an empty id list.
    pub fn is_all_selected<'a, I>(&self, visible_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut any = false;
        for id in visible_ids {
            any = true;
            if !self.selected.contains(id) {
                return false;
            }
        }
        any
    }

    /// Iterates over the selected ids (unordered).
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Returns the number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
