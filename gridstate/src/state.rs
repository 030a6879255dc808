//! Table state: the four axes and their transition rules.

use serde::Deserialize;
use serde::Serialize;

use crate::query::Direction;
use crate::query::Filters;
use crate::query::Sort;
use crate::selection::Selection;

/// The state of a table: pagination, sort, filters, and selection.
///
/// `TableState` is pure bookkeeping. It knows nothing about rendering or
/// fetching; [`TableController`](crate::TableController) drives it and
/// decides the refresh strategy per transition.
///
/// The paging/sort/filter axes serialize (selection does not), so a
/// page-level collaborator can round-trip them to URL parameters.
///
/// # Invariants
///
/// - `size >= 1` at all times.
/// - After any paging or size-change operation, `start` is a non-negative
///   multiple of `size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableState {
    start: usize,
    size: usize,
    sort: Option<Sort>,
    filters: Filters,
    #[serde(skip)]
    selection: Selection,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(10)
    }
}

impl TableState {
    /// Creates a new state with the given page size (minimum 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            start: 0,
            size: page_size.max(1),
            sort: None,
            filters: Filters::new(),
            selection: Selection::new(),
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Returns the zero-based offset of the first visible row.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the page length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the active sort, if any.
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Returns the active filters.
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Returns the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the current 1-based page number.
    pub fn page(&self) -> usize {
        self.start / self.size + 1
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// Moves to a 1-based page number.
    ///
    /// A page below 1 wraps to the last page; a page above `total_pages`
    /// wraps to page 1. With `total_pages == 0` the page clamps to 1.
    pub fn set_page(&mut self, page: i64, total_pages: usize) {
        let last = total_pages.max(1) as i64;
        let page = if page < 1 {
            last
        } else if page > last {
            1
        } else {
            page
        };
        self.start = (page as usize - 1) * self.size;
    }

    /// Sets the page size (minimum 1) and returns to the first page.
    pub fn set_page_size(&mut self, new_size: usize) {
        self.size = new_size.max(1);
        self.start = 0;
    }

    // =========================================================================
    // Sort
    // =========================================================================

    /// Sets the sort column and direction; `None` clears the sort.
    ///
    /// Sort changes always restart pagination at page 1.
    pub fn set_sort(&mut self, field: impl Into<String>, direction: Option<Direction>) {
        self.sort = direction.map(|direction| Sort {
            field: field.into(),
            direction,
        });
        self.start = 0;
    }

    /// Clears the sort and restarts pagination.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.start = 0;
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Sets or removes a filter and returns to the first page.
    ///
    /// `None` or an empty value removes the key.
    pub fn set_filter(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) if !value.is_empty() => self.filters.set(key, value),
            _ => {
                self.filters.remove(key);
            }
        }
        self.start = 0;
    }

    /// Removes all filters and returns to the first page.
    ///
    /// The sort is independent of filters and survives this.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.start = 0;
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Toggles selection for a row id. Returns `true` if now selected.
    pub fn toggle_select(&mut self, id: impl Into<String>) -> bool {
        self.selection.toggle(id)
    }

    /// Replaces the selection with exactly the given visible ids.
    pub fn select_all<I>(&mut self, visible_ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.selection.select_all(visible_ids);
    }

    /// Clears the selection.
    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Checks whether every given visible id is selected (false when empty).
    pub fn is_all_selected<'a, I>(&self, visible_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.selection.is_all_selected(visible_ids)
    }

    // =========================================================================
    // Rollback
    // =========================================================================

    /// Captures the paging/sort/filter axes for rollback.
    ///
    /// Selection is deliberately excluded: a selection made while a fetch is
    /// in flight must survive that fetch failing.
    pub(crate) fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            start: self.start,
            size: self.size,
            sort: self.sort.clone(),
            filters: self.filters.clone(),
        }
    }

    /// Restores the paging/sort/filter axes, leaving selection untouched.
    pub(crate) fn restore(&mut self, snapshot: StateSnapshot) {
        self.start = snapshot.start;
        self.size = snapshot.size;
        self.sort = snapshot.sort;
        self.filters = snapshot.filters;
    }
}

/// The paging/sort/filter axes captured before a remote transition.
#[derive(Debug, Clone)]
pub(crate) struct StateSnapshot {
    start: usize,
    size: usize,
    sort: Option<Sort>,
    filters: Filters,
}
