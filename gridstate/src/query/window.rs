//! Local-mode window computation: filter, sort, slice.

use crate::column::Column;
use crate::model::Record;
use crate::model::Value;
use crate::state::TableState;

use super::Direction;
use super::Filters;
use super::SEARCH_KEY;

/// The visible slice of rows plus the authoritative total.
///
/// In local mode the total is the pre-slice length of the filtered row set;
/// in remote mode it is the server-reported count. Either way it is what
/// pagination UI must be derived from, not the slice length.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    rows: Vec<Record>,
    total: usize,
    start: usize,
    size: usize,
}

impl Window {
    pub(crate) fn new(rows: Vec<Record>, total: usize, start: usize, size: usize) -> Self {
        Self {
            rows,
            total,
            start,
            size,
        }
    }

    /// Returns the rows in this window.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Consumes the window and returns the rows.
    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }

    /// Returns the authoritative total row count (pre-slice).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the offset of the first row in this window.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the page length the window was sliced with.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total page count for the current total and page length.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.size)
    }

    /// Returns `true` if this window has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in this window.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Runs the local pipeline: filter, stable sort, slice `[start, start+size)`.
pub(crate) fn compute_window(
    rows: &[Record],
    columns: &[Column],
    state: &TableState,
) -> Window {
    let mut kept: Vec<&Record> = rows
        .iter()
        .filter(|record| matches_filters(record, columns, state.filters()))
        .collect();

    if let Some(sort) = state.sort() {
        kept.sort_by(|a, b| {
            let ordering = Value::cell_cmp(a.get(&sort.field), b.get(&sort.field));
            match sort.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        });
    }

    let total = kept.len();
    let window_rows: Vec<Record> = kept
        .into_iter()
        .skip(state.start())
        .take(state.size())
        .cloned()
        .collect();

    Window::new(window_rows, total, state.start(), state.size())
}

/// Counts the rows the active filters keep, without sorting or slicing.
pub(crate) fn count_filtered(rows: &[Record], columns: &[Column], filters: &Filters) -> usize {
    rows.iter()
        .filter(|record| matches_filters(record, columns, filters))
        .count()
}

fn matches_filters(record: &Record, columns: &[Column], filters: &Filters) -> bool {
    for (key, value) in filters.iter() {
        if key == SEARCH_KEY {
            if !matches_search(record, columns, value) {
                return false;
            }
        } else if record.cell_string(key) != value {
            return false;
        }
    }
    true
}

/// Case-insensitive substring match against every declared column's cell.
fn matches_search(record: &Record, columns: &[Column], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    columns
        .iter()
        .any(|column| record.cell_string(&column.key).to_lowercase().contains(&needle))
}
