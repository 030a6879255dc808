//! Table controller: intent dispatch and refresh strategy.

use log::debug;

use crate::column::Column;
use crate::config::TableConfig;
use crate::dataset::{Dataset, FetchResponse};
use crate::error::TableError;
use crate::model::Record;
use crate::query::window::{compute_window, count_filtered};
use crate::query::{Direction, FetchParams, SEARCH_KEY, Window};
use crate::state::{StateSnapshot, TableState};

/// A discrete user-triggered request to change table state.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Sort by a column; `None` clears the sort.
    Sort {
        /// Column key to sort on.
        field: String,
        /// Direction, or `None` to clear.
        direction: Option<Direction>,
    },
    /// Go to a 1-based page number (out-of-range pages wrap around).
    Page(i64),
    /// Change the page size and return to the first page.
    PageSize(usize),
    /// Set a filter value (an empty value removes the key).
    Filter {
        /// Filter key: a declared column key or [`SEARCH_KEY`].
        key: String,
        /// Filter value.
        value: String,
    },
    /// Remove a filter key.
    RemoveFilter(String),
    /// Remove all filters (the sort survives).
    ClearFilters,
    /// Toggle selection of a row id.
    ToggleSelect(String),
    /// Select exactly the rows visible on the current page.
    SelectAll,
    /// Clear the selection.
    DeselectAll,
}

/// What the render collaborator must do after an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSignal {
    /// A remote refetch must complete before re-rendering.
    pub refetch_needed: bool,
    /// A local re-render (and re-slice, in local mode) is sufficient.
    pub local_render_needed: bool,
}

/// The result of applying one intent.
#[derive(Debug, Clone)]
pub struct Outcome {
    signal: RenderSignal,
    fetch: Option<FetchParams>,
    generation: u64,
}

impl Outcome {
    /// Returns the render signal for this intent.
    pub fn signal(&self) -> RenderSignal {
        self.signal
    }

    /// Returns the outgoing fetch parameters, when a refetch is needed.
    pub fn fetch_params(&self) -> Option<&FetchParams> {
        self.fetch.as_ref()
    }

    /// Returns the fetch generation stamp.
    ///
    /// The stamp increases with every refetch-producing transition, so a
    /// collaborator that runs its own fetches can discard responses that
    /// arrive out of order.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The headless table controller.
///
/// Wraps [`TableState`] and, per intent, decides whether a remote refetch is
/// required or a local re-slice is sufficient. The controller never renders
/// and never performs network I/O itself; those live behind the
/// [`RemoteFetch`](crate::RemoteFetch) seam and the [`RenderSignal`]
/// contract.
///
/// # Example
///
/// ```
/// use gridstate::{Column, Dataset, Intent, Record, TableConfig, TableController};
/// use gridstate::query::Direction;
///
/// let rows = vec![
///     Record::new().set("id", 1).set("name", "beta"),
///     Record::new().set("id", 2).set("name", "alpha"),
/// ];
/// let columns = vec![Column::new("id", "ID"), Column::new("name", "Name").sortable()];
/// let mut table = TableController::new(TableConfig::default(), columns, Dataset::local(rows));
///
/// let outcome = table.apply(Intent::Sort {
///     field: "name".into(),
///     direction: Some(Direction::Asc),
/// });
/// assert!(outcome.signal().local_render_needed);
/// assert_eq!(table.window().rows()[0].cell_string("name"), "alpha");
/// ```
#[derive(Debug)]
pub struct TableController {
    config: TableConfig,
    columns: Vec<Column>,
    state: TableState,
    dataset: Dataset,
    /// Last committed remote window (always empty in local mode).
    rows: Vec<Record>,
    /// Last authoritative remote total.
    total: usize,
    /// Rollback point for the in-flight remote transition.
    pending: Option<StateSnapshot>,
    generation: u64,
}

impl TableController {
    /// Creates a controller for the given configuration, declared columns,
    /// and dataset.
    pub fn new(config: TableConfig, columns: Vec<Column>, dataset: Dataset) -> Self {
        let state = TableState::new(config.page_size());
        Self {
            config,
            columns,
            state,
            dataset,
            rows: Vec::new(),
            total: 0,
            pending: None,
            generation: 0,
        }
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Applies an intent synchronously and returns what must happen next.
    ///
    /// Data intents (sort, page, page size, filters) either demand a refetch
    /// (remote dataset — the outcome carries the [`FetchParams`]) or a local
    /// re-render. Selection intents never demand a refetch.
    ///
    /// A sort on a column that is not declared sortable, or a filter on a key
    /// that is neither a declared column nor [`SEARCH_KEY`], is ignored.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        debug!("applying intent: {intent:?}");
        match intent {
            Intent::Sort { field, direction } => {
                if direction.is_some() && !self.is_sortable(&field) {
                    debug!("ignoring sort on non-sortable field {field:?}");
                    return self.noop();
                }
                self.data_transition(|state| state.set_sort(field, direction))
            }
            Intent::Page(page) => {
                let total_pages = self.total_pages();
                self.data_transition(move |state| state.set_page(page, total_pages))
            }
            Intent::PageSize(size) => self.data_transition(move |state| state.set_page_size(size)),
            Intent::Filter { key, value } => {
                if !self.is_filterable(&key) {
                    debug!("ignoring filter on undeclared key {key:?}");
                    return self.noop();
                }
                self.data_transition(move |state| state.set_filter(&key, Some(value.as_str())))
            }
            Intent::RemoveFilter(key) => {
                self.data_transition(move |state| state.set_filter(&key, None))
            }
            Intent::ClearFilters => self.data_transition(TableState::clear_filters),
            Intent::ToggleSelect(id) => {
                self.state.toggle_select(id);
                self.selection_outcome()
            }
            Intent::SelectAll => {
                let visible = self.visible_ids();
                self.state.select_all(visible);
                self.selection_outcome()
            }
            Intent::DeselectAll => {
                self.state.deselect_all();
                self.selection_outcome()
            }
        }
    }

    /// Applies an intent and, when it demands a refetch, drives the fetch
    /// seam to completion.
    ///
    /// On fetch failure the paging/sort/filter axes are rolled back to their
    /// pre-intent values before the error is returned, so the caller keeps
    /// the last-good page on screen. Local-mode and selection intents resolve
    /// without touching the seam.
    pub async fn refresh(&mut self, intent: Intent) -> Result<RenderSignal, TableError> {
        let outcome = self.apply(intent);
        let Some(params) = outcome.fetch.clone() else {
            return Ok(outcome.signal);
        };

        let response = match &self.dataset {
            Dataset::Remote(fetch) => fetch.fetch(&params).await,
            // apply never emits fetch params for a local dataset
            Dataset::Local(_) => return Ok(outcome.signal),
        };

        match response {
            Ok(response) => {
                self.commit_fetch(response);
                Ok(outcome.signal)
            }
            Err(err) => {
                self.fetch_failed();
                Err(TableError::FetchFailed(err))
            }
        }
    }

    /// Commits a fetch response: installs the window rows and the
    /// authoritative total, and discards the rollback point.
    ///
    /// Collaborators that fetch on their own call this after an outcome with
    /// `refetch_needed` resolved successfully.
    pub fn commit_fetch(&mut self, response: FetchResponse) {
        self.pending = None;
        self.total = response.total_count();
        self.rows = response.into_rows();
    }

    /// Reports a failed fetch: restores the pre-intent paging/sort/filter
    /// axes. Selection is untouched.
    pub fn fetch_failed(&mut self) {
        if let Some(snapshot) = self.pending.take() {
            debug!("refetch failed, restoring previous paging/sort/filter axes");
            self.state.restore(snapshot);
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns the visible window.
    ///
    /// Local mode runs the filter/sort/slice pipeline over the resident rows;
    /// remote mode returns the last committed response window.
    pub fn window(&self) -> Window {
        match &self.dataset {
            Dataset::Local(rows) => compute_window(rows, &self.columns, &self.state),
            Dataset::Remote(_) => Window::new(
                self.rows.clone(),
                self.total,
                self.state.start(),
                self.state.size(),
            ),
        }
    }

    /// Returns the authoritative total row count under the active filters.
    pub fn total_rows(&self) -> usize {
        match &self.dataset {
            Dataset::Local(rows) => count_filtered(rows, &self.columns, self.state.filters()),
            Dataset::Remote(_) => self.total,
        }
    }

    /// Returns the total page count for the current page size.
    pub fn total_pages(&self) -> usize {
        self.total_rows().div_ceil(self.state.size())
    }

    /// Assembles the outgoing fetch parameters for the current state.
    ///
    /// Also the entry point for the initial load of a remote table: fetch
    /// with these parameters, then [`commit_fetch`](Self::commit_fetch).
    pub fn fetch_params(&self) -> FetchParams {
        FetchParams::assemble(
            self.state.start(),
            self.state.size(),
            self.state.sort(),
            self.state.filters(),
            self.config.param_style(),
        )
    }

    /// Returns the ids of the rows visible on the current page.
    pub fn visible_ids(&self) -> Vec<String> {
        self.window()
            .rows()
            .iter()
            .filter_map(|record| record.row_id(self.config.id_field()))
            .collect()
    }

    /// Checks whether every row on the current page is selected.
    pub fn is_all_selected(&self) -> bool {
        let visible = self.visible_ids();
        self.state
            .is_all_selected(visible.iter().map(String::as_str))
    }

    /// Returns the table state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the declared columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the current fetch generation stamp.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn data_transition<F>(&mut self, transition: F) -> Outcome
    where
        F: FnOnce(&mut TableState),
    {
        if self.dataset.is_remote() {
            self.pending = Some(self.state.snapshot());
            transition(&mut self.state);
            self.generation += 1;
            Outcome {
                signal: RenderSignal {
                    refetch_needed: true,
                    local_render_needed: false,
                },
                fetch: Some(self.fetch_params()),
                generation: self.generation,
            }
        } else {
            transition(&mut self.state);
            Outcome {
                signal: RenderSignal {
                    refetch_needed: false,
                    local_render_needed: true,
                },
                fetch: None,
                generation: self.generation,
            }
        }
    }

    fn selection_outcome(&self) -> Outcome {
        Outcome {
            signal: RenderSignal {
                refetch_needed: false,
                local_render_needed: true,
            },
            fetch: None,
            generation: self.generation,
        }
    }

    fn noop(&self) -> Outcome {
        Outcome {
            signal: RenderSignal::default(),
            fetch: None,
            generation: self.generation,
        }
    }

    fn is_sortable(&self, field: &str) -> bool {
        self.columns
            .iter()
            .any(|column| column.key == field && column.sortable)
    }

    fn is_filterable(&self, key: &str) -> bool {
        key == SEARCH_KEY || self.columns.iter().any(|column| column.key == key)
    }
}
