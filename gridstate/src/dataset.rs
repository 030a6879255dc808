//! Dataset variants and the remote fetch seam.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::Record;
use crate::query::FetchParams;

/// One page of rows plus the authoritative total, as returned by a remote
/// collaborator.
///
/// The contract is exactly these two pieces: the ordered rows for the
/// requested window, and the total count of rows matching the active filters
/// server-side. Pagination UI is derived from the total, never from the
/// number of rows returned.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    rows: Vec<Record>,
    total_count: usize,
}

impl FetchResponse {
    /// Creates a response from the window rows and the total count.
    pub fn new(rows: Vec<Record>, total_count: usize) -> Self {
        Self { rows, total_count }
    }

    /// Returns a reference to the rows in this response.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Consumes the response and returns the rows.
    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }

    /// Returns the total count of matching rows (not just this window).
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns `true` if this response has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in this response.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// The remote fetch seam.
///
/// Implementations own all networking; the controller only hands them the
/// assembled [`FetchParams`] and trusts the [`FetchResponse`].
#[async_trait]
pub trait RemoteFetch: Send + Sync {
    /// Fetches one window of rows for the given parameters.
    async fn fetch(&self, params: &FetchParams) -> Result<FetchResponse, FetchError>;
}

/// Where a table's rows live, resolved once at construction.
///
/// This replaces duck-typing on the bound collection: a dataset is either
/// fully resident client-side (`Local`) and paged/sorted/filtered in-process,
/// or server-authoritative (`Remote`) and only ever requested window by
/// window.
pub enum Dataset {
    /// The full row set is held client-side.
    Local(Vec<Record>),
    /// The server is authoritative; rows arrive through the fetch seam.
    Remote(Box<dyn RemoteFetch>),
}

impl Dataset {
    /// Creates a local dataset from resident rows.
    pub fn local(rows: Vec<Record>) -> Self {
        Dataset::Local(rows)
    }

    /// Creates a remote dataset backed by a fetch implementation.
    pub fn remote(fetch: impl RemoteFetch + 'static) -> Self {
        Dataset::Remote(Box::new(fetch))
    }

    /// Returns `true` for server-authoritative datasets.
    pub fn is_remote(&self) -> bool {
        matches!(self, Dataset::Remote(_))
    }
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dataset::Local(rows) => f.debug_tuple("Local").field(&rows.len()).finish(),
            Dataset::Remote(_) => f.debug_tuple("Remote").finish(),
        }
    }
}
