//! Error types

use std::time::Duration;

/// Errors reported by a remote fetch collaborator.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP error response from the backing service.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Request timed out.
    #[error("timeout after {0:?}")]
    Timeout(Duration),

    /// The response violated the fetch contract (missing rows or total).
    #[error("response contract violation: {0}")]
    Contract(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new contract-violation error.
    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract(message.into())
    }

    /// Creates a new generic transport error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Timeout(_) => true,
            _ => false,
        }
    }
}

/// Errors surfaced by the table controller.
///
/// A failed refetch is the only failure this controller can produce: invalid
/// pages wrap around and unknown filter keys are ignored. By the time a
/// `FetchFailed` reaches the caller, the state has already been rolled back
/// to its pre-intent value, so the caller keeps showing the last-good page.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The remote refetch for an intent failed; state is unchanged.
    #[error("fetch failed: {0}")]
    FetchFailed(#[from] FetchError),
}
