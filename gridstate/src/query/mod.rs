//! Query-side types: sort, filters, fetch parameters, and the local window
//! pipeline.
//!
//! # Shared Types
//!
//! - [`Sort`] / [`Direction`] - the active single-column sort
//! - [`Filters`] - the active key/value filters, with the reserved
//!   [`SEARCH_KEY`] free-text filter
//! - [`FetchParams`] - the flat parameter map sent to a remote collaborator
//! - [`Window`] - the visible slice plus the authoritative total

mod filter;
mod params;
mod sort;
pub(crate) mod window;

pub use filter::Filters;
pub use filter::SEARCH_KEY;
pub use params::FetchParams;
pub use params::ParamStyle;
pub use sort::Direction;
pub use sort::Sort;
pub use window::Window;
