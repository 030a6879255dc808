//! Headless table state controller
//!
//! `gridstate` owns the four state axes of a data table — pagination,
//! single-column sort, key/value filters with free-text search, and row
//! selection — and decides, per user intent, whether a remote refetch or a
//! local re-slice is required. Rendering and networking are collaborator
//! seams: the render layer consumes [`RenderSignal`] and [`Window`], the
//! transport layer implements [`RemoteFetch`].

pub mod column;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod model;
pub mod query;
pub mod selection;
pub mod state;

pub use column::Column;
pub use config::TableConfig;
pub use controller::Intent;
pub use controller::Outcome;
pub use controller::RenderSignal;
pub use controller::TableController;
pub use dataset::Dataset;
pub use dataset::FetchResponse;
pub use dataset::RemoteFetch;
pub use error::FetchError;
pub use error::TableError;
pub use model::Record;
pub use model::Value;
pub use query::Window;
pub use selection::Selection;
pub use state::TableState;
