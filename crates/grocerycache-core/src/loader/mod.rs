//! Catalog loading with offline fallback.
//!
//! `CatalogLoader::load` fetches the full catalog, filters it to one
//! category and persists the unfiltered catalog. When the fetch fails it
//! serves the last snapshot instead, and only reports an error when there is
//! no snapshot either.

pub mod catalog;
pub mod state;

pub use catalog::CatalogLoader;
pub use state::{Phase, RetrievalState, OFFLINE_MESSAGE};
