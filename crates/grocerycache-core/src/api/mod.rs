//! REST API client module for the grocery catalog service.
//!
//! The service exposes the whole catalog at a single endpoint; there is no
//! server-side category filter, so callers always receive every product.

pub mod client;
pub mod error;

pub use client::{ApiClient, CatalogSource, DEFAULT_CATALOG_URL};
pub use error::ApiError;
