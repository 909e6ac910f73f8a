//! Core library for grocerycache.
//!
//! Fetches the grocery product catalog from the remote API, filters it by
//! category, and falls back to the last successfully fetched snapshot when
//! the network is unavailable.
//!
//! - `api`: HTTP client for the catalog endpoint
//! - `cache`: key-value stores and the catalog snapshot manager
//! - `config`: persisted user preferences
//! - `loader`: the `CatalogLoader` and its `RetrievalState`
//! - `models`: `Product`, `Category` and the category filter

pub mod api;
pub mod cache;
pub mod config;
pub mod loader;
pub mod models;

pub use api::{ApiClient, ApiError, CatalogSource};
pub use cache::{CacheManager, FileStore, KeyValueStore, MemoryStore};
pub use config::Config;
pub use loader::{CatalogLoader, Phase, RetrievalState, OFFLINE_MESSAGE};
pub use models::{filter_by_category, Category, Product};
