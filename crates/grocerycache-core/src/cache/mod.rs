//! Local caching module for offline data access.
//!
//! The last successfully fetched catalog is stored as a JSON array under a
//! single key. It has no expiry: it is overwritten on every successful fetch
//! and only read when the network fails.
//!
//! - `KeyValueStore`: the byte store seam, with `FileStore` and `MemoryStore`
//! - `CacheManager`: snapshot serialization on top of a store

pub mod manager;
pub mod store;

pub use manager::{CacheManager, SNAPSHOT_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
