use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::Product;

use super::KeyValueStore;

/// Key the catalog snapshot lives under.
pub const SNAPSHOT_KEY: &str = "products";

/// Reads and writes the catalog snapshot through an injected store.
///
/// The snapshot is the full, unfiltered catalog from the last successful
/// fetch, serialized as a plain JSON array of products.
#[derive(Clone)]
pub struct CacheManager {
    store: Arc<dyn KeyValueStore>,
}

impl CacheManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the snapshot, distinguishing "absent" from "unreadable".
    pub async fn load_snapshot(&self) -> Result<Option<Vec<Product>>> {
        let bytes = match self.store.get(SNAPSHOT_KEY).await? {
            Some(bytes) => bytes,
            None => return Ok(None),
        };

        let catalog: Vec<Product> = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse cache file: {}", SNAPSHOT_KEY))?;

        Ok(Some(catalog))
    }

    /// Load the snapshot, treating a corrupt or unreadable one as absent.
    pub async fn read_snapshot(&self) -> Option<Vec<Product>> {
        match self.load_snapshot().await {
            Ok(Some(catalog)) => {
                debug!(count = catalog.len(), "Loaded catalog snapshot");
                Some(catalog)
            }
            Ok(None) => {
                debug!("No catalog snapshot cached");
                None
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable catalog snapshot");
                None
            }
        }
    }

    /// Replace the snapshot with `catalog`.
    pub async fn write_snapshot(&self, catalog: &[Product]) -> Result<()> {
        let contents = serde_json::to_vec_pretty(catalog)?;
        self.store.set(SNAPSHOT_KEY, &contents).await?;
        debug!(count = catalog.len(), "Saved catalog snapshot");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                category: "coffee".to_string(),
                name: "Espresso".to_string(),
                in_stock: true,
            },
            Product {
                id: 2,
                category: "candy".to_string(),
                name: "Gum".to_string(),
                in_stock: false,
            },
        ]
    }

    #[tokio::test]
    async fn test_snapshot_roundtrip_is_exact() {
        let cache = CacheManager::new(Arc::new(MemoryStore::new()));
        cache.write_snapshot(&catalog()).await.unwrap();
        assert_eq!(cache.read_snapshot().await, Some(catalog()));
    }

    #[tokio::test]
    async fn test_snapshot_is_plain_json_array() {
        let store = MemoryStore::new();
        let cache = CacheManager::new(Arc::new(store.clone()));
        cache.write_snapshot(&catalog()).await.unwrap();

        let raw = store.get(SNAPSHOT_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[1]["inStock"], false);
    }

    #[tokio::test]
    async fn test_missing_snapshot() {
        let cache = CacheManager::new(Arc::new(MemoryStore::new()));
        assert!(cache.load_snapshot().await.unwrap().is_none());
        assert!(cache.read_snapshot().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_reads_as_absent() {
        let store = MemoryStore::new();
        store.set(SNAPSHOT_KEY, b"{not json").await.unwrap();
        let cache = CacheManager::new(Arc::new(store));
        assert!(cache.load_snapshot().await.is_err());
        assert!(cache.read_snapshot().await.is_none());
    }
}
