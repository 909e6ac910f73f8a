use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::CatalogSource;
use crate::cache::CacheManager;
use crate::models::filter_by_category;

use super::RetrievalState;

/// Fetch-filter-cache pipeline behind the storefront.
///
/// Every `load` takes a fresh request token. Only the holder of the latest
/// token may publish to subscribers, so a slow response for a category the
/// user has already left never replaces the newer one.
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    cache: CacheManager,
    latest_token: AtomicU64,
    state_tx: watch::Sender<RetrievalState>,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>, cache: CacheManager) -> Self {
        let (state_tx, _) = watch::channel(RetrievalState::default());
        Self {
            source,
            cache,
            latest_token: AtomicU64::new(0),
            state_tx,
        }
    }

    /// Observe the state of the most recent request.
    pub fn subscribe(&self) -> watch::Receiver<RetrievalState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the state of the most recent request.
    pub fn current(&self) -> RetrievalState {
        self.state_tx.borrow().clone()
    }

    /// Run `load` on the Tokio runtime without waiting for it.
    pub fn spawn_load(self: &Arc<Self>, category: impl Into<String>) -> JoinHandle<RetrievalState> {
        let loader = Arc::clone(self);
        let category = category.into();
        tokio::spawn(async move { loader.load(&category).await })
    }

    /// Load `category`, returning this request's settled state.
    ///
    /// The returned state is always this request's own result, even when a
    /// newer request has since taken over what subscribers see.
    pub async fn load(&self, category: &str) -> RetrievalState {
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, category, "Loading catalog");
        self.publish(token, RetrievalState::loading(category));

        match self.source.fetch_catalog().await {
            Ok(catalog) => {
                let items = filter_by_category(&catalog, category);
                info!(category, count = items.len(), total = catalog.len(), "Catalog fetched");
                let state = RetrievalState::ready(category, items, false);
                self.publish(token, state.clone());

                if let Err(e) = self.cache.write_snapshot(&catalog).await {
                    warn!(error = %e, "Failed to cache catalog snapshot");
                }
                state
            }
            Err(e) => {
                warn!(category, error = %e, transient = e.is_transient(), "Catalog fetch failed, trying offline snapshot");
                let state = match self.cache.read_snapshot().await {
                    Some(catalog) => {
                        let items = filter_by_category(&catalog, category);
                        info!(category, count = items.len(), "Serving catalog from snapshot");
                        RetrievalState::ready(category, items, true)
                    }
                    None => RetrievalState::failed(category),
                };
                self.publish(token, state.clone());
                state
            }
        }
    }

    /// Whether `token` belongs to the most recently issued request.
    fn is_current(&self, token: u64) -> bool {
        self.latest_token.load(Ordering::SeqCst) == token
    }

    fn publish(&self, token: u64, state: RetrievalState) -> bool {
        // The check runs under the channel's write lock, so a newer request
        // cannot publish between it and the assignment.
        let published = self.state_tx.send_if_modified(|current| {
            if self.is_current(token) {
                *current = state;
                true
            } else {
                false
            }
        });
        if !published {
            debug!(token, "Discarding result of superseded request");
        }
        published
    }
}

// ============================================================================
// Tests
// ============================================================================
