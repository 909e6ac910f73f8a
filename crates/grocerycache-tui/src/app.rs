//! Application state for the grocerycache storefront.
//!
//! `App` owns the selected category and mirrors the loader's published
//! `RetrievalState`. Loads run as background Tokio tasks; the main loop
//! picks up their results through the loader's watch channel.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use grocerycache_core::{CatalogLoader, Category, Config, Phase, Product, RetrievalState};

/// Number of items to scroll on page up/down.
pub const PAGE_SCROLL_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    Quitting,
}

pub struct App {
    pub config: Config,
    loader: Arc<CatalogLoader>,
    state_rx: watch::Receiver<RetrievalState>,

    pub state: AppState,
    pub category: Category,
    pub retrieval: RetrievalState,
    pub selection: usize,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config, loader: Arc<CatalogLoader>) -> Self {
        let category = config.initial_category();
        let state_rx = loader.subscribe();
        let retrieval = RetrievalState::loading(category.as_str());
        debug!(%category, "App created");

        Self {
            config,
            loader,
            state_rx,
            state: AppState::Normal,
            category,
            retrieval,
            selection: 0,
            status_message: None,
        }
    }

    /// Start loading the current category in the background.
    /// Completion is observed through `check_background_tasks`.
    pub fn reload(&mut self) {
        info!(category = %self.category, "Loading category");
        self.status_message = None;
        self.retrieval = RetrievalState::loading(self.category.as_str());
        // Detached; the loader publishes the settled state itself.
        drop(self.loader.spawn_load(self.category.as_str()));
    }

    /// Switch to `category` and load it. Reselecting the current category reloads it.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.selection = 0;
        self.reload();
    }

    pub fn next_category(&mut self) {
        self.select_category(self.category.next());
    }

    pub fn prev_category(&mut self) {
        self.select_category(self.category.prev());
    }

    /// Save the selected category so the next launch opens on it.
    pub fn remember_category(&mut self) {
        self.config.last_category = Some(self.category.as_str().to_string());
        if let Err(e) = self.config.save() {
            warn!(error = %e, "Failed to save config");
            self.status_message = Some("Could not save settings".to_string());
        }
    }

    /// Pull the latest published state from the loader, if it changed.
    pub fn check_background_tasks(&mut self) {
        match self.state_rx.has_changed() {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                warn!(error = %e, "Catalog loader went away");
                return;
            }
        }

        let latest = self.state_rx.borrow_and_update().clone();
        // The loader only publishes its newest request, but that request can
        // still predate the category shown here.
        if latest.category != self.category.as_str() {
            debug!(category = %latest.category, "Ignoring state for another category");
            return;
        }

        self.retrieval = latest;
        self.clamp_selection();
    }

    /// Products to show; empty unless the current load is ready.
    pub fn products(&self) -> &[Product] {
        match self.retrieval.phase {
            Phase::Ready => &self.retrieval.items,
            Phase::Loading | Phase::Failed => &[],
        }
    }

    pub fn select_next(&mut self, step: usize) {
        let len = self.products().len();
        if len > 0 {
            self.selection = (self.selection + step).min(len - 1);
        }
    }

    pub fn select_prev(&mut self, step: usize) {
        self.selection = self.selection.saturating_sub(step);
    }

    pub fn select_last(&mut self) {
        self.selection = self.products().len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.products().len();
        self.selection = self.selection.min(len.saturating_sub(1));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use grocerycache_core::{ApiClient, CacheManager, MemoryStore, OFFLINE_MESSAGE};

    fn product(id: i64, category: &str) -> Product {
        Product {
            id,
            category: category.to_string(),
            name: format!("Product {}", id),
            in_stock: id % 2 == 0,
        }
    }

    /// An app whose network always fails, backed by an in-memory snapshot.
    async fn offline_app(snapshot: Option<Vec<Product>>) -> App {
        let store = MemoryStore::new();
        let cache = CacheManager::new(Arc::new(store));
        if let Some(catalog) = snapshot {
            cache.write_snapshot(&catalog).await.unwrap();
        }
        // Port 1 on loopback refuses connections immediately
        let api = ApiClient::with_base_url("http://127.0.0.1:1/products").unwrap();
        let loader = Arc::new(CatalogLoader::new(Arc::new(api), cache));
        App::new(Config::default(), loader)
    }

    /// Wait until the loader has settled the shown category, then pick it up.
    async fn settle(app: &mut App) {
        let category = app.category.as_str().to_string();
        app.loader
            .subscribe()
            .wait_for(|s| s.category == category && s.is_settled())
            .await
            .unwrap();
        app.check_background_tasks();
    }

    #[tokio::test]
    async fn test_starts_loading_default_category() {
        let app = offline_app(None).await;
        assert_eq!(app.category, Category::Coffee);
        assert_eq!(app.retrieval.phase, Phase::Loading);
        assert!(app.products().is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_surfaces_offline_message() {
        let mut app = offline_app(None).await;
        app.reload();
        assert_eq!(app.retrieval.phase, Phase::Loading);
        settle(&mut app).await;

        assert_eq!(app.retrieval.phase, Phase::Failed);
        assert_eq!(app.retrieval.message.as_deref(), Some(OFFLINE_MESSAGE));
    }

    #[tokio::test]
    async fn test_switching_category_serves_snapshot() {
        let snapshot = vec![product(1, "coffee"), product(2, "candy"), product(3, "candy")];
        let mut app = offline_app(Some(snapshot)).await;

        app.next_category();
        settle(&mut app).await;

        assert_eq!(app.category, Category::Candy);
        assert_eq!(app.retrieval.phase, Phase::Ready);
        assert!(app.retrieval.from_cache);
        let ids: Vec<i64> = app.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_selection_is_clamped() {
        let snapshot = vec![product(1, "coffee"), product(2, "coffee"), product(3, "coffee")];
        let mut app = offline_app(Some(snapshot)).await;
        app.reload();
        settle(&mut app).await;

        app.select_next(PAGE_SCROLL_SIZE);
        assert_eq!(app.selection, 2);
        app.select_prev(1);
        assert_eq!(app.selection, 1);
        app.select_prev(PAGE_SCROLL_SIZE);
        assert_eq!(app.selection, 0);
        app.select_last();
        assert_eq!(app.selection, 2);

        app.select_next(2);
        app.prev_category();
        settle(&mut app).await;
        assert_eq!(app.category, Category::FreshProduce);
        assert_eq!(app.selection, 0);
        assert!(app.products().is_empty());
    }
}
