use serde::{Deserialize, Serialize};

use crate::models::Product;

/// The only failure text a caller ever sees.
pub const OFFLINE_MESSAGE: &str = "No data available offline.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// What the storefront should currently show for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub struct RetrievalState {
    pub category: String,
    pub phase: Phase,
    pub items: Vec<Product>,
    /// Set only when `phase` is `Failed`
    pub message: Option<String>,
    /// Served from the offline snapshot rather than the network
    pub from_cache: bool,
}

impl RetrievalState {
    pub fn loading(category: &str) -> Self {
        Self {
            category: category.to_string(),
            ..Self::default()
        }
    }

    pub fn ready(category: &str, items: Vec<Product>, from_cache: bool) -> Self {
        Self {
            category: category.to_string(),
            phase: Phase::Ready,
            items,
            message: None,
            from_cache,
        }
    }

    pub fn failed(category: &str) -> Self {
        Self {
            category: category.to_string(),
            phase: Phase::Failed,
            items: Vec::new(),
            message: Some(OFFLINE_MESSAGE.to_string()),
            from_cache: false,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.phase != Phase::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_has_no_message() {
        let state = RetrievalState::loading("coffee");
        assert_eq!(state.phase, Phase::Loading);
        assert!(state.message.is_none());
        assert!(state.items.is_empty());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_failed_carries_offline_message() {
        let state = RetrievalState::failed("dairy");
        assert_eq!(state.phase, Phase::Failed);
        assert_eq!(state.message.as_deref(), Some("No data available offline."));
        assert!(state.items.is_empty());
        assert!(state.is_settled());
    }

    #[test]
    fn test_ready_never_has_message() {
        let state = RetrievalState::ready("candy", Vec::new(), true);
        assert!(state.message.is_none());
        assert!(state.from_cache);
        assert!(state.is_settled());
    }
}
