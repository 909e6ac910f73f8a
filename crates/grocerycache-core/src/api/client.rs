//! API client for the grocery catalog service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::Product;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Endpoint serving the full product catalog
pub const DEFAULT_CATALOG_URL: &str = "https://simple-grocery-store-api.online/products";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Anything that can produce the full product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, ApiError>;
}

/// API client for the catalog service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    catalog_url: String,
}

impl ApiClient {
    /// Create a client pointed at the public catalog endpoint
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_CATALOG_URL)
    }

    /// Create a client pointed at a custom catalog URL
    pub fn with_base_url(catalog_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            catalog_url: catalog_url.into(),
        })
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_response(status, &body))
        }
    }

    /// Parse a catalog body.
    ///
    /// The body must be a JSON array. Elements that don't match the product
    /// shape are dropped so one bad record can't take down the whole list.
    /// An `id` may be a whole-valued float; fractional ids drop the record.
    pub fn parse_catalog(body: &str) -> Result<Vec<Product>, ApiError> {
        let records: Vec<Value> = serde_json::from_str(body)
            .map_err(|e| ApiError::MalformedBody(format!("Expected a JSON array of products: {}", e)))?;

        let total = records.len();
        let mut products = Vec::with_capacity(total);
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Product>(record) {
                Ok(product) => products.push(product),
                Err(e) => warn!(index, error = %e, "Dropping malformed product record"),
            }
        }

        if products.len() != total {
            debug!(kept = products.len(), total, "Catalog contained malformed records");
        }
        Ok(products)
    }
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(&self.catalog_url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let body = response.text().await?;
        let products = Self::parse_catalog(&body)?;
        debug!(url = %self.catalog_url, count = products.len(), "Fetched catalog");
        Ok(products)
    }
}

// ============================================================================
// Tests
// ============================================================================
