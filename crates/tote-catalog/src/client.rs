//! HTTP implementation of the catalog port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use url::Url;

use tote_core::{CatalogError, CatalogService, ProductDetails, ProductId, StockSnapshot};

// =============================================================================
// Configuration
// =============================================================================

/// Catalog client settings.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API. Paths are resolved relative to it, so a
    /// prefix like `https://shop.example/api` is kept.
    pub base_url: Url,

    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl CatalogConfig {
    pub fn new(base_url: Url) -> Self {
        CatalogConfig {
            base_url,
            timeout: None,
        }
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// =============================================================================
// Response Bodies
// =============================================================================

#[derive(Debug, Deserialize)]
struct StockResponse {
    amount: i64,
}

// =============================================================================
// Client
// =============================================================================

/// Catalog API client.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    /// Creates a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Request` if the HTTP client cannot be built.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        Ok(HttpCatalog {
            client,
            base_url: with_trailing_slash(config.base_url),
        })
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| CatalogError::Request(format!("invalid catalog path {path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.endpoint(path)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), path = %path, "Catalog returned error status");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    #[instrument(skip(self, id), fields(product_id = %id))]
    async fn stock(&self, id: ProductId) -> Result<StockSnapshot, CatalogError> {
        let body: StockResponse = self.get_json(&format!("/stock/{id}")).await?;
        debug!(amount = body.amount, "Fetched stock");
        if body.amount < 0 {
            warn!(amount = body.amount, "Catalog reported negative stock, treating as none");
        }

        let amount = u32::try_from(body.amount.max(0)).unwrap_or(u32::MAX);
        Ok(StockSnapshot::new(id, amount))
    }

    #[instrument(skip(self, id), fields(product_id = %id))]
    async fn product(&self, id: ProductId) -> Result<ProductDetails, CatalogError> {
        let details: ProductDetails = self.get_json(&format!("/products/{id}")).await?;
        debug!(attributes = details.attributes.len(), "Fetched product");
        Ok(details)
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

// =============================================================================
// Unit Tests
// =============================================================================
