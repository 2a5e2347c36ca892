//! # Catalog Client
//!
//! Read-only product lookups: the full listing for browsing, free-text
//! search, and barcode lookup for scanning. Prices arrive in decimal units
//! and leave here as cents inside [`Product`].

use tracing::debug;

use duka_core::Product;

use crate::config::{build_client, ApiConfig};
use crate::error::ApiResult;
use crate::http;
use crate::session::SessionContext;
use crate::wire::{ProductResponse, ProductsResponse};

/// Client for the product catalog endpoints.
pub struct CatalogClient {
    config: ApiConfig,
    client: reqwest::Client,
    session: SessionContext,
}

impl CatalogClient {
    pub fn new(config: ApiConfig, session: SessionContext) -> ApiResult<Self> {
        let client = build_client(&config)?;
        Ok(CatalogClient {
            config,
            client,
            session,
        })
    }

    /// Fetches the whole catalog.
    pub async fn all(&self) -> ApiResult<Vec<Product>> {
        let url = self.config.endpoint("/products");
        debug!(url = %url, "Fetching product catalog");

        let body: ProductsResponse =
            http::execute(self.client.get(&url).bearer_auth(&self.session.token)).await?;

        debug!(count = body.products.len(), "Catalog fetched");
        Ok(body.products.into_iter().map(Into::into).collect())
    }

    /// Searches products by name or SKU. The backend decides what matches.
    pub async fn search(&self, query: &str) -> ApiResult<Vec<Product>> {
        let url = self.config.endpoint("/products/search");
        debug!(url = %url, query = %query, "Searching products");

        let body: ProductsResponse = http::execute(
            self.client
                .get(&url)
                .query(&[("query", query)])
                .bearer_auth(&self.session.token),
        )
        .await?;

        Ok(body.products.into_iter().map(Into::into).collect())
    }

    /// Looks a product up by its barcode.
    ///
    /// ## Behavior
    /// An unknown barcode is an
    /// [`ApiError::NotFound`](crate::error::ApiError::NotFound) carrying the
    /// backend's "Product not found" message; the caller shows it and moves
    /// on.
    pub async fn by_barcode(&self, barcode: &str) -> ApiResult<Product> {
        let url = self.config.endpoint(&format!("/products/barcode/{barcode}"));
        debug!(url = %url, "Looking up barcode");

        let body: ProductResponse =
            http::execute(self.client.get(&url).bearer_auth(&self.session.token)).await?;

        Ok(body.product.into())
    }
}
