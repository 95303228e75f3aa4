//! # Inventory Client
//!
//! The HTTP side of the shop pages: item search for typeahead and
//! add-to-cart, bulk delete for the inventory list.
//!
//! ## Request Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  search(path, q)                                                        │
//! │    GET <base><path>?q=<query>        query percent-encoded              │
//! │    200 → JSON array of Item          (server caps at 50, by name)       │
//! │                                                                         │
//! │  delete_items(ids)                                                      │
//! │    POST <base>/inventory/items/delete                                   │
//! │    body {"ids": ["3", "7"]}          Content-Type: application/json     │
//! │    2xx → Ok(())                      body ignored                       │
//! │    else → Err(Status)                403 when deletion is forbidden     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Trait Seam
//! Page controllers hold an `Arc<dyn InventoryApi>`, never the concrete
//! client, so tests substitute a scripted mock and production wires in
//! [`InventoryClient`].

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use pasal_core::Item;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// Endpoint Paths
// =============================================================================

/// Item search endpoint, also the default typeahead binding target.
pub const ITEMS_SEARCH_PATH: &str = "/inventory/items";

/// Bulk-delete endpoint.
pub const ITEMS_DELETE_PATH: &str = "/inventory/items/delete";

// =============================================================================
// Trait
// =============================================================================

/// The two inventory operations the pages perform.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Searches items: `GET <path>?q=<query>`, decoded as a JSON array.
    ///
    /// `path` is the endpoint path from the input's binding attribute;
    /// the add-to-cart flow always passes [`ITEMS_SEARCH_PATH`].
    async fn search(&self, path: &str, query: &str) -> ApiResult<Vec<Item>>;

    /// Deletes the given item ids. `Ok(())` exactly when the server
    /// answers with a 2xx status; the response body is ignored.
    async fn delete_items(&self, ids: &[String]) -> ApiResult<()>;
}

// =============================================================================
// Client
// =============================================================================

/// Reqwest-backed [`InventoryApi`] implementation.
pub struct InventoryClient {
    config: ApiConfig,
    http: reqwest::Client,
}

/// Bulk-delete request body.
#[derive(Debug, Serialize)]
struct DeleteItemsBody<'a> {
    ids: &'a [String],
}

impl InventoryClient {
    /// Builds a client for the configured base URL. The underlying HTTP
    /// client is created once and reused for every request.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|source| ApiError::Http { source })?;

        Ok(InventoryClient { config, http })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.config.endpoint(path)
    }
}

#[async_trait]
impl InventoryApi for InventoryClient {
    async fn search(&self, path: &str, query: &str) -> ApiResult<Vec<Item>> {
        let url = self.endpoint(path)?;
        debug!(%url, query, "item search");

        let response = self
            .http
            .get(url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|source| ApiError::Http { source })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "item search rejected");
            return Err(ApiError::Status { status });
        }

        let items: Vec<Item> = response
            .json()
            .await
            .map_err(|source| ApiError::Decode { source })?;
        debug!(count = items.len(), "item search results");
        Ok(items)
    }

    async fn delete_items(&self, ids: &[String]) -> ApiResult<()> {
        let url = self.endpoint(ITEMS_DELETE_PATH)?;
        debug!(count = ids.len(), "bulk delete");

        let response = self
            .http
            .post(url)
            .json(&DeleteItemsBody { ids })
            .send()
            .await
            .map_err(|source| ApiError::Http { source })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            warn!(%status, "bulk delete rejected");
            Err(ApiError::Status { status })
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delete_body_shape() {
        let ids = vec!["3".to_string(), "7".to_string()];
        let body = serde_json::to_value(DeleteItemsBody { ids: &ids }).unwrap();
        assert_eq!(body, json!({"ids": ["3", "7"]}));
    }

    #[test]
    fn test_delete_body_empty_ids() {
        let ids: Vec<String> = Vec::new();
        let body = serde_json::to_value(DeleteItemsBody { ids: &ids }).unwrap();
        assert_eq!(body, json!({"ids": []}));
    }

    #[tokio::test]
    async fn test_client_builds_with_defaults() {
        assert!(InventoryClient::new(ApiConfig::default()).is_ok());
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(ITEMS_SEARCH_PATH, "/inventory/items");
        assert_eq!(ITEMS_DELETE_PATH, "/inventory/items/delete");
    }
}
