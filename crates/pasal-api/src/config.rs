//! # Client Configuration
//!
//! Where the shop server lives and how patient the client is.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Endpoint Resolution                                │
//! │                                                                         │
//! │  Shell startup                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiConfig::parse("http://127.0.0.1:5000") ← Configure base + timeouts │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryClient::new(config) ← Builds the reqwest client once         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  config.endpoint("/inventory/items")                                    │
//! │       = http://127.0.0.1:5000/inventory/items                           │
//! │                                                                         │
//! │  Endpoint paths are absolute ("/x/y"); joining replaces the base's     │
//! │  path, which is exactly how the page's binding attributes are written. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Base address the shop server listens on out of the box.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

// =============================================================================
// Configuration
// =============================================================================

/// Inventory client configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use pasal_api::config::ApiConfig;
///
/// let config = ApiConfig::parse("http://192.168.1.20:5000")
///     .unwrap()
///     .request_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the shop server.
    pub base_url: Url,

    /// Connection timeout.
    /// Default: 10 seconds
    pub connect_timeout: Duration,

    /// Whole-request timeout.
    /// Default: 30 seconds
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Creates a configuration for the given base URL with default
    /// timeouts.
    pub fn new(base_url: Url) -> Self {
        ApiConfig {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Parses a base URL string into a configuration.
    pub fn parse(base_url: &str) -> ApiResult<Self> {
        let parsed = Url::parse(base_url).map_err(|source| ApiError::InvalidEndpoint {
            endpoint: base_url.to_string(),
            source,
        })?;
        Ok(ApiConfig::new(parsed))
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the whole-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::InvalidEndpoint {
                endpoint: path.to_string(),
                source,
            })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base = Url::parse(DEFAULT_BASE_URL).expect("default base url is valid");
        ApiConfig::new(base)
    }
}

// =============================================================================
// Tests
// =============================================================================
