//! # Client Error Types
//!
//! Error types for the inventory endpoint client.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Transport / decode error (reqwest::Error)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (this module) ← Adds which step failed                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Page controller decides:                                               │
//! │    search errors   → swallowed, suggestions stay stale                  │
//! │    delete errors   → "Error deleting items" alert                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

pub use reqwest::StatusCode;

/// Inventory endpoint client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed.
    ///
    /// ## When This Occurs
    /// - Server not running / unreachable
    /// - Connection or request timeout
    /// - TLS or DNS failure
    #[error("request failed: {source}")]
    Http {
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON.
    ///
    /// ## When This Occurs
    /// - Endpoint returned HTML (error page, login redirect)
    /// - Item payload missing required fields
    #[error("response decode failed: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    ///
    /// ## When This Occurs
    /// - 403 when deletion is not allowed
    /// - 400 on a malformed delete body
    #[error("server returned {status}")]
    Status { status: StatusCode },

    /// An endpoint path could not be joined onto the base URL.
    ///
    /// ## When This Occurs
    /// - Malformed base URL passed to `ApiConfig::parse`
    /// - A typeahead binding attribute carrying a broken path
    #[error("invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

/// Result alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Tests
// =============================================================================
