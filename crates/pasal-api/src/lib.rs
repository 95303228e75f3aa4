//! # pasal-api: Inventory Endpoints Client
//!
//! The HTTP layer of Pasal: a small reqwest client for the two JSON
//! endpoints the shop pages call, behind a trait so page controllers can
//! be tested without a server.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   pasal-pages controllers                                               │
//! │        │                                                                │
//! │        │ Arc<dyn InventoryApi>                                          │
//! │        ▼                                                                │
//! │   ┌──────────────────────────────────────────────┐                      │
//! │   │          ★ pasal-api (THIS CRATE) ★          │                      │
//! │   │                                              │                      │
//! │   │   ApiConfig ──► InventoryClient (reqwest)    │                      │
//! │   │                   │                          │                      │
//! │   │                   ├── search(path, q)        │                      │
//! │   │                   └── delete_items(ids)      │                      │
//! │   └──────────────────┬───────────────────────────┘                      │
//! │                      │ HTTP + JSON                                      │
//! │                      ▼                                                  │
//! │   Shop server (Flask, assumed running; NOT part of this repo)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Base URL and timeouts
//! - [`client`] - The `InventoryApi` trait and reqwest implementation
//! - [`error`] - Typed client errors

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use client::{InventoryApi, InventoryClient, ITEMS_DELETE_PATH, ITEMS_SEARCH_PATH};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
