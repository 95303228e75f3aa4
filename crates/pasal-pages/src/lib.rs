//! # pasal-pages: Page Controllers for the Pasal Shop
//!
//! The interactive behavior of the shop pages, headless. A host shell
//! (webview, desktop wrapper, test harness) forwards DOM events to a
//! controller handle and renders the view snapshots it hands back;
//! everything between those two edges lives here.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Page Controllers                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Shell (host UI)                             │   │
//! │  │   events: typing, commits, clicks, select changes               │   │
//! │  │   dialogs: alert / confirm / reload  (PageShell trait)          │   │
//! │  └───────┬─────────────────────────────────────────────▲───────────┘   │
//! │          │ commands                          CartView  │               │
//! │  ┌───────▼─────────────────────────────────────────────┴───────────┐   │
//! │  │                    one actor per page                           │   │
//! │  │                                                                 │   │
//! │  │   cart page     CartPage: rows, totals, typeahead, payment      │   │
//! │  │   list page     Typeahead + InventoryPanel (bulk delete)        │   │
//! │  │                                                                 │   │
//! │  │   debounce      250ms suggestions · 150ms selection             │   │
//! │  │   slots         100ms quantity    ·  80ms discount              │   │
//! │  └───────┬─────────────────────────────────────────────────────────┘   │
//! │          │ GET suggestions / selection, POST bulk delete               │
//! │  ┌───────▼─────────────────────────────────────────────────────────┐   │
//! │  │                  pasal-api (InventoryApi)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One actor task per page serializes every mutation, so handlers run
//! to completion in arrival order, exactly like single-threaded event
//! dispatch in a browser.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pasal_api::{ApiConfig, InventoryClient};
//! use pasal_pages::{CartPage, CartPageConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(InventoryClient::new(ApiConfig::default())?);
//! let cart = CartPage::new(CartPageConfig::default(), client).start();
//!
//! cart.input_add_item("A1 | Apple | Acme").await?;
//! cart.commit_add_item().await?;
//! let view = cart.view().await?;
//! # Ok(())
//! # }
//! ```

use tracing::Level;
use tracing_subscriber::EnvFilter;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod debounce;
pub mod error;
pub mod inventory;
pub mod shell;
pub mod typeahead;
pub mod view;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{
    CartPage, CartPageConfig, CartPageHandle, DEFAULT_DISCOUNT_WAIT_MS,
    DEFAULT_QUANTITY_WAIT_MS, DEFAULT_SELECTION_WAIT_MS,
};
pub use debounce::Debouncer;
pub use error::{PageError, PageResult};
pub use inventory::{
    DeleteOutcome, InventoryPanel, ItemCheckbox, CONFIRM_DELETE_PROMPT,
    DELETE_FAILED_ALERT, NO_ITEMS_SELECTED_ALERT,
};
pub use shell::PageShell;
pub use typeahead::{
    Suggestion, Typeahead, TypeaheadConfig, TypeaheadHandle, TypeaheadState,
    DEFAULT_TYPEAHEAD_WAIT_MS,
};
pub use view::CartView;

// =============================================================================
// Logging
// =============================================================================

/// Initializes the tracing subscriber for a host shell.
///
/// ## Filter
/// - Respects `RUST_LOG` when set
/// - Default: INFO, with page and client internals at DEBUG
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pasal_pages=debug,pasal_api=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
