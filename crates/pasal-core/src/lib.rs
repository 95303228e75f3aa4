//! # pasal-core: Pure View Logic for the Pasal Shop Pages
//!
//! This crate is the **heart** of the Pasal page controllers. It contains
//! every rule the cart page applies as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pasal Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Shell (webview / frontend)                     │   │
//! │  │    typing ──► add input ──► cart table ──► totals display      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ events in, view snapshots out          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 pasal-pages (controllers)                       │   │
//! │  │    debounce timers, typeahead actor, cart page actor           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ pasal-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  numeric  │  │   item    │  │   cart    │  │  payment  │  │   │
//! │  │   │ parse_num │  │   Item    │  │   Cart    │  │  methods  │  │   │
//! │  │   │ formatting│  │  labels   │  │  Totals   │  │ visibility│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  pasal-api (HTTP client)                        │   │
//! │  │           inventory search GET, bulk-delete POST                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`numeric`] - Defensive parsing and two-decimal display formatting
//! - [`item`] - The inventory item wire type and selection matching
//! - [`cart`] - Cart rows, merge-by-sku, totals recompute
//! - [`payment`] - Payment methods and field visibility
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, timers, and dialogs are FORBIDDEN here
//! 3. **Defensive Numbers**: Malformed text coerces to zero, it never errors
//! 4. **Text Is Truth**: Rows keep their display strings; totals re-read them
//!
//! ## Example Usage
//!
//! ```rust
//! use pasal_core::cart::Cart;
//!
//! let mut cart = Cart::new();
//! cart.add_or_merge("A1", "Apple", 10.0, 5.0, 2.0);
//! cart.add_or_merge("A1", "Apple", 10.0, 5.0, 3.0); // merges, one row
//!
//! let totals = cart.totals("5");
//! assert_eq!(totals.total_text(), "47.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod item;
pub mod numeric;
pub mod payment;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pasal_core::Cart` instead of
// `use pasal_core::cart::Cart`

pub use cart::{AddOutcome, Cart, CartRow, Totals};
pub use item::{candidate_sku, Item};
pub use numeric::{format_amount, format_number, parse_num};
pub use payment::{FieldVisibility, PaymentMethod};
