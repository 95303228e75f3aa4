//! # Item Module
//!
//! The inventory item as the search endpoints return it, plus the label
//! and matching rules the add-to-cart flow applies to it.
//!
//! ## Where Item Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /inventory/items?q=...  ──►  Vec<Item>                             │
//! │                                      │                                  │
//! │          ┌───────────────────────────┴─────────────────────┐            │
//! │          ▼                                                 ▼            │
//! │   suggestion_label()                              matches_selection()   │
//! │   "A1 | Apple | Acme"                             picks the item the    │
//! │   shown in the datalist                           user committed to     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item Type
// =============================================================================

/// One inventory item as returned by the search endpoints.
///
/// The server sends plain JSON numbers for price and tax rate; quantities
/// may be fractional (items sold by weight), so everything numeric is `f64`.
/// `supplier` and `stock_qty` default when absent because the server emits
/// an empty string / zero for items without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Stock Keeping Unit - business identifier and identity key.
    pub sku: String,

    /// Display name shown in suggestions and cart rows.
    pub name: String,

    /// Supplier name, empty when the item has none.
    #[serde(default)]
    pub supplier: String,

    /// Unit sale price.
    pub sale_price: f64,

    /// Tax rate as a percentage (5 = 5%).
    pub tax_rate: f64,

    /// Current stock level.
    #[serde(default)]
    pub stock_qty: f64,
}

impl Item {
    /// Label shown for this item in a typeahead suggestion list.
    pub fn suggestion_label(&self) -> String {
        format!("{} | {} | {}", self.sku, self.name, self.supplier)
    }

    /// The `"<sku> | <name>"` reconstruction used to match a committed
    /// add-input value back to an item.
    pub fn selection_label(&self) -> String {
        format!("{} | {}", self.sku, self.name)
    }

    /// Whether a committed add-input value selects this item.
    ///
    /// Matches when the candidate sku equals this item's sku exactly, or
    /// when the raw (trimmed) input is the verbatim `"<sku> | <name>"`
    /// reconstruction.
    pub fn matches_selection(&self, candidate_sku: &str, raw: &str) -> bool {
        self.sku == candidate_sku || self.selection_label() == raw
    }
}

/// Extracts the candidate sku from a committed add-input value: the text
/// before the first `|`, trimmed.
///
/// ## Example
/// ```rust
/// use pasal_core::item::candidate_sku;
///
/// assert_eq!(candidate_sku("A1 | Apple | Acme"), "A1");
/// assert_eq!(candidate_sku("A1"), "A1");
/// assert_eq!(candidate_sku(""), "");
/// ```
pub fn candidate_sku(raw: &str) -> &str {
    raw.split('|').next().unwrap_or(raw).trim()
}

// =============================================================================
// Tests
// =============================================================================
