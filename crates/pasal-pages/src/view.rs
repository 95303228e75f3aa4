//! # Cart View
//!
//! The serializable snapshot a rendering layer binds to, plus the
//! element ids, classes, and attributes that layer is expected to wire
//! up. Controllers never touch a DOM; they publish [`CartView`]
//! snapshots and the host template maps each field onto the element
//! named here.

use serde::Serialize;
use ts_rs::TS;

use pasal_core::{CartRow, FieldVisibility};

use crate::typeahead::Suggestion;

// =============================================================================
// Element Contract
// =============================================================================

/// Table whose `<tbody>` holds one row per cart line.
pub const CART_TABLE_ID: &str = "dynamic-cart-table";

/// Free-text input the add-item typeahead is bound to.
pub const ADD_ITEM_INPUT_ID: &str = "add_item_input";

/// Order-level discount amount input.
pub const DISCOUNT_INPUT_ID: &str = "discount_input";

/// Amount-paid input, autofilled for cash orders.
pub const PAID_AMOUNT_ID: &str = "paid_amount";

/// Running subtotal readout.
pub const CART_SUBTOTAL_ID: &str = "cart_subtotal";

/// Running tax readout.
pub const CART_TAX_ID: &str = "cart_tax";

/// Applied discount readout.
pub const CART_DISCOUNT_ID: &str = "cart_discount";

/// Grand total readout.
pub const CART_TOTAL_ID: &str = "cart_total";

/// Payment method `<select>`.
pub const PAYMENT_METHOD_ID: &str = "payment_method";

/// Invert-selection button on the inventory list.
pub const SELECT_ITEMS_ID: &str = "select_items";

/// Check-all / uncheck-all toggle on the inventory list.
pub const TOGGLE_ALL_ID: &str = "toggle_all";

/// Delete-selected button on the inventory list.
pub const DELETE_SELECTED_ID: &str = "delete_selected";

/// Class of the per-row checkboxes on the inventory list.
pub const ITEM_CHECKBOX_CLASS: &str = "item-checkbox";

/// Class of elements shown only for cash payment.
pub const CASH_ONLY_CLASS: &str = "cash-only";

/// Class of elements shown only for online payment.
pub const ONLINE_ONLY_CLASS: &str = "online-only";

/// Attribute naming the endpoint path a typeahead input is bound to.
pub const TYPEAHEAD_ATTR: &str = "data-typeahead";

// =============================================================================
// Cart View
// =============================================================================

/// Snapshot of everything the cart template renders. All amounts are
/// the display strings the controller maintains, not re-derived
/// numbers, so a snapshot taken mid-debounce shows exactly what the
/// screen shows.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    /// Cart lines in insertion order.
    pub rows: Vec<CartRow>,

    /// Current add-item suggestion list.
    pub suggestions: Vec<Suggestion>,

    /// Text sitting in the add-item input.
    pub add_input: String,

    /// Text sitting in the discount input.
    pub discount_input: String,

    /// Text sitting in the paid-amount input.
    pub paid_amount: String,

    /// Raw payment method form value.
    pub payment_method: String,

    /// Which payment-conditional field groups are shown.
    pub visibility: FieldVisibility,

    /// Subtotal readout, two decimals.
    pub subtotal: String,

    /// Tax readout, two decimals.
    pub tax: String,

    /// Discount readout, two decimals.
    pub discount: String,

    /// Grand total readout, two decimals.
    pub total: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_serializes_camel_case() {
        let view = CartView {
            rows: Vec::new(),
            suggestions: Vec::new(),
            add_input: String::new(),
            discount_input: String::new(),
            paid_amount: "0.00".to_string(),
            payment_method: "cash".to_string(),
            visibility: FieldVisibility::for_value("cash"),
            subtotal: "0.00".to_string(),
            tax: "0.00".to_string(),
            discount: "0.00".to_string(),
            total: "0.00".to_string(),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["addInput"], "");
        assert_eq!(json["paidAmount"], "0.00");
        assert_eq!(json["paymentMethod"], "cash");
        assert_eq!(json["visibility"]["cashOnly"], true);
        assert_eq!(json["visibility"]["onlineOnly"], false);
    }
}
