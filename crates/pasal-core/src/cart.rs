//! # Cart Rows and Totals
//!
//! The cart table as the page sees it: one row per sku, each row holding
//! the exact text of its display cells and quantity input, plus the pure
//! totals recompute that runs after every mutation.
//!
//! ## Why Rows Store Text
//! The cart lives in a table whose price and tax cells are written once at
//! insert time and whose quantity is a free-text input the user can edit
//! to anything. Totals are therefore *always* recomputed by re-reading
//! those strings defensively (unparsable → 0), never from cached numbers.
//! Keeping the strings in the row makes the recompute behave exactly like
//! the rendered table, junk input included.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Row Operations                                │
//! │                                                                         │
//! │  Page Event               Cart Change             Then                  │
//! │  ───────────              ───────────             ────                  │
//! │                                                                         │
//! │  Selection commit ──────► add_or_merge()  ──────► recompute totals     │
//! │                           (one row per sku)                             │
//! │                                                                         │
//! │  Remove click ──────────► remove()        ──────► recompute totals     │
//! │                                                                         │
//! │  Quantity edit ─────────► set_quantity_text() ──► recompute totals     │
//! │                           (after 100ms quiet)                           │
//! │                                                                         │
//! │  Discount edit ─────────► (text kept by page) ──► recompute totals     │
//! │                           (after 80ms quiet)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::{format_amount, format_number, parse_num};

// =============================================================================
// Cart Row
// =============================================================================

/// One line item of the cart table.
///
/// ## Design Notes
/// - `price_text` / `tax_text`: the display cells, formatted to two
///   decimals when the row is created and never rewritten afterwards
/// - `qty_text`: the raw quantity input text; merges rewrite it, user
///   edits replace it verbatim
/// - Numeric reads re-parse the text on every call, so a row with a
///   mangled quantity simply contributes zero to the totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartRow {
    /// Sku this row represents (row identity).
    pub sku: String,

    /// Item name at time of adding.
    pub name: String,

    /// Unit price display cell, two decimals.
    pub price_text: String,

    /// Tax rate display cell, two decimals.
    pub tax_text: String,

    /// Quantity input text, as typed or as written by a merge.
    pub qty_text: String,
}

impl CartRow {
    /// Creates a row the way the table renders one: price and tax
    /// formatted to two decimals, quantity written as a plain number.
    pub fn new(sku: &str, name: &str, price: f64, tax_rate: f64, qty: f64) -> Self {
        CartRow {
            sku: sku.to_string(),
            name: name.to_string(),
            price_text: format_amount(price),
            tax_text: format_amount(tax_rate),
            qty_text: format_number(qty),
        }
    }

    /// Unit price re-read from the display cell.
    pub fn unit_price(&self) -> f64 {
        parse_num(&self.price_text)
    }

    /// Tax rate percentage re-read from the display cell.
    pub fn tax_rate(&self) -> f64 {
        parse_num(&self.tax_text)
    }

    /// Quantity re-read from the input text.
    pub fn quantity(&self) -> f64 {
        parse_num(&self.qty_text)
    }

    /// Name of this row's quantity form field (`qty_<sku>`).
    pub fn qty_field_name(&self) -> String {
        format!("qty_{}", self.sku)
    }

    /// The hidden marker form field (`sku_<sku>`, value `on`) that tells
    /// the checkout endpoint this row exists.
    pub fn marker_field(&self) -> (String, String) {
        (format!("sku_{}", self.sku), "on".to_string())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart table body.
///
/// ## Invariants
/// - Rows are unique by `sku` (adding the same sku merges quantities)
/// - Row order is insertion order, matching the rendered table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Rows in table order.
    rows: Vec<CartRow>,
}

/// What `add_or_merge` did with the incoming item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new row was appended.
    Inserted,
    /// An existing row's quantity was incremented.
    Merged,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { rows: Vec::new() }
    }

    /// Creates a cart from rows already on the page (server-rendered).
    pub fn from_rows(rows: Vec<CartRow>) -> Self {
        Cart { rows }
    }

    /// Adds an item to the cart, merging into an existing row when the
    /// sku is already present.
    ///
    /// ## Behavior
    /// - Row exists: its quantity text is re-parsed (invalid → 0),
    ///   `qty` is added, and the sum is written back. No new row.
    /// - No row: appends one with `qty` as the initial quantity.
    ///
    /// Totals are not touched here; the caller recomputes after.
    pub fn add_or_merge(
        &mut self,
        sku: &str,
        name: &str,
        price: f64,
        tax_rate: f64,
        qty: f64,
    ) -> AddOutcome {
        if let Some(row) = self.rows.iter_mut().find(|r| r.sku == sku) {
            let current = parse_num(&row.qty_text);
            row.qty_text = format_number(current + qty);
            return AddOutcome::Merged;
        }

        self.rows.push(CartRow::new(sku, name, price, tax_rate, qty));
        AddOutcome::Inserted
    }

    /// Removes the row for `sku`. Returns whether a row was removed.
    pub fn remove(&mut self, sku: &str) -> bool {
        let initial_len = self.rows.len();
        self.rows.retain(|r| r.sku != sku);
        self.rows.len() != initial_len
    }

    /// Replaces the quantity text of the row for `sku` with whatever the
    /// user typed. Returns whether the row exists.
    pub fn set_quantity_text(&mut self, sku: &str, text: &str) -> bool {
        if let Some(row) = self.rows.iter_mut().find(|r| r.sku == sku) {
            row.qty_text = text.to_string();
            true
        } else {
            false
        }
    }

    /// Returns the row for `sku`, if present.
    pub fn row(&self, sku: &str) -> Option<&CartRow> {
        self.rows.iter().find(|r| r.sku == sku)
    }

    /// Rows in table order.
    pub fn rows(&self) -> &[CartRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks if the cart has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The form fields a checkout submit would carry for these rows:
    /// `sku_<sku>=on` and `qty_<sku>=<quantity text>` per row, in order.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(self.rows.len() * 2);
        for row in &self.rows {
            fields.push(row.marker_field());
            fields.push((row.qty_field_name(), row.qty_text.clone()));
        }
        fields
    }

    /// Recomputes the cart totals from current row text.
    ///
    /// ## Algorithm
    /// For every row, re-parse price, tax rate, and quantity (invalid → 0):
    /// ```text
    ///   subtotal = Σ price × qty
    ///   tax      = Σ price × qty × (rate / 100)
    ///   total    = subtotal + tax − discount
    /// ```
    /// `discount_text` is the discount input's raw text, parsed the same
    /// defensive way.
    pub fn totals(&self, discount_text: &str) -> Totals {
        let mut subtotal = 0.0;
        let mut tax = 0.0;

        for row in &self.rows {
            let price = row.unit_price();
            let qty = row.quantity();
            let rate = row.tax_rate();
            subtotal += price * qty;
            tax += (price * qty) * (rate / 100.0);
        }

        let discount = parse_num(discount_text);
        Totals {
            subtotal,
            tax,
            discount,
            total: subtotal + tax - discount,
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Derived totals, recomputed from row text on every mutation and never
/// stored between recomputes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Totals {
    /// Σ price × qty over all rows.
    pub subtotal: f64,
    /// Σ line tax over all rows.
    pub tax: f64,
    /// User-entered discount, defensively parsed.
    pub discount: f64,
    /// subtotal + tax − discount.
    pub total: f64,
}

impl Totals {
    /// All-zero totals, what an empty cart with no discount computes.
    pub fn zero() -> Self {
        Totals {
            subtotal: 0.0,
            tax: 0.0,
            discount: 0.0,
            total: 0.0,
        }
    }

    /// Subtotal display text, two decimals.
    pub fn subtotal_text(&self) -> String {
        format_amount(self.subtotal)
    }

    /// Tax display text, two decimals.
    pub fn tax_text(&self) -> String {
        format_amount(self.tax)
    }

    /// Discount display text, two decimals.
    pub fn discount_text(&self) -> String {
        format_amount(self.discount)
    }

    /// Total display text, two decimals.
    pub fn total_text(&self) -> String {
        format_amount(self.total)
    }
}

impl Default for Totals {
    fn default() -> Self {
        Totals::zero()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn apple(cart: &mut Cart, qty: f64) -> AddOutcome {
        cart.add_or_merge("A1", "Apple", 10.0, 5.0, qty)
    }

    #[test]
    fn test_add_first_item_scenario() {
        // sku A1, price 10, tax 5%, qty 2
        let mut cart = Cart::new();
        assert_eq!(apple(&mut cart, 2.0), AddOutcome::Inserted);

        let totals = cart.totals("");
        assert_eq!(totals.subtotal_text(), "20.00");
        assert_eq!(totals.tax_text(), "1.00");
        assert_eq!(totals.total_text(), "21.00");
    }

    #[test]
    fn test_merge_same_sku_scenario() {
        // Adding A1 again with qty 3 leaves one row with quantity 5
        let mut cart = Cart::new();
        apple(&mut cart, 2.0);
        assert_eq!(apple(&mut cart, 3.0), AddOutcome::Merged);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.row("A1").unwrap().qty_text, "5");

        let totals = cart.totals("");
        assert_eq!(totals.subtotal_text(), "50.00");
        assert_eq!(totals.tax_text(), "2.50");
        assert_eq!(totals.total_text(), "52.50");
    }

    #[test]
    fn test_discount_scenario() {
        let mut cart = Cart::new();
        apple(&mut cart, 5.0);

        let totals = cart.totals("5");
        assert_eq!(totals.discount_text(), "5.00");
        assert_eq!(totals.total_text(), "47.50");
    }

    #[test]
    fn test_remove_only_row_scenario() {
        let mut cart = Cart::new();
        apple(&mut cart, 2.0);
        assert!(cart.remove("A1"));

        assert!(cart.is_empty());
        let totals = cart.totals("");
        assert_eq!(totals.subtotal_text(), "0.00");
        assert_eq!(totals.tax_text(), "0.00");
        assert_eq!(totals.total_text(), "0.00");
    }

    #[test]
    fn test_remove_missing_sku_is_noop() {
        let mut cart = Cart::new();
        apple(&mut cart, 1.0);
        assert!(!cart.remove("ZZ"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_merge_sum_property() {
        // Any sequence of adds for one sku keeps exactly one row whose
        // quantity is the sum of all quantities passed.
        let quantities = [1.0, 2.5, 0.5, 3.0];
        let mut cart = Cart::new();
        for qty in quantities {
            apple(&mut cart, qty);
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.row("A1").unwrap().quantity(), 7.0);
    }

    #[test]
    fn test_merge_treats_mangled_quantity_as_zero() {
        // A user can type anything into the quantity input; merging into
        // a mangled row starts from zero rather than failing.
        let mut cart = Cart::new();
        apple(&mut cart, 2.0);
        cart.set_quantity_text("A1", "lots");
        apple(&mut cart, 3.0);

        assert_eq!(cart.row("A1").unwrap().qty_text, "3");
    }

    #[test]
    fn test_totals_invariant_across_mutations() {
        let mut cart = Cart::new();
        let discounts = ["", "5", "abc", "2.5"];

        let check = |cart: &Cart| {
            for discount in discounts {
                let t = cart.totals(discount);
                assert!((t.total - (t.subtotal + t.tax - t.discount)).abs() < 1e-9);
            }
        };

        check(&cart);
        apple(&mut cart, 2.0);
        check(&cart);
        cart.add_or_merge("B2", "Bread", 3.5, 0.0, 1.0);
        check(&cart);
        cart.set_quantity_text("A1", "junk");
        check(&cart);
        cart.remove("B2");
        check(&cart);
        cart.remove("A1");
        check(&cart);
    }

    #[test]
    fn test_fractional_quantities() {
        // Items sold by weight: 0.25 at 4.00/kg, 10% tax
        let mut cart = Cart::new();
        cart.add_or_merge("W1", "Rice", 4.0, 10.0, 0.25);

        let totals = cart.totals("");
        assert_eq!(totals.subtotal_text(), "1.00");
        assert_eq!(totals.tax_text(), "0.10");
        assert_eq!(totals.total_text(), "1.10");
    }

    #[test]
    fn test_unparsable_quantity_counts_as_zero() {
        let mut cart = Cart::new();
        apple(&mut cart, 2.0);
        cart.set_quantity_text("A1", "lots");

        let totals = cart.totals("");
        assert_eq!(totals.subtotal_text(), "0.00");
        assert_eq!(totals.total_text(), "0.00");
    }

    #[test]
    fn test_unparsable_discount_counts_as_zero() {
        let mut cart = Cart::new();
        apple(&mut cart, 2.0);

        let totals = cart.totals("gift");
        assert_eq!(totals.discount, 0.0);
        assert_eq!(totals.total_text(), "21.00");
    }

    #[test]
    fn test_discount_can_push_total_negative() {
        let mut cart = Cart::new();
        apple(&mut cart, 1.0);

        let totals = cart.totals("100");
        assert_eq!(totals.total_text(), "-89.50");
    }

    #[test]
    fn test_row_renders_display_text() {
        let row = CartRow::new("A1", "Apple", 10.0, 5.0, 2.0);
        assert_eq!(row.price_text, "10.00");
        assert_eq!(row.tax_text, "5.00");
        assert_eq!(row.qty_text, "2");
    }

    #[test]
    fn test_form_fields() {
        let mut cart = Cart::new();
        apple(&mut cart, 2.0);
        cart.add_or_merge("B2", "Bread", 3.5, 0.0, 1.0);

        assert_eq!(
            cart.form_fields(),
            vec![
                ("sku_A1".to_string(), "on".to_string()),
                ("qty_A1".to_string(), "2".to_string()),
                ("sku_B2".to_string(), "on".to_string()),
                ("qty_B2".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_rows_preserves_server_rendered_state() {
        let cart = Cart::from_rows(vec![
            CartRow::new("A1", "Apple", 10.0, 5.0, 2.0),
            CartRow::new("B2", "Bread", 3.5, 0.0, 1.0),
        ]);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.totals("").subtotal_text(), "23.50");
    }
}
