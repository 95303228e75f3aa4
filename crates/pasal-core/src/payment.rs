//! # Payment Module
//!
//! Payment methods and the field-visibility rule driven by the payment
//! selector.
//!
//! ## The Toggle Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  selector value      .cash-only fields      .online-only fields         │
//! │  ──────────────      ─────────────────      ───────────────────         │
//! │  "cash"              shown                  hidden                      │
//! │  "online"            hidden                 shown                       │
//! │  "credit"            hidden                 hidden                      │
//! │  anything else       hidden                 hidden                      │
//! │                                                                         │
//! │  No value ever shows both groups.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Payment Method
// =============================================================================

/// The payment methods the sales form knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash at the counter. The paid-amount field auto-fills with the total.
    Cash,
    /// Online transfer; shows the transaction-reference fields.
    Online,
    /// Store credit; shows no extra fields.
    Credit,
}

impl PaymentMethod {
    /// Parses a payment selector value. Unknown values are `None`; the
    /// visibility rule below still handles them (both groups hidden).
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "cash" => Some(PaymentMethod::Cash),
            "online" => Some(PaymentMethod::Online),
            "credit" => Some(PaymentMethod::Credit),
            _ => None,
        }
    }

    /// The selector value for this method.
    pub fn form_value(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Online => "online",
            PaymentMethod::Credit => "credit",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form_value())
    }
}

// =============================================================================
// Field Visibility
// =============================================================================

/// Which payment-specific field groups are visible for a selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FieldVisibility {
    /// The `.cash-only` group (paid amount, change due).
    pub cash_only: bool,
    /// The `.online-only` group (transaction reference).
    pub online_only: bool,
}

impl FieldVisibility {
    /// Visibility for a raw selector value. The comparison is exact and
    /// case-sensitive; unknown values hide both groups.
    pub fn for_value(value: &str) -> Self {
        FieldVisibility {
            cash_only: value == "cash",
            online_only: value == "online",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_shows_only_cash_fields() {
        let vis = FieldVisibility::for_value("cash");
        assert!(vis.cash_only);
        assert!(!vis.online_only);
    }

    #[test]
    fn test_online_shows_only_online_fields() {
        let vis = FieldVisibility::for_value("online");
        assert!(!vis.cash_only);
        assert!(vis.online_only);
    }

    #[test]
    fn test_credit_hides_both() {
        let vis = FieldVisibility::for_value("credit");
        assert!(!vis.cash_only);
        assert!(!vis.online_only);
    }

    #[test]
    fn test_visibility_is_mutually_exclusive() {
        for value in ["cash", "online", "credit", "", "CASH", "cash ", "voucher"] {
            let vis = FieldVisibility::for_value(value);
            assert!(
                !(vis.cash_only && vis.online_only),
                "both groups shown for {:?}",
                value
            );
        }
    }

    #[test]
    fn test_comparison_is_exact() {
        assert!(!FieldVisibility::for_value("Cash").cash_only);
        assert!(!FieldVisibility::for_value(" cash").cash_only);
    }

    #[test]
    fn test_from_form_value() {
        assert_eq!(PaymentMethod::from_form_value("cash"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::from_form_value("online"), Some(PaymentMethod::Online));
        assert_eq!(PaymentMethod::from_form_value("credit"), Some(PaymentMethod::Credit));
        assert_eq!(PaymentMethod::from_form_value("voucher"), None);
    }

    #[test]
    fn test_display_round_trip() {
        for method in [PaymentMethod::Cash, PaymentMethod::Online, PaymentMethod::Credit] {
            assert_eq!(PaymentMethod::from_form_value(&method.to_string()), Some(method));
        }
    }
}
