//! # Domain Types
//!
//! Core domain types used throughout Checkout.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                       │
//! │  │    LineItem     │          │   CouponKind    │                       │
//! │  │  ─────────────  │          │  ─────────────  │                       │
//! │  │  name           │          │  Percentage     │ wire: "percentual"    │
//! │  │  quantity       │          │  Fixed          │ wire: "fixo"          │
//! │  │  unit_price     │          └─────────────────┘                       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantities and amounts are plain `f64` values with no currency or rounding
//! semantics; fractional quantities (0.5 kg of cheese) are allowed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Line Item
// =============================================================================

/// One named entry in the cart.
///
/// ## Design Notes
/// - Fields are private: a `LineItem` is only built by
///   [`Cart::add_item`](crate::cart::Cart::add_item) after validation.
/// - Immutable once added. Changing an item means remove-and-readd.
/// - `name` is the lookup key for removal but is not unique: duplicates are
///   kept in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    name: String,
    quantity: f64,
    unit_price: f64,
}

impl LineItem {
    pub(crate) fn new(name: String, quantity: f64, unit_price: f64) -> Self {
        LineItem {
            name,
            quantity,
            unit_price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Coupon Kind
// =============================================================================

/// The discount strategy a coupon carries.
///
/// The coupon service names the kinds in Portuguese (`"percentual"`,
/// `"fixo"`); those strings are contract constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CouponKind {
    /// Discount of `amount` percent of the cart total.
    #[serde(rename = "percentual")]
    Percentage,

    /// Discount of a flat `amount`, floored at a zero total.
    #[serde(rename = "fixo")]
    Fixed,
}

impl CouponKind {
    /// Returns the value of the `tipo` field for this kind.
    pub const fn wire_name(&self) -> &'static str {
        match self {
            CouponKind::Percentage => "percentual",
            CouponKind::Fixed => "fixo",
        }
    }
}

impl fmt::Display for CouponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CouponKind::Percentage => write!(f, "percentage"),
            CouponKind::Fixed => write!(f, "fixed"),
        }
    }
}

/// Error returned when parsing an unknown coupon kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown coupon kind: '{0}'. Valid options: percentage, fixed")]
pub struct ParseCouponKindError(pub String);

impl FromStr for CouponKind {
    type Err = ParseCouponKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "percentage" | "percent" | "percentual" => Ok(CouponKind::Percentage),
            "fixed" | "fixo" => Ok(CouponKind::Fixed),
            other => Err(ParseCouponKindError(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
