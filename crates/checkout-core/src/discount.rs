//! # Discount Strategies
//!
//! Pure functions turning a cart total and a validated coupon amount into
//! the discounted total.
//!
//! ```text
//! Percentage:  total × (100 − p) / 100      (not clamped; p > 100 goes negative)
//! Fixed:       max(total − f, 0)
//! ```

use crate::types::CouponKind;

/// Applies a percentage discount of `percent` to `total`.
///
/// No clamping is applied: a coupon above 100% yields a negative total.
pub fn apply_percentage(total: f64, percent: f64) -> f64 {
    total * (100.0 - percent) / 100.0
}

/// Applies a fixed discount of `amount` to `total`, never going below zero.
pub fn apply_fixed(total: f64, amount: f64) -> f64 {
    let discounted = total - amount;
    if discounted >= 0.0 {
        discounted
    } else {
        0.0
    }
}

/// Applies a discount of the given kind.
pub fn apply(kind: CouponKind, total: f64, amount: f64) -> f64 {
    match kind {
        CouponKind::Percentage => apply_percentage(total, amount),
        CouponKind::Fixed => apply_fixed(total, amount),
    }
}
