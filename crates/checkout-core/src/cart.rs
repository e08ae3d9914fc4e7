//! # Cart
//!
//! The in-memory shopping cart and its coupon orchestration.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation                      Effect                    Kind          │
//! │  ─────────                      ──────                    ────          │
//! │                                                                         │
//! │  add_item(name, qty, price) ──► validate, items.push()    sync          │
//! │  remove_item(name) ───────────► remove first match        sync          │
//! │  list_items() ────────────────► &[LineItem] (read only)   sync          │
//! │  calculate_total() ───────────► Σ price × qty             sync          │
//! │                                                                         │
//! │  apply_percentage_coupon(gw, code) ─┐                                   │
//! │  apply_fixed_coupon(gw, code) ──────┴─► validate_coupon   async         │
//! │                                         └─► discount::apply             │
//! │                                                                         │
//! │  NOTE: One owner per cart. Coupon operations borrow the cart immutably  │
//! │        and never change its items.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::coupon::{self, CouponGateway};
use crate::discount;
use crate::error::{CartError, CartResult};
use crate::types::{CouponKind, LineItem};
use crate::validation::{validate_item_name, validate_quantity, validate_unit_price};

/// The shopping cart.
///
/// ## Invariants
/// - Every item passed validation when it was added
/// - Items keep insertion order
/// - Adding an existing name appends a second item (no merging)
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Validates and appends a line item.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CartError::InvalidInput(_))` naming the first bad argument,
    ///   checked in the order name, quantity, price. The cart is unchanged.
    pub fn add_item(&mut self, name: &str, quantity: f64, unit_price: f64) -> CartResult<()> {
        validate_item_name(name)?;
        validate_quantity(quantity)?;
        validate_unit_price(unit_price)?;

        self.items
            .push(LineItem::new(name.to_string(), quantity, unit_price));
        Ok(())
    }

    /// Removes the first item whose name matches exactly.
    ///
    /// Later items with the same name are kept.
    pub fn remove_item(&mut self, name: &str) -> CartResult<()> {
        let index = self
            .items
            .iter()
            .position(|item| item.name() == name)
            .ok_or_else(|| CartError::ItemNotFound(name.to_string()))?;

        self.items.remove(index);
        Ok(())
    }

    /// Returns the items in insertion order.
    pub fn list_items(&self) -> &[LineItem] {
        &self.items
    }

    /// Calculates `Σ unit_price × quantity`; zero for an empty cart.
    pub fn calculate_total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Returns the number of line items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> f64 {
        self.items.iter().map(LineItem::quantity).sum()
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // =========================================================================
    // Coupons
    // =========================================================================

    /// Returns the cart total discounted by a coupon of kind `kind`.
    ///
    /// ## Errors
    /// - `CouponRejected(Invalid)`: unknown code, or a coupon of another kind
    /// - `CouponRejected(ValidationError)`: the lookup failed
    pub async fn apply_coupon<G>(&self, gateway: &G, code: &str, kind: CouponKind) -> CartResult<f64>
    where
        G: CouponGateway + ?Sized,
    {
        let amount = coupon::validate_coupon(gateway, code, kind).await.into_amount()?;
        Ok(discount::apply(kind, self.calculate_total(), amount))
    }

    /// Returns `total × (100 − p) / 100` for a percentage coupon `p`.
    ///
    /// The result is not clamped.
    pub async fn apply_percentage_coupon<G>(&self, gateway: &G, code: &str) -> CartResult<f64>
    where
        G: CouponGateway + ?Sized,
    {
        self.apply_coupon(gateway, code, CouponKind::Percentage).await
    }

    /// Returns `max(total − f, 0)` for a fixed coupon `f`.
    pub async fn apply_fixed_coupon<G>(&self, gateway: &G, code: &str) -> CartResult<f64>
    where
        G: CouponGateway + ?Sized,
    {
        self.apply_coupon(gateway, code, CouponKind::Fixed).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
