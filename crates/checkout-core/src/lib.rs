//! # checkout-core: Pure Cart & Coupon Logic
//!
//! This crate is the heart of Checkout. It owns the shopping cart, its item
//! invariants and the coupon discount flow, with zero network dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Caller (CLI, service, UI)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │  coupon   │  │ discount  │  │ validation│  │   │
//! │  │   │   Cart    │  │ Gateway   │  │ percent   │  │  name     │  │   │
//! │  │   │ LineItem  │  │ Validation│  │ fixed     │  │  qty/price│  │   │
//! │  │   └───────────┘  └─────┬─────┘  └───────────┘  └───────────┘  │   │
//! │  └────────────────────────┼────────────────────────────────────────┘   │
//! │                           │ CouponGateway trait                         │
//! │  ┌────────────────────────▼────────────────────────────────────────┐   │
//! │  │   checkout-gateway (HTTP)   or   memory::StaticCouponGateway    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The `Cart` and its item / coupon operations
//! - [`coupon`] - `CouponGateway` trait, wire payload, validation outcome
//! - [`discount`] - Percentage and fixed discount math
//! - [`error`] - Domain error types
//! - [`memory`] - In-memory coupon table gateway
//! - [`types`] - `LineItem`, `CouponKind`
//! - [`validation`] - Line item input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::Cart;
//!
//! let mut cart = Cart::new();
//! cart.add_item("camisa", 1.0, 100.0).unwrap();
//! cart.add_item("meia", 2.0, 20.0).unwrap();
//!
//! assert_eq!(cart.calculate_total(), 140.0);
//! assert!(cart.add_item("", 1.0, 10.0).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod coupon;
pub mod discount;
pub mod error;
pub mod memory;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use coupon::{validate_coupon, CouponGateway, CouponResponse, CouponValidation};
pub use error::{CartError, CartResult, InputField, LookupError, RejectionReason};
pub use memory::{CouponEntry, StaticCouponGateway};
pub use types::{CouponKind, LineItem, ParseCouponKindError};
