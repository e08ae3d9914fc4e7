//! # checkout-gateway: HTTP Coupon Gateway
//!
//! Connects the pure cart in `checkout-core` to the external coupon-lookup
//! service.
//!
//! ## Module Organization
//!
//! - [`config`] - Service URL and timeout (TOML file + environment)
//! - [`error`] - Gateway error types
//! - [`http`] - `HttpCouponGateway`, the reqwest-backed `CouponGateway`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_core::Cart;
//! use checkout_gateway::{GatewayConfig, HttpCouponGateway};
//!
//! let config = GatewayConfig::load(None)?;
//! let gateway = HttpCouponGateway::new(&config)?;
//!
//! let mut cart = Cart::new();
//! cart.add_item("camisa", 1.0, 100.0)?;
//! let total = cart.apply_percentage_coupon(&gateway, "CUPOM10P").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod http;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use http::HttpCouponGateway;
