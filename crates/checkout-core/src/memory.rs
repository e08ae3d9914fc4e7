//! In-memory coupon gateway backed by a static coupon table.
//!
//! Answers exactly like the coupon-lookup service: `{"tipo", "desconto"}` for
//! a known code and `{"mensagem"}` otherwise. Useful for demos, offline runs
//! and tests that should not stand up an HTTP server.
//!
//! ```rust
//! use checkout_core::{Cart, StaticCouponGateway};
//!
//! # tokio_test_block(async {
//! let gateway = StaticCouponGateway::from_json(
//!     r#"[{"codigo": "CUPOM15", "tipo": "fixo", "desconto": 15}]"#,
//! ).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item("camisa", 1.0, 100.0).unwrap();
//! assert_eq!(cart.apply_fixed_coupon(&gateway, "CUPOM15").await, Ok(85.0));
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
//! # }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::coupon::{CouponGateway, CouponResponse};
use crate::error::LookupError;
use crate::types::CouponKind;

/// Message returned for codes missing from the table.
pub const UNKNOWN_COUPON_MESSAGE: &str = "Invalid coupon code";

/// One row of the coupon table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponEntry {
    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "tipo")]
    pub kind: CouponKind,

    #[serde(rename = "desconto")]
    pub amount: f64,
}

/// A [`CouponGateway`] answering from a fixed table. Never fails.
#[derive(Debug, Clone, Default)]
pub struct StaticCouponGateway {
    coupons: Vec<CouponEntry>,
}

impl StaticCouponGateway {
    pub fn new(coupons: Vec<CouponEntry>) -> Self {
        StaticCouponGateway { coupons }
    }

    /// Parses a JSON array of `{"codigo", "tipo", "desconto"}` rows.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Adds a coupon to the table (builder style).
    pub fn with_coupon(mut self, code: impl Into<String>, kind: CouponKind, amount: f64) -> Self {
        self.coupons.push(CouponEntry {
            code: code.into(),
            kind,
            amount,
        });
        self
    }

    /// Returns the first entry whose code matches exactly.
    pub fn find(&self, code: &str) -> Option<&CouponEntry> {
        self.coupons.iter().find(|coupon| coupon.code == code)
    }
}

#[async_trait]
impl CouponGateway for StaticCouponGateway {
    async fn lookup(&self, code: &str) -> Result<CouponResponse, LookupError> {
        Ok(match self.find(code) {
            Some(coupon) => CouponResponse::found(coupon.kind, coupon.amount),
            None => CouponResponse::not_found(UNKNOWN_COUPON_MESSAGE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::error::{CartError, RejectionReason};

    const TABLE: &str = r#"[
        {"codigo": "CUPOM10P", "tipo": "percentual", "desconto": 10},
        {"codigo": "CUPOM15", "tipo": "fixo", "desconto": 15}
    ]"#;

    #[tokio::test]
    async fn test_lookup_known_code() {
        let gateway = StaticCouponGateway::from_json(TABLE).unwrap();
        let response = gateway.lookup("CUPOM10P").await.unwrap();
        assert_eq!(response, CouponResponse::found(CouponKind::Percentage, 10.0));
    }

    #[tokio::test]
    async fn test_lookup_unknown_code() {
        let gateway = StaticCouponGateway::from_json(TABLE).unwrap();
        let response = gateway.lookup("cupom15").await.unwrap();
        assert_eq!(response.message.as_deref(), Some(UNKNOWN_COUPON_MESSAGE));
    }

    #[tokio::test]
    async fn test_cart_against_table() {
        let gateway = StaticCouponGateway::default()
            .with_coupon("CUPOM10P", CouponKind::Percentage, 10.0)
            .with_coupon("CUPOM15", CouponKind::Fixed, 15.0);

        let mut cart = Cart::new();
        cart.add_item("camisa", 1.0, 100.0).unwrap();
        cart.add_item("meia", 2.0, 20.0).unwrap();

        assert_eq!(cart.apply_percentage_coupon(&gateway, "CUPOM10P").await, Ok(126.0));
        assert_eq!(cart.apply_fixed_coupon(&gateway, "CUPOM15").await, Ok(125.0));
        assert_eq!(
            cart.apply_percentage_coupon(&gateway, "CUPOM15").await,
            Err(CartError::CouponRejected(RejectionReason::Invalid))
        );
    }

    #[test]
    fn test_rejects_unknown_kind_in_table() {
        let json = r#"[{"codigo": "X", "tipo": "bogo", "desconto": 1}]"#;
        assert!(StaticCouponGateway::from_json(json).is_err());
    }
}
