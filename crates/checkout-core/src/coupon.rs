//! # Coupon Module
//!
//! The coupon lookup seam and the interpretation of its answers.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    validate_coupon(code, expected)                      │
//! │                                                                         │
//! │  gateway.lookup(code) ──── Err(_) ──────────► ValidationError           │
//! │        │                                                                │
//! │        Ok(response)                                                     │
//! │        │                                                                │
//! │        ├── "mensagem" present ──────────────► InvalidCoupon             │
//! │        ├── "tipo" != expected.wire_name() ──► InvalidCoupon             │
//! │        ├── "desconto" missing ──────────────► ValidationError           │
//! │        └── otherwise ───────────────────────► Discount(desconto)        │
//! │                                                                         │
//! │  Exactly one lookup per call. No retries, no logging.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Not found" and "wrong type for this operation" are the same outcome, so
//! callers only ever see two kinds of coupon failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult, LookupError, RejectionReason};
use crate::types::CouponKind;

// =============================================================================
// Wire Payload
// =============================================================================

/// Body returned by the coupon-lookup service.
///
/// The service answers either `{"tipo": "...", "desconto": n}` or
/// `{"mensagem": "..."}`, always with a success status. Every field is
/// optional here so the core can branch on which ones are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CouponResponse {
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(rename = "desconto", default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(rename = "mensagem", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CouponResponse {
    /// A response describing an existing coupon.
    pub fn found(kind: CouponKind, amount: f64) -> Self {
        CouponResponse {
            kind: Some(kind.wire_name().to_string()),
            amount: Some(amount),
            message: None,
        }
    }

    /// A response for an unknown coupon code.
    pub fn not_found(message: impl Into<String>) -> Self {
        CouponResponse {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Interprets this response for an operation expecting `expected`.
    pub fn interpret(&self, expected: CouponKind) -> CouponValidation {
        if self.message.is_some() {
            return CouponValidation::InvalidCoupon;
        }

        if self.kind.as_deref() != Some(expected.wire_name()) {
            return CouponValidation::InvalidCoupon;
        }

        match self.amount {
            Some(amount) => CouponValidation::Discount(amount),
            None => CouponValidation::ValidationError,
        }
    }
}

// =============================================================================
// Gateway Trait
// =============================================================================

/// Resolves coupon codes to their descriptors.
///
/// Implementations perform a single attempt per call. Timeouts, transport
/// errors, non-2xx statuses and undecodable bodies are all reported as a
/// [`LookupError`]; the coupon flow does not look inside it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponGateway: Send + Sync {
    /// Looks up `code`, returning the raw response body.
    async fn lookup(&self, code: &str) -> Result<CouponResponse, LookupError>;
}

// =============================================================================
// Validation Outcome
// =============================================================================

/// Outcome of validating a coupon for one discount strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CouponValidation {
    /// The coupon exists with the expected kind; carries its amount.
    Discount(f64),

    /// Unknown code, or a coupon of a different kind.
    InvalidCoupon,

    /// The lookup failed or returned an unusable payload.
    ValidationError,
}

impl CouponValidation {
    /// Converts the outcome into the discount amount or a cart error.
    pub fn into_amount(self) -> CartResult<f64> {
        match self {
            CouponValidation::Discount(amount) => Ok(amount),
            CouponValidation::InvalidCoupon => {
                Err(CartError::CouponRejected(RejectionReason::Invalid))
            }
            CouponValidation::ValidationError => {
                Err(CartError::CouponRejected(RejectionReason::ValidationError))
            }
        }
    }
}

/// Looks up `code` once and interprets the answer for `expected`.
///
/// Never fails: every gateway error becomes
/// [`CouponValidation::ValidationError`].
pub async fn validate_coupon<G>(gateway: &G, code: &str, expected: CouponKind) -> CouponValidation
where
    G: CouponGateway + ?Sized,
{
    match gateway.lookup(code).await {
        Ok(response) => response.interpret(expected),
        Err(_) => CouponValidation::ValidationError,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway_answering(response: CouponResponse) -> MockCouponGateway {
        let mut gateway = MockCouponGateway::new();
        gateway
            .expect_lookup()
            .times(1)
            .returning(move |_| Ok(response.clone()));
        gateway
    }

    #[test]
    fn test_response_decodes_found_payload() {
        let response: CouponResponse =
            serde_json::from_str(r#"{"tipo": "percentual", "desconto": 10}"#).unwrap();
        assert_eq!(response, CouponResponse::found(CouponKind::Percentage, 10.0));
    }

    #[test]
    fn test_response_decodes_not_found_payload() {
        let response: CouponResponse =
            serde_json::from_str(r#"{"mensagem": "Código do cupom inválido"}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("Código do cupom inválido"));
        assert_eq!(response.kind, None);
    }

    #[test]
    fn test_message_wins_over_matching_type() {
        let response = CouponResponse {
            kind: Some("fixo".into()),
            amount: Some(15.0),
            message: Some("expired".into()),
        };
        assert_eq!(
            response.interpret(CouponKind::Fixed),
            CouponValidation::InvalidCoupon
        );
    }

    #[test]
    fn test_missing_amount_is_a_validation_error() {
        let response = CouponResponse {
            kind: Some("fixo".into()),
            ..Default::default()
        };
        assert_eq!(
            response.interpret(CouponKind::Fixed),
            CouponValidation::ValidationError
        );
    }

    #[test]
    fn test_empty_body_is_invalid() {
        assert_eq!(
            CouponResponse::default().interpret(CouponKind::Percentage),
            CouponValidation::InvalidCoupon
        );
    }

    #[tokio::test]
    async fn test_valid_percentage_coupon() {
        let gateway = gateway_answering(CouponResponse::found(CouponKind::Percentage, 10.0));
        let result = validate_coupon(&gateway, "CUPOM10P", CouponKind::Percentage).await;
        assert_eq!(result, CouponValidation::Discount(10.0));
    }

    #[tokio::test]
    async fn test_valid_fixed_coupon() {
        let gateway = gateway_answering(CouponResponse::found(CouponKind::Fixed, 15.0));
        let result = validate_coupon(&gateway, "CUPOM15", CouponKind::Fixed).await;
        assert_eq!(result, CouponValidation::Discount(15.0));
    }

    #[tokio::test]
    async fn test_unknown_coupon() {
        let gateway = gateway_answering(CouponResponse::not_found("Cupom inválido"));
        let result = validate_coupon(&gateway, "CUPOM10", CouponKind::Percentage).await;
        assert_eq!(result, CouponValidation::InvalidCoupon);
    }

    #[tokio::test]
    async fn test_type_mismatch_is_invalid() {
        let gateway = gateway_answering(CouponResponse::found(CouponKind::Percentage, 10.0));
        let result = validate_coupon(&gateway, "CUPOM10P", CouponKind::Fixed).await;
        assert_eq!(result, CouponValidation::InvalidCoupon);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_validation_error() {
        let mut gateway = MockCouponGateway::new();
        gateway
            .expect_lookup()
            .withf(|code: &str| code == "CUPOM10P")
            .times(1)
            .returning(|_| Err(LookupError::new("timed out")));

        let result = validate_coupon(&gateway, "CUPOM10P", CouponKind::Percentage).await;
        assert_eq!(result, CouponValidation::ValidationError);
    }

    #[test]
    fn test_into_amount() {
        assert_eq!(CouponValidation::Discount(5.0).into_amount(), Ok(5.0));
        assert_eq!(
            CouponValidation::InvalidCoupon.into_amount(),
            Err(CartError::CouponRejected(RejectionReason::Invalid))
        );
        assert_eq!(
            CouponValidation::ValidationError.into_amount(),
            Err(CartError::CouponRejected(RejectionReason::ValidationError))
        );
    }
}
