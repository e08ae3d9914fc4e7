//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CartError        - What the cart's caller sees                    │
//! │  │   ├── InvalidInput     (add_item, sync)                             │
//! │  │   ├── ItemNotFound     (remove_item, sync)                          │
//! │  │   └── CouponRejected   (apply_*_coupon, async)                      │
//! │  └── LookupError      - Any failure of a CouponGateway                 │
//! │                                                                         │
//! │  checkout-gateway errors (separate crate)                              │
//! │  └── GatewayError     - HTTP / config failures, flattened into         │
//! │                         LookupError at the trait boundary              │
//! │                                                                         │
//! │  Flow: GatewayError → LookupError → CouponValidation::ValidationError  │
//! │        → CartError::CouponRejected(RejectionReason::ValidationError)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `LookupError` is never surfaced to the cart's caller: the coupon flow
//! collapses every gateway failure into a single rejection reason.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Input Fields
// =============================================================================

/// The `add_item` argument that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Name,
    Quantity,
    Price,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Name => write!(f, "name"),
            InputField::Quantity => write!(f, "quantity"),
            InputField::Price => write!(f, "price"),
        }
    }
}

// =============================================================================
// Rejection Reasons
// =============================================================================

/// Why a coupon could not be applied to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The coupon does not exist, or exists with a different type.
    Invalid,

    /// The coupon lookup itself failed (network, status, payload).
    ValidationError,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::Invalid => write!(f, "Coupon invalid"),
            RejectionReason::ValidationError => write!(f, "Error validating coupon"),
        }
    }
}

// =============================================================================
// Cart Error
// =============================================================================

/// Errors returned by [`Cart`](crate::cart::Cart) operations.
///
/// Every variant is caller-correctable and nothing is retried internally.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// An `add_item` argument is missing or out of range.
    ///
    /// ## When This Occurs
    /// - Empty item name
    /// - Quantity of zero or less
    /// - Unit price that is zero, negative, NaN or infinite
    #[error("Invalid {0}")]
    InvalidInput(InputField),

    /// No line item with this exact name is in the cart.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The coupon could not be applied.
    ///
    /// ## User Workflow
    /// ```text
    /// apply_fixed_coupon("CUPOM15")
    ///      │
    ///      ▼
    /// gateway answers {"mensagem": "..."}
    ///      │
    ///      ▼
    /// CouponRejected(Invalid) → UI shows "Coupon invalid"
    /// ```
    #[error("{0}")]
    CouponRejected(RejectionReason),
}

impl CartError {
    /// Returns the rejection reason when this is a coupon failure.
    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        match self {
            CartError::CouponRejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Lookup Error
// =============================================================================

/// Failure reported by a [`CouponGateway`](crate::coupon::CouponGateway).
///
/// Gateways flatten their own error types into this one; the coupon flow
/// does not distinguish between kinds of failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Coupon lookup failed: {0}")]
pub struct LookupError(pub String);

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        LookupError(message.into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_messages() {
        assert_eq!(
            CartError::InvalidInput(InputField::Name).to_string(),
            "Invalid name"
        );
        assert_eq!(
            CartError::InvalidInput(InputField::Quantity).to_string(),
            "Invalid quantity"
        );
        assert_eq!(
            CartError::InvalidInput(InputField::Price).to_string(),
            "Invalid price"
        );
    }

    #[test]
    fn test_coupon_rejection_messages_are_distinct() {
        let invalid = CartError::CouponRejected(RejectionReason::Invalid);
        let failed = CartError::CouponRejected(RejectionReason::ValidationError);

        assert_eq!(invalid.to_string(), "Coupon invalid");
        assert_eq!(failed.to_string(), "Error validating coupon");
        assert_eq!(invalid.rejection_reason(), Some(RejectionReason::Invalid));
        assert_eq!(CartError::ItemNotFound("meia".into()).rejection_reason(), None);
    }

    #[test]
    fn test_lookup_error_message() {
        let err = LookupError::new("connection refused");
        assert_eq!(err.to_string(), "Coupon lookup failed: connection refused");
    }
}
