//! # Validation Module
//!
//! Input validation for line items.
//!
//! Each check maps to exactly one [`InputField`]. `Cart::add_item` runs them in
//! the order name → quantity → price, so the first bad argument wins.
//!
//! ```rust
//! use checkout_core::validation::{validate_item_name, validate_unit_price};
//!
//! assert!(validate_item_name("camisa").is_ok());
//! assert!(validate_unit_price(f64::NAN).is_err());
//! ```

use crate::error::{CartError, InputField};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, CartError>;

/// Validates a line item name.
///
/// ## Rules
/// - Must not be empty
///
/// Whitespace is not trimmed: `" "` is a valid (if odd) name, and removal
/// matches names exactly.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(CartError::InvalidInput(InputField::Name));
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be a finite number (NaN and infinities are rejected)
/// - Must be positive (> 0); fractions are allowed
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(CartError::InvalidInput(InputField::Quantity));
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number (NaN and infinities are rejected)
/// - Must be positive (> 0)
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CartError::InvalidInput(InputField::Price));
    }

    Ok(())
}
