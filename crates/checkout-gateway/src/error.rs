//! # Gateway Error Types
//!
//! Error types for coupon lookups and gateway configuration.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Gateway Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  RequestFailed  │  │  UnexpectedStatus       │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  DecodeFailed           │ │
//! │  │  ConfigLoad...  │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  At the CouponGateway boundary every variant becomes a LookupError,    │
//! │  which the cart reports as "Error validating coupon".                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use checkout_core::LookupError;
use thiserror::Error;

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway error type covering configuration and lookup failures.
#[derive(Debug, Error)]
pub enum GatewayError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid gateway configuration.
    #[error("Invalid gateway configuration: {0}")]
    InvalidConfig(String),

    /// Invalid base URL.
    #[error("Invalid coupon service URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request could not be built, sent, or completed.
    #[error("Coupon request failed: {0}")]
    RequestFailed(String),

    /// The request exceeded the configured timeout.
    #[error("Coupon request timed out")]
    Timeout,

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The service answered with a non-2xx status.
    #[error("Coupon service returned HTTP {0}")]
    UnexpectedStatus(u16),

    /// The body was not a coupon payload.
    #[error("Failed to decode coupon response: {0}")]
    DecodeFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if let Some(status) = err.status() {
            GatewayError::UnexpectedStatus(status.as_u16())
        } else if err.is_decode() {
            GatewayError::DecodeFailed(err.to_string())
        } else {
            GatewayError::RequestFailed(err.to_string())
        }
    }
}

impl From<url::ParseError> for GatewayError {
    fn from(err: url::ParseError) -> Self {
        GatewayError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        GatewayError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for GatewayError {
    fn from(err: toml::de::Error) -> Self {
        GatewayError::ConfigLoadFailed(err.to_string())
    }
}

impl From<GatewayError> for LookupError {
    fn from(err: GatewayError) -> Self {
        LookupError::new(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl GatewayError {
    /// Returns true if a later attempt could succeed.
    ///
    /// Lookups are never retried automatically; this only feeds logging.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::RequestFailed(_) | GatewayError::Timeout => true,
            GatewayError::UnexpectedStatus(status) => *status >= 500,
            _ => false,
        }
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GatewayError::InvalidConfig(_)
                | GatewayError::InvalidUrl(_)
                | GatewayError::ConfigLoadFailed(_)
        )
    }
}
