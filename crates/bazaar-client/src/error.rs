//! # Checkout Error Types
//!
//! Failures the checkout flow can surface to the shopper.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow at Checkout                               │
//! │                                                                         │
//! │  "Buy Now"                                                              │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  validate form ── bad field ──► CheckoutError::Validation ──► message   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  snapshot cart ── empty ──────► CheckoutError::EmptyCart ───► message   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  gateway call ── failed ──────► CheckoutError::Gateway ─────► message   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  redirect ── missing URL ─────► CheckoutError::MissingRedirect          │
//! │                                                                         │
//! │  EVERY failure leaves the cart exactly as it was.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use bazaar_core::ValidationError;

/// Failures from the remote payment-initiation call.
///
/// The protocol behind the call is external; these variants only
/// distinguish "could not reach it" from "it said no", which is all the
/// shopper-facing flow needs.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The payment service could not be reached.
    #[error("payment service unreachable: {0}")]
    Unreachable(String),

    /// The payment service rejected the initiation request.
    #[error("payment service rejected the request: {0}")]
    Rejected(String),
}

/// Order submission errors.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Submitting with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The order form failed validation.
    #[error("invalid order form: {0}")]
    Validation(#[from] ValidationError),

    /// The payment-initiation call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The payment service answered without a redirect to send the
    /// shopper to.
    #[error("payment initiation did not return a redirect")]
    MissingRedirect,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_to_checkout_error() {
        let validation_err = ValidationError::Required {
            field: "city".to_string(),
        };
        let err: CheckoutError = validation_err.into();
        assert!(matches!(err, CheckoutError::Validation(_)));
        assert_eq!(err.to_string(), "invalid order form: city is required");
    }

    #[test]
    fn test_gateway_error_is_transparent() {
        let err: CheckoutError = GatewayError::Unreachable("timeout".to_string()).into();
        assert_eq!(err.to_string(), "payment service unreachable: timeout");

        let err: CheckoutError = GatewayError::Rejected("amount mismatch".to_string()).into();
        assert_eq!(
            err.to_string(),
            "payment service rejected the request: amount mismatch"
        );
    }
}
