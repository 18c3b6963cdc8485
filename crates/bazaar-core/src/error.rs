//! # Error Types
//!
//! Domain-specific error types for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bazaar-core errors (this file)                                        │
//! │  └── ValidationError  - Checkout-form input failures                   │
//! │                                                                         │
//! │  bazaar-client errors (separate crate)                                 │
//! │  ├── CheckoutError    - Order submission failures                      │
//! │  └── GatewayError     - Payment-initiation call failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutError → surfaced to the shopper       │
//! │                                                                         │
//! │  The cart itself has NO error type: every cart operation is total,     │
//! │  and acting on an unknown id is a designed no-op.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limit, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when order-form input doesn't meet requirements.
/// Used at the checkout boundary, before the payment handoff runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., letters in a phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "address".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "address must be at most 200 characters");

        let err = ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, +, - and parentheses".to_string(),
        };
        assert!(err.to_string().starts_with("phone has invalid format"));
    }
}
