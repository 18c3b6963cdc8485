//! # Validation Module
//!
//! Checkout-form validation for the Bazaar storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Order form (React Native)                                    │
//! │  ├── Basic presence checks                                             │
//! │  └── Immediate shopper feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Checkout boundary (Rust)                                     │
//! │  └── THIS MODULE: required fields, length caps, phone format           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Payment backend (remote)                                     │
//! │  └── Authoritative checks before initiating the redirect               │
//! │                                                                         │
//! │  The CART is deliberately not a layer: its operations are total and    │
//! │  accept whatever ids and prices the catalog callers supply.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::types::Customer;
//! use bazaar_core::validation::validate_customer;
//!
//! let customer = Customer {
//!     name: "Amina Rahman".into(),
//!     phone: "+880 1712-345678".into(),
//!     address: "12 Lake Road".into(),
//!     city: "Dhaka".into(),
//! };
//! assert!(validate_customer(&customer).is_ok());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Customer;

/// Maximum length for name and address fields.
const MAX_TEXT_FIELD_LEN: usize = 200;

/// Maximum length for a phone number.
const MAX_PHONE_LEN: usize = 30;

/// Maximum length for a city name.
const MAX_CITY_LEN: usize = 100;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required free-text field (name, address).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
fn validate_required_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_TEXT_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_FIELD_LEN,
        });
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 30 characters
/// - May contain digits, spaces, `+`, `-` and parentheses
///
/// ## Example
/// ```rust
/// use bazaar_core::validation::validate_phone;
///
/// assert!(validate_phone("+880 1712-345678").is_ok());
/// assert!(validate_phone("").is_err());
/// assert!(validate_phone("call me").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() > MAX_PHONE_LEN {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: MAX_PHONE_LEN,
        });
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, +, - and parentheses".to_string(),
        });
    }

    Ok(())
}

/// Validates a city name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_city(city: &str) -> ValidationResult<()> {
    let city = city.trim();

    if city.is_empty() {
        return Err(ValidationError::Required {
            field: "city".to_string(),
        });
    }

    if city.len() > MAX_CITY_LEN {
        return Err(ValidationError::TooLong {
            field: "city".to_string(),
            max: MAX_CITY_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates the whole order form before the payment handoff.
///
/// All four fields are required; the first failing field wins, matching
/// how the form surfaces one message at a time.
///
/// ## User Workflow
/// ```text
/// Shopper taps "Buy Now"
///      │
///      ▼
/// validate_customer(&customer) ← THIS FUNCTION
///      │
///      ├── any field empty/over-long? → error surfaced, cart untouched
///      │
///      └── OK → build payment payload and hand off
/// ```
pub fn validate_customer(customer: &Customer) -> ValidationResult<()> {
    validate_required_text("name", &customer.name)?;
    validate_phone(&customer.phone)?;
    validate_required_text("address", &customer.address)?;
    validate_city(&customer.city)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
