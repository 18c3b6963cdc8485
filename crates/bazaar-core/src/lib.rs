//! # bazaar-core: Pure Business Logic for the Bazaar Storefront
//!
//! This crate is the **heart** of the Bazaar mobile storefront. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (React Native)                    │   │
//! │  │    Browse ──► Product Detail ──► Cart Screen ──► Payment Page  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ bridge                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bazaar-client                                │   │
//! │  │    CartStore (shared state), CheckoutService (handoff)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │  Customer │  │           │  │ CartItem  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TOKEN STORAGE • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartProduct, Customer, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart aggregate and its operations
//! - [`error`] - Domain error types
//! - [`validation`] - Checkout boundary validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and storage access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Cart Operations**: Cart mutations never fail; validation happens at
//!    the checkout boundary, not inside the aggregate
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::cart::Cart;
//! use bazaar_core::types::CartProduct;
//!
//! let mut cart = Cart::new();
//! cart.add(&CartProduct {
//!     product_id: "p1".into(),
//!     title: "Wireless Earbuds".into(),
//!     unit_price_cents: 4999,
//!     discount_price_cents: Some(3999),
//!     image: "https://cdn.example.com/earbuds.png".into(),
//! });
//!
//! // Totals always follow the stored line items
//! assert_eq!(cart.total_quantity(), 1);
//! assert_eq!(cart.total_price_cents(), 3999);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Money` instead of
// `use bazaar_core::money::Money`

pub use cart::{Cart, CartItem, CartSnapshot, CartTotals};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;
