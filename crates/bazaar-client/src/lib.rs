//! # Bazaar Client Library
//!
//! Client-side state and checkout handoff for the Bazaar storefront.
//! This is what the embedding mobile app links against.
//!
//! ## Module Organization
//! ```text
//! bazaar_client/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── cart.rs     ◄─── CartStore: shared cart ownership + snapshots
//! ├── checkout.rs     ◄─── Payment payload, gateway seam, completion flow
//! └── error.rs        ◄─── Checkout and gateway error types
//! ```
//!
//! ## State Management
//! There is exactly one shared mutable thing in the whole client: the cart.
//! It is owned by an explicitly constructed [`state::CartStore`] that the
//! composition root creates and passes down by handle — no module-level
//! global, so tests instantiate as many independent carts as they like.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who talks to the store                               │
//! │                                                                         │
//! │  Product screens ────► add()                                            │
//! │  Cart screen ────────► increase_quantity() / decrease_quantity()        │
//! │                        remove() / snapshot() / subscribe()              │
//! │  CheckoutService ────► snapshot(), clear() on confirmed completion      │
//! │  Logout handler ─────► clear()                                          │
//! │                                                                         │
//! │  Everyone else gets read-only CartSnapshot values, never the Cart.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod checkout;
pub mod error;
pub mod state;

pub use checkout::{CheckoutService, PaymentGateway, PaymentInitRequest, PaymentRedirect};
pub use error::{CheckoutError, GatewayError};
pub use state::CartStore;
