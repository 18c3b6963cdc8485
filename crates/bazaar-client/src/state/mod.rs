//! # State Module
//!
//! Client-side application state.
//!
//! The cart is the only shared mutable state the client owns; everything
//! else the storefront shows (catalog pages, order history, session) is
//! fetched from the remote API and cached by the UI layer, outside this
//! crate.

mod cart;

pub use cart::CartStore;
