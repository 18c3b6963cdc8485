//! # Cart Store
//!
//! Owns the cart for the current session.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple UI callbacks may access/modify the cart
//! 2. Only one operation should modify the cart at a time
//! 3. The embedding runtime may drive callbacks from more than one thread
//!
//! Every operation runs to completion under the lock, so a reader sees
//! either the pre-mutation or the fully-post-mutation cart — never a
//! half-applied one.
//!
//! ## Publish on Mutation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Publication                                 │
//! │                                                                         │
//! │  add / remove / ± quantity / clear / restore                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock cart ──► apply operation ──► changed?                             │
//! │                                      │                                  │
//! │                      ┌── yes ────────┴──────── no ──┐                   │
//! │                      ▼                              ▼                   │
//! │            publish CartSnapshot             keep last snapshot          │
//! │            on the watch channel             (no spurious re-render)     │
//! │                                                                         │
//! │  Subscribers (cart badge, cart screen) hold watch::Receiver and         │
//! │  re-render on change. The store knows nothing about rendering.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::debug;

use bazaar_core::cart::{Cart, CartItem, CartSnapshot};
use bazaar_core::types::CartProduct;

/// Shared, observable ownership of the session's cart.
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them write.
/// A RwLock would add complexity with minimal benefit.
///
/// ## Construction
/// The composition root builds one store per session and hands out
/// clones of the `Arc` (or references). There is no global instance:
/// independent stores coexist freely, which is what the tests do.
#[derive(Debug)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
    publisher: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Creates a new store with an empty cart.
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(CartSnapshot::empty());
        CartStore {
            cart: Arc::new(Mutex::new(Cart::new())),
            publisher,
        }
    }

    /// Applies a mutation under the lock, publishing the resulting
    /// snapshot when the operation actually changed the cart.
    ///
    /// The publish happens while the lock is held, so published snapshots
    /// appear in exactly the order the mutations were applied.
    fn mutate<F>(&self, f: F) -> CartSnapshot
    where
        F: FnOnce(&mut Cart) -> bool,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        let changed = f(&mut cart);
        let snapshot = CartSnapshot::from(&*cart);

        if changed {
            self.publisher.send_replace(snapshot.clone());
        }

        snapshot
    }

    /// Adds a product to the cart, or bumps its quantity if already present.
    ///
    /// The stored line item freezes this call's price and display fields
    /// on first add; repeat adds only change the quantity.
    pub fn add(&self, product: &CartProduct) -> CartSnapshot {
        debug!(product_id = %product.product_id, "cart add");
        self.mutate(|cart| cart.add(product))
    }

    /// Removes a line item entirely. Unknown ids are a silent no-op.
    pub fn remove(&self, product_id: &str) -> CartSnapshot {
        debug!(product_id = %product_id, "cart remove");
        self.mutate(|cart| cart.remove(product_id))
    }

    /// Increases a line item's quantity by one. Unknown ids are a no-op.
    pub fn increase_quantity(&self, product_id: &str) -> CartSnapshot {
        debug!(product_id = %product_id, "cart increase quantity");
        self.mutate(|cart| cart.increase_quantity(product_id))
    }

    /// Decreases a line item's quantity by one, flooring at 1.
    /// Unknown ids and lines already at quantity 1 are no-ops.
    pub fn decrease_quantity(&self, product_id: &str) -> CartSnapshot {
        debug!(product_id = %product_id, "cart decrease quantity");
        self.mutate(|cart| cart.decrease_quantity(product_id))
    }

    /// Empties the cart. Invoked by logout and by confirmed payment
    /// completion; the store itself never decides when.
    pub fn clear(&self) -> CartSnapshot {
        debug!("cart clear");
        self.mutate(|cart| cart.clear())
    }

    /// Replaces the cart contents with previously snapshotted items.
    ///
    /// This is the restore half of the persistence extension point: some
    /// external layer saves `snapshot()` output and feeds the items back
    /// here on app start. Always publishes.
    pub fn restore(&self, items: Vec<CartItem>) -> CartSnapshot {
        debug!(items = items.len(), "cart restore");
        self.mutate(|cart| {
            *cart = Cart::from_items(items);
            true
        })
    }

    /// Returns a snapshot of the current cart.
    ///
    /// Reflects the most recently completed mutation; shares nothing with
    /// the live cart.
    pub fn snapshot(&self) -> CartSnapshot {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        CartSnapshot::from(&*cart)
    }

    /// Subscribes to snapshot updates.
    ///
    /// The receiver starts at the last published snapshot and is notified
    /// on every state-changing mutation. No-ops publish nothing.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.publisher.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: i64) -> CartProduct {
        CartProduct {
            product_id: id.to_string(),
            title: format!("Product {}", id),
            unit_price_cents: price_cents,
            discount_price_cents: None,
            image: format!("https://cdn.example.com/{}.png", id),
        }
    }

    #[test]
    fn test_snapshot_reflects_latest_mutation() {
        let store = CartStore::new();

        store.add(&product("p1", 1000));
        store.add(&product("p1", 1000));
        store.increase_quantity("p1");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.totals.total_quantity, 3);
        assert_eq!(snapshot.totals.total_price_cents, 3000);
    }

    #[test]
    fn test_mutations_publish_to_subscribers() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        // Nothing published yet
        assert!(!rx.has_changed().unwrap());

        store.add(&product("p1", 500));
        assert!(rx.has_changed().unwrap());

        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.totals.total_quantity, 1);
        assert_eq!(seen.totals.total_price_cents, 500);
    }

    #[test]
    fn test_noops_do_not_publish() {
        let store = CartStore::new();
        store.add(&product("p1", 500));

        let mut rx = store.subscribe();
        rx.borrow_and_update();

        // All three are silent successes that change nothing
        store.remove("ghost");
        store.decrease_quantity("p1"); // already at quantity 1
        store.increase_quantity("ghost");

        assert!(!rx.has_changed().unwrap());

        // The returned snapshot is still current state
        let snapshot = store.remove("ghost");
        assert_eq!(snapshot.totals.total_quantity, 1);
    }

    #[test]
    fn test_clear_publishes_empty_snapshot() {
        let store = CartStore::new();
        store.add(&product("p1", 500));
        store.add(&product("p2", 700));

        let mut rx = store.subscribe();
        store.clear();

        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert!(seen.items.is_empty());
        assert_eq!(seen.totals.total_price_cents, 0);
    }

    #[test]
    fn test_independent_stores_do_not_interfere() {
        let a = CartStore::new();
        let b = CartStore::new();

        a.add(&product("p1", 1000));

        assert_eq!(a.snapshot().totals.total_quantity, 1);
        assert_eq!(b.snapshot().totals.total_quantity, 0);
    }

    #[test]
    fn test_restore_round_trip() {
        let store = CartStore::new();
        store.add(&product("p1", 1000));
        store.add(&product("p2", 2500));
        store.increase_quantity("p2");

        let saved = store.snapshot();
        let json = serde_json::to_string(&saved).unwrap();

        // Fresh session, same persisted items
        let revived = CartStore::new();
        let parsed: bazaar_core::cart::CartSnapshot = serde_json::from_str(&json).unwrap();
        let snapshot = revived.restore(parsed.items);

        assert_eq!(snapshot.totals.total_quantity, 3);
        assert_eq!(snapshot.totals.total_price_cents, 1000 + 2 * 2500);
    }

    #[test]
    fn test_store_is_shareable_across_threads() {
        let store = Arc::new(CartStore::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store.add(&product("p1", 100));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.totals.total_quantity, 200);
        assert_eq!(snapshot.totals.total_price_cents, 20_000);
    }
}
