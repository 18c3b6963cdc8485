//! # Cart Aggregate
//!
//! The in-memory shopping cart and its operations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action           Operation                State Change         │
//! │  ──────────────           ─────────                ────────────         │
//! │                                                                         │
//! │  Tap "Add to Cart" ──────► add() ────────────────► push / qty += 1     │
//! │                                                                         │
//! │  Tap "+" ────────────────► increase_quantity() ──► qty += 1            │
//! │                                                                         │
//! │  Tap "-" ────────────────► decrease_quantity() ──► qty -= 1 (floor 1)  │
//! │                                                                         │
//! │  Tap "Remove" ───────────► remove() ─────────────► delete line item    │
//! │                                                                         │
//! │  Payment confirmed ──────► clear() ──────────────► items = []          │
//! │                                                                         │
//! │  NOTE: Every operation is total. Acting on an id that is not in the     │
//! │        cart is a silent no-op, never an error.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals Are Derived
//! `total_quantity` and `total_price` are computed from the stored line
//! items on every read. There are no running counters to drift out of sync:
//! a repeated `add` with a different call-time price cannot desynchronize
//! the total from the items, because the stored (first-seen) price is the
//! only price that exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::CartProduct;

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: Reference to the product (the line-item key)
/// - price/display fields: Frozen copy of product data at time of adding.
///   This ensures the cart displays consistent data even if the catalog
///   changes after the item was added.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID; unique within the cart.
    pub product_id: String,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Regular price in cents at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub unit_price_cents: i64,

    /// Reduced price in cents at time of adding (frozen), when one was shown.
    pub discount_price_cents: Option<i64>,

    /// Image reference at time of adding (frozen).
    pub image: String,

    /// Quantity in cart. Always >= 1: a zero-quantity line item never
    /// exists, removal deletes the line outright.
    pub quantity: i64,

    /// When this item was added to cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item from a product projection, quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog price changes
    /// afterwards, this cart item retains the original price.
    pub fn from_product(product: &CartProduct) -> Self {
        CartItem {
            product_id: product.product_id.clone(),
            title: product.title.clone(),
            unit_price_cents: product.unit_price_cents,
            discount_price_cents: product.discount_price_cents,
            image: product.image.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// The price this line actually charges per unit: the discounted price
    /// when one is stored, the regular price otherwise.
    ///
    /// A stored discount of zero cents is honored as zero, not treated as
    /// absent.
    #[inline]
    pub fn effective_price_cents(&self) -> i64 {
        self.discount_price_cents.unwrap_or(self.unit_price_cents)
    }

    /// Effective unit price as Money.
    #[inline]
    pub fn effective_price(&self) -> Money {
        Money::from_cents(self.effective_price_cents())
    }

    /// Calculates the line total (effective price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.effective_price().multiply_quantity(self.quantity).cents()
    }

    /// Line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product increases
///   quantity; the stored price fields are never overwritten)
/// - Insertion order is preserved; new items append at the end
/// - Quantity is always >= 1 (`decrease_quantity` floors at 1; only
///   `remove` deletes a line)
/// - Totals equal the sums over the stored items, always
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart, in insertion order.
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Rebuilds a cart from previously snapshotted items.
    ///
    /// Used by the restore path; the items are trusted as-is.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Cart {
            items,
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, or bumps its quantity if already present.
    ///
    /// ## Behavior
    /// - New product id: appended at the end with quantity 1
    /// - Known product id: quantity += 1; the stored price and display
    ///   fields keep their first-seen values, even if this call carries a
    ///   different price
    ///
    /// Any id is accepted as a key, including the empty string; the cart
    /// does not validate prices either. Callers own input hygiene.
    ///
    /// ## Returns
    /// `true` — an add always changes the cart.
    pub fn add(&mut self, product: &CartProduct) -> bool {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.product_id)
        {
            item.quantity += 1;
            return true;
        }

        self.items.push(CartItem::from_product(product));
        true
    }

    /// Removes a line item entirely, whatever its quantity.
    ///
    /// ## Returns
    /// `true` if a line was removed, `false` if the id was not in the cart
    /// (a silent no-op).
    pub fn remove(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != initial_len
    }

    /// Increases a line item's quantity by one.
    ///
    /// ## Returns
    /// `true` if the item existed, `false` for a no-op on an unknown id.
    pub fn increase_quantity(&mut self, product_id: &str) -> bool {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decreases a line item's quantity by one, flooring at 1.
    ///
    /// Decreasing below 1 is rejected: taking the last unit out of the cart
    /// is an explicit `remove`, never an implicit side effect of "-".
    ///
    /// ## Returns
    /// `true` if the quantity changed; `false` when the item is unknown or
    /// already at quantity 1.
    pub fn decrease_quantity(&mut self, product_id: &str) -> bool {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) if item.quantity > 1 => {
                item.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Clears all items from the cart, unconditionally.
    ///
    /// ## Returns
    /// `true` if there was anything to clear.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        self.created_at = Utc::now();
        had_items
    }

    /// Returns the number of unique line items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the cart total in cents: effective price × quantity,
    /// summed over every line item.
    pub fn total_price_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Cart total as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Derived Views
// =============================================================================

/// Cart totals summary for snapshots and API responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of unique line items.
    pub item_count: usize,

    /// Sum of quantities across all line items.
    pub total_quantity: i64,

    /// Sum of effective price × quantity across all line items, in cents.
    pub total_price_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_price_cents: cart.total_price_cents(),
        }
    }
}

/// An immutable read of the cart: the line items plus computed totals.
///
/// Safe to hand to renderers and to the checkout flow; it shares nothing
/// with the live cart, so later mutations never show through.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Line items at the time of the read, in insertion order.
    pub items: Vec<CartItem>,

    /// Totals computed from those items.
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

impl CartSnapshot {
    /// An empty snapshot, what subscribers see before the first mutation.
    pub fn empty() -> Self {
        CartSnapshot {
            items: Vec::new(),
            totals: CartTotals {
                item_count: 0,
                total_quantity: 0,
                total_price_cents: 0,
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, price_cents: i64) -> CartProduct {
        CartProduct {
            product_id: id.to_string(),
            title: format!("Product {}", id),
            unit_price_cents: price_cents,
            discount_price_cents: None,
            image: format!("https://cdn.example.com/{}.png", id),
        }
    }

    fn discounted(id: &str, price_cents: i64, discount_cents: i64) -> CartProduct {
        CartProduct {
            discount_price_cents: Some(discount_cents),
            ..entry(id, price_cents)
        }
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();

        cart.add(&entry("p1", 1000));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_price_cents(), 1000);
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let mut cart = Cart::new();

        cart.add(&entry("p1", 1000));
        cart.add(&entry("p1", 1000));

        assert_eq!(cart.item_count(), 1); // Still one unique line
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_price_cents(), 2000);
    }

    #[test]
    fn test_repeat_add_keeps_first_seen_price() {
        let mut cart = Cart::new();

        cart.add(&entry("p1", 1000));
        // Same product, different call-time price
        cart.add(&entry("p1", 1500));

        // Stored line keeps the first-seen price...
        assert_eq!(cart.items[0].unit_price_cents, 1000);
        assert_eq!(cart.items[0].quantity, 2);

        // ...and the total follows the stored line: 2 × 1000.
        assert_eq!(cart.total_price_cents(), 2000);
        // The call-time accumulation (1000 + 1500) is NOT produced.
        assert_ne!(cart.total_price_cents(), 2500);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();

        cart.add(&entry("p1", 100));
        cart.add(&entry("p2", 200));
        cart.add(&entry("p3", 300));
        cart.add(&entry("p2", 200)); // bump, must not reorder

        let ids: Vec<&str> = cart.items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_empty_id_is_a_valid_key() {
        let mut cart = Cart::new();

        cart.add(&entry("", 500));
        cart.add(&entry("", 500));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_discount_price_wins_in_totals() {
        let mut cart = Cart::new();

        cart.add(&discounted("p1", 5000, 4000));
        cart.add(&discounted("p1", 5000, 4000));

        assert_eq!(cart.total_price_cents(), 8000);
        assert_eq!(cart.items[0].effective_price_cents(), 4000);
    }

    #[test]
    fn test_zero_discount_is_honored() {
        let mut cart = Cart::new();

        // A stored zero-cent discount prices the line at zero; it is not
        // treated as "no discount".
        cart.add(&discounted("freebie", 1000, 0));

        assert_eq!(cart.total_price_cents(), 0);
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = Cart::new();

        cart.add(&entry("p1", 1000));
        cart.add(&entry("p1", 1000));
        cart.add(&entry("p2", 300));

        assert!(cart.remove("p1"));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_price_cents(), 300);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&entry("p1", 1000));

        assert!(!cart.remove("ghost"));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_price_cents(), 1000);
    }

    #[test]
    fn test_remove_on_empty_cart_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.remove("p1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increase_quantity() {
        let mut cart = Cart::new();
        cart.add(&discounted("p1", 5000, 4000));

        assert!(cart.increase_quantity("p1"));

        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_quantity(), 2);
        // Uses the stored item's effective price
        assert_eq!(cart.total_price_cents(), 8000);
    }

    #[test]
    fn test_increase_unknown_id_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.increase_quantity("ghost"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrease_quantity_floors_at_one() {
        let mut cart = Cart::new();
        cart.add(&entry("p1", 1000));
        cart.add(&entry("p1", 1000));

        assert!(cart.decrease_quantity("p1"));
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.total_price_cents(), 1000);

        // Repeated decreases at quantity 1 are no-ops
        assert!(!cart.decrease_quantity("p1"));
        assert!(!cart.decrease_quantity("p1"));
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_price_cents(), 1000);
    }

    #[test]
    fn test_decrease_unknown_id_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.decrease_quantity("ghost"));
    }

    #[test]
    fn test_clear_resets_fully() {
        let mut cart = Cart::new();
        cart.add(&discounted("p2", 5000, 4000));
        cart.add(&entry("p3", 500));

        assert!(cart.clear());

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price_cents(), 0);

        // Clearing an empty cart changes nothing
        assert!(!cart.clear());
    }

    #[test]
    fn test_operations_on_one_item_leave_others_alone() {
        let mut cart = Cart::new();
        cart.add(&entry("a", 100));
        cart.add(&discounted("b", 900, 700));

        cart.increase_quantity("a");
        cart.increase_quantity("a");
        cart.decrease_quantity("a");
        cart.remove("nope");

        let b = cart.items.iter().find(|i| i.product_id == "b").unwrap();
        assert_eq!(b.quantity, 1);
        assert_eq!(b.unit_price_cents, 900);
        assert_eq!(b.discount_price_cents, Some(700));

        // Shared aggregate totals see both lines
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_price_cents(), 2 * 100 + 700);
    }

    #[test]
    fn test_totals_match_items_after_mixed_sequence() {
        let mut cart = Cart::new();
        cart.add(&entry("p1", 1000));
        cart.add(&discounted("p2", 5000, 4000));
        cart.add(&entry("p1", 1000));
        cart.increase_quantity("p2");
        cart.decrease_quantity("p1");
        cart.remove("p2");
        cart.add(&entry("p3", 5));

        let expected_qty: i64 = cart.items.iter().map(|i| i.quantity).sum();
        let expected_total: i64 = cart.items.iter().map(|i| i.line_total_cents()).sum();

        assert_eq!(cart.total_quantity(), expected_qty);
        assert_eq!(cart.total_price_cents(), expected_total);
    }

    // The walkthrough from the cart screen: add twice, step down, remove.
    #[test]
    fn test_single_product_walkthrough() {
        let mut cart = Cart::new();

        cart.add(&entry("p1", 1000));
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_price_cents(), 1000);

        cart.add(&entry("p1", 1000));
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_price_cents(), 2000);

        cart.decrease_quantity("p1");
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.total_price_cents(), 1000);

        cart.decrease_quantity("p1");
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.total_price_cents(), 1000);

        cart.remove("p1");
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price_cents(), 0);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_mutations() {
        let mut cart = Cart::new();
        cart.add(&entry("p1", 1000));

        let snapshot = CartSnapshot::from(&cart);
        cart.add(&entry("p2", 2000));
        cart.increase_quantity("p1");

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.totals.total_quantity, 1);
        assert_eq!(snapshot.totals.total_price_cents, 1000);
    }

    #[test]
    fn test_snapshot_round_trip_through_serde() {
        let mut cart = Cart::new();
        cart.add(&discounted("p1", 5000, 4000));
        cart.add(&entry("p2", 300));

        let snapshot = CartSnapshot::from(&cart);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: CartSnapshot = serde_json::from_str(&json).unwrap();

        let restored = Cart::from_items(parsed.items);
        assert_eq!(restored.total_quantity(), cart.total_quantity());
        assert_eq!(restored.total_price_cents(), cart.total_price_cents());
    }
}
