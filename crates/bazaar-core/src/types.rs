//! # Domain Types
//!
//! Core domain types used throughout the Bazaar storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   CartProduct   │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  product_id     │   │  name           │       │
//! │  │  title          │   │  title          │   │  phone          │       │
//! │  │  price_cents    │──►│  unit_price     │   │  address        │       │
//! │  │  discount?      │   │  discount?      │   │  city           │       │
//! │  │  flash sale…    │   │  image          │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │     Order       │   │  OrderStatus    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id             │   │  Pending        │                             │
//! │  │  tran_id        │   │  Processing     │                             │
//! │  │  amount_cents   │   │  Shipped        │                             │
//! │  │  items          │   │  Delivered …    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Projection Pattern
//! The catalog `Product` carries everything the screens need; the cart only
//! needs a five-field projection (`CartProduct`). Constructing the projection
//! at the call site freezes the price the shopper actually saw.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Catalog Product
// =============================================================================

/// Subcategory reference carried on every catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    /// Unique identifier of the subcategory.
    pub id: String,

    /// Subcategory display name (e.g. "Headphones").
    pub name: String,

    /// Parent category display name (e.g. "Electronics").
    pub category_name: String,
}

/// A product as delivered by the remote catalog API.
///
/// This is the cart's upstream contract: browsing and filtering of products
/// happen entirely on the server, so this type is a faithful mirror of the
/// wire shape, not a query model.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown on product cards and in the cart.
    pub title: String,

    /// Long-form description for the detail screen.
    pub description: String,

    /// Regular price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Optional reduced price in cents. When present it is what the
    /// shopper pays; the regular price is shown struck through.
    pub discount_price_cents: Option<i64>,

    /// Image reference (CDN URL).
    pub image: String,

    /// Subcategory this product is filed under.
    pub sub_category: SubCategory,

    /// Whether the product is part of the current flash sale.
    pub is_flash_sale: bool,

    /// Flash-sale price in cents, when `is_flash_sale` is set.
    pub flash_sale_price_cents: Option<i64>,

    /// Flash-sale window start.
    #[ts(as = "Option<String>")]
    pub flash_sale_start: Option<DateTime<Utc>>,

    /// Flash-sale window end.
    #[ts(as = "Option<String>")]
    pub flash_sale_end: Option<DateTime<Utc>>,

    /// Whether the product is currently out of stock.
    pub stock_out: bool,

    /// Whether the product is featured in the popular list.
    pub is_popular: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the regular price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the discounted price, when one is set.
    #[inline]
    pub fn discount_price(&self) -> Option<Money> {
        self.discount_price_cents.map(Money::from_cents)
    }

    /// Checks whether the flash sale applies at the given instant.
    ///
    /// The flag alone is not enough: the sale window must have started and
    /// must not have ended. Missing bounds are treated as open-ended.
    pub fn flash_sale_active(&self, at: DateTime<Utc>) -> bool {
        if !self.is_flash_sale || self.flash_sale_price_cents.is_none() {
            return false;
        }

        if let Some(start) = self.flash_sale_start {
            if at < start {
                return false;
            }
        }

        if let Some(end) = self.flash_sale_end {
            if at > end {
                return false;
            }
        }

        true
    }

    /// Builds the cart projection at the regular/discounted price.
    pub fn cart_product(&self) -> CartProduct {
        CartProduct::from(self)
    }

    /// Builds the cart projection at the flash-sale price, when the sale
    /// applies at the given instant.
    ///
    /// The sale price becomes the unit price with no separate discount —
    /// the shopper sees and pays one number, exactly as the flash-sale
    /// shelf displays it.
    pub fn flash_sale_cart_product(&self, at: DateTime<Utc>) -> Option<CartProduct> {
        if !self.flash_sale_active(at) {
            return None;
        }

        let sale_price = self.flash_sale_price_cents?;
        Some(CartProduct {
            product_id: self.id.clone(),
            title: self.title.clone(),
            unit_price_cents: sale_price,
            discount_price_cents: None,
            image: self.image.clone(),
        })
    }
}

// =============================================================================
// Cart Projection
// =============================================================================

/// The projection of a product that the cart needs.
///
/// ## Why a Projection?
/// The cart freezes price and display fields at the moment of adding
/// (snapshot pattern): if the catalog price changes afterwards, the cart
/// keeps showing what the shopper agreed to. Carrying the full `Product`
/// would drag flash-sale windows and stock flags into every line item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    /// Product identifier; the cart's line-item key.
    pub product_id: String,

    /// Display name at time of adding.
    pub title: String,

    /// Regular price in cents at time of adding.
    pub unit_price_cents: i64,

    /// Reduced price in cents at time of adding, when one was shown.
    pub discount_price_cents: Option<i64>,

    /// Image reference at time of adding.
    pub image: String,
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        CartProduct {
            product_id: product.id.clone(),
            title: product.title.clone(),
            unit_price_cents: product.price_cents,
            discount_price_cents: product.discount_price_cents,
            image: product.image.clone(),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Shipping details collected on the order form.
///
/// All four fields are required at submission; see
/// [`crate::validation::validate_customer`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Full name.
    pub name: String,

    /// Contact phone number.
    pub phone: String,

    /// Street address.
    pub address: String,

    /// City.
    pub city: String,
}

// =============================================================================
// Orders
// =============================================================================

/// Fulfillment status of a submitted order, as reported by the order API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Payment confirmed, awaiting processing.
    Pending,
    /// Being picked and packed.
    Processing,
    /// Handed to the courier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Sent back by the customer.
    Returned,
    /// Cash-on-arrival order awaiting delivery.
    OnArrivalPending,
    /// Cash-on-arrival order delivered and settled.
    OnArrivalDelivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// A line item on a submitted order, frozen at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product identifier.
    pub product_id: String,

    /// Product title at submission.
    pub title: String,

    /// Effective unit price in cents at submission.
    pub price_cents: i64,

    /// Image reference at submission.
    pub image: String,

    /// Quantity ordered.
    pub quantity: i64,
}

/// A submitted order, as returned by the order-history API.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier.
    pub id: String,

    /// Client-generated transaction reference handed to the payment
    /// provider at initiation.
    pub tran_id: String,

    /// Order total in cents.
    pub amount_cents: i64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Line items, frozen at submission.
    pub items: Vec<OrderItem>,

    /// Current fulfillment status.
    pub order_status: OrderStatus,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_product() -> Product {
        Product {
            id: "p1".to_string(),
            title: "Wireless Earbuds".to_string(),
            description: "Noise-cancelling in-ear buds".to_string(),
            price_cents: 4999,
            discount_price_cents: Some(3999),
            image: "https://cdn.example.com/earbuds.png".to_string(),
            sub_category: SubCategory {
                id: "sc1".to_string(),
                name: "Headphones".to_string(),
                category_name: "Electronics".to_string(),
            },
            is_flash_sale: false,
            flash_sale_price_cents: None,
            flash_sale_start: None,
            flash_sale_end: None,
            stock_out: false,
            is_popular: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_cart_product_projection() {
        let product = sample_product();
        let entry = product.cart_product();

        assert_eq!(entry.product_id, "p1");
        assert_eq!(entry.unit_price_cents, 4999);
        assert_eq!(entry.discount_price_cents, Some(3999));
    }

    #[test]
    fn test_flash_sale_window() {
        let mut product = sample_product();
        product.is_flash_sale = true;
        product.flash_sale_price_cents = Some(2999);
        product.flash_sale_start = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        product.flash_sale_end = Some(Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap());

        let before = Utc.with_ymd_and_hms(2024, 5, 31, 23, 0, 0).unwrap();
        let during = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();

        assert!(!product.flash_sale_active(before));
        assert!(product.flash_sale_active(during));
        assert!(!product.flash_sale_active(after));
    }

    #[test]
    fn test_flash_sale_cart_product_uses_sale_price() {
        let mut product = sample_product();
        product.is_flash_sale = true;
        product.flash_sale_price_cents = Some(2999);

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let entry = product.flash_sale_cart_product(now).unwrap();

        // The sale price is the unit price; no separate discount remains
        assert_eq!(entry.unit_price_cents, 2999);
        assert_eq!(entry.discount_price_cents, None);
    }

    #[test]
    fn test_flash_sale_requires_flag() {
        let product = sample_product();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert!(product.flash_sale_cart_product(now).is_none());
    }

    #[test]
    fn test_order_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::OnArrivalPending).unwrap();
        assert_eq!(json, "\"ON_ARRIVAL_PENDING\"");

        let parsed: OrderStatus = serde_json::from_str("\"DELIVERED\"").unwrap();
        assert_eq!(parsed, OrderStatus::Delivered);
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
