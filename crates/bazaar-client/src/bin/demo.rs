//! # Storefront Walkthrough
//!
//! Drives the cart store and checkout flow end to end from the terminal,
//! with a stub payment gateway standing in for the hosted payment page.
//!
//! ## Usage
//! ```bash
//! cargo run -p bazaar-client --bin demo
//!
//! # With debug-level cart logging
//! RUST_LOG=debug cargo run -p bazaar-client --bin demo
//! ```

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bazaar_client::{
    CartStore, CheckoutService, GatewayError, PaymentGateway, PaymentInitRequest, PaymentRedirect,
};
use bazaar_core::types::{CartProduct, Customer};

/// Stand-in for the remote payment service: logs the payload and hands
/// back a canned redirect.
struct FakeGateway;

impl PaymentGateway for FakeGateway {
    async fn initiate_payment(
        &self,
        request: &PaymentInitRequest,
    ) -> Result<PaymentRedirect, GatewayError> {
        info!(
            tran_id = %request.tran_id,
            amount_cents = request.amount_cents,
            items = request.items.len(),
            "fake gateway received payment-initiation payload"
        );
        Ok(PaymentRedirect {
            redirect_url: format!("https://pay.example.com/session/{}", request.tran_id),
        })
    }
}

fn earbuds() -> CartProduct {
    CartProduct {
        product_id: "earbuds-01".to_string(),
        title: "Wireless Earbuds".to_string(),
        unit_price_cents: 4999,
        discount_price_cents: Some(3999),
        image: "https://cdn.example.com/earbuds.png".to_string(),
    }
}

fn charger() -> CartProduct {
    CartProduct {
        product_id: "charger-07".to_string(),
        title: "65W USB-C Charger".to_string(),
        unit_price_cents: 2500,
        discount_price_cents: None,
        image: "https://cdn.example.com/charger.png".to_string(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = Arc::new(CartStore::new());
    let mut updates = store.subscribe();

    // Shopper browses and fills the cart
    store.add(&earbuds());
    store.add(&earbuds());
    store.add(&charger());
    store.decrease_quantity("earbuds-01");

    let snapshot = updates.borrow_and_update().clone();
    info!(
        lines = snapshot.totals.item_count,
        quantity = snapshot.totals.total_quantity,
        total = %bazaar_core::Money::from_cents(snapshot.totals.total_price_cents),
        "cart ready for checkout"
    );

    // Order form, submission, redirect
    let customer = Customer {
        name: "Amina Rahman".to_string(),
        phone: "+880 1712-345678".to_string(),
        address: "12 Lake Road, Flat 4B".to_string(),
        city: "Dhaka".to_string(),
    };

    let checkout = CheckoutService::new(Arc::clone(&store), FakeGateway);
    match checkout.submit_order(&customer, "demo-user").await {
        Ok(redirect) => info!(url = %redirect.redirect_url, "shopper would open payment page"),
        Err(err) => {
            info!(error = %err, "order submission failed");
            return;
        }
    }

    // The success deep link confirms completion and resets the cart
    checkout.complete_payment();
    info!(
        empty = store.snapshot().items.is_empty(),
        "cart after confirmed payment"
    );
}
