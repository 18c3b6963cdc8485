//! # Checkout
//!
//! Packages the cart into a payment-initiation payload and hands it to the
//! hosted payment page.
//!
//! ## Checkout Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Lifecycle                                   │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │ Cart     │────►│ Order    │────►│ Hosted   │────►│ Success  │       │
//! │  │ Screen   │     │ Form     │     │ Payment  │     │ Deep Link│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 ▲                │             │
//! │                  submit_order ───────────┘          complete_payment    │
//! │                  (cart untouched)                   (cart cleared)      │
//! │                                                                         │
//! │  Fail / cancel deep links render a message and call NOTHING here:       │
//! │  the cart survives so the shopper can retry.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is cleared ONLY on confirmed payment completion — never on
//! mere submission, never on a gateway failure.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use bazaar_core::cart::CartItem;
use bazaar_core::types::Customer;
use bazaar_core::validation::validate_customer;

use crate::error::{CheckoutError, GatewayError};
use crate::state::CartStore;

/// Currency the storefront charges in.
const DEFAULT_CURRENCY: &str = "BDT";

// =============================================================================
// Wire Types
// =============================================================================

/// Payload of the remote payment-initiation call.
///
/// This is the full order as the payment backend expects it: the amount,
/// the shopper's shipping details, the frozen line items, and the session
/// user. The transaction reference is generated client-side so the app can
/// correlate the redirect outcome with the order it submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitRequest {
    /// Client-generated transaction reference (UUID v4).
    pub tran_id: String,

    /// Order total in cents, from the cart snapshot at submission.
    pub amount_cents: i64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Shipping details from the order form.
    pub customer: Customer,

    /// Line items, frozen at submission.
    pub items: Vec<CartItem>,

    /// Identifier of the signed-in shopper.
    pub user_id: String,
}

/// Successful payment initiation: where to send the shopper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRedirect {
    /// Hosted payment page URL. Wire key `redirectURL`, as the backend
    /// spells it.
    #[serde(rename = "redirectURL")]
    pub redirect_url: String,
}

// =============================================================================
// Gateway Seam
// =============================================================================

/// The remote payment-initiation call.
///
/// Implementations own transport, endpoints, and credentials; this crate
/// only cares that a payload goes out and a redirect (or an error) comes
/// back. Tests plug in stubs.
#[allow(async_fn_in_trait)]
pub trait PaymentGateway {
    /// Submits the payload and returns the hosted-payment redirect.
    async fn initiate_payment(
        &self,
        request: &PaymentInitRequest,
    ) -> Result<PaymentRedirect, GatewayError>;
}

// =============================================================================
// Checkout Service
// =============================================================================

/// Drives order submission and payment completion against one cart store.
///
/// Constructed by the composition root with the session's store handle and
/// whatever gateway the build wires in.
#[derive(Debug)]
pub struct CheckoutService<G> {
    store: Arc<CartStore>,
    gateway: G,
}

impl<G: PaymentGateway> CheckoutService<G> {
    /// Creates a checkout service over the given store and gateway.
    pub fn new(store: Arc<CartStore>, gateway: G) -> Self {
        CheckoutService { store, gateway }
    }

    /// Submits the current cart as an order.
    ///
    /// ## Behavior
    /// 1. Validates the order form (all four fields required)
    /// 2. Snapshots the cart; refuses an empty one
    /// 3. Builds the payment payload from the snapshot
    /// 4. Hands it to the gateway and returns the redirect
    ///
    /// The cart is NOT mutated here, whatever happens: on failure the
    /// shopper fixes the form or retries; on success the cart still holds
    /// the items until the payment is confirmed complete.
    pub async fn submit_order(
        &self,
        customer: &Customer,
        user_id: &str,
    ) -> Result<PaymentRedirect, CheckoutError> {
        validate_customer(customer)?;

        let snapshot = self.store.snapshot();
        if snapshot.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let request = PaymentInitRequest {
            tran_id: Uuid::new_v4().to_string(),
            amount_cents: snapshot.totals.total_price_cents,
            currency: DEFAULT_CURRENCY.to_string(),
            customer: customer.clone(),
            items: snapshot.items,
            user_id: user_id.to_string(),
        };

        debug!(
            tran_id = %request.tran_id,
            amount_cents = request.amount_cents,
            items = request.items.len(),
            "submitting order"
        );

        let redirect = self.gateway.initiate_payment(&request).await?;

        if redirect.redirect_url.is_empty() {
            return Err(CheckoutError::MissingRedirect);
        }

        info!(tran_id = %request.tran_id, "payment initiated, redirecting shopper");
        Ok(redirect)
    }

    /// Confirms payment completion and resets the cart for the next order.
    ///
    /// Called from the success deep link — and only from there. Failure
    /// and cancellation links leave the cart alone.
    pub fn complete_payment(&self) {
        info!("payment confirmed, clearing cart");
        self.store.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
