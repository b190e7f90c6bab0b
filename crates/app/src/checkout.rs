//! Checkout orchestration.

use std::{fmt, sync::Arc};

use thiserror::Error;
use till::cart::Cart;
use tracing::{info, warn};

use crate::{
    api::ApiError,
    catalog::ProductCatalog,
    orders::OrdersService,
    records::{OrderRecord, OrderRequest, PaymentMethod},
};

/// Where the checkout state machine currently is.
///
/// `Idle -> Submitting -> Succeeded -> Idle` on the happy path; a failed
/// submission drops straight back to `Idle` so the cashier can retry.
#[derive(Debug, Clone)]
pub enum CheckoutState {
    /// No submission in progress.
    Idle,

    /// An order request is in flight.
    Submitting,

    /// The backend accepted the order; the record is held until the cashier
    /// dismisses the result.
    Succeeded(OrderRecord),
}

/// Why a checkout could not be completed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// An empty cart is not submittable; rejected before any network call.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// A submission is already in flight; at most one order at a time.
    #[error("an order submission is already in flight")]
    SubmissionInFlight,

    /// The previous order's result has not been acknowledged yet.
    #[error("the previous order has not been acknowledged")]
    UnacknowledgedOrder,

    /// The backend rejected the order or could not be reached. The cart is
    /// left exactly as it was.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Drives the order transaction for one register session.
///
/// The orchestrator owns only its own state machine. The cart is borrowed per
/// submission and is mutated exactly once, after the outcome is known: cleared
/// on success, untouched on failure. Because `submit` runs to completion on
/// the session's single event path, a request's resolution is always applied
/// even when the checkout dialog was dismissed while it was in flight.
pub struct Checkout {
    orders: Arc<dyn OrdersService>,
    state: CheckoutState,
}

impl fmt::Debug for Checkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkout")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Checkout {
    /// Create an idle orchestrator over the given orders service.
    pub fn new(orders: Arc<dyn OrdersService>) -> Self {
        Self {
            orders,
            state: CheckoutState::Idle,
        }
    }

    /// The current state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Whether a submission is currently in flight. The UI disables the pay
    /// action while this holds, which is what makes checkout single-flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, CheckoutState::Submitting)
    }

    /// The accepted order awaiting acknowledgement, if any.
    pub fn last_order(&self) -> Option<&OrderRecord> {
        match &self.state {
            CheckoutState::Succeeded(order) => Some(order),
            CheckoutState::Idle | CheckoutState::Submitting => None,
        }
    }

    /// Submit the cart as an order on behalf of `cashier_id`.
    ///
    /// Builds the request snapshot from the cart's current state and makes a
    /// single attempt, bounded by the API client's timeout. On success the
    /// cart is fully reset (the service-charge preference survives) and the
    /// catalog is asked once, fire-and-forget, to refetch stock; a failed
    /// refetch is logged and swallowed. On failure the cart (items, discount
    /// and tax flag) is preserved for a retry and the state returns to idle
    /// immediately.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] / [`CheckoutError::SubmissionInFlight`]
    ///   / [`CheckoutError::UnacknowledgedOrder`]: precondition failures,
    ///   rejected before any network traffic.
    /// - [`CheckoutError::Api`]: the submission itself failed; the backend's
    ///   failure reason is carried through verbatim.
    pub async fn submit(
        &mut self,
        cart: &mut Cart,
        catalog: &mut ProductCatalog,
        payment_method: PaymentMethod,
        cashier_id: &str,
    ) -> Result<OrderRecord, CheckoutError> {
        match self.state {
            CheckoutState::Submitting => return Err(CheckoutError::SubmissionInFlight),
            CheckoutState::Succeeded(_) => return Err(CheckoutError::UnacknowledgedOrder),
            CheckoutState::Idle => {}
        }

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let request = OrderRequest::from_cart(cart, payment_method, cashier_id);
        self.state = CheckoutState::Submitting;
        info!(
            items = request.items.len(),
            total = %request.total,
            %payment_method,
            "submitting order"
        );

        match self.orders.create_order(&request).await {
            Ok(order) => {
                cart.clear();

                if let Err(error) = catalog.refresh().await {
                    warn!(%error, "stock refresh after checkout failed");
                }

                info!(order_id = %order.id, "order accepted");
                self.state = CheckoutState::Succeeded(order.clone());

                Ok(order)
            }
            Err(error) => {
                warn!(%error, "order submission failed; cart preserved");
                self.state = CheckoutState::Idle;

                Err(error.into())
            }
        }
    }

    /// Dismiss a stored success, returning the record and going back to idle.
    ///
    /// Returns `None` (without changing state) when there is no stored
    /// success to dismiss.
    pub fn acknowledge(&mut self) -> Option<OrderRecord> {
        match std::mem::replace(&mut self.state, CheckoutState::Idle) {
            CheckoutState::Succeeded(order) => Some(order),
            other => {
                self.state = other;
                None
            }
        }
    }
}
