//! App Context

use std::{fmt, sync::Arc};

use thiserror::Error;
use till::cart::Cart;

use crate::{
    api::{ApiClient, ApiError},
    catalog::ProductCatalog,
    checkout::{Checkout, CheckoutError},
    config::ApiConfig,
    notify,
    orders::{HttpOrdersService, OrdersService},
    products::{HttpProductsService, ProductsService},
    records::{OrderRecord, PaymentMethod},
};

/// Errors raised while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// Building the HTTP client failed.
    #[error("failed to build the API client")]
    Api(#[source] ApiError),
}

/// Shared state for one register session.
///
/// One context owns the cart, the catalog cache and the checkout machine, and
/// every mutation goes through a named operation on one of them; consumers
/// receive the context by reference rather than reaching for globals. A
/// single session is the only writer.
pub struct AppContext {
    /// The session's cart.
    pub cart: Cart,

    /// Cached product list.
    pub catalog: ProductCatalog,

    /// Checkout state machine.
    pub checkout: Checkout,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("cart", &self.cart)
            .field("catalog", &self.catalog)
            .field("checkout", &self.checkout)
            .finish()
    }
}

impl AppContext {
    /// Build a context talking to the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn from_config(config: ApiConfig) -> Result<Self, AppInitError> {
        let client = Arc::new(ApiClient::new(config).map_err(AppInitError::Api)?);

        let products: Arc<dyn ProductsService> =
            Arc::new(HttpProductsService::new(Arc::clone(&client)));
        let orders: Arc<dyn OrdersService> = Arc::new(HttpOrdersService::new(client));

        Ok(Self::from_services(products, orders))
    }

    /// Build a context over explicit service implementations.
    pub fn from_services(
        products: Arc<dyn ProductsService>,
        orders: Arc<dyn OrdersService>,
    ) -> Self {
        Self {
            cart: Cart::new(),
            catalog: ProductCatalog::new(products),
            checkout: Checkout::new(orders),
        }
    }

    /// Ring up a catalog product by id, dispatching the notification.
    ///
    /// Returns `false` when the id is not in the catalog.
    pub fn add_to_cart(&mut self, product_id: &str) -> bool {
        let Some(product) = self.catalog.get(product_id) else {
            return false;
        };

        let event = self.cart.add_item(product);
        notify::dispatch(&event);

        true
    }

    /// Remove a product's line from the cart, dispatching the notification.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        if let Some(event) = self.cart.remove_item(product_id) {
            notify::dispatch(&event);
        }
    }

    /// Submit the cart as an order on behalf of the given cashier.
    ///
    /// # Errors
    ///
    /// Propagates [`CheckoutError`]s from the orchestrator; see
    /// [`Checkout::submit`].
    pub async fn place_order(
        &mut self,
        payment_method: PaymentMethod,
        cashier_id: &str,
    ) -> Result<OrderRecord, CheckoutError> {
        self.checkout
            .submit(&mut self.cart, &mut self.catalog, payment_method, cashier_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        orders::MockOrdersService,
        products::MockProductsService,
        records::{CashierRef, DiscountType, OrderRequest, ProductRecord},
    };

    use super::*;

    fn cheesecake_record() -> ProductRecord {
        ProductRecord {
            id: "6".to_owned(),
            name: "Cheesecake".to_owned(),
            price: Decimal::from(550),
            category: "Dessert".to_owned(),
            stock: 20,
            discount_type: DiscountType::Percentage,
            discount_value: Decimal::from(10),
            is_active: true,
            low_stock_threshold: 5,
        }
    }

    fn accepted_order(request: &OrderRequest) -> OrderRecord {
        OrderRecord {
            id: "64f1c2aab9d1e23a4f0c99ab".to_owned(),
            created_at: Timestamp::UNIX_EPOCH,
            items: request.items.clone(),
            subtotal: request.subtotal,
            tax: request.tax,
            discount: request.discount,
            total: request.total,
            payment_method: request.payment_method,
            cashier_id: CashierRef::Id(request.user_id.clone()),
        }
    }

    #[tokio::test]
    async fn full_session_from_refresh_to_receipt() -> TestResult {
        let mut products = MockProductsService::new();
        products
            .expect_list_products()
            .times(2)
            .returning(|| Ok(vec![cheesecake_record()]));

        let mut orders = MockOrdersService::new();
        orders
            .expect_create_order()
            .times(1)
            .returning(|request| Ok(accepted_order(request)));

        let mut ctx = AppContext::from_services(Arc::new(products), Arc::new(orders));

        ctx.catalog.refresh().await?;

        assert!(ctx.add_to_cart("6"), "catalog product should ring up");
        assert!(ctx.add_to_cart("6"), "repeat add grows the line");
        assert!(!ctx.add_to_cart("99"), "unknown id is rejected");

        let order = ctx.place_order(PaymentMethod::Cash, "u1").await?;

        assert_eq!(order.total, Decimal::from(1089));
        assert!(ctx.cart.is_empty(), "cart cleared after checkout");
        assert!(
            order.receipt().render().contains("Cheesecake"),
            "receipt lists the item"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_from_cart_tolerates_unknown_ids() -> TestResult {
        let mut products = MockProductsService::new();
        products
            .expect_list_products()
            .times(1)
            .returning(|| Ok(vec![cheesecake_record()]));

        let mut ctx =
            AppContext::from_services(Arc::new(products), Arc::new(MockOrdersService::new()));

        ctx.catalog.refresh().await?;
        ctx.add_to_cart("6");

        ctx.remove_from_cart("99");
        assert_eq!(ctx.cart.len(), 1, "unknown removal is a no-op");

        ctx.remove_from_cart("6");
        assert!(ctx.cart.is_empty(), "known removal drops the line");

        Ok(())
    }
}
