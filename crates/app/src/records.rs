//! Wire records

use std::fmt;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use till::{
    cart::Cart,
    discounts::DiscountRule,
    products::Product,
    receipt::{Receipt, ReceiptLine},
};

/// Discount rule discriminant as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// No discount.
    #[default]
    None,

    /// Fixed amount off the base price.
    Flat,

    /// Percentage off the base price.
    Percentage,
}

/// Product as returned by `GET /products`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Base price.
    pub price: Decimal,

    /// Category label.
    #[serde(default)]
    pub category: String,

    /// Units currently in stock.
    #[serde(default)]
    pub stock: u32,

    /// Discount rule discriminant.
    #[serde(default)]
    pub discount_type: DiscountType,

    /// Discount rule value, interpreted per `discount_type`.
    #[serde(default)]
    pub discount_value: Decimal,

    /// Whether the product is sellable.
    #[serde(default = "default_is_active")]
    pub is_active: bool,

    /// Stock level at or below which the product counts as low on stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_is_active() -> bool {
    true
}

fn default_low_stock_threshold() -> u32 {
    5
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let discount = match record.discount_type {
            DiscountType::None => DiscountRule::None,
            DiscountType::Flat => DiscountRule::Flat(record.discount_value),
            DiscountType::Percentage => DiscountRule::Percentage(record.discount_value),
        };

        Product {
            id: record.id,
            name: record.name,
            price: record.price,
            category: record.category,
            stock: record.stock,
            discount,
            active: record.is_active,
            low_stock_threshold: record.low_stock_threshold,
        }
    }
}

/// One ordered line, as both `POST /orders` and the stored order spell it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product identifier.
    pub product_id: String,

    /// Product name at order time.
    pub name: String,

    /// Units ordered.
    pub quantity: u32,

    /// Frozen effective unit price.
    pub price: Decimal,
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash over the counter.
    Cash,

    /// Card terminal.
    Card,
}

impl PaymentMethod {
    /// The lowercase wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /orders`: an immutable snapshot of the cart at checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Ordered lines.
    pub items: Vec<OrderItem>,

    /// Sum of line totals.
    pub subtotal: Decimal,

    /// Service charge included in the total.
    pub tax: Decimal,

    /// Order-level discount amount.
    pub discount: Decimal,

    /// Amount payable.
    pub total: Decimal,

    /// How the customer paid.
    pub payment_method: PaymentMethod,

    /// Identifier of the authenticated cashier.
    pub user_id: String,
}

impl OrderRequest {
    /// Snapshot the cart into an order request.
    ///
    /// The request is a value copy; later cart mutations do not affect it.
    pub fn from_cart(cart: &Cart, payment_method: PaymentMethod, user_id: &str) -> Self {
        let totals = cart.totals();

        Self {
            items: cart
                .items()
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product_id().to_owned(),
                    name: line.name().to_owned(),
                    quantity: line.quantity(),
                    price: line.unit_price(),
                })
                .collect(),
            subtotal: totals.subtotal,
            tax: totals.tax,
            discount: cart.discount(),
            total: totals.total,
            payment_method,
            user_id: user_id.to_owned(),
        }
    }
}

/// The cashier reference on a stored order; the backend returns either the
/// bare id or a populated profile depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CashierRef {
    /// Bare identifier.
    Id(String),

    /// Populated profile.
    Profile {
        /// Identifier.
        #[serde(rename = "_id")]
        id: String,

        /// Display name.
        name: String,
    },
}

impl CashierRef {
    /// The cashier's identifier.
    pub fn id(&self) -> &str {
        match self {
            CashierRef::Id(id) | CashierRef::Profile { id, .. } => id,
        }
    }

    /// The cashier's display name, when the backend populated it.
    pub fn name(&self) -> Option<&str> {
        match self {
            CashierRef::Id(_) => None,
            CashierRef::Profile { name, .. } => Some(name),
        }
    }
}

/// Order as persisted by the backend, echoed back on success and listed by
/// `GET /orders`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// When the backend persisted the order.
    pub created_at: Timestamp,

    /// Ordered lines as echoed back.
    pub items: Vec<OrderItem>,

    /// Sum of line totals.
    pub subtotal: Decimal,

    /// Service charge included in the total.
    pub tax: Decimal,

    /// Order-level discount amount.
    pub discount: Decimal,

    /// Amount paid.
    pub total: Decimal,

    /// How the customer paid.
    pub payment_method: PaymentMethod,

    /// Who rang the order up.
    pub cashier_id: CashierRef,
}

impl OrderRecord {
    /// Build the printable receipt for this order.
    pub fn receipt(&self) -> Receipt {
        Receipt {
            order_id: self.id.clone(),
            date: self.created_at.to_string(),
            cashier: self.cashier_id.name().unwrap_or("Unknown").to_owned(),
            payment_method: self.payment_method.as_str().to_owned(),
            lines: self
                .items
                .iter()
                .map(|item| ReceiptLine {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    line_total: item.price * Decimal::from(item.quantity),
                })
                .collect(),
            subtotal: self.subtotal,
            discount: self.discount,
            tax: self.tax,
            total: self.total,
        }
    }
}

/// Category as returned by `GET /categories`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRecord {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Category name.
    pub name: String,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    /// Human-readable failure reason, shown to the cashier verbatim.
    pub message: String,
}
