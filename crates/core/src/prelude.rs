//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartEvent},
    discounts::{DiscountRule, effective_price},
    fixtures::{FixtureError, sample_products},
    items::LineItem,
    pricing::{Totals, compute_totals, service_charge_rate},
    products::Product,
    receipt::{Receipt, ReceiptLine, format_money, order_number},
};
