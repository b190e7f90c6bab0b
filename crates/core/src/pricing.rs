//! Pricing

use rust_decimal::Decimal;

use crate::items::LineItem;

/// Derived money amounts for a cart or order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of line totals over all items.
    pub subtotal: Decimal,

    /// Service charge on the subtotal; zero when the charge is switched off.
    pub tax: Decimal,

    /// `subtotal + tax - discount`. Not floored; an order-level discount
    /// larger than the rest of the bill produces a negative total.
    pub total: Decimal,
}

/// The fixed 10% service charge rate.
pub fn service_charge_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Compute subtotal, service charge and total for a list of line items.
///
/// Pure arithmetic: order-independent over `items`, no I/O, and cheap enough
/// to recompute on every cart change.
pub fn compute_totals(items: &[LineItem], discount: Decimal, include_tax: bool) -> Totals {
    let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();

    let tax = if include_tax {
        subtotal * service_charge_rate()
    } else {
        Decimal::ZERO
    };

    Totals {
        subtotal,
        tax,
        total: subtotal + tax - discount,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        cart::Cart,
        discounts::DiscountRule,
        products::Product,
    };

    use super::*;

    fn cheesecake() -> Product {
        Product {
            id: "6".to_owned(),
            name: "Cheesecake".to_owned(),
            price: Decimal::from(550),
            category: "Dessert".to_owned(),
            stock: 20,
            discount: DiscountRule::Percentage(Decimal::from(10)),
            active: true,
            low_stock_threshold: 5,
        }
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let totals = compute_totals(&[], Decimal::ZERO, true);

        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn discounted_item_with_service_charge() {
        let mut cart = Cart::new();
        cart.add_item(&cheesecake());
        cart.add_item(&cheesecake());

        let totals = cart.totals();

        assert_eq!(totals.subtotal, Decimal::from(990));
        assert_eq!(totals.tax, Decimal::from(99));
        assert_eq!(totals.total, Decimal::from(1089));
    }

    #[test]
    fn discounted_item_without_service_charge() {
        let mut cart = Cart::new();
        cart.add_item(&cheesecake());
        cart.add_item(&cheesecake());
        cart.toggle_tax();

        let totals = cart.totals();

        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::from(990));
    }

    #[test]
    fn order_level_discount_can_exceed_the_bill() {
        let mut cart = Cart::new();
        cart.add_item(&cheesecake());
        cart.set_discount(Decimal::from(1000));
        cart.toggle_tax();

        assert_eq!(cart.totals().total, Decimal::from(-505));
    }

    #[test]
    fn totals_are_order_independent() {
        let mut forwards = Cart::new();
        let mut backwards = Cart::new();

        let mut products = vec![
            cheesecake(),
            Product {
                id: "1".to_owned(),
                name: "Espresso".to_owned(),
                price: Decimal::new(350, 2),
                category: "Coffee".to_owned(),
                stock: 100,
                discount: DiscountRule::None,
                active: true,
                low_stock_threshold: 5,
            },
            Product {
                id: "8".to_owned(),
                name: "Sandwich".to_owned(),
                price: Decimal::new(650, 2),
                category: "Food".to_owned(),
                stock: 30,
                discount: DiscountRule::Flat(Decimal::ONE),
                active: true,
                low_stock_threshold: 5,
            },
        ];

        for product in &products {
            forwards.add_item(product);
        }

        products.reverse();

        for product in &products {
            backwards.add_item(product);
        }

        assert_eq!(forwards.totals(), backwards.totals());
    }
}
