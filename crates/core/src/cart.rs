//! Cart

use rust_decimal::Decimal;

use crate::{
    discounts::effective_price,
    items::LineItem,
    pricing::{Totals, compute_totals},
    products::Product,
};

/// A UI-facing event produced by a cart mutation.
///
/// Mutations stay pure state transitions; the caller decides how (or whether)
/// to surface the event, which keeps the cart testable without a UI harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was rung up (new line or quantity bump).
    ItemAdded {
        /// Display name of the product that was added.
        name: String,
    },

    /// A line was removed from the cart.
    ItemRemoved {
        /// Display name of the product that was removed.
        name: String,
    },
}

/// The in-memory cart for one register session.
///
/// Lines are kept in insertion order and are unique by product id: ringing up
/// a product already in the cart grows its quantity instead of appending a
/// duplicate line. An order-level discount amount and the service-charge
/// toggle live here too, so the cart alone determines the order totals.
///
/// None of the mutations fail. Operations addressed at a product id that is
/// not in the cart are silent no-ops, since stale UI events can legitimately
/// target a line that was already removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    discount: Decimal,
    include_tax: bool,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Create an empty cart with no discount and the service charge enabled.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            discount: Decimal::ZERO,
            include_tax: true,
        }
    }

    /// Ring up a product.
    ///
    /// If the product already has a line, only its quantity grows; the line
    /// keeps the unit price frozen when it was first added, even if the
    /// product's discount rule has changed since. Otherwise a new line is
    /// appended with quantity 1 and the product's current effective price.
    pub fn add_item(&mut self, product: &Product) -> CartEvent {
        let existing = self
            .items
            .iter()
            .position(|line| line.product_id() == product.id);

        match existing {
            Some(position) => {
                if let Some(line) = self.items.get_mut(position) {
                    line.increment();
                }
            }
            None => self.items.push(LineItem::new(
                product.id.clone(),
                product.name.clone(),
                effective_price(product),
            )),
        }

        CartEvent::ItemAdded {
            name: product.name.clone(),
        }
    }

    /// Remove the line for a product, whatever its quantity.
    ///
    /// Returns `None` (and changes nothing) when the product has no line.
    pub fn remove_item(&mut self, product_id: &str) -> Option<CartEvent> {
        let position = self
            .items
            .iter()
            .position(|line| line.product_id() == product_id)?;

        let line = self.items.remove(position);

        Some(CartEvent::ItemRemoved {
            name: line.name().to_owned(),
        })
    }

    /// Grow a line's quantity by one. No-op when the product has no line.
    pub fn increment_quantity(&mut self, product_id: &str) {
        if let Some(line) = self.find_mut(product_id) {
            line.increment();
        }
    }

    /// Shrink a line's quantity by one.
    ///
    /// A line at quantity 1 is removed entirely; quantities never reach zero.
    /// No-op when the product has no line.
    pub fn decrement_quantity(&mut self, product_id: &str) {
        let Some(position) = self
            .items
            .iter()
            .position(|line| line.product_id() == product_id)
        else {
            return;
        };

        if let Some(line) = self.items.get_mut(position) {
            if line.quantity() > 1 {
                line.decrement();
            } else {
                self.items.remove(position);
            }
        }
    }

    /// Flip whether the 10% service charge is included in the totals.
    pub fn toggle_tax(&mut self) {
        self.include_tax = !self.include_tax;
    }

    /// Replace the order-level discount amount.
    ///
    /// The amount is not validated against the subtotal here; a discount
    /// larger than the bill simply drives the total negative.
    pub fn set_discount(&mut self, discount: Decimal) {
        self.discount = discount;
    }

    /// Empty the cart and reset the discount.
    ///
    /// The service-charge toggle is a session preference, not an order
    /// artifact, so it survives a clear.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount = Decimal::ZERO;
    }

    /// Derived subtotal, service charge and total for the current state.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, self.discount, self.include_tax)
    }

    /// The lines currently in the cart, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct lines (not units) in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current order-level discount amount.
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Whether the service charge is currently included.
    pub fn include_tax(&self) -> bool {
        self.include_tax
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|line| line.product_id() == product_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::{discounts::DiscountRule, products::Product};

    use super::*;

    fn product(id: &str, name: &str, price: i64, discount: DiscountRule) -> Product {
        Product {
            id: id.to_owned(),
            name: name.to_owned(),
            price: Decimal::from(price),
            category: "Coffee".to_owned(),
            stock: 50,
            discount,
            active: true,
            low_stock_threshold: 5,
        }
    }

    #[test]
    fn adding_distinct_products_creates_one_line_each() {
        let mut cart = Cart::new();

        cart.add_item(&product("1", "Espresso", 350, DiscountRule::None));
        cart.add_item(&product("2", "Latte", 400, DiscountRule::None));

        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn adding_same_product_twice_grows_quantity() {
        let mut cart = Cart::new();
        let espresso = product("1", "Espresso", 350, DiscountRule::None);

        cart.add_item(&espresso);
        cart.add_item(&espresso);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items().first().map(LineItem::quantity), Some(2));
    }

    #[test]
    fn add_freezes_effective_price_at_first_add() {
        let mut cart = Cart::new();
        let mut latte = product("2", "Latte", 400, DiscountRule::None);

        cart.add_item(&latte);

        // Discount changes mid-session; the existing line keeps its price.
        latte.discount = DiscountRule::Percentage(Decimal::from(50));
        cart.add_item(&latte);

        let line = cart.items().first().map(LineItem::unit_price);
        assert_eq!(line, Some(Decimal::from(400)));
        assert_eq!(cart.items().first().map(LineItem::quantity), Some(2));
    }

    #[test]
    fn re_add_after_removal_recomputes_the_price() {
        let mut cart = Cart::new();
        let mut latte = product("2", "Latte", 400, DiscountRule::None);

        cart.add_item(&latte);
        cart.decrement_quantity("2");

        latte.discount = DiscountRule::Percentage(Decimal::from(50));
        cart.add_item(&latte);

        assert_eq!(
            cart.items().first().map(LineItem::unit_price),
            Some(Decimal::from(200))
        );
    }

    #[test]
    fn add_returns_added_event() {
        let mut cart = Cart::new();

        let event = cart.add_item(&product("1", "Espresso", 350, DiscountRule::None));

        assert_eq!(
            event,
            CartEvent::ItemAdded {
                name: "Espresso".to_owned()
            }
        );
    }

    #[test]
    fn remove_deletes_line_regardless_of_quantity() {
        let mut cart = Cart::new();
        let espresso = product("1", "Espresso", 350, DiscountRule::None);

        cart.add_item(&espresso);
        cart.add_item(&espresso);

        let event = cart.remove_item("1");

        assert!(cart.is_empty());
        assert_eq!(
            event,
            Some(CartEvent::ItemRemoved {
                name: "Espresso".to_owned()
            })
        );
    }

    #[test]
    fn remove_unknown_product_is_a_silent_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product("1", "Espresso", 350, DiscountRule::None));

        let event = cart.remove_item("99");

        assert_eq!(event, None);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn increment_unknown_product_is_a_silent_noop() {
        let mut cart = Cart::new();

        cart.increment_quantity("99");

        assert!(cart.is_empty());
    }

    #[test]
    fn decrement_above_one_shrinks_quantity() {
        let mut cart = Cart::new();
        let espresso = product("1", "Espresso", 350, DiscountRule::None);

        cart.add_item(&espresso);
        cart.add_item(&espresso);
        cart.decrement_quantity("1");

        assert_eq!(cart.items().first().map(LineItem::quantity), Some(1));
    }

    #[test]
    fn decrement_at_quantity_one_removes_the_line() {
        let mut cart = Cart::new();

        cart.add_item(&product("1", "Espresso", 350, DiscountRule::None));
        cart.decrement_quantity("1");

        assert!(cart.is_empty());
    }

    #[test]
    fn toggle_tax_flips_the_service_charge() {
        let mut cart = Cart::new();
        assert!(cart.include_tax());

        cart.toggle_tax();
        assert!(!cart.include_tax());

        cart.toggle_tax();
        assert!(cart.include_tax());
    }

    #[test]
    fn clear_resets_items_and_discount_but_keeps_tax_preference() {
        let mut cart = Cart::new();

        cart.add_item(&product("1", "Espresso", 350, DiscountRule::None));
        cart.set_discount(Decimal::from(50));
        cart.toggle_tax();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.discount(), Decimal::ZERO);
        assert!(!cart.include_tax());
    }
}
