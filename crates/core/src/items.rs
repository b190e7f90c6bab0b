//! Line items

use rust_decimal::Decimal;

/// One row in the cart: a product, its frozen unit price, and a quantity.
///
/// The unit price is the effective price at the moment the item was first
/// added; repeat adds only grow the quantity. Quantity is always at least 1;
/// a line decremented to zero is removed from the cart rather than kept.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    product_id: String,
    name: String,
    unit_price: Decimal,
    quantity: u32,
}

impl LineItem {
    pub(crate) fn new(product_id: String, name: String, unit_price: Decimal) -> Self {
        Self {
            product_id,
            name,
            unit_price,
            quantity: 1,
        }
    }

    /// Identifier of the product this line refers to.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Product display name, captured at add time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective unit price frozen when the line was created.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Units of this product in the cart.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    pub(crate) fn increment(&mut self) {
        self.quantity += 1;
    }

    pub(crate) fn decrement(&mut self) {
        self.quantity -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_line_starts_at_quantity_one() {
        let line = LineItem::new("p1".to_owned(), "Latte".to_owned(), Decimal::from(400));

        assert_eq!(line.quantity(), 1);
        assert_eq!(line.line_total(), Decimal::from(400));
    }

    #[test]
    fn line_total_scales_with_quantity() {
        let mut line = LineItem::new("p1".to_owned(), "Latte".to_owned(), Decimal::from(400));

        line.increment();
        line.increment();

        assert_eq!(line.quantity(), 3);
        assert_eq!(line.line_total(), Decimal::from(1200));
    }

    #[test]
    fn line_total_with_negative_unit_price() {
        let mut line = LineItem::new("p1".to_owned(), "Voucher".to_owned(), Decimal::from(-50));

        line.increment();

        assert_eq!(line.line_total(), Decimal::from(-100));
    }
}
