//! Discounts

use rust_decimal::Decimal;

use crate::products::Product;

/// A per-product discount rule.
///
/// The rule is applied once, when the product is rung up, to derive the
/// effective unit price for the new cart line. Lines already in the cart keep
/// the price they were added at even if the rule changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DiscountRule {
    /// No discount; the base price is charged.
    #[default]
    None,

    /// A fixed amount off the base price.
    Flat(Decimal),

    /// A percentage off the base price, expressed as a whole-number
    /// percentage (`10` means 10% off).
    Percentage(Decimal),
}

impl DiscountRule {
    /// Apply this rule to a base price.
    ///
    /// A rule with a value of zero or less leaves the price unchanged. No
    /// floor is applied: a flat discount larger than the price yields a
    /// negative result, matching how the register has always behaved.
    pub fn apply(&self, price: Decimal) -> Decimal {
        match *self {
            DiscountRule::None => price,
            DiscountRule::Flat(amount) => {
                if amount <= Decimal::ZERO {
                    price
                } else {
                    price - amount
                }
            }
            DiscountRule::Percentage(percent) => {
                if percent <= Decimal::ZERO {
                    price
                } else {
                    price - price * percent / Decimal::ONE_HUNDRED
                }
            }
        }
    }
}

/// Derive the effective unit price for a product.
///
/// Deterministic and side-effect free; the cart calls this exactly once per
/// add so the line price is frozen at add time.
pub fn effective_price(product: &Product) -> Decimal {
    product.discount.apply(product.price)
}
