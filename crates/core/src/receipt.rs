//! Receipt

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso};

const STORE_NAME: &str = "MODERNPOS STORE";
const STORE_ADDRESS: &str = "123 Main Street, City, Country";
const STORE_PHONE: &str = "Tel: +1 234 567 890";

/// Printable width of the thermal receipt, in characters.
const WIDTH: usize = 40;

/// Format an amount the way the register prints money, `Rs` prefixed.
///
/// Amounts are routed through [`Money`] in minor units (midpoint rounded away
/// from zero) so the printed value always carries two decimal places. Amounts
/// too large to express in minor units fall back to the raw decimal.
pub fn format_money(amount: Decimal) -> String {
    minor_units(amount).map_or_else(
        || format!("Rs {}", amount.normalize()),
        |minor| format!("Rs {:.2}", Money::from_minor(minor, iso::PKR).amount()),
    )
}

/// Render an order id as the short receipt number: last six characters,
/// uppercased. Missing ids print as dashes.
pub fn order_number(id: &str) -> String {
    if id.is_empty() {
        return "------".to_owned();
    }

    let tail: Vec<char> = id.chars().rev().take(6).collect();

    tail.iter().rev().collect::<String>().to_uppercase()
}

/// Convert a decimal amount of rupees to minor units.
fn minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// One printed item row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    /// Product name as it was ordered.
    pub name: String,

    /// Units purchased.
    pub quantity: u32,

    /// Unit price times quantity.
    pub line_total: Decimal,
}

/// A printable receipt for a completed order.
///
/// This is a display value object: the checkout flow builds one from the
/// backend's order record and hands it to whatever renders or prints it.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Backend order id.
    pub order_id: String,

    /// Human-readable order timestamp.
    pub date: String,

    /// Cashier display name; `Unknown` when the backend returned only an id.
    pub cashier: String,

    /// Payment method label (`cash` or `card`).
    pub payment_method: String,

    /// Item rows in order.
    pub lines: Vec<ReceiptLine>,

    /// Sum of line totals.
    pub subtotal: Decimal,

    /// Order-level discount; the row is omitted from the print when zero.
    pub discount: Decimal,

    /// Service charge included in the total.
    pub tax: Decimal,

    /// Amount payable.
    pub total: Decimal,
}

impl Receipt {
    /// Render the receipt as fixed-width text for a thermal printer.
    pub fn render(&self) -> String {
        let mut out = String::new();

        push_centered(&mut out, STORE_NAME);
        push_centered(&mut out, STORE_ADDRESS);
        push_centered(&mut out, STORE_PHONE);
        push_rule(&mut out);

        push_line(&mut out, &format!("Order #: {}", order_number(&self.order_id)));
        push_line(&mut out, &format!("Date: {}", self.date));
        push_line(&mut out, &format!("Cashier: {}", self.cashier));
        push_line(
            &mut out,
            &format!("Pay Method: {}", self.payment_method.to_uppercase()),
        );
        push_rule(&mut out);

        push_line(&mut out, &format!("{:<24}{:>4}{:>12}", "Item", "Qty", "Total"));

        for line in &self.lines {
            let name: String = line.name.chars().take(24).collect();
            push_line(
                &mut out,
                &format!(
                    "{:<24}{:>4}{:>12}",
                    name,
                    line.quantity,
                    format_money(line.line_total)
                ),
            );
        }

        push_rule(&mut out);

        push_amount(&mut out, "Subtotal:", format_money(self.subtotal));

        if self.discount > Decimal::ZERO {
            push_amount(&mut out, "Discount:", format!("-{}", format_money(self.discount)));
        }

        push_amount(&mut out, "Service Charges:", format_money(self.tax));
        push_amount(&mut out, "TOTAL:", format_money(self.total));
        push_rule(&mut out);

        push_centered(&mut out, "Thank You!");
        push_centered(&mut out, "Please visit again");

        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_centered(out: &mut String, text: &str) {
    let pad = WIDTH.saturating_sub(text.chars().count()) / 2;
    push_line(out, &format!("{}{text}", " ".repeat(pad)));
}

fn push_rule(out: &mut String) {
    push_line(out, &"-".repeat(WIDTH));
}

fn push_amount(out: &mut String, label: &str, amount: String) {
    let pad = WIDTH.saturating_sub(label.chars().count());
    push_line(out, &format!("{label}{amount:>pad$}"));
}
