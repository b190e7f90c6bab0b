//! Till
//!
//! Till is the cart and pricing engine behind a point-of-sale register: line
//! items keyed by product, per-product discount rules frozen into unit prices
//! at ring-up time, an order-level discount, a toggleable service charge, and
//! the derived subtotal/tax/total for the order. It is pure and synchronous;
//! talking to the backend is the companion `till-app` crate's job.

pub mod cart;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
