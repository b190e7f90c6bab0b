//! Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{discounts::DiscountRule, products::Product};

const SAMPLE_CATALOG: &str = include_str!("../fixtures/catalog.yaml");

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A discount type other than `none`, `flat` or `percentage`
    #[error("Unknown discount type: {0}")]
    UnknownDiscountType(String),
}

#[derive(Debug, Deserialize)]
struct ProductFixture {
    id: String,
    name: String,
    price: Decimal,
    category: String,
    stock: u32,
    #[serde(default = "default_discount_type")]
    discount_type: String,
    #[serde(default)]
    discount_value: Decimal,
    #[serde(default = "default_active")]
    active: bool,
    #[serde(default = "default_low_stock_threshold")]
    low_stock_threshold: u32,
}

fn default_discount_type() -> String {
    "none".to_owned()
}

fn default_active() -> bool {
    true
}

fn default_low_stock_threshold() -> u32 {
    5
}

impl ProductFixture {
    fn into_product(self) -> Result<Product, FixtureError> {
        let discount = match self.discount_type.as_str() {
            "none" => DiscountRule::None,
            "flat" => DiscountRule::Flat(self.discount_value),
            "percentage" => DiscountRule::Percentage(self.discount_value),
            other => return Err(FixtureError::UnknownDiscountType(other.to_owned())),
        };

        Ok(Product {
            id: self.id,
            name: self.name,
            price: self.price,
            category: self.category,
            stock: self.stock,
            discount,
            active: self.active,
            low_stock_threshold: self.low_stock_threshold,
        })
    }
}

/// Parse the embedded sample catalog.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded YAML does not parse or names an
/// unknown discount type.
pub fn sample_products() -> Result<Vec<Product>, FixtureError> {
    let fixtures: Vec<ProductFixture> = serde_norway::from_str(SAMPLE_CATALOG)?;

    fixtures
        .into_iter()
        .map(ProductFixture::into_product)
        .collect()
}
