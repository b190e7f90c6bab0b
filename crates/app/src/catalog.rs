//! Product catalog cache.

use std::{fmt, sync::Arc};

use rustc_hash::FxHashMap;
use till::products::Product;
use tracing::debug;

use crate::{api::ApiError, products::ProductsService};

/// Cached view of the backend's product list.
///
/// The cart reads products from here when ringing items up, and checkout asks
/// for a refresh after a successful order so decremented stock shows up. A
/// failed refresh keeps the previous cache intact; browsing and cart editing
/// keep working against stale data until a refresh succeeds.
pub struct ProductCatalog {
    service: Arc<dyn ProductsService>,
    products: Vec<Product>,
    index: FxHashMap<String, usize>,
}

impl fmt::Debug for ProductCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductCatalog")
            .field("products", &self.products.len())
            .finish_non_exhaustive()
    }
}

impl ProductCatalog {
    /// Create an empty catalog over the given products service.
    pub fn new(service: Arc<dyn ProductsService>) -> Self {
        Self {
            service,
            products: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Refetch the product list and rebuild the id index.
    ///
    /// Safe to race with manual refreshes; the fetch is an idempotent read.
    ///
    /// # Errors
    ///
    /// Returns an error when the fetch fails; the existing cache is kept.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let records = self.service.list_products().await?;

        self.products = records.into_iter().map(Product::from).collect();
        self.index = self
            .products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();

        debug!(count = self.products.len(), "catalog refreshed");

        Ok(())
    }

    /// Look a product up by backend id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.index
            .get(product_id)
            .and_then(|&position| self.products.get(position))
    }

    /// Every cached product, in backend order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of cached products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the cache holds no products (empty until the first refresh).
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();

        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }

        seen
    }

    /// The product grid's view: active products, optionally narrowed to one
    /// category, matched case-insensitively against a search term.
    pub fn filter(&self, category: Option<&str>, search: &str) -> Vec<&Product> {
        let needle = search.to_lowercase();

        self.products
            .iter()
            .filter(|product| product.active)
            .filter(|product| category.is_none_or(|wanted| product.category == wanted))
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .collect()
    }
}
