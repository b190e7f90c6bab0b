//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::{ApiClient, ApiError},
    records::ProductRecord,
};

/// Read access to the backend's product list.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Fetch the current product list.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ApiError>;
}

/// [`ProductsService`] backed by the HTTP API.
#[derive(Debug, Clone)]
pub struct HttpProductsService {
    client: Arc<ApiClient>,
}

impl HttpProductsService {
    /// Create a service sharing the given API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        self.client.list_products().await
    }
}
