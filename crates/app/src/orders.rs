//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::{ApiClient, ApiError},
    records::{OrderRecord, OrderRequest},
};

/// Order submission against the backend.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Persist one order and return the stored record.
    ///
    /// A single attempt per call; retrying is a caller decision.
    async fn create_order(&self, order: &OrderRequest) -> Result<OrderRecord, ApiError>;
}

/// [`OrdersService`] backed by the HTTP API.
#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    client: Arc<ApiClient>,
}

impl HttpOrdersService {
    /// Create a service sharing the given API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn create_order(&self, order: &OrderRequest) -> Result<OrderRecord, ApiError> {
        self.client.create_order(order).await
    }
}
