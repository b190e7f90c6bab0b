//! HTTP client for the POS backend API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::ApiConfig,
    records::{ApiMessage, CategoryRecord, OrderRecord, OrderRequest, ProductRecord},
};

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport, timeout or body-decoding failure below the API layer.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend replied with a non-2xx status. The message is the
    /// backend's own failure reason and is shown to the cashier verbatim.
    #[error("{message}")]
    Remote {
        /// HTTP status code of the response.
        status: u16,

        /// Failure reason from the response body.
        message: String,
    },
}

/// HTTP client for the backend endpoints the register uses.
///
/// Every request is bounded by the configured timeout, so a hung backend
/// surfaces as an [`ApiError::Http`] instead of blocking a checkout forever.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    /// Fetch the product list (`GET /products`).
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn list_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        self.get_json("/products").await
    }

    /// Fetch the category list (`GET /categories`).
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn list_categories(&self) -> Result<Vec<CategoryRecord>, ApiError> {
        self.get_json("/categories").await
    }

    /// Fetch the order history (`GET /orders`).
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn list_orders(&self) -> Result<Vec<OrderRecord>, ApiError> {
        self.get_json("/orders").await
    }

    /// Submit an order (`POST /orders`) and return the persisted record.
    ///
    /// One request per call; the caller decides whether and when to retry.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response; the remote
    /// failure reason is carried through verbatim.
    pub async fn create_order(&self, order: &OrderRequest) -> Result<OrderRecord, ApiError> {
        let url = self.url("/orders");
        debug!(%url, items = order.items.len(), "posting order");

        let response = self.http.post(&url).json(order).send().await?;
        let response = Self::checked(response).await?;

        Ok(response.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "fetching");

        let response = self.http.get(&url).send().await?;
        let response = Self::checked(response).await?;

        Ok(response.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Pass 2xx responses through; turn anything else into `ApiError::Remote`
    /// carrying the backend's `message` body when one is present.
    async fn checked(response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ApiMessage>().await {
            Ok(body) => body.message,
            Err(_) => format!("request failed with status {status}"),
        };

        Err(ApiError::Remote {
            status: status.as_u16(),
            message,
        })
    }
}
