//! HTTP client for the catalog API

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{StorefrontError, StorefrontResult};
use crate::product::{CatalogProduct, ListingQuery};

/// `{ success, ...payload, message?, error? }`
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(flatten)]
    payload: T,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Products {
    #[serde(default)]
    products: Vec<CatalogProduct>,
}

#[derive(Debug, Deserialize)]
struct Detail {
    #[serde(default)]
    product: Option<CatalogProduct>,
}

/// Catalog API client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// `base_url` is the API root, e.g. `http://localhost:8080`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/products?category=&type=`
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &ListingQuery) -> StorefrontResult<Vec<CatalogProduct>> {
        let response = self
            .client
            .get(format!("{}/api/products", self.base_url))
            .query(&query.pairs())
            .send()
            .await?;

        let products = decode::<Products>(response).await?.products;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    /// `GET /api/products/{id}`
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> StorefrontResult<CatalogProduct> {
        let response = self
            .client
            .get(format!("{}/api/products/{}", self.base_url, id))
            .send()
            .await?;

        decode::<Detail>(response)
            .await?
            .product
            .ok_or_else(|| StorefrontError::Api {
                message: "Response carried no product".to_string(),
                error: None,
            })
    }
}

/// Status first, then the envelope's own `success` flag.
async fn decode<T: DeserializeOwned>(response: Response) -> StorefrontResult<T> {
    let status = response.status();
    let bytes = response.bytes().await?;
    let parsed = serde_json::from_slice::<Envelope<T>>(&bytes);

    if !status.is_success() {
        let (message, error) = match parsed {
            Ok(envelope) => (envelope.message, envelope.error),
            Err(_) => (None, None),
        };
        return Err(StorefrontError::Status {
            status: status.as_u16(),
            message: match (message, error) {
                (Some(m), Some(e)) => Some(format!("{m} ({e})")),
                (m, e) => m.or(e),
            },
        });
    }

    let envelope = parsed?;
    if !envelope.success {
        return Err(StorefrontError::Api {
            message: envelope
                .message
                .unwrap_or_else(|| "Request was not successful".to_string()),
            error: envelope.error,
        });
    }

    Ok(envelope.payload)
}
