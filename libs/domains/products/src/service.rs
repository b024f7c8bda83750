//! Product Service - catalog queries

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductQuery};
use crate::repository::ProductRepository;

/// Product service over a catalog repository
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Products matching `query`; no pagination.
    #[instrument(skip(self), fields(category = ?query.category(), product_type = ?query.product_type()))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        self.repository.list(query).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to query products");
        })
    }

    /// Get a product by its hex ObjectId
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        let oid = ObjectId::parse_str(id).map_err(|_| ProductError::InvalidId(id.to_string()))?;

        self.repository
            .get_by_id(oid)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to load product"))?
            .ok_or(ProductError::NotFound(oid))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_list_products_passes_query_through() {
        let mut mock_repo = MockProductRepository::new();
        let query = ProductQuery::by_category("fragrance").with_type("edp");

        mock_repo
            .expect_list()
            .with(eq(query.clone()))
            .times(1)
            .returning(|_| Ok(vec![Product::new("Oud", "Fragrance", "EDP")]));

        let service = ProductService::new(mock_repo);
        let products = service.list_products(query).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Oud");
    }

    #[tokio::test]
    async fn test_list_products_propagates_database_error() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(|_| Err(ProductError::Database("connection reset".into())));

        let service = ProductService::new(mock_repo);
        let err = service
            .list_products(ProductQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Database(ref m) if m == "connection reset"));
    }

    #[tokio::test]
    async fn test_get_product_rejects_malformed_id_without_touching_repository() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let err = service.get_product("not-an-id").await.unwrap_err();

        assert!(matches!(err, ProductError::InvalidId(ref raw) if raw == "not-an-id"));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = ObjectId::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(&id.to_hex()).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock_repo = MockProductRepository::new();
        let product = Product::new("Oud", "Fragrance", "EDP");
        let id = product.id;
        let returned = product.clone();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(returned.clone())));

        let service = ProductService::new(mock_repo);

        assert_eq!(service.get_product(&id.to_hex()).await.unwrap(), product);
    }
}
