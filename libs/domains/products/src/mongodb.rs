//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::{instrument, warn};

use crate::error::ProductResult;
use crate::models::{Product, ProductQuery};
use crate::repository::ProductRepository;

pub const DEFAULT_COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
///
/// Documents are decoded one by one; a document that cannot be read as a
/// `Product` is logged and skipped instead of failing the whole listing.
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Document>,
}

impl MongoProductRepository {
    /// Repository over the `products` collection
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Document>(collection_name);
        Self { collection }
    }

    /// Compound index for the listing filter.
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "category": 1, "type": 1 })
            .options(
                IndexOptions::builder()
                    .name("idx_category_type".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Anchored, case-insensitive, literal match per supplied field.
    pub fn build_filter(query: &ProductQuery) -> Document {
        let mut filter = doc! {};

        if let Some(category) = query.category() {
            filter.insert("category", exact_ci(category));
        }

        if let Some(product_type) = query.product_type() {
            filter.insert("type", exact_ci(product_type));
        }

        filter
    }
}

fn exact_ci(value: &str) -> Document {
    doc! {
        "$regex": format!("^{}$", regex::escape(value)),
        "$options": "i",
    }
}

/// `None` (with a warning) when the stored document is not a readable product.
fn decode_product(document: Document) -> Option<Product> {
    let id = document.get("_id").cloned();
    bson::from_document::<Product>(document)
        .inspect_err(|e| warn!(id = ?id, error = %e, "Skipping undecodable product document"))
        .ok()
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let filter = Self::build_filter(&query);

        let mut cursor = self.collection.find(filter).await?;
        let mut products = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            products.extend(decode_product(document));
        }

        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.and_then(decode_product))
    }
}
