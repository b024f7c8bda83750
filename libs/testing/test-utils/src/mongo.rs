//! MongoDB test infrastructure

use mongodb::bson::Document;
use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// MongoDB container plus a connected client.
///
/// The container is stopped and removed when this struct is dropped.
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database("catalog_test");
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub connection_string: String,
}

impl TestMongo {
    /// Start a MongoDB 7 container and connect to it
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag("7")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to create MongoDB client");

        tracing::info!(port = host_port, "Test MongoDB ready (mongo:7)");

        Self {
            container,
            client,
            connection_string,
        }
    }

    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Insert raw documents, preserving their order
    pub async fn seed(&self, db: &Database, collection: &str, documents: Vec<Document>) {
        if documents.is_empty() {
            return;
        }
        db.collection::<Document>(collection)
            .insert_many(documents)
            .await
            .expect("Failed to seed test documents");
    }
}

impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestDataBuilder;
    use mongodb::bson::doc;

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_seed_and_count() {
        let mongo = TestMongo::new().await;
        let builder = TestDataBuilder::from_test_name("test_seed_and_count");
        let db = mongo.database(&builder.database_name());

        mongo
            .seed(
                &db,
                "products",
                vec![
                    builder.product(0, "Oud", "Fragrance", "EDP", 12500.0),
                    builder.product(1, "Scarf", "Accessories", "Silk", 3000.0),
                ],
            )
            .await;

        let count = db
            .collection::<Document>("products")
            .count_documents(doc! {})
            .await
            .unwrap();
        assert_eq!(count, 2);
    }
}
