//! Shared test utilities for the storefront crates
//!
//! - `TestMongo`: MongoDB container with automatic cleanup
//! - `TestDataBuilder`: deterministic database names, ids and product documents
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!     let db = mongo.database(&builder.database_name());
//!
//!     mongo
//!         .seed(&db, "products", vec![builder.product(0, "Oud", "Fragrance", "EDP", 12500.0)])
//!         .await;
//! }
//! ```

use mongodb::bson::{doc, oid::ObjectId, Document};

mod mongo;

pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed derived from the test name, so each test gets its own data
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_list_by_category");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Database name unique to this test
    pub fn database_name(&self) -> String {
        format!("test_{}", self.seed)
    }

    /// Deterministic ObjectId; `index` distinguishes documents within a test
    pub fn object_id(&self, index: u32) -> ObjectId {
        let mut bytes = [0u8; 12];
        bytes[..8].copy_from_slice(&self.seed.to_be_bytes());
        bytes[8..].copy_from_slice(&index.to_be_bytes());
        ObjectId::from_bytes(bytes)
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A product document shaped like the storefront's `products` collection
    pub fn product(
        &self,
        index: u32,
        name: &str,
        category: &str,
        product_type: &str,
        rate: f64,
    ) -> Document {
        doc! {
            "_id": self.object_id(index),
            "name": name,
            "category": category,
            "type": product_type,
            "description": format!("{} ({})", name, product_type),
            "rate": rate,
            "imageUrl": format!("/uploads/{}.jpg", index),
        }
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `names` equals `expected`, ignoring order
    pub fn assert_same_names<S: AsRef<str>>(names: &[S], expected: &[&str], context: &str) {
        let mut actual: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        let mut expected = expected.to_vec();
        actual.sort_unstable();
        expected.sort_unstable();
        assert_eq!(actual, expected, "{}: names differ", context);
    }
}
