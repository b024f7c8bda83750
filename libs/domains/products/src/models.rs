use mongodb::bson::oid::ObjectId;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Price as stored. Usually a number; legacy documents may hold a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Rate {
    Amount(f64),
    Text(String),
}

impl From<f64> for Rate {
    fn from(value: f64) -> Self {
        Rate::Amount(value)
    }
}

/// Catalog product as stored in the `products` collection.
///
/// The collection is owned elsewhere; documents are read as-is. Missing or
/// null text fields read as empty strings, unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// ObjectId, rendered as a 24-character hex string
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex")]
    #[schema(value_type = String, example = "665f1c2e9b1d4a3f8c7e2b10")]
    pub id: ObjectId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "Fragrance")]
    pub category: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    #[schema(example = "Eau-De-Parfum")]
    pub product_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Base-currency price, passed through unvalidated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,

    /// Absolute URL or root-relative path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn serialize_object_id_as_hex<S: Serializer>(id: &ObjectId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&id.to_hex())
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        product_type: impl Into<String>,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            category: category.into(),
            product_type: product_type.into(),
            description: String::new(),
            rate: None,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rate(mut self, rate: impl Into<Rate>) -> Self {
        self.rate = Some(rate.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Listing filter from the query string.
///
/// Empty values are treated as absent. A repeated key keeps its last value
/// and unknown keys are ignored, so decoding never rejects a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive exact category, e.g. `fragrance`
    pub category: Option<String>,

    /// Case-insensitive exact type, e.g. `eau-de-parfum`
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

impl<'de> Deserialize<'de> for ProductQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QueryVisitor;

        impl<'de> Visitor<'de> for QueryVisitor {
            type Value = ProductQuery;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("category/type query parameters")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ProductQuery, A::Error> {
                let mut query = ProductQuery::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "category" => query.category = map.next_value()?,
                        "type" => query.product_type = map.next_value()?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(query)
            }
        }

        deserializer.deserialize_map(QueryVisitor)
    }
}

impl ProductQuery {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            product_type: None,
        }
    }

    pub fn with_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn product_type(&self) -> Option<&str> {
        self.product_type.as_deref().filter(|t| !t.is_empty())
    }

    /// In-process equivalent of the MongoDB filter: both constraints, compared case-insensitively.
    pub fn matches(&self, product: &Product) -> bool {
        fn eq_ci(wanted: Option<&str>, actual: &str) -> bool {
            wanted.map_or(true, |w| w.to_lowercase() == actual.to_lowercase())
        }

        eq_ci(self.category(), &product.category) && eq_ci(self.product_type(), &product.product_type)
    }
}

/// `{ "success": true, "products": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub success: bool,
    pub products: Vec<Product>,
}

impl From<Vec<Product>> for ProductListResponse {
    fn from(products: Vec<Product>) -> Self {
        Self {
            success: true,
            products,
        }
    }
}

/// `{ "success": true, "product": {...} }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            success: true,
            product,
        }
    }
}
