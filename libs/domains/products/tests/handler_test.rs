//! Handler tests for the Products domain
//!
//! These drive the products router directly with `oneshot`:
//! - Query string handling (category/type filters, repeated and unknown keys)
//! - Response envelopes and status codes
//! - Error mapping for storage failures
//!
//! Storage is the in-memory repository, so no database is needed.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use ::mongodb::bson::oid::ObjectId;
use serde_json::Value;
use test_utils::assertions::assert_same_names;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

fn names(body: &Value) -> Vec<String> {
    body["products"]
        .as_array()
        .expect("products array")
        .iter()
        .map(|p| p["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn catalog() -> Vec<Product> {
    vec![
        Product::new("Oud Royale", "Fragrance", "Eau-De-Parfum").with_rate(12500.0),
        Product::new("Citrus Splash", "fragrance", "EDT").with_rate(4200.0),
        Product::new("Silk Scarf", "Accessories", "Scarf")
            .with_image_url("/uploads/scarf.jpg"),
        Product::new("Wildcard", ".*", "Regex"),
    ]
}

fn app_with(products: Vec<Product>) -> Router {
    let repo = InMemoryProductRepository::with_products(products);
    handlers::router(ProductService::new(repo))
}

/// Repository whose backing store is unreachable
struct UnavailableRepository;

#[async_trait]
impl ProductRepository for UnavailableRepository {
    async fn list(&self, _query: ProductQuery) -> ProductResult<Vec<Product>> {
        Err(ProductError::Database(
            "Server selection timeout: No available servers".to_string(),
        ))
    }

    async fn get_by_id(&self, _id: ObjectId) -> ProductResult<Option<Product>> {
        Err(ProductError::Database(
            "Server selection timeout: No available servers".to_string(),
        ))
    }
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_without_filters_returns_all_products() {
    let (status, body) = get(app_with(catalog()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        names(&body),
        ["Oud Royale", "Citrus Splash", "Silk Scarf", "Wildcard"]
    );
}

#[tokio::test]
async fn test_list_category_ignores_case() {
    let (_, lower) = get(app_with(catalog()), "/?category=fragrance").await;
    let (_, upper) = get(app_with(catalog()), "/?category=FRAGRANCE").await;

    assert_same_names(&names(&lower), &["Oud Royale", "Citrus Splash"], "lowercase");
    assert_eq!(names(&lower), names(&upper));
}

#[tokio::test]
async fn test_list_category_and_type_combine() {
    let (status, body) =
        get(app_with(catalog()), "/?category=Fragrance&type=eau-de-parfum").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Oud Royale"]);
}

#[tokio::test]
async fn test_list_type_alone_filters() {
    let (_, body) = get(app_with(catalog()), "/?type=edt").await;
    assert_eq!(names(&body), ["Citrus Splash"]);
}

#[tokio::test]
async fn test_list_no_match_is_empty_success() {
    let (status, body) = get(app_with(catalog()), "/?category=watches").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["products"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_partial_value_does_not_match() {
    let (_, body) = get(app_with(catalog()), "/?category=frag").await;
    assert!(names(&body).is_empty());
}

#[tokio::test]
async fn test_list_pattern_characters_match_literally() {
    let (_, body) = get(app_with(catalog()), "/?category=.*").await;
    assert_eq!(names(&body), ["Wildcard"]);
}

#[tokio::test]
async fn test_list_empty_params_are_ignored() {
    let (status, body) = get(app_with(catalog()), "/?category=&type=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body).len(), 4);
}

#[tokio::test]
async fn test_list_products_carry_wire_fields() {
    let products = catalog();
    let scarf_id = products[2].id.to_hex();
    let (_, body) = get(app_with(products), "/?category=accessories").await;

    let scarf = &body["products"][0];
    assert_eq!(scarf["_id"], scarf_id.as_str());
    assert_eq!(scarf["type"], "Scarf");
    assert_eq!(scarf["imageUrl"], "/uploads/scarf.jpg");
    assert!(scarf.get("rate").is_none());
}

#[tokio::test]
async fn test_list_repeated_param_keeps_last_value() {
    let (status, body) =
        get(app_with(catalog()), "/?category=accessories&category=fragrance").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(names(&body), ["Oud Royale", "Citrus Splash"]);
}

#[tokio::test]
async fn test_list_unknown_params_are_ignored() {
    let (status, body) = get(app_with(catalog()), "/?type=edt&page=2&sort=name").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Citrus Splash"]);
}

#[tokio::test]
async fn test_list_storage_failure_returns_error_envelope() {
    let app = handlers::router(ProductService::new(UnavailableRepository));
    let (status, body) = get(app, "/?category=fragrance").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Internal server error");
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert!(body.get("products").is_none());
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn test_get_product_returns_envelope() {
    let products = catalog();
    let oud = products[0].clone();
    let (status, body) = get(app_with(products), &format!("/{}", oud.id.to_hex())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["product"]["name"], "Oud Royale");
    assert_eq!(body["product"]["rate"], 12500.0);
    assert_eq!(body["product"]["_id"], oud.id.to_hex().as_str());
}

#[tokio::test]
async fn test_get_product_unknown_id_is_404() {
    let uri = format!("/{}", ObjectId::new().to_hex());
    let (status, body) = get(app_with(catalog()), &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn test_get_product_malformed_id_is_400() {
    let (status, body) = get(app_with(catalog()), "/not-an-object-id").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid product id");
    assert!(body["error"].as_str().unwrap().contains("not-an-object-id"));
}

#[tokio::test]
async fn test_get_product_storage_failure_is_500() {
    let app = handlers::router(ProductService::new(UnavailableRepository));
    let (status, body) = get(app, &format!("/{}", ObjectId::new().to_hex())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}
